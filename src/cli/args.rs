//! Command line arguments

use crate::import::ParseOptions;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable overview
    #[default]
    Summary,
    /// Normalized model as JSON
    Json,
}

/// Inspect a tabular model (.bim) file
#[derive(Debug, Parser)]
#[command(name = "bim-inspect", version, about)]
pub struct Args {
    /// Path to the .bim file
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// TOML file with parse options (includeAnnotations, includeHiddenObjects, strictRelationships)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drop schema and culture annotations
    #[arg(long)]
    pub no_annotations: bool,

    /// Drop hidden tables, columns and measures
    #[arg(long)]
    pub exclude_hidden: bool,

    /// Fail on relationships referencing unknown tables
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Options from the config file (if any) with flags applied on top
    pub fn parse_options(&self) -> Result<ParseOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str::<ParseOptions>(&content)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => ParseOptions::default(),
        };

        if self.no_annotations {
            options.include_annotations = false;
        }
        if self.exclude_hidden {
            options.include_hidden_objects = false;
        }
        if self.strict {
            options.strict_relationships = true;
        }
        Ok(options)
    }
}
