//! bim-inspect: load a tabular model file and print what it contains

use anyhow::{Context, Result};
use clap::Parser;
use tabular_model_sdk::cli::{Args, OutputFormat, logging, output};
use tabular_model_sdk::export::JsonExporter;
use tabular_model_sdk::parse_model_file;
use tabular_model_sdk::validation::RelationshipValidator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let options = args.parse_options()?;
    let model = parse_model_file(&args.path, options)
        .await
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    match args.format {
        OutputFormat::Summary => {
            let validation = RelationshipValidator::new().validate(&model);
            print!("{}", output::format_summary(&model, &validation));
        }
        OutputFormat::Json => {
            let result = JsonExporter::new(true).export(&model)?;
            println!("{}", result.content);
        }
    }

    Ok(())
}
