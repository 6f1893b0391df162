//! CLI module for the bim-inspect binary

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
pub use args::{Args, OutputFormat};
