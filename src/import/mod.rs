//! Import functionality
//!
//! Turns tabular model documents (`.bim` JSON) into typed models:
//! - encoding: byte-order mark and UTF-16 detection
//! - raw: total accessors over the untyped JSON tree
//! - mappers: document tokens to model enums
//! - normalize: one normalizer per entity kind
//! - bim: the importer assembling the whole model

pub mod bim;
pub mod encoding;
pub mod mappers;
pub mod normalize;
pub mod options;
pub mod raw;

pub use bim::{BimImporter, parse_model_from_value};
pub use encoding::{TextEncoding, decode};
pub use options::{ParseOptions, ParseOptionsBuilder};
