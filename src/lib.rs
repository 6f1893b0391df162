//! Tabular Model SDK - typed access to tabular model (.bim) documents
//!
//! Provides:
//! - Encoding detection for UTF-8 / UTF-16 model files
//! - Normalization of the loosely typed BIM JSON into a typed model graph
//! - Loading through storage backends
//! - Relationship validation and JSON export of the normalized model

pub mod cli;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod models;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use error::{BimError, ErrorKind};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;
pub use storage::{MemoryStorageBackend, StorageBackend, StorageError};

pub use import::{BimImporter, ParseOptions, parse_model_from_value};
#[cfg(feature = "native-fs")]
pub use model::parse_model_file;
pub use model::{ModelLoader, parse_model};

// Re-export models
pub use models::enums::*;
pub use models::{
    Annotation, Column, Culture, DataModelSchema, Measure, Partition, Relationship, Table,
    TabularModel,
};
