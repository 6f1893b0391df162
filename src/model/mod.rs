//! Model loading functionality
//!
//! Provides high-level operations for loading tabular models
//! using storage backends.

pub mod loader;

#[cfg(feature = "native-fs")]
pub use loader::parse_model_file;
pub use loader::{ModelLoader, parse_model};
