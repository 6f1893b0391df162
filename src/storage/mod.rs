//! Storage backend abstraction
//!
//! Model documents are read through the StorageBackend trait:
//! - FileSystemStorageBackend: Native file system (for native apps)
//! - MemoryStorageBackend: In-process byte map (for embedding and tests)

use async_trait::async_trait;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Trait for storage backends
///
/// Reading is the only operation the loader needs; it is also the only point
/// at which loading a model may suspend.
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read a file from storage
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;
}

#[cfg(feature = "native-fs")]
pub mod filesystem;
pub mod memory;

pub use memory::MemoryStorageBackend;
