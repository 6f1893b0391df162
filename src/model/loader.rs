//! Model loading functionality
//!
//! Loads model documents from a storage backend: read, decode, deserialize,
//! normalize. Reading is the only step that awaits.

use crate::error::BimError;
use crate::import::{BimImporter, ParseOptions};
use crate::models::TabularModel;
use crate::storage::StorageBackend;
use tracing::info;

/// Model loader that uses a storage backend
pub struct ModelLoader<B: StorageBackend> {
    storage: B,
    importer: BimImporter,
}

impl<B: StorageBackend> ModelLoader<B> {
    /// Create a new model loader with the given storage backend and default options
    pub fn new(storage: B) -> Self {
        Self::with_options(storage, ParseOptions::default())
    }

    pub fn with_options(storage: B, options: ParseOptions) -> Self {
        Self {
            storage,
            importer: BimImporter::with_options(options),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        self.importer.options()
    }

    /// Load and normalize the model document at `path`
    ///
    /// A missing file fails with `FileNotFound`, unparsable content with
    /// `InvalidJson`; normalization errors pass through unchanged and any
    /// other storage failure is wrapped as `Load`.
    pub async fn load_model(&self, path: &str) -> Result<TabularModel, BimError> {
        let bytes = self.storage.read_file(path).await?;
        import_loaded(&self.importer, &bytes, path)
    }
}

fn import_loaded(
    importer: &BimImporter,
    bytes: &[u8],
    origin: &str,
) -> Result<TabularModel, BimError> {
    let model = importer.import_bytes(bytes)?;

    info!(
        "Loaded model '{}' from {}: {} tables, {} relationships",
        model.schema.name,
        origin,
        model.tables.len(),
        model.relationships.len()
    );

    Ok(model)
}

/// Load the document at `path` from `storage`
pub async fn parse_model<B: StorageBackend>(
    storage: &B,
    path: &str,
    options: ParseOptions,
) -> Result<TabularModel, BimError> {
    let bytes = storage.read_file(path).await?;
    import_loaded(&BimImporter::with_options(options), &bytes, path)
}

/// Load a model file from the native file system
///
/// The path is read as given, without base-directory confinement.
#[cfg(feature = "native-fs")]
pub async fn parse_model_file(
    path: impl AsRef<std::path::Path>,
    options: ParseOptions,
) -> Result<TabularModel, BimError> {
    use crate::storage::StorageError;
    use tracing::debug;

    let path = path.as_ref();
    let display = path.display().to_string();
    debug!("Reading {}", path.display());

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::FileNotFound(display.clone())
        } else {
            StorageError::IoError(format!("Failed to read file {}: {}", display, e))
        }
    })?;

    import_loaded(&BimImporter::with_options(options), &bytes, &display)
}
