//! JSON exporter for normalized models

use super::{ExportError, ExportResult};
use crate::models::TabularModel;

/// Serializes a [`TabularModel`] with camelCase keys and enum literals.
/// Output is deterministic for equal models.
#[derive(Debug, Default)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn export(&self, model: &TabularModel) -> Result<ExportResult, ExportError> {
        let content = if self.pretty {
            serde_json::to_string_pretty(model)
        } else {
            serde_json::to_string(model)
        }
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }
}
