//! Error types for model loading
//!
//! Every failure surfaced by the SDK is a [`BimError`]. The set of variants is
//! closed; [`BimError::kind`] exposes the discriminant for callers that only
//! need to branch on the category.

use crate::storage::StorageError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a [`BimError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    InvalidJson,
    MissingRequiredField,
    UnknownDataType,
    MalformedRelationship,
    Load,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "FILE_NOT_FOUND",
            ErrorKind::InvalidJson => "INVALID_JSON",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::UnknownDataType => "UNKNOWN_DATA_TYPE",
            ErrorKind::MalformedRelationship => "MALFORMED_RELATIONSHIP",
            ErrorKind::Load => "LOAD_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error raised while loading or normalizing a model document
#[derive(Debug, thiserror::Error)]
pub enum BimError {
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: StorageError,
    },
    #[error("Invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },
    /// Not raised by the default normalization, which maps unknown tokens to `DataType::Unknown`.
    #[error("Unknown data type: {token}")]
    UnknownDataType { token: String },
    #[error("Malformed relationship: {message}")]
    MalformedRelationship { message: String },
    #[error("Failed to load model: {message}")]
    Load {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl BimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BimError::FileNotFound { .. } => ErrorKind::FileNotFound,
            BimError::InvalidJson { .. } => ErrorKind::InvalidJson,
            BimError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            BimError::UnknownDataType { .. } => ErrorKind::UnknownDataType,
            BimError::MalformedRelationship { .. } => ErrorKind::MalformedRelationship,
            BimError::Load { .. } => ErrorKind::Load,
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        BimError::MissingRequiredField {
            field: field.to_string(),
        }
    }

    /// Wrap an unclassified failure, keeping it as the source
    pub fn load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        BimError::Load {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<serde_json::Error> for BimError {
    fn from(source: serde_json::Error) -> Self {
        BimError::InvalidJson { source }
    }
}

impl From<StorageError> for BimError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::FileNotFound(path) => BimError::FileNotFound {
                source: StorageError::FileNotFound(path.clone()),
                path,
            },
            other => BimError::load(format!("storage read failed: {}", other), other),
        }
    }
}
