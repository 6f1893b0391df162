//! Column model

use super::enums::DataType;
use serde::{Deserialize, Serialize};

/// Column model representing one field of a table
///
/// # Example
///
/// ```rust
/// use tabular_model_sdk::models::{Column, DataType};
///
/// let column = Column::new("Amount".to_string(), DataType::Decimal);
/// assert!(column.expression.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name
    pub name: String,
    /// Resolved data type, `Unknown` when the document did not name a known type
    pub data_type: DataType,
    /// Formula of a calculated column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_string: Option<String>,
    /// Default aggregation (e.g. "sum", "none")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarize_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the column in the data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by_column: Option<String>,
    /// Semantic category (e.g. "Years", "City")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_category: Option<String>,
}

impl Column {
    /// Create a column with the given name and data type and no optional metadata
    pub fn new(name: String, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            expression: None,
            format_string: None,
            summarize_by: None,
            is_hidden: None,
            description: None,
            source_column: None,
            sort_by_column: None,
            data_category: None,
        }
    }

    /// Whether the column is computed from a formula rather than loaded
    pub fn is_calculated(&self) -> bool {
        self.expression.is_some()
    }
}
