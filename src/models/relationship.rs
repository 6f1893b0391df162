//! Relationship model

use super::enums::{Cardinality, CrossFilteringBehavior};
use serde::{Deserialize, Serialize};

/// A link between a column of one table and a column of another
///
/// Table and column names are stored exactly as written in the source
/// document, whether or not they resolve to a table of the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub cardinality: Cardinality,
    pub cross_filtering_behavior: CrossFilteringBehavior,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rely_on_referential_integrity: Option<bool>,
}

impl Relationship {
    /// Human-readable label: the relationship name, or its endpoints
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!(
                "{}[{}] -> {}[{}]",
                self.from_table, self.from_column, self.to_table, self.to_column
            ),
        }
    }
}
