//! BIM importer
//!
//! Assembles a [`TabularModel`] from a tabular model document (`.bim`):
//! schema header, tables with their children, and relationships checked
//! against the tables that survived filtering.

use super::encoding;
use super::normalize::{normalize_relationship, normalize_schema, normalize_table, visible};
use super::options::ParseOptions;
use super::raw::array_field;
use crate::error::BimError;
use crate::models::{Relationship, Table, TabularModel};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// BIM Importer
///
/// Normalizes tabular model documents into a [`TabularModel`].
///
/// # Example
///
/// ```rust
/// use tabular_model_sdk::import::BimImporter;
///
/// let importer = BimImporter::new();
/// let model = importer
///     .import_str(r#"{"model": {"name": "Sales", "compatibilityLevel": 1550}}"#)
///     .unwrap();
/// assert_eq!(model.schema.name, "Sales");
/// assert!(model.tables.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct BimImporter {
    options: ParseOptions,
}

impl BimImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Decode raw file content and import it
    pub fn import_bytes(&self, bytes: &[u8]) -> Result<TabularModel, BimError> {
        let encoding = encoding::detect(bytes);
        debug!("Detected {:?} encoding for {} bytes", encoding, bytes.len());
        self.import_str(&encoding::decode_as(bytes, encoding))
    }

    pub fn import_str(&self, text: &str) -> Result<TabularModel, BimError> {
        let document: Value = serde_json::from_str(text)?;
        self.import_value(&document)
    }

    /// Import an already deserialized document
    ///
    /// Fails only when the document has no `model` property, or with
    /// `MalformedRelationship` in strict mode.
    pub fn import_value(&self, document: &Value) -> Result<TabularModel, BimError> {
        let model = document
            .get("model")
            .ok_or_else(|| BimError::missing_field("model"))?;

        let schema = normalize_schema(model, &self.options);

        let tables: Vec<Table> = visible(array_field(model, "tables"), &self.options, "table")
            .map(|node| normalize_table(node, &self.options))
            .collect();

        let index = table_index(&tables);
        let relationships = array_field(model, "relationships")
            .iter()
            .map(|node| self.resolve(normalize_relationship(node), &index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Normalized model '{}': {} tables, {} relationships",
            schema.name,
            tables.len(),
            relationships.len()
        );

        Ok(TabularModel {
            schema,
            tables,
            relationships,
        })
    }

    /// Check the relationship's endpoint tables against the index. The stored
    /// names are never rewritten.
    fn resolve(
        &self,
        relationship: Relationship,
        index: &HashMap<String, &Table>,
    ) -> Result<Relationship, BimError> {
        for table_name in [&relationship.from_table, &relationship.to_table] {
            if index.contains_key(&table_name.to_lowercase()) {
                continue;
            }
            if self.options.strict_relationships {
                return Err(BimError::MalformedRelationship {
                    message: format!(
                        "relationship '{}' references unknown table '{}'",
                        relationship.label(),
                        table_name
                    ),
                });
            }
            warn!(
                "Relationship '{}' references unknown table '{}'",
                relationship.label(),
                table_name
            );
        }
        Ok(relationship)
    }
}

/// Lower-cased table name to table; on collision the later table wins
fn table_index(tables: &[Table]) -> HashMap<String, &Table> {
    tables.iter().map(|t| (t.name.to_lowercase(), t)).collect()
}

/// Normalize a deserialized document with the given options
pub fn parse_model_from_value(
    document: &Value,
    options: &ParseOptions,
) -> Result<TabularModel, BimError> {
    BimImporter::with_options(*options).import_value(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_missing_model_fails() {
        let importer = BimImporter::new();
        for doc in [json!({}), json!({"name": "x"}), json!([]), json!("model")] {
            let err = importer.import_value(&doc).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
        }
    }

    #[test]
    fn test_null_model_is_defaulted() {
        let model = BimImporter::new()
            .import_value(&json!({"model": null}))
            .unwrap();
        assert_eq!(model.schema.name, "Model");
        assert!(model.tables.is_empty());
    }

    #[test]
    fn test_table_index_last_write_wins() {
        let mut first = Table::new("Sales".to_string());
        first.description = Some("first".to_string());
        let mut second = Table::new("SALES".to_string());
        second.description = Some("second".to_string());
        let tables = vec![first, second];

        let index = table_index(&tables);
        assert_eq!(index.len(), 1);
        assert_eq!(index["sales"].description.as_deref(), Some("second"));
    }

    #[test]
    fn test_hidden_table_children_never_visited() {
        let doc = json!({"model": {"tables": [
            {"name": "Hidden", "isHidden": true, "columns": [{"name": "A"}]},
            {"name": "Shown", "columns": [{"name": "B"}]}
        ]}});
        let options = ParseOptions::builder().include_hidden_objects(false).build();
        let model = parse_model_from_value(&doc, &options).unwrap();
        assert_eq!(model.tables.len(), 1);
        assert_eq!(model.tables[0].name, "Shown");
        assert_eq!(model.column_count(), 1);
    }

    #[test]
    fn test_strict_mode_rejects_dangling_relationship() {
        let doc = json!({"model": {
            "tables": [{"name": "Sales"}],
            "relationships": [{"name": "r", "fromTable": "sales", "toTable": "Customer"}]
        }});

        let permissive = parse_model_from_value(&doc, &ParseOptions::default()).unwrap();
        assert_eq!(permissive.relationships.len(), 1);

        let strict = ParseOptions::builder().strict_relationships(true).build();
        let err = parse_model_from_value(&doc, &strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRelationship);
        assert!(err.to_string().contains("Customer"));
    }

    #[test]
    fn test_strict_mode_sees_filtered_tables_as_missing() {
        let doc = json!({"model": {
            "tables": [{"name": "Sales"}, {"name": "Customer", "isHidden": true}],
            "relationships": [{"fromTable": "Sales", "toTable": "customer"}]
        }});
        let strict = ParseOptions::builder().strict_relationships(true).build();
        assert!(parse_model_from_value(&doc, &strict).is_ok());

        let strict_filtered = ParseOptions::builder()
            .strict_relationships(true)
            .include_hidden_objects(false)
            .build();
        let err = parse_model_from_value(&doc, &strict_filtered).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRelationship);
    }

    #[test]
    fn test_import_bytes_rejects_bad_json() {
        let err = BimImporter::new().import_bytes(b"{\"model\": ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
    }
}
