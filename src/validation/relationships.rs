//! Relationship validation functionality
//!
//! Reports relationships whose endpoint tables are not part of a model.
//! Import keeps such relationships (unless strict mode is on); this report
//! lets callers surface them without failing the load.

use crate::models::TabularModel;
use std::collections::HashSet;

/// A relationship naming at least one table absent from the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRelationship {
    /// Position in `TabularModel::relationships`
    pub index: usize,
    pub label: String,
    /// Missing table names, as written in the relationship
    pub missing_tables: Vec<String>,
}

/// Result of relationship validation
#[derive(Debug, Default)]
pub struct RelationshipValidationResult {
    pub dangling: Vec<DanglingRelationship>,
}

impl RelationshipValidationResult {
    pub fn is_valid(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Relationship validator
#[derive(Debug, Default)]
pub struct RelationshipValidator;

impl RelationshipValidator {
    pub fn new() -> Self {
        Self
    }

    /// Find relationships whose from/to tables do not resolve, ignoring case
    pub fn validate(&self, model: &TabularModel) -> RelationshipValidationResult {
        let known: HashSet<String> = model.tables.iter().map(|t| t.name.to_lowercase()).collect();

        let dangling = model
            .relationships
            .iter()
            .enumerate()
            .filter_map(|(index, rel)| {
                let mut missing_tables = Vec::new();
                for table in [&rel.from_table, &rel.to_table] {
                    if !known.contains(&table.to_lowercase()) && !missing_tables.contains(table) {
                        missing_tables.push(table.clone());
                    }
                }
                (!missing_tables.is_empty()).then(|| DanglingRelationship {
                    index,
                    label: rel.label(),
                    missing_tables,
                })
            })
            .collect();

        RelationshipValidationResult { dangling }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{ParseOptions, parse_model_from_value};
    use serde_json::json;

    #[test]
    fn test_reports_missing_tables() {
        let doc = json!({"model": {
            "tables": [{"name": "Sales"}, {"name": "Customer"}],
            "relationships": [
                {"name": "ok", "fromTable": "SALES", "toTable": "customer"},
                {"name": "bad", "fromTable": "Sales", "toTable": "Product"},
                {"fromTable": "Ghost", "fromColumn": "k", "toTable": "Ghost", "toColumn": "k"}
            ]
        }});
        let model = parse_model_from_value(&doc, &ParseOptions::default()).unwrap();
        let result = RelationshipValidator::new().validate(&model);

        assert!(!result.is_valid());
        assert_eq!(result.dangling.len(), 2);
        assert_eq!(result.dangling[0].index, 1);
        assert_eq!(result.dangling[0].missing_tables, vec!["Product"]);
        assert_eq!(result.dangling[1].label, "Ghost[k] -> Ghost[k]");
        assert_eq!(result.dangling[1].missing_tables, vec!["Ghost"]);
    }
}
