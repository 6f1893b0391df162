//! Output formatting for CLI

use crate::models::TabularModel;
use crate::validation::RelationshipValidationResult;

/// Format a loaded model as a human-readable summary
pub fn format_summary(model: &TabularModel, validation: &RelationshipValidationResult) -> String {
    let mut output = String::new();
    let schema = &model.schema;

    output.push_str(&format!(
        "Model: {} (compatibility level {})\n",
        schema.name, schema.compatibility_level
    ));
    if !schema.cultures.is_empty() {
        let names: Vec<&str> = schema
            .cultures
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        output.push_str(&format!("Cultures: {}\n", names.join(", ")));
    }
    if !schema.annotations.is_empty() {
        output.push_str(&format!("Annotations: {}\n", schema.annotations.len()));
    }

    output.push_str(&format!("\nTables ({}):\n", model.tables.len()));
    for table in &model.tables {
        let hidden = if table.is_hidden == Some(true) {
            " [hidden]"
        } else {
            ""
        };
        output.push_str(&format!(
            "  - {}{}: {} column(s), {} measure(s), {} partition(s)\n",
            table.name,
            hidden,
            table.columns.len(),
            table.measures.len(),
            table.partitions.len()
        ));
        for column in &table.columns {
            output.push_str(&format!("      {}: {}\n", column.name, column.data_type));
        }
    }

    output.push_str(&format!("\nRelationships ({}):\n", model.relationships.len()));
    for rel in &model.relationships {
        let inactive = if rel.is_active { "" } else { " (inactive)" };
        output.push_str(&format!(
            "  - {}[{}] -> {}[{}] {}, {}{}\n",
            rel.from_table,
            rel.from_column,
            rel.to_table,
            rel.to_column,
            rel.cardinality,
            rel.cross_filtering_behavior,
            inactive
        ));
    }

    if !validation.is_valid() {
        output.push_str("\n⚠️  Dangling relationships:\n");
        for dangling in &validation.dangling {
            output.push_str(&format!(
                "  - {}: unknown table(s) {}\n",
                dangling.label,
                dangling.missing_tables.join(", ")
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::BimImporter;
    use crate::validation::RelationshipValidator;

    #[test]
    fn test_summary_lists_tables_and_dangling_relationships() {
        let model = BimImporter::new()
            .import_str(
                r#"{"model": {"name": "Sales", "compatibilityLevel": 1550,
                    "tables": [{"name": "Orders", "isHidden": true,
                        "columns": [{"name": "Id", "dataType": "Int64"}]}],
                    "relationships": [{"name": "r", "fromTable": "Orders", "fromColumn": "Id",
                        "toTable": "Customer", "toColumn": "Id", "isActive": false}]}}"#,
            )
            .unwrap();
        let validation = RelationshipValidator::new().validate(&model);
        let summary = format_summary(&model, &validation);

        assert!(summary.contains("Model: Sales (compatibility level 1550)"));
        assert!(summary.contains("Orders [hidden]: 1 column(s), 0 measure(s), 0 partition(s)"));
        assert!(summary.contains("Id: Int64"));
        assert!(summary.contains("Orders[Id] -> Customer[Id] OneToMany, None (inactive)"));
        assert!(summary.contains("r: unknown table(s) Customer"));
    }
}
