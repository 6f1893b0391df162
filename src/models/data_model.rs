//! Root aggregate of a normalized model document

use super::relationship::Relationship;
use super::schema::DataModelSchema;
use super::table::{Measure, Table};
use serde::{Deserialize, Serialize};

/// A fully normalized tabular model
///
/// Produced by the BIM importer; owned exclusively by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabularModel {
    #[serde(rename = "model")]
    pub schema: DataModelSchema,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl TabularModel {
    /// Find a table by name, ignoring case. The first matching table wins.
    pub fn table(&self, name: &str) -> Option<&Table> {
        let key = name.to_lowercase();
        self.tables.iter().find(|t| t.name.to_lowercase() == key)
    }

    /// All measures of the model, paired with their owning table
    pub fn measures(&self) -> impl Iterator<Item = (&Table, &Measure)> {
        self.tables
            .iter()
            .flat_map(|t| t.measures.iter().map(move |m| (t, m)))
    }

    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(tables: Vec<Table>) -> TabularModel {
        TabularModel {
            schema: DataModelSchema::default(),
            tables,
            relationships: Vec::new(),
        }
    }

    #[test]
    fn test_table_lookup_ignores_case() {
        let model = model_with(vec![Table::new("Customer".to_string())]);
        assert!(model.table("customer").is_some());
        assert!(model.table("CUSTOMER").is_some());
        assert!(model.table("Orders").is_none());
    }

    #[test]
    fn test_measures_iterates_across_tables() {
        let mut sales = Table::new("Sales".to_string());
        sales.measures.push(Measure {
            name: "Total".to_string(),
            expression: "SUM(Sales[Amount])".to_string(),
            format_string: None,
            display_folder: None,
            is_hidden: None,
            description: None,
        });
        let model = model_with(vec![Table::new("Empty".to_string()), sales]);

        let names: Vec<_> = model
            .measures()
            .map(|(t, m)| format!("{}/{}", t.name, m.name))
            .collect();
        assert_eq!(names, vec!["Sales/Total"]);
    }
}
