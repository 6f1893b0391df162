//! Per-entity normalizers
//!
//! Each function turns one raw JSON node into a typed record. They are total:
//! missing or mistyped fields fall back to defaults.

use super::mappers::{
    map_cardinality, map_cross_filtering, map_data_type, map_data_view,
    map_partition_source_type,
};
use super::options::ParseOptions;
use super::raw::{
    array_field, bool_field, field, i64_field, non_empty_str, str_field, truthy_field,
};
use crate::models::{
    Annotation, Column, Culture, DataModelSchema, Measure, Partition, Relationship, Table,
};
use serde_json::Value;
use tracing::debug;

fn owned(s: Option<&str>) -> Option<String> {
    s.map(str::to_string)
}

/// Items of `items` that survive hidden-object filtering
pub(crate) fn visible<'a>(
    items: &'a [Value],
    options: &ParseOptions,
    kind: &'static str,
) -> impl Iterator<Item = &'a Value> {
    let include_hidden = options.include_hidden_objects;
    items.iter().filter(move |item| {
        let keep = include_hidden || !truthy_field(item, "isHidden");
        if !keep {
            debug!(
                "Excluding hidden {} {}",
                kind,
                str_field(item, "name").unwrap_or("<unnamed>")
            );
        }
        keep
    })
}

pub fn normalize_column(node: &Value) -> Column {
    let expression = non_empty_str(node, "expression").or_else(|| {
        field(node, "calculatedColumn").and_then(|calc| non_empty_str(calc, "expression"))
    });

    Column {
        name: str_field(node, "name").unwrap_or("Column").to_string(),
        data_type: map_data_type(str_field(node, "dataType")),
        expression: owned(expression),
        format_string: owned(non_empty_str(node, "formatString")),
        summarize_by: owned(non_empty_str(node, "summarizeBy")),
        is_hidden: bool_field(node, "isHidden"),
        description: owned(str_field(node, "description")),
        source_column: owned(non_empty_str(node, "sourceColumn")),
        sort_by_column: owned(non_empty_str(node, "sortByColumn")),
        data_category: owned(non_empty_str(node, "dataCategory")),
    }
}

pub fn normalize_partition(node: &Value) -> Partition {
    let source = field(node, "source");
    let mut partition = Partition {
        name: str_field(node, "name").unwrap_or("Partition").to_string(),
        source_type: map_partition_source_type(source),
        expression: None,
        query: None,
        data_view: None,
        description: owned(str_field(node, "description")),
    };

    if let Some(source) = source {
        partition.expression = owned(non_empty_str(source, "expression"));
        partition.query = owned(non_empty_str(source, "query"));
        if truthy_field(source, "dataView") {
            partition.data_view = Some(map_data_view(str_field(source, "dataView")));
        }
    }

    partition
}

pub fn normalize_measure(node: &Value) -> Measure {
    Measure {
        name: str_field(node, "name").unwrap_or("Measure").to_string(),
        expression: str_field(node, "expression").unwrap_or_default().to_string(),
        format_string: owned(non_empty_str(node, "formatString")),
        display_folder: owned(non_empty_str(node, "displayFolder")),
        is_hidden: bool_field(node, "isHidden"),
        description: owned(str_field(node, "description")),
    }
}

/// Normalize a table and its children; hidden columns and measures are
/// filtered before they are visited
pub fn normalize_table(node: &Value, options: &ParseOptions) -> Table {
    Table {
        name: str_field(node, "name").unwrap_or("Table").to_string(),
        description: owned(str_field(node, "description")),
        is_hidden: bool_field(node, "isHidden"),
        columns: visible(array_field(node, "columns"), options, "column")
            .map(normalize_column)
            .collect(),
        partitions: array_field(node, "partitions")
            .iter()
            .map(normalize_partition)
            .collect(),
        measures: visible(array_field(node, "measures"), options, "measure")
            .map(normalize_measure)
            .collect(),
    }
}

pub fn normalize_annotations(items: &[Value]) -> Vec<Annotation> {
    items
        .iter()
        .map(|node| Annotation {
            name: str_field(node, "name").unwrap_or_default().to_string(),
            value: str_field(node, "value").unwrap_or_default().to_string(),
        })
        .collect()
}

pub fn normalize_culture(node: &Value, options: &ParseOptions) -> Culture {
    Culture {
        name: owned(str_field(node, "name")),
        annotations: options
            .include_annotations
            .then(|| normalize_annotations(array_field(node, "annotations"))),
    }
}

pub fn normalize_schema(model: &Value, options: &ParseOptions) -> DataModelSchema {
    DataModelSchema {
        name: str_field(model, "name").unwrap_or("Model").to_string(),
        compatibility_level: i64_field(model, "compatibilityLevel").unwrap_or(0),
        cultures: array_field(model, "cultures")
            .iter()
            .map(|c| normalize_culture(c, options))
            .collect(),
        annotations: if options.include_annotations {
            normalize_annotations(array_field(model, "annotations"))
        } else {
            Vec::new()
        },
    }
}

pub fn normalize_relationship(node: &Value) -> Relationship {
    let name_of = |key: &str| str_field(node, key).unwrap_or_default().to_string();

    Relationship {
        name: owned(str_field(node, "name")),
        from_table: name_of("fromTable"),
        from_column: name_of("fromColumn"),
        to_table: name_of("toTable"),
        to_column: name_of("toColumn"),
        cardinality: map_cardinality(
            str_field(node, "fromCardinality"),
            str_field(node, "toCardinality"),
        ),
        cross_filtering_behavior: map_cross_filtering(str_field(node, "crossFilteringBehavior")),
        is_active: bool_field(node, "isActive").unwrap_or(true),
        rely_on_referential_integrity: bool_field(node, "relyOnReferentialIntegrity"),
    }
}
