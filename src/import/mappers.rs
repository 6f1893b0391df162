//! Mapping from document tokens to model enums
//!
//! Every mapper is total; absent or unrecognized input maps to a fallback
//! member rather than an error.

use super::raw::{str_field, truthy_field};
use crate::models::enums::{
    Cardinality, CrossFilteringBehavior, DataType, DataViewMode, PartitionSourceType,
};
use serde_json::Value;

const DATA_TYPE_TOKENS: &[(&str, DataType)] = &[
    ("Int64", DataType::Int64),
    ("Int32", DataType::Int64),
    ("Double", DataType::Double),
    ("Single", DataType::Double),
    ("Boolean", DataType::Boolean),
    ("String", DataType::String),
    ("DateTime", DataType::DateTime),
    ("DateTimeOffset", DataType::DateTime),
    ("Decimal", DataType::Decimal),
    ("Binary", DataType::Binary),
    ("Table", DataType::Table),
    ("Variant", DataType::Variant),
];

pub fn map_data_type(token: Option<&str>) -> DataType {
    token
        .and_then(|t| DATA_TYPE_TOKENS.iter().find(|(name, _)| *name == t))
        .map(|(_, dt)| *dt)
        .unwrap_or(DataType::Unknown)
}

/// Classify a partition from its `source` object
///
/// An explicit `type: "m"` wins over an `expression`, since M partitions
/// carry one too.
pub fn map_partition_source_type(source: Option<&Value>) -> PartitionSourceType {
    let Some(source) = source else {
        return PartitionSourceType::None;
    };
    if str_field(source, "type") == Some("m") {
        PartitionSourceType::M
    } else if truthy_field(source, "expression") {
        PartitionSourceType::Calculated
    } else if truthy_field(source, "query") {
        PartitionSourceType::Query
    } else {
        PartitionSourceType::None
    }
}

/// Anything other than the three explicit pairs is read as one-to-many
pub fn map_cardinality(from: Option<&str>, to: Option<&str>) -> Cardinality {
    match (from, to) {
        (Some("1"), Some("1")) => Cardinality::OneToOne,
        (Some("1"), Some("*")) => Cardinality::OneToMany,
        (Some("*"), Some("1")) => Cardinality::ManyToOne,
        _ => Cardinality::OneToMany,
    }
}

pub fn map_cross_filtering(token: Option<&str>) -> CrossFilteringBehavior {
    match token {
        Some("Both") => CrossFilteringBehavior::BothDirections,
        Some("OneDirection") => CrossFilteringBehavior::OneDirection,
        _ => CrossFilteringBehavior::None,
    }
}

pub fn map_data_view(token: Option<&str>) -> DataViewMode {
    match token {
        Some("Sample") => DataViewMode::Sample,
        _ => DataViewMode::Full,
    }
}
