//! Models module for the SDK
//!
//! Typed records produced by normalizing a model document.

pub mod column;
pub mod data_model;
pub mod enums;
pub mod relationship;
pub mod schema;
pub mod table;

pub use column::Column;
pub use data_model::TabularModel;
pub use enums::*;
pub use relationship::Relationship;
pub use schema::{Annotation, Culture, DataModelSchema};
pub use table::{Measure, Partition, Table};
