//! Validation functionality
//!
//! Checks run on an already normalized model:
//! - Relationship validation (endpoint tables that do not exist)

pub mod relationships;

pub use relationships::{DanglingRelationship, RelationshipValidationResult, RelationshipValidator};
