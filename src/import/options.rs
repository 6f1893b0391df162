//! Options controlling BIM normalization

use serde::{Deserialize, Serialize};

/// Options for normalizing a model document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Keep schema and culture annotations
    pub include_annotations: bool,

    /// Keep tables, columns and measures flagged `isHidden`
    pub include_hidden_objects: bool,

    /// Fail with `MalformedRelationship` when a relationship names a table
    /// missing from the (filtered) model instead of keeping it
    pub strict_relationships: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_annotations: true,
            include_hidden_objects: true,
            strict_relationships: false,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom options
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }
}

/// Builder for ParseOptions
#[derive(Debug, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    pub fn include_annotations(mut self, include: bool) -> Self {
        self.options.include_annotations = include;
        self
    }

    pub fn include_hidden_objects(mut self, include: bool) -> Self {
        self.options.include_hidden_objects = include;
        self
    }

    pub fn strict_relationships(mut self, strict: bool) -> Self {
        self.options.strict_relationships = strict;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.options
    }
}
