//! Document-level metadata: schema header, cultures and annotations

use serde::{Deserialize, Serialize};

/// Free-form key/value metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

/// Localization entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Culture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` when annotations were excluded from the import
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataModelSchema {
    pub name: String,
    pub compatibility_level: i64,
    #[serde(default)]
    pub cultures: Vec<Culture>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Default for DataModelSchema {
    fn default() -> Self {
        Self {
            name: "Model".to_string(),
            compatibility_level: 0,
            cultures: Vec::new(),
            annotations: Vec::new(),
        }
    }
}
