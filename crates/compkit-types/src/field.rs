//! Extracted field description.

use serde::Serialize;

/// One field of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    /// TypeScript type expression.
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub description: Option<String>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
