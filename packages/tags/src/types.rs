// ABOUTME: Tag type definitions
// ABOUTME: Tag records and the outcomes returned by tag mutations

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    /// A freshly created tag takes its name as its id
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// Result of a create or update that did not fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagOutcome {
    Success,
    Duplicated,
    #[serde(rename = "not found")]
    NotFound,
}

impl TagOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagOutcome::Success => "success",
            TagOutcome::Duplicated => "duplicated",
            TagOutcome::NotFound => "not found",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TagOutcome::Success)
    }
}

impl fmt::Display for TagOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
