//! Data Model: Feature, Target
use crate::error::VersionError;
use crate::support::CompatRecord;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A language or API feature from the caller's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Catalog identifier (ex: "no-optional-chaining")
    pub id: String,
    /// Human-readable description, used in messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One record per metadata node; `None` where the node was not found
    pub compat_features: Vec<Option<CompatRecord>>,
}

impl Feature {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            compat_features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_record(mut self, record: CompatRecord) -> Self {
        self.compat_features.push(Some(record));
        self
    }

    /// Add a slot whose metadata node could not be resolved
    pub fn with_hole(mut self) -> Self {
        self.compat_features.push(None);
        self
    }

    /// Description, or the id when there is none
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.id)
    }
}

/// A runtime the evaluated code must run on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Compat data family name (ex: "chrome_android", "nodejs")
    pub family: String,
    pub version: Version,
}

impl Target {
    pub fn new(family: impl Into<String>, version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            family: family.into(),
            version: version.parse()?,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.version)
    }
}
