//! Feature catalog: maps lint features to compat database paths.
//!
//! Catalog files are YAML:
//!
//! ```yaml
//! version: "1"
//! features:
//!   - id: no-optional-chaining
//!     description: optional chaining
//!     edition: 2020
//!     compat:
//!       - javascript.operators.optional_chaining
//! ```

use crate::compat_data::CompatData;
use crate::CatalogError;
use escompat_core::Feature;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const BUILTIN_CATALOG: &str = include_str!("../catalog/es-features.yaml");

/// Top-level catalog file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: String,
    pub features: Vec<CatalogEntry>,
}

/// One feature in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ECMAScript edition year that introduced the feature
    #[serde(default)]
    pub edition: Option<u16>,
    /// Dotted compat database paths, one per syntax form or API
    pub compat: Vec<String>,
}

/// A parsed feature catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The catalog shipped with this crate (ES2016 and later)
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        debug!(version = %file.version, features = file.features.len(), "parsed catalog");
        Ok(Self::new(file.features))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only features from the given editions.
    ///
    /// Entries without an edition are always kept.
    pub fn filter_editions(self, editions: &[u16]) -> Self {
        if editions.is_empty() {
            return self;
        }
        Self::new(
            self.entries
                .into_iter()
                .filter(|entry| entry.edition.map_or(true, |e| editions.contains(&e)))
                .collect(),
        )
    }

    /// Resolve every entry against the compat database, in catalog order.
    ///
    /// Paths with no compat node become holes in the feature's records, which
    /// the evaluator reports as sparse data.
    pub fn features(&self, data: &CompatData) -> Result<Vec<Feature>, CatalogError> {
        self.entries
            .iter()
            .map(|entry| {
                let mut feature = Feature::new(&entry.id);
                feature.description = entry.description.clone();
                for path in &entry.compat {
                    let record = data.lookup(path)?;
                    if record.is_none() {
                        warn!(feature = %entry.id, path = %path, "compat path not found");
                    }
                    feature.compat_features.push(record);
                }
                Ok(feature)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const YAML: &str = r#"
version: "1"
features:
  - id: no-exponentiation-operator
    description: exponentiation operator
    edition: 2016
    compat: [javascript.operators.exponentiation]
  - id: no-logical-assignment
    edition: 2021
    compat:
      - javascript.operators.logical_and_assignment
      - javascript.operators.logical_or_assignment
  - id: no-custom
    compat: [javascript.custom]
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_yaml(YAML).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[1].compat.len(), 2);
        assert_eq!(catalog.entries()[0].edition, Some(2016));
    }

    #[test]
    fn test_filter_editions() {
        let catalog = Catalog::from_yaml(YAML).unwrap().filter_editions(&[2021]);
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["no-logical-assignment", "no-custom"]);
    }

    #[test]
    fn test_features_keep_holes() {
        let data = CompatData::new(json!({
            "javascript": { "operators": {
                "exponentiation": { "__compat": { "support": { "chrome": { "version_added": "52" } } } },
                "logical_and_assignment": { "__compat": { "support": { "chrome": { "version_added": "85" } } } }
            } }
        }));

        let features = Catalog::from_yaml(YAML).unwrap().features(&data).unwrap();
        assert_eq!(features[0].label(), "exponentiation operator");
        assert_eq!(features[1].compat_features.len(), 2);
        assert!(features[1].compat_features[0].is_some());
        assert!(features[1].compat_features[1].is_none());
        assert_eq!(features[2].label(), "no-custom");
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.entries().iter().all(|e| !e.compat.is_empty()));
        assert!(catalog.entries().iter().any(|e| e.id == "no-optional-chaining"));
    }
}
