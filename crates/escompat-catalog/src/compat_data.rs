//! Compat database in the browser-compat-data layout.
//!
//! The database is a tree of objects keyed by path segment
//! (`javascript.builtins.Array.flat`); nodes that describe a feature carry a
//! `__compat` object with the per-family support matrix.

use crate::CatalogError;
use escompat_core::CompatRecord;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

const COMPAT_KEY: &str = "__compat";

/// A loaded compat database
#[derive(Debug, Clone)]
pub struct CompatData {
    root: Value,
}

impl CompatData {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a database from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a database from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loading compat data");
        Self::from_json(&content)
    }

    /// Resolve a dotted path to its compat record.
    ///
    /// Returns `Ok(None)` when no node exists at the path or the node has no
    /// `__compat` object. A `__compat` object that does not match the
    /// expected shape is an error.
    pub fn lookup(&self, path: &str) -> Result<Option<CompatRecord>, CatalogError> {
        let node = path
            .split('.')
            .try_fold(&self.root, |node, segment| node.get(segment));

        let Some(compat) = node.and_then(|node| node.get(COMPAT_KEY)) else {
            debug!(path, "no compat node at path");
            return Ok(None);
        };

        CompatRecord::deserialize(compat)
            .map(Some)
            .map_err(|source| CatalogError::Malformed {
                path: path.to_string(),
                source,
            })
    }

    /// Whether a compat node exists at `path`
    pub fn contains(&self, path: &str) -> bool {
        matches!(self.lookup(path), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escompat_core::VersionAdded;
    use serde_json::json;

    fn data() -> CompatData {
        CompatData::new(json!({
            "javascript": {
                "operators": {
                    "exponentiation": {
                        "__compat": {
                            "support": {
                                "chrome": { "version_added": "52" },
                                "ie": { "version_added": false }
                            }
                        }
                    }
                },
                "builtins": {
                    "Array": {
                        "__compat": { "support": { "chrome": { "version_added": "1" } } },
                        "flat": {
                            "__compat": { "support": { "chrome": { "version_added": 69 } } }
                        },
                        "findLast": {
                            "__compat": {
                                "support": {
                                    "chrome": { "version_added": "97" },
                                    "safari": { "version_added": "preview" },
                                    "edge": [{ "version_added": "97" }, { "version_added": "≤18" }]
                                }
                            }
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_lookup_present() {
        let record = data().lookup("javascript.operators.exponentiation").unwrap().unwrap();
        assert_eq!(
            record.statement("ie").unwrap().primary().version_added,
            VersionAdded::Never
        );
    }

    #[test]
    fn test_lookup_missing_is_hole() {
        let data = data();
        assert!(data.lookup("javascript.operators.pipeline").unwrap().is_none());
        assert!(data.lookup("javascript.builtins").unwrap().is_none());
        assert!(!data.contains("css.properties.gap"));
    }

    #[test]
    fn test_lookup_malformed_is_error() {
        let err = data().lookup("javascript.builtins.Array.flat").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { ref path, .. } if path == "javascript.builtins.Array.flat"));
        assert!(err.to_string().contains("expected a version string"), "{}", err);
    }

    #[test]
    fn test_lookup_keeps_non_numeric_versions() {
        let record = data().lookup("javascript.builtins.Array.findLast").unwrap().unwrap();
        assert_eq!(
            record.statement("safari").unwrap().primary().version_added,
            VersionAdded::Unparsed("preview".to_string())
        );
        let edge = record.statement("edge").unwrap();
        assert_eq!(edge.secondary()[0].version_added.unparsed(), Some("≤18"));
    }
}
