//! escompat catalog: compat database loading and feature catalogs
//!
//! Builds the `Feature` list the evaluator consumes: each catalog entry is
//! resolved against a browser-compat-data style JSON tree.
//!
//! # Example
//!
//! ```ignore
//! use escompat_catalog::{Catalog, CompatData};
//!
//! let data = CompatData::from_path("node_modules/@mdn/browser-compat-data/data.json")?;
//! let features = Catalog::builtin()?.features(&data)?;
//! ```

pub mod catalog;
pub mod compat_data;

pub use catalog::{Catalog, CatalogEntry, CatalogFile};
pub use compat_data::CompatData;

use thiserror::Error;

/// Errors that can occur while loading compat data or catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid compat data JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Malformed compat node at '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
