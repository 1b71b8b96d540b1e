//! escompat config: targets and project settings
pub mod config;
pub mod targets;

pub use config::{EscompatConfig, Severity};
pub use targets::{
    compat_family, oldest_per_family, parse_target, parse_target_with, parse_targets,
    parse_targets_with,
};

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid target '{0}', expected '<family> <version>'")]
    InvalidTarget(String),
    #[error("No usable targets configured")]
    NoTargets,
}
