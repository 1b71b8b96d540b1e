//! Project configuration file (YAML)
//!
//! ```yaml
//! compat_data: node_modules/@mdn/browser-compat-data/data.json
//! catalog: escompat-features.yaml   # optional, built-in catalog otherwise
//! severity: error                   # or warning
//! editions: [2020, 2021]            # optional
//! aliases:
//!   kaios: firefox
//! targets:
//!   - chrome 79
//!   - ios_saf 13.4-13.7
//! ```

use crate::targets::{oldest_per_family, parse_targets_with};
use crate::ConfigError;
use escompat_core::{FamilyAliases, Target};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How unsupported features are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "warn")]
    Warning,
    #[default]
    Error,
}

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscompatConfig {
    /// Browserslist-style target strings
    pub targets: Vec<String>,

    /// Path to the compat database JSON
    pub compat_data: PathBuf,

    /// Path to a feature catalog YAML
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub severity: Severity,

    /// ECMAScript editions to check; empty means all
    #[serde(default)]
    pub editions: Vec<u16>,

    /// Extra variant → base family mappings
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl EscompatConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        Ok(config)
    }

    /// Load a config file; relative paths in it resolve against its directory
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(path = %path.display(), targets = config.targets.len(), "loaded config");
        Ok(config)
    }

    /// Parsed targets, oldest version per family.
    ///
    /// Families named as configured aliases count as known families.
    pub fn targets(&self) -> Result<Vec<Target>, ConfigError> {
        let aliased: Vec<&str> = self.aliases.keys().map(String::as_str).collect();
        let targets = parse_targets_with(self.targets.as_slice(), &aliased)?;
        if targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        Ok(oldest_per_family(targets))
    }

    /// Built-in family aliases plus the configured ones
    pub fn aliases(&self) -> FamilyAliases {
        let mut aliases = FamilyAliases::builtin();
        aliases.extend(self.aliases.clone());
        aliases
    }

    pub fn compat_data_path(&self) -> PathBuf {
        self.resolve(&self.compat_data)
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| self.resolve(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
compat_data: data.json
severity: warn
editions: [2020]
aliases:
  kaios: firefox
targets:
  - chrome 80
  - chrome 79
  - op_mini all
  - node 14
"#;

    #[test]
    fn test_parse_config() {
        let config = EscompatConfig::from_yaml(YAML).unwrap();
        assert_eq!(config.severity, Severity::Warning);
        assert_eq!(config.editions, vec![2020]);
        assert!(config.catalog.is_none());

        let rendered: Vec<String> = config.targets().unwrap().iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["chrome 79", "nodejs 14"]);
    }

    #[test]
    fn test_aliases_extend_builtin() {
        let aliases = EscompatConfig::from_yaml(YAML).unwrap().aliases();
        assert_eq!(aliases.base_of("kaios"), Some("firefox"));
        assert_eq!(aliases.base_of("chrome_android"), Some("chrome"));
    }

    #[test]
    fn test_aliased_family_target_kept_and_evaluated() {
        use escompat_core::{CompatRecord, Evaluator, Feature, SupportEntry};

        let config = EscompatConfig::from_yaml(
            "compat_data: d.json\naliases:\n  kaios: firefox\ntargets: [kaios 2.5, chrome 80]\n",
        )
        .unwrap();
        let targets = config.targets().unwrap();
        let rendered: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["kaios 2.5", "chrome 80"]);

        let features = [Feature::new("f").with_record(
            CompatRecord::new()
                .with_support("chrome", SupportEntry::since("80".parse().unwrap()))
                .with_support("firefox", SupportEntry::since("90".parse().unwrap())),
        )];
        let evaluator = Evaluator::new(config.aliases());
        assert!(evaluator.unsupported_features(&features, &targets).unwrap().is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = EscompatConfig::from_yaml("compat_data: d.json\ntargets: [chrome 80]\n").unwrap();
        assert_eq!(config.severity, Severity::Error);
        assert!(config.aliases.is_empty());
        assert_eq!(config.compat_data_path(), PathBuf::from("d.json"));
    }

    #[test]
    fn test_requires_targets() {
        let err = EscompatConfig::from_yaml("compat_data: d.json\ntargets: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoTargets));

        let config = EscompatConfig::from_yaml("compat_data: d.json\ntargets: [op_mini all]\n").unwrap();
        assert!(matches!(config.targets(), Err(ConfigError::NoTargets)));
    }
}
