//! escompat CLI: load a project config and run the compat rule
use anyhow::{Context, Result};
use escompat_catalog::{Catalog, CompatData};
use escompat_config::EscompatConfig;
use escompat_core::{Evaluator, Feature};
use escompat_rule::{CompatRule, Verdict};
use tracing::info;

/// Catalog named by the config, or the built-in one
pub fn load_catalog(config: &EscompatConfig) -> Result<Catalog> {
    let catalog = match config.catalog_path() {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin().context("loading built-in catalog")?,
    };
    Ok(catalog.filter_editions(&config.editions))
}

/// Features from the configured catalog resolved against the compat data
pub fn load_features(config: &EscompatConfig) -> Result<Vec<Feature>> {
    let data_path = config.compat_data_path();
    let data = CompatData::from_path(&data_path)
        .with_context(|| format!("loading compat data {}", data_path.display()))?;
    let features = load_catalog(config)?.features(&data)?;
    info!(features = features.len(), "catalog resolved");
    Ok(features)
}

/// Run the compat rule for a project config
pub fn check(config: &EscompatConfig) -> Result<Verdict> {
    let targets = config.targets()?;
    let features = load_features(config)?;
    let rule = CompatRule::new(Evaluator::new(config.aliases())).with_severity(config.severity);
    Ok(rule.check(&features, &targets)?)
}

/// Human-readable report
pub fn render_text(verdict: &Verdict) -> String {
    let mut out = String::new();
    for violation in verdict.violations() {
        out.push_str(&format!(
            "{:<8} {:<40} {}\n",
            violation.severity, violation.rule_id, violation.description
        ));
    }
    out.push_str(&verdict.to_string());
    out.push('\n');
    out
}
