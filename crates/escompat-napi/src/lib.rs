//! NAPI bindings so a JavaScript lint plugin can call the evaluator
use napi::bindgen_prelude::*;

#[macro_use]
extern crate napi_derive;

use escompat_core::{unsupported_features, Feature, Target};

#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_targets(targets: &[String]) -> Result<Vec<Target>> {
    escompat_config::parse_targets(targets).map_err(|e| Error::from_reason(e.to_string()))
}

/// Ids of the features unsupported by any target.
///
/// `features_json` is an array of features with their compat records;
/// `targets` are browserslist-style strings such as `"chrome 79"`.
#[napi(js_name = "unsupportedFeatures")]
pub fn unsupported_feature_ids(features_json: String, targets: Vec<String>) -> Result<Vec<String>> {
    let features: Vec<Feature> = serde_json::from_str(&features_json)
        .map_err(|e| Error::from_reason(format!("Invalid features JSON: {}", e)))?;
    let targets = parse_targets(&targets)?;

    let unsupported = unsupported_features(&features, &targets)
        .map_err(|e| Error::from_reason(e.to_string()))?;

    Ok(unsupported.into_iter().map(|feature| feature.id.clone()).collect())
}

/// Targets as the evaluator sees them, e.g. `"ios_saf 13.4-13.7"` → `"safari_ios 13.4"`
#[napi(js_name = "resolveTargets")]
pub fn resolve_targets(targets: Vec<String>) -> Result<Vec<String>> {
    Ok(parse_targets(&targets)?
        .iter()
        .map(|target| target.to_string())
        .collect())
}
