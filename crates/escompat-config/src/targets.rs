//! Target parsing from browserslist-style query results
//!
//! Browserslist resolves a project's queries to strings such as
//! `"chrome 79"`, `"ios_saf 13.4-13.7"` or `"node 12.22.0"`. Its family
//! names differ from the compat data's, so they are mapped here.

use crate::ConfigError;
use escompat_core::{Target, Version};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Browserslist family → compat data family
static BROWSERSLIST_FAMILIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("and_chr", "chrome_android"),
        ("and_ff", "firefox_android"),
        ("android", "webview_android"),
        ("chrome", "chrome"),
        ("edge", "edge"),
        ("firefox", "firefox"),
        ("ie", "ie"),
        ("ios_saf", "safari_ios"),
        ("node", "nodejs"),
        ("op_mob", "opera_android"),
        ("opera", "opera"),
        ("safari", "safari"),
        ("samsung", "samsunginternet_android"),
    ])
});

/// Compat data family for a browserslist or compat data family name
pub fn compat_family(name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    BROWSERSLIST_FAMILIES.get(name.as_str()).copied().or_else(|| {
        BROWSERSLIST_FAMILIES
            .values()
            .find(|family| **family == name)
            .copied()
    })
}

/// Parse one `"<family> <version>"` string.
///
/// Returns `Ok(None)` for families with no compat data counterpart and for
/// non-numeric versions such as `all` or `TP`. A version range uses its
/// lower bound.
pub fn parse_target(query_result: &str) -> Result<Option<Target>, ConfigError> {
    parse_target_with(query_result, &[])
}

/// Like [`parse_target`], also accepting `extra_families` as compat families.
///
/// Used for families that only exist through configured aliases.
pub fn parse_target_with(
    query_result: &str,
    extra_families: &[&str],
) -> Result<Option<Target>, ConfigError> {
    let mut parts = query_result.split_whitespace();
    let (Some(name), Some(version), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ConfigError::InvalidTarget(query_result.to_string()));
    };

    let family = match compat_family(name) {
        Some(family) => Some(family),
        None => extra_families
            .iter()
            .find(|family| family.eq_ignore_ascii_case(name))
            .copied(),
    };
    let Some(family) = family else {
        debug!(target = query_result, "no compat family for target, skipping");
        return Ok(None);
    };

    let lower = version.split('-').next().unwrap_or(version);
    match lower.parse::<Version>() {
        Ok(version) => Ok(Some(Target {
            family: family.to_string(),
            version,
        })),
        Err(err) => {
            debug!(target = query_result, error = %err, "non-numeric target version, skipping");
            Ok(None)
        }
    }
}

/// Parse a list of target strings, skipping the ones with no compat data
pub fn parse_targets<S: AsRef<str>>(query_results: &[S]) -> Result<Vec<Target>, ConfigError> {
    parse_targets_with(query_results, &[])
}

/// Parse a list of target strings, also accepting `extra_families`
pub fn parse_targets_with<S: AsRef<str>>(
    query_results: &[S],
    extra_families: &[&str],
) -> Result<Vec<Target>, ConfigError> {
    let mut targets = Vec::with_capacity(query_results.len());
    for query_result in query_results {
        if let Some(target) = parse_target_with(query_result.as_ref(), extra_families)? {
            targets.push(target);
        }
    }
    Ok(targets)
}

/// Keep the oldest version of each family, in order of first appearance.
///
/// Support only ever starts at a version, so the oldest target of a family
/// fails whenever any newer one does.
pub fn oldest_per_family(targets: Vec<Target>) -> Vec<Target> {
    let mut oldest: Vec<Target> = Vec::new();
    for target in targets {
        match oldest.iter_mut().find(|t| t.family == target.family) {
            Some(existing) if target.version < existing.version => *existing = target,
            Some(_) => {}
            None => oldest.push(target),
        }
    }
    oldest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> Target {
        parse_target(s).unwrap().unwrap()
    }

    #[test]
    fn test_maps_browserslist_names() {
        assert_eq!(parsed("and_chr 79").family, "chrome_android");
        assert_eq!(parsed("ios_saf 13.4").family, "safari_ios");
        assert_eq!(parsed("node 12.22.0").family, "nodejs");
        assert_eq!(parsed("samsung 12.0").family, "samsunginternet_android");
    }

    #[test]
    fn test_accepts_compat_family_names() {
        assert_eq!(parsed("nodejs 14").family, "nodejs");
        assert_eq!(parsed("Chrome 80").family, "chrome");
    }

    #[test]
    fn test_range_uses_lower_bound() {
        let target = parsed("ios_saf 13.4-13.7");
        assert_eq!(target.version, "13.4".parse().unwrap());
        assert_eq!(target.to_string(), "safari_ios 13.4");
    }

    #[test]
    fn test_skips_unknown_and_non_numeric() {
        assert!(parse_target("op_mini all").unwrap().is_none());
        assert!(parse_target("safari TP").unwrap().is_none());
        assert!(parse_target("kaios 2.5").unwrap().is_none());
    }

    #[test]
    fn test_extra_families_accepted() {
        let target = parse_target_with("KaiOS 2.5", &["kaios"]).unwrap().unwrap();
        assert_eq!(target.to_string(), "kaios 2.5");
        assert_eq!(parse_target_with("and_chr 79", &["kaios"]).unwrap().unwrap().family, "chrome_android");
        assert!(parse_target_with("op_mini all", &["kaios"]).unwrap().is_none());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(parse_target("chrome"), Err(ConfigError::InvalidTarget(_))));
        assert!(matches!(parse_target("chrome 79 80"), Err(ConfigError::InvalidTarget(_))));
    }

    #[test]
    fn test_parse_targets_skips() {
        let targets = parse_targets(&["chrome 79", "op_mini all", "firefox 72"]).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_oldest_per_family() {
        let targets = parse_targets(&["chrome 80", "firefox 72", "chrome 79", "chrome 81"]).unwrap();
        let rendered: Vec<String> = oldest_per_family(targets).iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["chrome 79", "firefox 72"]);
    }
}
