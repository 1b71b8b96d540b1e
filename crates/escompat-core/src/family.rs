//! Runtime family aliases
//!
//! Mobile and embedded families often have no entry of their own in the
//! compat data. A variant without an entry is taken to behave like its base
//! family, so it is never reported as unsupported on its own.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in variant → base family table
static BUILTIN_VARIANTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("chrome_android", "chrome"),
        ("firefox_android", "firefox"),
        ("opera_android", "opera"),
        ("safari_ios", "safari"),
        ("samsunginternet_android", "chrome"),
        ("webview_android", "chrome"),
        ("webview_ios", "safari"),
    ])
});

/// Mapping from variant family to base family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyAliases {
    variants: HashMap<String, String>,
}

impl FamilyAliases {
    /// An empty table: no family falls back to another
    pub fn empty() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// The built-in desktop/mobile table
    pub fn builtin() -> Self {
        Self {
            variants: BUILTIN_VARIANTS
                .iter()
                .map(|(variant, base)| (variant.to_string(), base.to_string()))
                .collect(),
        }
    }

    /// Register `variant` as a variant of `base`, replacing any previous base
    pub fn with_variant(mut self, variant: impl Into<String>, base: impl Into<String>) -> Self {
        self.variants.insert(variant.into(), base.into());
        self
    }

    /// Base family of `family`, if it is a known variant
    pub fn base_of(&self, family: &str) -> Option<&str> {
        self.variants.get(family).map(String::as_str)
    }

    pub fn is_variant(&self, family: &str) -> bool {
        self.variants.contains_key(family)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for FamilyAliases {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Extend<(String, String)> for FamilyAliases {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.variants.extend(iter);
    }
}
