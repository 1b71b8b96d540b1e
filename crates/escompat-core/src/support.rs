//! Support statements as found in browser-compat-data
//!
//! The upstream JSON is loosely typed: `version_added` may be a version
//! string, `true`, `false` or `null`, and a family may map to one entry or to
//! an array of alternatives. These types pin each shape to a variant.

use crate::version::Version;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// When a family started supporting a feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionAdded {
    /// Supported from this version on
    Since(Version),
    /// `true`: supported, exact version unknown
    Always,
    /// `false`: never supported
    Never,
    /// `null`: no data
    Unknown,
    /// A version string that is not dotted numeric, such as `≤18` or `preview`
    Unparsed(String),
}

impl VersionAdded {
    /// The raw text of an unparsed version
    pub fn unparsed(&self) -> Option<&str> {
        match self {
            VersionAdded::Unparsed(raw) => Some(raw),
            _ => None,
        }
    }
}

impl Serialize for VersionAdded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VersionAdded::Since(version) => version.serialize(serializer),
            VersionAdded::Always => serializer.serialize_bool(true),
            VersionAdded::Never => serializer.serialize_bool(false),
            VersionAdded::Unknown => serializer.serialize_none(),
            VersionAdded::Unparsed(raw) => serializer.serialize_str(raw),
        }
    }
}

struct VersionAddedVisitor;

impl<'de> Visitor<'de> for VersionAddedVisitor {
    type Value = VersionAdded;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a version string, a boolean or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(if value {
            VersionAdded::Always
        } else {
            VersionAdded::Never
        })
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value
            .parse()
            .map(VersionAdded::Since)
            .unwrap_or_else(|_| VersionAdded::Unparsed(value.to_string())))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(VersionAdded::Unknown)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(VersionAdded::Unknown)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for VersionAdded {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing field reaches us through `deserialize_option` as none
        deserializer.deserialize_option(VersionAddedVisitor)
    }
}

/// A runtime flag or preference gating an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_to_set: Option<String>,
}

/// One support record for a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    pub version_added: VersionAdded,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,
}

impl SupportEntry {
    pub fn new(version_added: VersionAdded) -> Self {
        Self {
            version_added,
            flags: Vec::new(),
        }
    }

    /// Entry supported from `version`
    pub fn since(version: Version) -> Self {
        Self::new(VersionAdded::Since(version))
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Whether support is conditional on a flag
    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// All support records for one family.
///
/// The first entry is the primary (default) support path; the rest are
/// alternatives such as flagged or prefixed implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportStatement {
    primary: SupportEntry,
    secondary: Vec<SupportEntry>,
}

impl SupportStatement {
    pub fn single(entry: SupportEntry) -> Self {
        Self {
            primary: entry,
            secondary: Vec::new(),
        }
    }

    pub fn with_alternative(mut self, entry: SupportEntry) -> Self {
        self.secondary.push(entry);
        self
    }

    pub fn primary(&self) -> &SupportEntry {
        &self.primary
    }

    pub fn secondary(&self) -> &[SupportEntry] {
        &self.secondary
    }

    /// All entries, primary first
    pub fn entries(&self) -> impl Iterator<Item = &SupportEntry> {
        std::iter::once(&self.primary).chain(self.secondary.iter())
    }
}

impl From<SupportEntry> for SupportStatement {
    fn from(entry: SupportEntry) -> Self {
        Self::single(entry)
    }
}

impl Serialize for SupportStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.secondary.is_empty() {
            self.primary.serialize(serializer)
        } else {
            serializer.collect_seq(self.entries())
        }
    }
}

struct StatementVisitor;

impl<'de> Visitor<'de> for StatementVisitor {
    type Value = SupportStatement;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a support entry or a non-empty array of support entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        SupportEntry::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(SupportStatement::single)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let Some(primary) = seq.next_element::<SupportEntry>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let mut secondary = Vec::new();
        while let Some(entry) = seq.next_element()? {
            secondary.push(entry);
        }
        Ok(SupportStatement { primary, secondary })
    }
}

impl<'de> Deserialize<'de> for SupportStatement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StatementVisitor)
    }
}

/// The `__compat` node of one feature in the compat database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdn_url: Option<String>,

    /// Support statement per runtime family
    pub support: BTreeMap<String, SupportStatement>,
}

impl CompatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_support(
        mut self,
        family: impl Into<String>,
        statement: impl Into<SupportStatement>,
    ) -> Self {
        self.support.insert(family.into(), statement.into());
        self
    }

    pub fn statement(&self, family: &str) -> Option<&SupportStatement> {
        self.support.get(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_added_shapes() {
        let cases = [
            (json!("73"), VersionAdded::Since("73".parse().unwrap())),
            (json!(true), VersionAdded::Always),
            (json!(false), VersionAdded::Never),
            (json!(null), VersionAdded::Unknown),
        ];
        for (value, expected) in cases {
            let parsed: VersionAdded = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(parsed, expected, "for {}", value);
        }
    }

    #[test]
    fn test_non_numeric_version_kept_unparsed() {
        for raw in ["≤79", "preview"] {
            let entry: SupportEntry =
                serde_json::from_value(json!({ "version_added": raw })).unwrap();
            assert_eq!(entry.version_added, VersionAdded::Unparsed(raw.to_string()));
            assert_eq!(entry.version_added.unparsed(), Some(raw));
            assert_eq!(serde_json::to_value(&entry).unwrap(), json!({ "version_added": raw }));
        }
    }

    #[test]
    fn test_wrong_shape_error_names_expectation() {
        let err = serde_json::from_value::<SupportStatement>(json!({ "version_added": 69 }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("expected a version string, a boolean or null"), "{}", err);

        let err = serde_json::from_value::<SupportStatement>(json!("80"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("expected a support entry"), "{}", err);
    }

    #[test]
    fn test_missing_version_added_is_unknown() {
        let entry: SupportEntry = serde_json::from_value(json!({ "flags": [] })).unwrap();
        assert_eq!(entry.version_added, VersionAdded::Unknown);
    }

    #[test]
    fn test_statement_array_keeps_primary_first() {
        let statement: SupportStatement = serde_json::from_value(json!([
            { "version_added": "7.0.0" },
            {
                "version_added": "6.5.0",
                "flags": [{ "type": "runtime_flag", "name": "--harmony" }]
            }
        ]))
        .unwrap();

        assert!(!statement.primary().is_flagged());
        assert_eq!(statement.secondary().len(), 1);
        assert!(statement.secondary()[0].is_flagged());
        assert_eq!(statement.entries().count(), 2);
    }

    #[test]
    fn test_empty_statement_array_rejected() {
        let err = serde_json::from_value::<SupportStatement>(json!([])).unwrap_err();
        assert!(err.to_string().contains("invalid length 0"), "{}", err);
    }

    #[test]
    fn test_statement_serializes_to_original_shape() {
        let single: SupportStatement =
            serde_json::from_value(json!({ "version_added": true })).unwrap();
        assert_eq!(serde_json::to_value(&single).unwrap(), json!({ "version_added": true }));

        let many = json!([{ "version_added": "12" }, { "version_added": null }]);
        let statement: SupportStatement = serde_json::from_value(many.clone()).unwrap();
        assert_eq!(serde_json::to_value(&statement).unwrap(), many);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: CompatRecord = serde_json::from_value(json!({
            "mdn_url": "https://developer.mozilla.org/docs/Web/JavaScript/Reference/Operators/Optional_chaining",
            "spec_url": "https://tc39.es/ecma262/",
            "support": {
                "chrome": { "version_added": "80" },
                "ie": { "version_added": false, "notes": "never" }
            },
            "status": { "experimental": false, "standard_track": true, "deprecated": false }
        }))
        .unwrap();

        assert_eq!(record.support.len(), 2);
        assert_eq!(
            record.statement("ie").unwrap().primary().version_added,
            VersionAdded::Never
        );
    }
}
