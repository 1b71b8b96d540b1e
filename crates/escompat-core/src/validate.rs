//! Data Validator: reject sparse compat data before evaluation
use crate::data_model::{Feature, Target};
use crate::error::{SparseCompatDataError, SparseDetail};
use crate::family::FamilyAliases;
use crate::support::{CompatRecord, SupportStatement};
use tracing::warn;

/// Outcome of looking up a target family in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The record has an entry for the family
    Entry(&'a SupportStatement),
    /// No entry, but the family is a known variant of a base family
    Fallback,
    /// No entry and nothing to fall back on
    Missing,
}

/// Find the support statement for `family` in `record`
pub fn lookup<'a>(record: &'a CompatRecord, family: &str, aliases: &FamilyAliases) -> Lookup<'a> {
    if let Some(statement) = record.statement(family) {
        return Lookup::Entry(statement);
    }
    if aliases.is_variant(family) {
        Lookup::Fallback
    } else {
        Lookup::Missing
    }
}

/// Check that every record of `feature` is present and answers every target.
///
/// Only the primary entry of a queried family must carry a usable version;
/// families nobody queries and secondary entries are not inspected.
pub fn validate(
    feature: &Feature,
    targets: &[Target],
    aliases: &FamilyAliases,
) -> Result<(), SparseCompatDataError> {
    let sparse = |detail: SparseDetail| {
        let err = SparseCompatDataError {
            feature: feature.label().to_string(),
            detail,
        };
        warn!(feature = %feature.id, error = %err, "sparse compat data");
        err
    };

    if feature.compat_features.is_empty() {
        return Err(sparse(SparseDetail::NoRecords));
    }

    if feature.compat_features.iter().any(Option::is_none) {
        let slots = feature.compat_features.iter().map(Option::is_some).collect();
        return Err(sparse(SparseDetail::Holes(slots)));
    }

    for (index, record) in feature.compat_features.iter().flatten().enumerate() {
        for target in targets {
            match lookup(record, &target.family, aliases) {
                Lookup::Missing => {
                    return Err(sparse(SparseDetail::MissingFamily {
                        record: index,
                        family: target.family.clone(),
                    }))
                }
                Lookup::Entry(statement) => {
                    if let Some(raw) = statement.primary().version_added.unparsed() {
                        return Err(sparse(SparseDetail::UnparsedVersion {
                            record: index,
                            family: target.family.clone(),
                            version: raw.to_string(),
                        }));
                    }
                }
                Lookup::Fallback => {}
            }
        }
    }

    Ok(())
}
