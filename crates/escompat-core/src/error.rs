//! Error model
use thiserror::Error;

/// A version string that is not dotted numeric
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("VERSION/empty version string")]
    Empty,

    #[error("VERSION/'{version}' has non-numeric component '{component}'")]
    NonNumeric { version: String, component: String },
}

/// Compat data needed for evaluation is missing or malformed.
///
/// Signals a defect in the metadata or catalog, not an unsupported feature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("sparse compat data for feature '{feature}': {detail}")]
pub struct SparseCompatDataError {
    /// Feature description, or its id when it has none
    pub feature: String,
    pub detail: SparseDetail,
}

/// What exactly is sparse about a feature's compat data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SparseDetail {
    /// The feature carries no compat records at all
    NoRecords,
    /// Some records are holes; one slot per record in order
    Holes(Vec<bool>),
    /// A queried family has no entry and is not a variant of another family
    MissingFamily { record: usize, family: String },
    /// A queried family's primary entry has a version that is not dotted numeric
    UnparsedVersion {
        record: usize,
        family: String,
        version: String,
    },
}

impl std::fmt::Display for SparseDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRecords => write!(f, "no compat records"),
            Self::Holes(slots) => {
                let rendered = slots
                    .iter()
                    .map(|present| if *present { "present" } else { "missing" })
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}", rendered)
            }
            Self::MissingFamily { record, family } => {
                write!(f, "record {} has no support entry for '{}'", record, family)
            }
            Self::UnparsedVersion {
                record,
                family,
                version,
            } => write!(
                f,
                "record {} has unparsed version '{}' for '{}'",
                record, version, family
            ),
        }
    }
}
