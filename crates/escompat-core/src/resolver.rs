//! Support Resolver: one support statement against one target version
use crate::support::{SupportStatement, VersionAdded};
use crate::version::Version;

/// Whether a family's support statement covers `target_version`.
///
/// Only the primary entry counts. Flagged or otherwise secondary entries
/// never satisfy a target, even when they were added earlier. A primary
/// entry with an unparsed version is never taken as support; the validator
/// rejects it before evaluation.
pub fn is_supported(statement: &SupportStatement, target_version: &Version) -> bool {
    match &statement.primary().version_added {
        VersionAdded::Since(added) => target_version >= added,
        VersionAdded::Always | VersionAdded::Unknown => true,
        VersionAdded::Never | VersionAdded::Unparsed(_) => false,
    }
}
