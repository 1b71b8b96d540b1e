//! Verdict types for compat rule runs
//!
//! Provides Allow/Warn/Block verdicts carrying one violation per
//! unsupported feature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of running the compat rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Every feature is supported by every target
    Allow,

    /// Unsupported features found, reported as warnings
    Warn { violations: Vec<Violation> },

    /// Unsupported features found, reported as errors
    Block { violations: Vec<Violation> },
}

impl Verdict {
    /// Check if the verdict lets the lint run pass (allow or warn)
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow | Verdict::Warn { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Block { .. })
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Allow => &[],
            Verdict::Warn { violations } | Verdict::Block { violations } => violations,
        }
    }
}

/// One unsupported feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Catalog id of the feature
    pub rule_id: String,
    /// Human-readable feature name
    pub rule_name: String,
    /// Message shown to the user
    pub description: String,
    pub severity: ViolationSeverity,
    /// Targets the feature fails on, rendered as `<family> <version>`
    pub targets: Vec<String>,
}

/// Severity of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Warning = 1,
    Error = 2,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Allow => write!(f, "ALLOW"),
            Verdict::Warn { violations } => {
                write!(f, "WARN ({} unsupported features)", violations.len())
            }
            Verdict::Block { violations } => {
                write!(f, "BLOCK ({} unsupported features)", violations.len())
            }
        }
    }
}

impl fmt::Display for ViolationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViolationSeverity::Warning => write!(f, "warning"),
            ViolationSeverity::Error => write!(f, "error"),
        }
    }
}
