//! escompat rule: lint reporting for unsupported language features
//!
//! # Example
//!
//! ```
//! use escompat_rule::{CompatRule, Verdict};
//! use escompat_core::{CompatRecord, Feature, SupportEntry, Target};
//!
//! let features = [Feature::new("no-bigint").with_record(
//!     CompatRecord::new().with_support("safari", SupportEntry::since("14".parse().unwrap())),
//! )];
//! let targets = [Target::new("safari", "13.1").unwrap()];
//!
//! let verdict = CompatRule::default().check(&features, &targets).unwrap();
//! assert!(verdict.is_blocked());
//! for violation in verdict.violations() {
//!     println!("{}: {}", violation.rule_id, violation.description);
//! }
//! ```

pub mod rule;
pub mod verdict;

pub use rule::CompatRule;
pub use verdict::{Verdict, Violation, ViolationSeverity};
