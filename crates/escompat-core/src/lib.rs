//! escompat core: which features are unsupported by a set of target runtimes
//!
//! Features carry compat records in the browser-compat-data shape (a support
//! statement per runtime family). Targets are `(family, version)` pairs. The
//! evaluator reports every feature that fails at least one target.
//!
//! # Example
//!
//! ```
//! use escompat_core::{unsupported_features, CompatRecord, Feature, SupportEntry, Target};
//!
//! let feature = Feature::new("no-optional-chaining")
//!     .with_description("optional chaining")
//!     .with_record(
//!         CompatRecord::new().with_support("chrome", SupportEntry::since("80".parse().unwrap())),
//!     );
//! let features = [feature];
//!
//! let targets = [Target::new("chrome", "79").unwrap()];
//! let unsupported = unsupported_features(&features, &targets).unwrap();
//! assert_eq!(unsupported[0].id, "no-optional-chaining");
//! ```

pub mod data_model;
pub mod error;
pub mod evaluate;
pub mod family;
pub mod resolver;
pub mod support;
pub mod validate;
pub mod version;

pub use data_model::{Feature, Target};
pub use error::{SparseCompatDataError, SparseDetail, VersionError};
pub use evaluate::{unsupported_features, Evaluator};
pub use family::FamilyAliases;
pub use resolver::is_supported;
pub use support::{CompatRecord, Flag, SupportEntry, SupportStatement, VersionAdded};
pub use validate::validate;
pub use version::Version;
