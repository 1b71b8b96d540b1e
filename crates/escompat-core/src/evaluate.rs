//! Aggregate Evaluator: features × records × targets
use crate::data_model::{Feature, Target};
use crate::error::SparseCompatDataError;
use crate::family::FamilyAliases;
use crate::resolver::is_supported;
use crate::support::CompatRecord;
use crate::validate::{lookup, validate, Lookup};
use tracing::debug;

/// Evaluates features against targets with a given alias table
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    aliases: FamilyAliases,
}

impl Evaluator {
    pub fn new(aliases: FamilyAliases) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &FamilyAliases {
        &self.aliases
    }

    /// Features unsupported by at least one target, in input order.
    ///
    /// Every feature is validated before any is evaluated, so sparse data is
    /// reported even when an earlier feature is already known unsupported.
    pub fn unsupported_features<'a>(
        &self,
        features: &'a [Feature],
        targets: &[Target],
    ) -> Result<Vec<&'a Feature>, SparseCompatDataError> {
        for feature in features {
            validate(feature, targets, &self.aliases)?;
        }

        let unsupported: Vec<&Feature> = features
            .iter()
            .filter(|feature| {
                feature
                    .compat_features
                    .iter()
                    .flatten()
                    .any(|record| targets.iter().any(|t| !self.supports(feature, record, t)))
            })
            .collect();

        debug!(
            features = features.len(),
            targets = targets.len(),
            unsupported = unsupported.len(),
            "evaluated compat"
        );
        Ok(unsupported)
    }

    /// Every target `feature` fails on, in target order
    pub fn failing_targets<'t>(
        &self,
        feature: &Feature,
        targets: &'t [Target],
    ) -> Result<Vec<&'t Target>, SparseCompatDataError> {
        validate(feature, targets, &self.aliases)?;

        Ok(targets
            .iter()
            .filter(|target| {
                feature
                    .compat_features
                    .iter()
                    .flatten()
                    .any(|record| !self.supports(feature, record, target))
            })
            .collect())
    }

    fn supports(&self, feature: &Feature, record: &CompatRecord, target: &Target) -> bool {
        match lookup(record, &target.family, &self.aliases) {
            Lookup::Entry(statement) => {
                let supported = is_supported(statement, &target.version);
                if !supported {
                    debug!(
                        feature = %feature.id,
                        family = %target.family,
                        version = %target.version,
                        "feature unsupported by target"
                    );
                }
                supported
            }
            // Missing entries are rejected during validation
            Lookup::Fallback | Lookup::Missing => true,
        }
    }
}

/// Features unsupported by any target, using the built-in family aliases
pub fn unsupported_features<'a>(
    features: &'a [Feature],
    targets: &[Target],
) -> Result<Vec<&'a Feature>, SparseCompatDataError> {
    Evaluator::default().unsupported_features(features, targets)
}
