//! The compat rule: report features unsupported by the project's targets
use crate::verdict::{Verdict, Violation, ViolationSeverity};
use escompat_config::Severity;
use escompat_core::{Evaluator, Feature, SparseCompatDataError, Target};
use tracing::info;

/// Rule reporting unsupported features
#[derive(Debug, Clone, Default)]
pub struct CompatRule {
    evaluator: Evaluator,
    severity: Severity,
}

impl CompatRule {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            severity: Severity::default(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Evaluate `features` and turn the unsupported ones into a verdict.
    ///
    /// Violations follow feature order; sparse data fails the whole run.
    pub fn check(
        &self,
        features: &[Feature],
        targets: &[Target],
    ) -> Result<Verdict, SparseCompatDataError> {
        let unsupported = self.evaluator.unsupported_features(features, targets)?;

        let severity = match self.severity {
            Severity::Warning => ViolationSeverity::Warning,
            Severity::Error => ViolationSeverity::Error,
        };

        let mut violations = Vec::with_capacity(unsupported.len());
        for feature in unsupported {
            let failing: Vec<String> = self
                .evaluator
                .failing_targets(feature, targets)?
                .iter()
                .map(|target| target.to_string())
                .collect();

            violations.push(Violation {
                rule_id: feature.id.clone(),
                rule_name: feature.label().to_string(),
                description: format!(
                    "'{}' is not supported by {}",
                    feature.label(),
                    failing.join(", ")
                ),
                severity,
                targets: failing,
            });
        }

        info!(
            features = features.len(),
            violations = violations.len(),
            "compat rule checked"
        );

        if violations.is_empty() {
            return Ok(Verdict::Allow);
        }
        Ok(match self.severity {
            Severity::Warning => Verdict::Warn { violations },
            Severity::Error => Verdict::Block { violations },
        })
    }
}
