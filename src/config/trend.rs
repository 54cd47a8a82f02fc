//! Trend configuration

use serde::Deserialize;

use crate::domain::scoring::QualifyingRule;

use super::error::ValidationError;

/// What makes a period count toward a streak
///
/// `qualifying_metric` is one of `target_achieved`, `hcroi` or `score`; the
/// latter two need `qualifying_threshold`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendConfig {
    #[serde(default = "default_metric")]
    pub qualifying_metric: String,

    #[serde(default)]
    pub qualifying_threshold: Option<f64>,
}

impl TrendConfig {
    /// Resolve the configured qualifying rule
    pub fn rule(&self) -> Result<QualifyingRule, ValidationError> {
        let threshold = || {
            self.qualifying_threshold
                .filter(|t| t.is_finite())
                .ok_or_else(|| {
                    ValidationError::InvalidQualifyingRule(format!(
                        "metric '{}' requires a finite qualifying_threshold",
                        self.qualifying_metric
                    ))
                })
        };

        match self.qualifying_metric.trim().to_ascii_lowercase().as_str() {
            "target_achieved" => Ok(QualifyingRule::TargetAchieved),
            "hcroi" => Ok(QualifyingRule::HcroiAtLeast(threshold()?)),
            "score" => Ok(QualifyingRule::ScoreAtLeast(threshold()?)),
            other => Err(ValidationError::InvalidQualifyingRule(format!(
                "unknown metric '{}'",
                other
            ))),
        }
    }

    /// Validate trend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.rule().map(|_| ())
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            qualifying_metric: default_metric(),
            qualifying_threshold: None,
        }
    }
}

fn default_metric() -> String {
    "target_achieved".to_string()
}
