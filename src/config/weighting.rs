//! Weighting configuration

use serde::Deserialize;

use crate::domain::weighting::{
    validate_criteria, Criterion, InconsistencyPolicy, PriorityMethod,
};

use super::error::ValidationError;

/// Weight derivation and bootstrap settings
#[derive(Debug, Clone, Deserialize)]
pub struct WeightingConfig {
    /// What to do with judgments whose consistency ratio is 0.10 or more
    #[serde(default)]
    pub inconsistency_policy: InconsistencyPolicy,

    /// How the AHP priority vector is approximated
    #[serde(default)]
    pub priority_method: PriorityMethod,

    /// Criteria the registry is bootstrapped with (equal weights)
    #[serde(default = "default_criteria")]
    pub default_criteria: Vec<String>,
}

impl WeightingConfig {
    /// Build the bootstrap criteria
    pub fn criteria(&self) -> Result<Vec<Criterion>, ValidationError> {
        let criteria = Criterion::from_names(self.default_criteria.as_slice())
            .map_err(|e| ValidationError::InvalidDefaultCriteria(e.to_string()))?;
        validate_criteria(&criteria)
            .map_err(|e| ValidationError::InvalidDefaultCriteria(e.to_string()))?;
        Ok(criteria)
    }

    /// Validate weighting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.criteria().map(|_| ())
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            inconsistency_policy: InconsistencyPolicy::default(),
            priority_method: PriorityMethod::default(),
            default_criteria: default_criteria(),
        }
    }
}

fn default_criteria() -> Vec<String> {
    vec![
        "Sales Performance".to_string(),
        "Attendance".to_string(),
        "Other Performance".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WeightingConfig::default();
        assert_eq!(config.inconsistency_policy, InconsistencyPolicy::Warn);
        assert_eq!(config.priority_method, PriorityMethod::ColumnNormalization);
        assert_eq!(config.criteria().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_criteria_rejected() {
        let config = WeightingConfig {
            default_criteria: vec![],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDefaultCriteria(_))
        ));
    }

    #[test]
    fn test_duplicate_criteria_rejected() {
        let config = WeightingConfig {
            default_criteria: vec!["A".to_string(), "A".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
