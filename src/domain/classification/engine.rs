//! Classification Engine - Assigns a tier and reason from ordered rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{
    default_rules, ClassificationInput, ClassificationRule, ClassificationThresholds,
    PerformanceLevel, RiskTier,
};

/// Tier assignment for one employee and period. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub tier: RiskTier,
    pub performance_level: Option<PerformanceLevel>,
    pub rule: String,
    pub reason: String,
    pub unresolved_alert_count: u32,
}

/// Pure, idempotent classifier.
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    thresholds: ClassificationThresholds,
    rules: Vec<ClassificationRule>,
}

impl ClassificationEngine {
    /// Builds an engine with the default rule order.
    pub fn new(thresholds: ClassificationThresholds) -> Result<Self, ValidationError> {
        Self::with_rules(thresholds, default_rules())
    }

    /// Builds an engine with a custom rule list.
    pub fn with_rules(
        thresholds: ClassificationThresholds,
        rules: Vec<ClassificationRule>,
    ) -> Result<Self, ValidationError> {
        thresholds.validate()?;
        if rules.is_empty() {
            return Err(ValidationError::empty_field("classification.rules"));
        }
        Ok(Self { thresholds, rules })
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Applies the first matching rule.
    pub fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        let t = &self.thresholds;
        let matched = self.rules.iter().find(|rule| rule.matches(input, t));

        let (tier, rule, reason) = match matched {
            Some(rule) => (rule.tier, rule.name.to_string(), (rule.reason)(input, t)),
            None => (
                RiskTier::Normal,
                "none".to_string(),
                "no classification rule matched".to_string(),
            ),
        };

        let performance_level = match tier {
            RiskTier::TopPerformer => Some(self.performance_level(input)),
            _ => None,
        };

        ClassificationResult {
            tier,
            performance_level,
            rule,
            reason,
            unresolved_alert_count: input.unresolved_alert_count,
        }
    }

    /// OUTSTANDING when both top conditions hold or either metric reaches
    /// its outstanding threshold; otherwise EXCELLENT.
    pub fn performance_level(&self, input: &ClassificationInput) -> PerformanceLevel {
        let t = &self.thresholds;
        let high_hcroi = input.hcroi_at_least(t.top_hcroi);
        let high_score = input.composite_score >= t.top_score;

        if (high_hcroi && high_score)
            || input.hcroi_at_least(t.outstanding_hcroi)
            || input.composite_score >= t.outstanding_score
        {
            PerformanceLevel::Outstanding
        } else {
            PerformanceLevel::Excellent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ClassificationEngine {
        ClassificationEngine::new(ClassificationThresholds::default()).unwrap()
    }

    fn input(score: f64, hcroi: Option<f64>, alerts: u32) -> ClassificationInput {
        ClassificationInput {
            composite_score: score,
            hcroi,
            unresolved_alert_count: alerts,
            ..Default::default()
        }
    }

    #[test]
    fn low_metrics_with_alerts_are_critical() {
        let result = engine().classify(&input(650.0, Some(0.7), 2));
        assert_eq!(result.tier, RiskTier::RedCritical);
        assert_eq!(result.rule, "red_critical");
        assert_eq!(result.unresolved_alert_count, 2);
        assert!(result.reason.contains("0.70"));
        assert!(result.reason.contains("2 unresolved"));
    }

    #[test]
    fn low_metrics_without_alerts_are_warning() {
        let result = engine().classify(&input(650.0, Some(0.7), 0));
        assert_eq!(result.tier, RiskTier::RedWarning);
    }

    #[test]
    fn below_red_but_above_critical_with_alerts_is_warning() {
        let result = engine().classify(&input(800.0, Some(0.9), 3));
        assert_eq!(result.tier, RiskTier::RedWarning);
    }

    #[test]
    fn red_takes_priority_over_top() {
        let result = engine().classify(&input(950.0, Some(0.5), 0));
        assert_eq!(result.tier, RiskTier::RedWarning);
    }

    #[test]
    fn top_performer_levels() {
        let e = engine();

        let excellent = e.classify(&input(800.0, Some(1.6), 0));
        assert_eq!(excellent.tier, RiskTier::TopPerformer);
        assert_eq!(excellent.performance_level, Some(PerformanceLevel::Excellent));

        let both = e.classify(&input(910.0, Some(1.6), 0));
        assert_eq!(both.performance_level, Some(PerformanceLevel::Outstanding));

        let high_hcroi = e.classify(&input(800.0, Some(2.1), 0));
        assert_eq!(high_hcroi.performance_level, Some(PerformanceLevel::Outstanding));

        let high_score = e.classify(&input(960.0, None, 0));
        assert_eq!(high_score.tier, RiskTier::TopPerformer);
        assert_eq!(high_score.performance_level, Some(PerformanceLevel::Outstanding));
    }

    #[test]
    fn declining_in_band_is_orange() {
        let mut i = input(800.0, Some(1.1), 0);
        i.hcroi_delta = Some(-0.1);
        let result = engine().classify(&i);
        assert_eq!(result.tier, RiskTier::WatchOrange);
        assert!(result.reason.contains("declining"));
    }

    #[test]
    fn score_decline_in_score_band_is_orange() {
        let mut i = input(720.0, None, 0);
        i.score_delta = Some(-15.0);
        assert_eq!(engine().classify(&i).tier, RiskTier::WatchOrange);
    }

    #[test]
    fn stable_or_rising_in_band_is_yellow() {
        let mut i = input(800.0, Some(1.1), 0);
        assert_eq!(engine().classify(&i).tier, RiskTier::WatchYellow);

        i.hcroi_delta = Some(0.05);
        i.score_delta = Some(10.0);
        assert_eq!(engine().classify(&i).tier, RiskTier::WatchYellow);
    }

    #[test]
    fn declining_outside_band_is_normal() {
        let mut i = input(800.0, Some(1.3), 0);
        i.hcroi_delta = Some(-0.3);
        let result = engine().classify(&i);
        assert_eq!(result.tier, RiskTier::Normal);
        assert_eq!(result.performance_level, None);
    }

    #[test]
    fn missing_hcroi_falls_back_to_score_rules() {
        assert_eq!(engine().classify(&input(800.0, None, 5)).tier, RiskTier::Normal);
        assert_eq!(engine().classify(&input(500.0, None, 1)).tier, RiskTier::RedCritical);
    }

    #[test]
    fn classification_is_idempotent() {
        let e = engine();
        let mut i = input(730.0, Some(1.05), 1);
        i.score_delta = Some(-4.0);

        let first = e.classify(&i);
        let second = e.classify(&i);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_rule_list_is_honoured() {
        let rules = vec![ClassificationRule {
            name: "everyone_top",
            tier: RiskTier::TopPerformer,
            predicate: |_, _| true,
            reason: |_, _| "all good".to_string(),
        }];
        let e = ClassificationEngine::with_rules(ClassificationThresholds::default(), rules).unwrap();
        let result = e.classify(&input(0.0, Some(0.0), 9));
        assert_eq!(result.tier, RiskTier::TopPerformer);
        assert_eq!(result.reason, "all good");
    }

    #[test]
    fn unmatched_custom_list_defaults_to_normal() {
        let rules = vec![ClassificationRule {
            name: "never",
            tier: RiskTier::RedCritical,
            predicate: |_, _| false,
            reason: |_, _| String::new(),
        }];
        let e = ClassificationEngine::with_rules(ClassificationThresholds::default(), rules).unwrap();
        assert_eq!(e.classify(&input(0.0, None, 0)).tier, RiskTier::Normal);
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let t = ClassificationThresholds {
            top_hcroi: 0.5,
            ..Default::default()
        };
        assert!(ClassificationEngine::new(t).is_err());
        assert!(ClassificationEngine::with_rules(ClassificationThresholds::default(), vec![]).is_err());
    }

    #[test]
    fn result_serializes_tier_name() {
        let json = serde_json::to_value(engine().classify(&input(960.0, Some(2.0), 0))).unwrap();
        assert_eq!(json["tier"], "TOP_PERFORMER");
        assert_eq!(json["performanceLevel"], "OUTSTANDING");
        assert!(json.get("unresolvedAlertCount").is_some());
    }
}
