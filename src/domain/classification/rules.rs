//! Ordered classification rules.
//!
//! Each rule is data: a name, the tier it assigns, a predicate and a reason
//! builder. The engine walks the list and the first matching rule wins.

use std::fmt;

use crate::domain::scoring::{ScoreResult, TrendSummary};

use super::{ClassificationThresholds, RiskTier};

/// Metrics a rule can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassificationInput {
    pub composite_score: f64,
    pub hcroi: Option<f64>,
    pub score_delta: Option<f64>,
    pub hcroi_delta: Option<f64>,
    pub unresolved_alert_count: u32,
}

impl ClassificationInput {
    pub fn new(score: &ScoreResult, trend: &TrendSummary, unresolved_alert_count: u32) -> Self {
        Self {
            composite_score: score.composite_score,
            hcroi: score.hcroi,
            score_delta: trend.score_delta,
            hcroi_delta: trend.hcroi_delta,
            unresolved_alert_count,
        }
    }

    /// Missing HCROI is never below anything.
    pub fn hcroi_below(&self, threshold: f64) -> bool {
        self.hcroi.is_some_and(|h| h < threshold)
    }

    /// Missing HCROI never reaches anything.
    pub fn hcroi_at_least(&self, threshold: f64) -> bool {
        self.hcroi.is_some_and(|h| h >= threshold)
    }

    pub fn is_declining(&self) -> bool {
        self.hcroi_delta.is_some_and(|d| d < 0.0) || self.score_delta.is_some_and(|d| d < 0.0)
    }

    pub fn in_watch_band(&self, t: &ClassificationThresholds) -> bool {
        let hcroi_in_band = self.hcroi_at_least(t.red_hcroi) && self.hcroi_below(t.watch_hcroi_ceiling());
        let score_in_band =
            self.composite_score >= t.red_score && self.composite_score < t.watch_score_ceiling();
        hcroi_in_band || score_in_band
    }
}

pub type RulePredicate = fn(&ClassificationInput, &ClassificationThresholds) -> bool;
pub type RuleReason = fn(&ClassificationInput, &ClassificationThresholds) -> String;

/// One entry of the ordered rule list.
#[derive(Clone)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub tier: RiskTier,
    pub predicate: RulePredicate,
    pub reason: RuleReason,
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

impl ClassificationRule {
    pub fn matches(&self, input: &ClassificationInput, thresholds: &ClassificationThresholds) -> bool {
        (self.predicate)(input, thresholds)
    }
}

/// The standard rule order: critical, warning, top, orange, yellow, normal.
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule {
            name: "red_critical",
            tier: RiskTier::RedCritical,
            predicate: |i, t| {
                (i.hcroi_below(t.critical_hcroi) || i.composite_score < t.critical_score)
                    && i.unresolved_alert_count > 0
            },
            reason: |i, t| {
                format!(
                    "{} with {} unresolved alert(s)",
                    shortfall(i, t.critical_hcroi, t.critical_score, "critical"),
                    i.unresolved_alert_count
                )
            },
        },
        ClassificationRule {
            name: "red_warning",
            tier: RiskTier::RedWarning,
            predicate: |i, t| i.hcroi_below(t.red_hcroi) || i.composite_score < t.red_score,
            reason: |i, t| shortfall(i, t.red_hcroi, t.red_score, "red"),
        },
        ClassificationRule {
            name: "top_performer",
            tier: RiskTier::TopPerformer,
            predicate: |i, t| i.hcroi_at_least(t.top_hcroi) || i.composite_score >= t.top_score,
            reason: |i, t| {
                let mut parts = Vec::new();
                if i.hcroi_at_least(t.top_hcroi) {
                    parts.push(format!("HCROI {} >= {:.2}", fmt_hcroi(i.hcroi), t.top_hcroi));
                }
                if i.composite_score >= t.top_score {
                    parts.push(format!("score {:.1} >= {:.1}", i.composite_score, t.top_score));
                }
                parts.join(" and ")
            },
        },
        ClassificationRule {
            name: "watch_orange",
            tier: RiskTier::WatchOrange,
            predicate: |i, t| i.in_watch_band(t) && i.is_declining(),
            reason: |i, t| format!("{}, declining ({})", band_reason(i, t), deltas(i)),
        },
        ClassificationRule {
            name: "watch_yellow",
            tier: RiskTier::WatchYellow,
            predicate: |i, t| i.in_watch_band(t),
            reason: |i, t| format!("{}, trend stable or unknown", band_reason(i, t)),
        },
        ClassificationRule {
            name: "normal",
            tier: RiskTier::Normal,
            predicate: |_, _| true,
            reason: |i, _| {
                format!(
                    "HCROI {}, score {:.1} within normal range",
                    fmt_hcroi(i.hcroi),
                    i.composite_score
                )
            },
        },
    ]
}

fn fmt_hcroi(hcroi: Option<f64>) -> String {
    match hcroi {
        Some(h) => format!("{:.2}", h),
        None => "n/a".to_string(),
    }
}

fn shortfall(i: &ClassificationInput, hcroi_min: f64, score_min: f64, label: &str) -> String {
    let mut parts = Vec::new();
    if i.hcroi_below(hcroi_min) {
        parts.push(format!(
            "HCROI {} < {} {:.2}",
            fmt_hcroi(i.hcroi),
            label,
            hcroi_min
        ));
    }
    if i.composite_score < score_min {
        parts.push(format!(
            "score {:.1} < {} {:.1}",
            i.composite_score, label, score_min
        ));
    }
    parts.join(" and ")
}

fn band_reason(i: &ClassificationInput, t: &ClassificationThresholds) -> String {
    let mut parts = Vec::new();
    if i.hcroi_at_least(t.red_hcroi) && i.hcroi_below(t.watch_hcroi_ceiling()) {
        parts.push(format!(
            "HCROI {} within {:.2} of red {:.2}",
            fmt_hcroi(i.hcroi),
            t.watch_hcroi_band,
            t.red_hcroi
        ));
    }
    if i.composite_score >= t.red_score && i.composite_score < t.watch_score_ceiling() {
        parts.push(format!(
            "score {:.1} within {:.1} of red {:.1}",
            i.composite_score, t.watch_score_band, t.red_score
        ));
    }
    parts.join(" and ")
}

fn deltas(i: &ClassificationInput) -> String {
    let mut parts = Vec::new();
    if let Some(d) = i.hcroi_delta {
        parts.push(format!("HCROI {:+.2}", d));
    }
    if let Some(d) = i.score_delta {
        parts.push(format!("score {:+.1}", d));
    }
    parts.join(", ")
}
