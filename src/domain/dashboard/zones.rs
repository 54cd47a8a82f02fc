//! Red zone, top performer and watch list views.

use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::classification::{PerformanceLevel, RiskTier};
use crate::domain::foundation::EmployeeId;

use super::EmployeeEvaluation;

/// Default number of watch list entries returned.
pub const DEFAULT_WATCH_LIST_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedZoneEntry {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub tier: RiskTier,
    pub composite_score: f64,
    pub hcroi: Option<f64>,
    pub achievement_rate: Option<f64>,
    pub reason: String,
    pub unresolved_alert_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformerEntry {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub performance_level: PerformanceLevel,
    pub composite_score: f64,
    pub hcroi: Option<f64>,
    pub achievement_rate: Option<f64>,
    pub reason: String,
    pub consecutive_qualifying_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchListEntry {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub tier: RiskTier,
    pub composite_score: f64,
    pub hcroi: Option<f64>,
    pub hcroi_delta: Option<f64>,
    pub score_delta: Option<f64>,
    /// `hcroi - red_hcroi`; absent without an HCROI.
    pub distance_to_red: Option<f64>,
    pub reason: String,
}

/// RED_CRITICAL first, then ascending composite score.
pub fn red_zone(evaluations: &[EmployeeEvaluation]) -> Vec<RedZoneEntry> {
    let mut entries: Vec<RedZoneEntry> = evaluations
        .iter()
        .filter(|e| e.classification.tier.is_red_zone())
        .map(|e| RedZoneEntry {
            employee_id: e.employee_id,
            employee_name: e.employee_name.clone(),
            tier: e.classification.tier,
            composite_score: e.score.composite_score,
            hcroi: e.score.hcroi,
            achievement_rate: e.score.achievement_rate,
            reason: e.classification.reason.clone(),
            unresolved_alert_count: e.classification.unresolved_alert_count,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.tier
            .severity_rank()
            .cmp(&b.tier.severity_rank())
            .then_with(|| a.composite_score.total_cmp(&b.composite_score))
    });
    entries
}

/// OUTSTANDING first, then descending HCROI (missing HCROI last).
pub fn top_performers(evaluations: &[EmployeeEvaluation]) -> Vec<TopPerformerEntry> {
    let mut entries: Vec<TopPerformerEntry> = evaluations
        .iter()
        .filter(|e| e.classification.tier == RiskTier::TopPerformer)
        .map(|e| TopPerformerEntry {
            employee_id: e.employee_id,
            employee_name: e.employee_name.clone(),
            performance_level: e
                .classification
                .performance_level
                .unwrap_or(PerformanceLevel::Excellent),
            composite_score: e.score.composite_score,
            hcroi: e.score.hcroi,
            achievement_rate: e.score.achievement_rate,
            reason: e.classification.reason.clone(),
            consecutive_qualifying_months: e.trend.consecutive_qualifying_months,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.performance_level
            .cmp(&b.performance_level)
            .then_with(|| descending_some_first(a.hcroi, b.hcroi))
    });
    entries
}

/// Watch tiers ordered by distance to the red HCROI threshold, closest
/// first, truncated to `limit`.
pub fn watch_list(
    evaluations: &[EmployeeEvaluation],
    red_hcroi: f64,
    limit: usize,
) -> Vec<WatchListEntry> {
    let mut entries: Vec<WatchListEntry> = evaluations
        .iter()
        .filter(|e| e.classification.tier.is_watch())
        .map(|e| WatchListEntry {
            employee_id: e.employee_id,
            employee_name: e.employee_name.clone(),
            tier: e.classification.tier,
            composite_score: e.score.composite_score,
            hcroi: e.score.hcroi,
            hcroi_delta: e.trend.hcroi_delta,
            score_delta: e.trend.score_delta,
            distance_to_red: e.score.hcroi.map(|h| h - red_hcroi),
            reason: e.classification.reason.clone(),
        })
        .collect();

    entries.sort_by(|a, b| ascending_some_first(a.distance_to_red, b.distance_to_red));
    entries.truncate(limit);
    entries
}

fn ascending_some_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending_some_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "zones_test.rs"]
mod zones_test;
