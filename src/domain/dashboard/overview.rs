use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::Period;

use super::{
    red_zone, top_performers, watch_list, BreakEvenStatus, EmployeeEvaluation, RedZoneEntry,
    TopPerformerEntry, WatchListEntry,
};

/// Head-count and average metrics for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceSummary {
    pub employee_count: usize,
    /// Mean over employees that have an HCROI.
    pub average_hcroi: Option<f64>,
    pub average_score: Option<f64>,
    /// RED_WARNING plus RED_CRITICAL.
    pub red_zone_count: usize,
    pub unresolved_alert_count: u64,
    /// Sum of recorded (not estimated) revenue.
    pub total_revenue: f64,
}

impl WorkforceSummary {
    pub fn from_evaluations(evaluations: &[EmployeeEvaluation]) -> Self {
        let hcrois: Vec<f64> = evaluations.iter().filter_map(|e| e.score.hcroi).collect();
        let scores: Vec<f64> = evaluations.iter().map(|e| e.score.composite_score).collect();

        Self {
            employee_count: evaluations.len(),
            average_hcroi: mean(&hcrois),
            average_score: mean(&scores),
            red_zone_count: evaluations
                .iter()
                .filter(|e| e.classification.tier.is_red_zone())
                .count(),
            unresolved_alert_count: evaluations
                .iter()
                .map(|e| u64::from(e.classification.unresolved_alert_count))
                .sum(),
            total_revenue: evaluations.iter().filter_map(|e| e.measured_revenue()).sum(),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// The workforce dashboard - every view for one reporting period.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceOverview {
    pub period: Period,
    pub summary: WorkforceSummary,
    pub red_zone: Vec<RedZoneEntry>,
    pub top_performers: Vec<TopPerformerEntry>,
    pub watch_list: Vec<WatchListEntry>,
    pub break_even: BreakEvenStatus,
    pub generated_at: DateTime<Utc>,
}

impl WorkforceOverview {
    /// Builds all views from evaluations of `period`.
    pub fn build(
        period: Period,
        evaluations: &[EmployeeEvaluation],
        red_hcroi: f64,
        watch_list_limit: usize,
    ) -> Self {
        Self {
            period,
            summary: WorkforceSummary::from_evaluations(evaluations),
            red_zone: red_zone(evaluations),
            top_performers: top_performers(evaluations),
            watch_list: watch_list(evaluations, red_hcroi, watch_list_limit),
            break_even: BreakEvenStatus::from_evaluations(period, evaluations),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
