use serde::Serialize;

use crate::domain::foundation::Period;

use super::EmployeeEvaluation;

/// Company-wide progress toward sales target and break-even for a period.
///
/// Only employees with a recorded period contribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenStatus {
    pub period: Period,
    pub target_revenue: f64,
    pub current_revenue: f64,
    pub break_even_revenue: f64,
    /// `current / target × 100`; absent when the target total is 0.
    pub achievement_rate: Option<f64>,
    /// `current / break-even × 100`; absent when the break-even total is 0.
    pub break_even_achievement_rate: Option<f64>,
    pub remaining_to_target: f64,
    pub remaining_to_break_even: f64,
    pub target_achieved: bool,
    pub break_even_achieved: bool,
    pub contributing_employees: usize,
}

impl BreakEvenStatus {
    pub fn from_evaluations(period: Period, evaluations: &[EmployeeEvaluation]) -> Self {
        let mut target_revenue = 0.0;
        let mut current_revenue = 0.0;
        let mut break_even_revenue = 0.0;
        let mut contributing_employees = 0;

        for evaluation in evaluations.iter().filter(|e| e.period == period) {
            let (Some(target), Some(revenue)) =
                (evaluation.target_sales, evaluation.measured_revenue())
            else {
                continue;
            };
            target_revenue += target;
            current_revenue += revenue;
            break_even_revenue += evaluation.score.break_even_sales;
            contributing_employees += 1;
        }

        let rate = |denominator: f64| {
            (denominator > 0.0).then(|| current_revenue / denominator * 100.0)
        };
        let any = contributing_employees > 0;

        Self {
            period,
            target_revenue,
            current_revenue,
            break_even_revenue,
            achievement_rate: rate(target_revenue),
            break_even_achievement_rate: rate(break_even_revenue),
            remaining_to_target: target_revenue - current_revenue,
            remaining_to_break_even: break_even_revenue - current_revenue,
            target_achieved: any && current_revenue >= target_revenue,
            break_even_achieved: any && current_revenue >= break_even_revenue,
            contributing_employees,
        }
    }
}

#[cfg(test)]
#[path = "break_even_test.rs"]
mod break_even_test;
