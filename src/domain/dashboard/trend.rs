//! Month-by-month trend views for one employee and for the workforce.

use serde::Serialize;

use crate::domain::foundation::{EmployeeId, Period};
use crate::domain::scoring::{Employee, ScoreEngine};
use crate::domain::weighting::WeightProfile;

/// Default number of months covered by a trend, ending at the report period.
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// The `months` calendar months ending at `through`, oldest first.
pub fn trailing_periods(through: Period, months: usize) -> Vec<Period> {
    let mut periods = Vec::with_capacity(months);
    let mut period = through;
    for _ in 0..months {
        periods.push(period);
        period = period.previous();
    }
    periods.reverse();
    periods
}

/// One month of an employee's trend.
///
/// Revenue, HCROI and achievement rate are 0 for a month without a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTrendPoint {
    pub period: Period,
    pub recorded: bool,
    pub revenue: f64,
    /// Composite score from the sub-scores in effect that month.
    pub score: f64,
    pub hcroi: f64,
    pub achievement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTrend {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub points: Vec<EmployeeTrendPoint>,
}

impl EmployeeTrend {
    pub fn build(
        engine: &ScoreEngine,
        profile: &WeightProfile,
        employee: &Employee,
        through: Period,
        months: usize,
    ) -> Self {
        let points = trailing_periods(through, months)
            .into_iter()
            .map(|period| {
                let result = engine.score(profile, employee, period);
                EmployeeTrendPoint {
                    period,
                    recorded: employee.record_for(period).is_some(),
                    revenue: result.current_revenue.unwrap_or(0.0),
                    score: result.composite_score,
                    hcroi: result.hcroi.unwrap_or(0.0),
                    achievement_rate: result.achievement_rate.unwrap_or(0.0),
                }
            })
            .collect();

        Self {
            employee_id: employee.id(),
            employee_name: employee.name().to_string(),
            points,
        }
    }
}

/// Workforce totals for one month.
///
/// Only employees with a record for the month contribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub period: Period,
    pub total_revenue: f64,
    /// Sum of break-even sales (monthly salary × cost multiplier).
    pub total_labor_cost: f64,
    /// `None` when nobody contributed.
    pub average_hcroi: Option<f64>,
    pub employee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub points: Vec<MonthlyTrendPoint>,
}

impl MonthlyTrend {
    pub fn build(engine: &ScoreEngine, employees: &[Employee], through: Period, months: usize) -> Self {
        let points = trailing_periods(through, months)
            .into_iter()
            .map(|period| {
                let mut total_revenue = 0.0;
                let mut total_labor_cost = 0.0;
                let mut hcroi_sum = 0.0;
                let mut employee_count = 0;

                for employee in employees {
                    let Some(record) = employee.record_for(period) else {
                        continue;
                    };
                    let cost = engine.break_even_sales(employee.financials().current_salary());
                    total_revenue += record.achieved_sales;
                    total_labor_cost += cost;
                    hcroi_sum += ScoreEngine::hcroi(record.achieved_sales, cost);
                    employee_count += 1;
                }

                MonthlyTrendPoint {
                    period,
                    total_revenue,
                    total_labor_cost,
                    average_hcroi: (employee_count > 0).then(|| hcroi_sum / employee_count as f64),
                    employee_count,
                }
            })
            .collect();

        Self { points }
    }
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod trend_test;
