//! EvaluateWorkforceHandler - Query handler for the workforce dashboard.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::dashboard::{
    EmployeeEvaluation, EmployeeEvaluator, EmployeeTrend, MonthlyTrend, WorkforceOverview,
    DEFAULT_TREND_MONTHS,
};
use crate::domain::foundation::{DomainError, EmployeeId, Period, Timestamp};
use crate::domain::weighting::WeightRegistry;
use crate::ports::EmployeeRepository;

use super::evaluate_employee::evaluate_one;

/// Query for every active employee.
#[derive(Debug, Clone, Default)]
pub struct EvaluateWorkforceQuery {
    /// Defaults to the latest period recorded by any employee, else the current month.
    pub period: Option<Period>,
    /// Achievement rates (percent) for employees without a record in the period.
    pub estimated_rates: HashMap<EmployeeId, f64>,
}

/// Evaluations plus the dashboard built from them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceReport {
    pub period: Period,
    pub profile_version: u64,
    pub evaluations: Vec<EmployeeEvaluation>,
    pub overview: WorkforceOverview,
    /// Workforce totals for the trailing months ending at `period`.
    pub monthly_trend: MonthlyTrend,
    /// One trend per evaluated employee, same months.
    pub employee_trends: Vec<EmployeeTrend>,
}

/// Handler for evaluating the whole workforce.
pub struct EvaluateWorkforceHandler {
    employees: Arc<dyn EmployeeRepository>,
    registry: Arc<WeightRegistry>,
    evaluator: Arc<EmployeeEvaluator>,
    watch_list_limit: usize,
    trend_months: usize,
}

impl EvaluateWorkforceHandler {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        registry: Arc<WeightRegistry>,
        evaluator: Arc<EmployeeEvaluator>,
        watch_list_limit: usize,
    ) -> Self {
        Self {
            employees,
            registry,
            evaluator,
            watch_list_limit,
            trend_months: DEFAULT_TREND_MONTHS,
        }
    }

    /// Overrides how many months the trend views cover.
    pub fn with_trend_months(mut self, months: usize) -> Self {
        self.trend_months = months;
        self
    }

    pub async fn handle(&self, query: EvaluateWorkforceQuery) -> Result<WorkforceReport, DomainError> {
        let employees = self.employees.list_active().await?;

        let period = query
            .period
            .or_else(|| employees.iter().filter_map(|e| e.latest_period()).max())
            .unwrap_or_else(|| Timestamp::now().period());

        // One snapshot for the whole run, even if weights change meanwhile.
        let profile = self.registry.active();

        let evaluations = employees
            .iter()
            .map(|employee| {
                let rate = query.estimated_rates.get(&employee.id()).copied();
                evaluate_one(&self.evaluator, &profile, employee, period, rate)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let red_hcroi = self.evaluator.classification_engine().thresholds().red_hcroi;
        let overview =
            WorkforceOverview::build(period, &evaluations, red_hcroi, self.watch_list_limit);

        let engine = self.evaluator.score_engine();
        let monthly_trend = MonthlyTrend::build(engine, &employees, period, self.trend_months);
        let employee_trends = employees
            .iter()
            .map(|employee| {
                EmployeeTrend::build(engine, &profile, employee, period, self.trend_months)
            })
            .collect();

        info!(
            period = %period,
            employees = evaluations.len(),
            red_zone = overview.summary.red_zone_count,
            profile_version = profile.version(),
            "Evaluated workforce"
        );

        Ok(WorkforceReport {
            period,
            profile_version: profile.version(),
            evaluations,
            overview,
            monthly_trend,
            employee_trends,
        })
    }
}
