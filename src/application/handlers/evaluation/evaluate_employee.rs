//! EvaluateEmployeeHandler - Query handler for one employee's evaluation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::dashboard::{EmployeeEvaluation, EmployeeEvaluator};
use crate::domain::foundation::{DomainError, EmployeeId, Period, Timestamp};
use crate::domain::scoring::Employee;
use crate::domain::weighting::{WeightProfile, WeightRegistry};
use crate::ports::EmployeeRepository;

/// Query for a single employee.
#[derive(Debug, Clone)]
pub struct EvaluateEmployeeQuery {
    pub employee_id: EmployeeId,
    /// Defaults to the employee's latest recorded period, else the current month.
    pub period: Option<Period>,
    /// Achievement rate (percent) used when the period has no record.
    pub estimated_rate: Option<f64>,
}

/// Error type for evaluating an employee.
#[derive(Debug, Clone)]
pub enum EvaluateEmployeeError {
    EmployeeNotFound(EmployeeId),
    Domain(DomainError),
}

impl std::fmt::Display for EvaluateEmployeeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluateEmployeeError::EmployeeNotFound(id) => write!(f, "Employee not found: {}", id),
            EvaluateEmployeeError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EvaluateEmployeeError {}

impl From<DomainError> for EvaluateEmployeeError {
    fn from(err: DomainError) -> Self {
        EvaluateEmployeeError::Domain(err)
    }
}

/// Handler for evaluating one employee against the active weights.
pub struct EvaluateEmployeeHandler {
    employees: Arc<dyn EmployeeRepository>,
    registry: Arc<WeightRegistry>,
    evaluator: Arc<EmployeeEvaluator>,
}

impl EvaluateEmployeeHandler {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        registry: Arc<WeightRegistry>,
        evaluator: Arc<EmployeeEvaluator>,
    ) -> Self {
        Self {
            employees,
            registry,
            evaluator,
        }
    }

    pub async fn handle(
        &self,
        query: EvaluateEmployeeQuery,
    ) -> Result<EmployeeEvaluation, EvaluateEmployeeError> {
        let employee = self
            .employees
            .find_by_id(&query.employee_id)
            .await?
            .ok_or(EvaluateEmployeeError::EmployeeNotFound(query.employee_id))?;

        let period = query
            .period
            .or_else(|| employee.latest_period())
            .unwrap_or_else(|| Timestamp::now().period());

        let profile = self.registry.active();
        let evaluation = evaluate_one(&self.evaluator, &profile, &employee, period, query.estimated_rate)?;
        Ok(evaluation)
    }
}

/// Evaluates one employee and logs the outcome.
pub(super) fn evaluate_one(
    evaluator: &EmployeeEvaluator,
    profile: &WeightProfile,
    employee: &Employee,
    period: Period,
    estimated_rate: Option<f64>,
) -> Result<EmployeeEvaluation, DomainError> {
    let evaluation = evaluator.evaluate(profile, employee, period, estimated_rate)?;

    if !evaluation.score.missing_criteria.is_empty() {
        debug!(
            employee_id = %evaluation.employee_id,
            missing = ?evaluation.score.missing_criteria,
            "Missing sub-scores counted as zero"
        );
    }
    debug!(
        employee_id = %evaluation.employee_id,
        period = %period,
        profile_version = profile.version(),
        tier = %evaluation.classification.tier,
        rule = %evaluation.classification.rule,
        "Evaluated employee"
    );

    Ok(evaluation)
}
