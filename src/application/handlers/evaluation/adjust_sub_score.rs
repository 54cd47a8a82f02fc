//! AdjustSubScoreHandler - Command handler for a dated sub-score adjustment.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, EmployeeId, Period};
use crate::domain::scoring::ScoreChange;
use crate::ports::EmployeeRepository;

/// Command to add `change` to one criterion's sub-score from `effective_from` on.
#[derive(Debug, Clone)]
pub struct AdjustSubScoreCommand {
    pub employee_id: EmployeeId,
    pub criterion: String,
    pub change: f64,
    pub effective_from: Period,
    pub reason: String,
}

/// Error type for adjusting a sub-score.
#[derive(Debug, Clone)]
pub enum AdjustSubScoreError {
    EmployeeNotFound(EmployeeId),
    Domain(DomainError),
}

impl std::fmt::Display for AdjustSubScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustSubScoreError::EmployeeNotFound(id) => write!(f, "Employee not found: {}", id),
            AdjustSubScoreError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdjustSubScoreError {}

impl From<DomainError> for AdjustSubScoreError {
    fn from(err: DomainError) -> Self {
        AdjustSubScoreError::Domain(err)
    }
}

/// Handler for sub-score adjustments.
pub struct AdjustSubScoreHandler {
    employees: Arc<dyn EmployeeRepository>,
}

impl AdjustSubScoreHandler {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn handle(&self, cmd: AdjustSubScoreCommand) -> Result<ScoreChange, AdjustSubScoreError> {
        let mut employee = self
            .employees
            .find_by_id(&cmd.employee_id)
            .await?
            .ok_or(AdjustSubScoreError::EmployeeNotFound(cmd.employee_id))?;

        let change = employee
            .adjust_sub_score(cmd.criterion, cmd.change, cmd.effective_from, cmd.reason)
            .map_err(DomainError::from)?;
        self.employees.save(&employee).await?;

        info!(
            employee_id = %cmd.employee_id,
            criterion = %change.criterion,
            effective_from = %change.effective_from,
            new_score = change.new_score,
            "Adjusted sub-score"
        );

        Ok(change)
    }
}
