//! RecordPerformanceHandler - Command handler for storing a monthly record.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, EmployeeId, Period};
use crate::domain::scoring::PerformanceRecord;
use crate::ports::EmployeeRepository;

/// Command to store one period's sales figures.
#[derive(Debug, Clone)]
pub struct RecordPerformanceCommand {
    pub employee_id: EmployeeId,
    pub period: Period,
    pub target_sales: f64,
    pub achieved_sales: f64,
    pub profit: f64,
}

/// Result of storing a record.
#[derive(Debug, Clone)]
pub struct RecordPerformanceResult {
    pub record: PerformanceRecord,
    /// The record previously stored for the same period.
    pub replaced: Option<PerformanceRecord>,
}

/// Error type for recording performance.
#[derive(Debug, Clone)]
pub enum RecordPerformanceError {
    EmployeeNotFound(EmployeeId),
    Domain(DomainError),
}

impl std::fmt::Display for RecordPerformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordPerformanceError::EmployeeNotFound(id) => write!(f, "Employee not found: {}", id),
            RecordPerformanceError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RecordPerformanceError {}

impl From<DomainError> for RecordPerformanceError {
    fn from(err: DomainError) -> Self {
        RecordPerformanceError::Domain(err)
    }
}

/// Handler for recording performance.
pub struct RecordPerformanceHandler {
    employees: Arc<dyn EmployeeRepository>,
}

impl RecordPerformanceHandler {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn handle(
        &self,
        cmd: RecordPerformanceCommand,
    ) -> Result<RecordPerformanceResult, RecordPerformanceError> {
        let record = PerformanceRecord::new(
            cmd.period,
            cmd.target_sales,
            cmd.achieved_sales,
            cmd.profit,
        )
        .map_err(DomainError::from)?;

        let mut employee = self
            .employees
            .find_by_id(&cmd.employee_id)
            .await?
            .ok_or(RecordPerformanceError::EmployeeNotFound(cmd.employee_id))?;

        let replaced = employee.record_performance(record.clone());
        self.employees.save(&employee).await?;

        match &replaced {
            Some(previous) => info!(
                employee_id = %cmd.employee_id,
                period = %cmd.period,
                previous_achieved = previous.achieved_sales,
                achieved = record.achieved_sales,
                "Overwrote performance record"
            ),
            None => debug!(
                employee_id = %cmd.employee_id,
                period = %cmd.period,
                "Recorded performance"
            ),
        }

        Ok(RecordPerformanceResult { record, replaced })
    }
}
