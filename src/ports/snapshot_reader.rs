//! SnapshotReader port - Loads a complete workforce snapshot.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::foundation::{DomainError, EmployeeId, Period};
use crate::domain::scoring::Employee;
use crate::domain::weighting::Criterion;

/// Everything needed for one evaluation run.
///
/// `judgments` and `weights` are mutually exclusive; with neither, the
/// criteria are weighted equally.
#[derive(Debug, Clone)]
pub struct WorkforceSnapshot {
    pub criteria: Vec<Criterion>,
    /// Upper-triangle judgments, row-major.
    pub judgments: Option<Vec<f64>>,
    pub weights: Option<Vec<f64>>,
    /// Reporting period; defaults to the latest recorded period.
    pub period: Option<Period>,
    /// Estimated achievement rates (percent) for employees without a record.
    pub estimated_rates: HashMap<EmployeeId, f64>,
    pub employees: Vec<Employee>,
}

impl WorkforceSnapshot {
    /// Latest period recorded by any employee.
    pub fn latest_period(&self) -> Option<Period> {
        self.employees.iter().filter_map(|e| e.latest_period()).max()
    }
}

#[async_trait]
pub trait SnapshotReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<WorkforceSnapshot, DomainError>;
}
