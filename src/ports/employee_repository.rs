//! EmployeeRepository port for employee persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::scoring::Employee;

/// Repository for the employee aggregate.
///
/// Saving an employee replaces the stored aggregate as a whole, including
/// its performance records and alerts.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// All active employees, ordered by ID
    async fn list_active(&self) -> Result<Vec<Employee>, DomainError>;

    /// Insert or replace an employee
    async fn save(&self, employee: &Employee) -> Result<(), DomainError>;
}
