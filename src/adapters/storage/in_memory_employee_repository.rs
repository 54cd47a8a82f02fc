//! In-Memory Employee Repository Adapter
//!
//! Stores employee aggregates in memory. Used by the CLI for a single
//! snapshot run and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::scoring::Employee;
use crate::ports::EmployeeRepository;

/// In-memory storage for employees
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-loaded with employees
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let map = employees.into_iter().map(|e| (e.id(), e)).collect();
        Self {
            employees: Arc::new(RwLock::new(map)),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.employees.write().await.clear();
    }

    /// Get the number of stored employees
    pub async fn count(&self) -> usize {
        self.employees.read().await.len()
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.get(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().await;
        let mut active: Vec<Employee> =
            employees.values().filter(|e| e.is_active()).cloned().collect();
        active.sort_by_key(|e| e.id());
        Ok(active)
    }

    async fn save(&self, employee: &Employee) -> Result<(), DomainError> {
        let mut employees = self.employees.write().await;
        employees.insert(employee.id(), employee.clone());
        Ok(())
    }
}
