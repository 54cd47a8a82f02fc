//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EmployeeRepository` - Employee aggregates with their records and alerts
//! - `WeightProfileHistory` - Profiles replaced in the weight registry
//! - `SnapshotReader` - Workforce snapshots loaded from files

mod employee_repository;
mod snapshot_reader;
mod weight_profile_history;

pub use employee_repository::EmployeeRepository;
pub use snapshot_reader::{SnapshotReader, WorkforceSnapshot};
pub use weight_profile_history::WeightProfileHistory;
