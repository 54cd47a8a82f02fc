//! Storage Adapters
//!
//! Implementations of the storage ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryEmployeeRepository** - Employees in memory (CLI runs and tests)
//! - **InMemoryWeightProfileHistory** - Replaced weight profiles in memory
//! - **FileSnapshotReader** - Workforce snapshots from JSON or YAML files
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotReader, InMemoryEmployeeRepository};
//!
//! let snapshot = FileSnapshotReader::new().read(path).await?;
//! let employees = InMemoryEmployeeRepository::with_employees(snapshot.employees);
//! ```

mod file_snapshot_reader;
mod in_memory_employee_repository;
mod in_memory_weight_profile_history;

pub use file_snapshot_reader::FileSnapshotReader;
pub use in_memory_employee_repository::InMemoryEmployeeRepository;
pub use in_memory_weight_profile_history::InMemoryWeightProfileHistory;
