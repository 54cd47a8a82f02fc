//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the engine.

mod errors;
mod ids;
mod period;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EmployeeId, WeightProfileId};
pub use period::Period;
pub use timestamp::Timestamp;
