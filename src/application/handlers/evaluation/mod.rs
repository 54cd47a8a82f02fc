//! Evaluation command and query handlers.
//!
//! Handlers that store performance records and sub-score adjustments, and
//! evaluate employees against the active weight profile.

// Command handlers
mod adjust_sub_score;
mod record_performance;

// Query handlers
mod evaluate_employee;
mod evaluate_workforce;

pub use adjust_sub_score::{AdjustSubScoreCommand, AdjustSubScoreError, AdjustSubScoreHandler};
pub use evaluate_employee::{EvaluateEmployeeError, EvaluateEmployeeHandler, EvaluateEmployeeQuery};
pub use evaluate_workforce::{EvaluateWorkforceHandler, EvaluateWorkforceQuery, WorkforceReport};
pub use record_performance::{
    RecordPerformanceCommand, RecordPerformanceError, RecordPerformanceHandler,
    RecordPerformanceResult,
};
