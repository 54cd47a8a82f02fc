//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod evaluation;
pub mod weighting;

pub use evaluation::{
    AdjustSubScoreCommand, AdjustSubScoreError, AdjustSubScoreHandler, EvaluateEmployeeError, EvaluateEmployeeHandler, EvaluateEmployeeQuery,
    EvaluateWorkforceHandler, EvaluateWorkforceQuery, RecordPerformanceCommand,
    RecordPerformanceError, RecordPerformanceHandler, RecordPerformanceResult, WorkforceReport,
};
pub use weighting::{
    ActiveWeightsView, CriterionWeight, DeriveWeightsCommand, DeriveWeightsHandler,
    DeriveWeightsResult, GetActiveWeightsHandler, SetWeightsCommand, SetWeightsHandler,
    SetWeightsResult,
};
