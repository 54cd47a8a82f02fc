//! Scoring module - Per-period employee scores and their trends.

mod employee;
mod errors;
mod score_engine;
mod trend_aggregator;

pub use employee::{
    Alert, AlertType, Employee, EmployeeFinancials, PerformanceRecord, ScoreChange,
    MAX_SUB_SCORE,
};
pub use errors::ScoringError;
pub use score_engine::{RevenueSource, ScoreEngine, ScoreResult};
pub use trend_aggregator::{QualifyingRule, TrendAggregator, TrendSummary};
