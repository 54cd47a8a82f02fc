//! Dashboard module - Evaluations and the workforce views built from them.

pub mod break_even;
pub mod evaluation;
pub mod overview;
pub mod trend;
pub mod zones;

pub use break_even::BreakEvenStatus;
pub use evaluation::{EmployeeEvaluation, EmployeeEvaluator};
pub use overview::{WorkforceOverview, WorkforceSummary};
pub use trend::{
    trailing_periods, EmployeeTrend, EmployeeTrendPoint, MonthlyTrend, MonthlyTrendPoint,
    DEFAULT_TREND_MONTHS,
};
pub use zones::{
    red_zone, top_performers, watch_list, RedZoneEntry, TopPerformerEntry, WatchListEntry,
    DEFAULT_WATCH_LIST_LIMIT,
};
