//! Dashboard configuration

use serde::Deserialize;

use crate::domain::dashboard::{DEFAULT_TREND_MONTHS, DEFAULT_WATCH_LIST_LIMIT};

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Maximum watch list entries
    #[serde(default = "default_watch_list_limit")]
    pub watch_list_limit: usize,

    /// Months covered by the trend views
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.watch_list_limit == 0 {
            return Err(ValidationError::InvalidWatchListLimit);
        }
        if self.trend_months == 0 {
            return Err(ValidationError::InvalidTrendMonths);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            watch_list_limit: default_watch_list_limit(),
            trend_months: default_trend_months(),
        }
    }
}

fn default_watch_list_limit() -> usize {
    DEFAULT_WATCH_LIST_LIMIT
}

fn default_trend_months() -> usize {
    DEFAULT_TREND_MONTHS
}
