//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Cost multiplier must be a positive number")]
    InvalidCostMultiplier,

    #[error("Invalid classification thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid trend qualifying rule: {0}")]
    InvalidQualifyingRule(String),

    #[error("Invalid default criteria: {0}")]
    InvalidDefaultCriteria(String),

    #[error("Watch list limit must be at least 1")]
    InvalidWatchListLimit,

    #[error("Trend must cover at least 1 month")]
    InvalidTrendMonths,
}
