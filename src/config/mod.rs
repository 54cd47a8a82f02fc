//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional `hcroi-engine.{yaml,toml,json}`
//! file in the working directory, overridden by environment variables with
//! the `HCROI_ENGINE` prefix. Nested values use double underscores.
//!
//! # Example
//!
//! ```no_run
//! use hcroi_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Cost multiplier: {}", config.scoring.cost_multiplier);
//! ```

mod dashboard;
mod error;
mod runtime;
mod scoring;
mod trend;
mod weighting;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use runtime::{Environment, RuntimeConfig};
pub use scoring::ScoringConfig;
pub use trend::TrendConfig;
pub use weighting::WeightingConfig;

use serde::Deserialize;

use crate::domain::classification::{ClassificationEngine, ClassificationThresholds};
use crate::domain::dashboard::EmployeeEvaluator;
use crate::domain::scoring::TrendAggregator;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Score engine parameters
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Classification thresholds
    #[serde(default)]
    pub classification: ClassificationThresholds,

    /// Streak qualifying rule
    #[serde(default)]
    pub trend: TrendConfig,

    /// Weight derivation and bootstrap criteria
    #[serde(default)]
    pub weighting: WeightingConfig,

    /// Dashboard views
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from the optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `hcroi-engine.{yaml,toml,json}` if present
    /// 3. Reads environment variables with `HCROI_ENGINE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `HCROI_ENGINE__SCORING__COST_MULTIPLIER=1.5` -> `scoring.cost_multiplier = 1.5`
    /// - `HCROI_ENGINE__WEIGHTING__DEFAULT_CRITERIA=Sales,Attendance` -> a list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("hcroi-engine").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("HCROI_ENGINE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("weighting.default_criteria")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.scoring.validate()?;
        self.classification
            .validate()
            .map_err(|e| ValidationError::InvalidThresholds(e.to_string()))?;
        self.trend.validate()?;
        self.weighting.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }

    /// Build the evaluator from the scoring, trend and classification sections
    pub fn evaluator(&self) -> Result<EmployeeEvaluator, ValidationError> {
        let classification = ClassificationEngine::new(self.classification)
            .map_err(|e| ValidationError::InvalidThresholds(e.to_string()))?;
        Ok(EmployeeEvaluator::new(
            self.scoring.engine()?,
            TrendAggregator::new(self.trend.rule()?),
            classification,
        ))
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
