//! Scoring configuration

use serde::Deserialize;

use crate::domain::scoring::ScoreEngine;

use super::error::ValidationError;

/// Multiplier applied when nothing is configured.
pub const DEFAULT_COST_MULTIPLIER: f64 = 1.5;

/// Score engine parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Multiplier applied to monthly salary to get break-even sales
    #[serde(default = "default_cost_multiplier")]
    pub cost_multiplier: f64,
}

impl ScoringConfig {
    /// Build the score engine
    pub fn engine(&self) -> Result<ScoreEngine, ValidationError> {
        ScoreEngine::new(self.cost_multiplier).map_err(|_| ValidationError::InvalidCostMultiplier)
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine().map(|_| ())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cost_multiplier: default_cost_multiplier(),
        }
    }
}

fn default_cost_multiplier() -> f64 {
    DEFAULT_COST_MULTIPLIER
}
