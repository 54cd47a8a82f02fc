//! Classification module - Risk/opportunity tiers from scores and trends.

mod engine;
mod rules;
mod thresholds;
mod tier;

pub use engine::{ClassificationEngine, ClassificationResult};
pub use rules::{default_rules, ClassificationInput, ClassificationRule, RulePredicate, RuleReason};
pub use thresholds::ClassificationThresholds;
pub use tier::{PerformanceLevel, RiskTier};
