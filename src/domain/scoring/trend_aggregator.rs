//! Trend Aggregator - Period-over-period deltas and qualifying streaks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Period;

use super::{ScoreResult, ScoringError};

/// Predicate a period must satisfy to extend a streak.
///
/// Missing data never qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", content = "threshold", rename_all = "snake_case")]
pub enum QualifyingRule {
    HcroiAtLeast(f64),
    ScoreAtLeast(f64),
    /// Achievement rate of at least 100%.
    TargetAchieved,
}

impl Default for QualifyingRule {
    fn default() -> Self {
        QualifyingRule::TargetAchieved
    }
}

impl QualifyingRule {
    pub fn qualifies(&self, result: &ScoreResult) -> bool {
        match self {
            QualifyingRule::HcroiAtLeast(min) => result.hcroi.is_some_and(|h| h >= *min),
            QualifyingRule::ScoreAtLeast(min) => result.composite_score >= *min,
            QualifyingRule::TargetAchieved => result.achievement_rate.is_some_and(|r| r >= 100.0),
        }
    }
}

/// Trend of the latest period relative to the one before it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub latest_period: Option<Period>,
    pub score_delta: Option<f64>,
    pub hcroi_delta: Option<f64>,
    pub consecutive_qualifying_months: u32,
}

/// Aggregates a chronological series of score results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrendAggregator {
    rule: QualifyingRule,
}

impl TrendAggregator {
    pub fn new(rule: QualifyingRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> QualifyingRule {
        self.rule
    }

    /// Summarizes the series as of its last entry.
    ///
    /// # Errors
    /// `OutOfOrder` unless periods are strictly ascending.
    pub fn summarize(&self, results: &[ScoreResult]) -> Result<TrendSummary, ScoringError> {
        ensure_ascending(results)?;

        let Some(latest) = results.last() else {
            return Ok(TrendSummary::default());
        };
        let previous = results.len().checked_sub(2).map(|i| &results[i]);

        let score_delta = previous.map(|p| latest.composite_score - p.composite_score);
        let hcroi_delta = previous.and_then(|p| match (latest.hcroi, p.hcroi) {
            (Some(now), Some(before)) => Some(now - before),
            _ => None,
        });

        let consecutive_qualifying_months = results
            .iter()
            .rev()
            .take_while(|r| self.rule.qualifies(r))
            .count() as u32;

        Ok(TrendSummary {
            latest_period: Some(latest.period),
            score_delta,
            hcroi_delta,
            consecutive_qualifying_months,
        })
    }

    /// Streak length as of each entry in the series.
    pub fn streaks(&self, results: &[ScoreResult]) -> Result<Vec<u32>, ScoringError> {
        ensure_ascending(results)?;

        let mut streak = 0u32;
        Ok(results
            .iter()
            .map(|r| {
                streak = if self.rule.qualifies(r) { streak + 1 } else { 0 };
                streak
            })
            .collect())
    }
}

fn ensure_ascending(results: &[ScoreResult]) -> Result<(), ScoringError> {
    for pair in results.windows(2) {
        if pair[0].period >= pair[1].period {
            return Err(ScoringError::OutOfOrder {
                previous: pair[0].period,
                current: pair[1].period,
            });
        }
    }
    Ok(())
}
