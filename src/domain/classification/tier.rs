//! Risk tiers and performance levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk/opportunity tier assigned per employee per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    TopPerformer,
    WatchYellow,
    WatchOrange,
    RedWarning,
    RedCritical,
    Normal,
}

impl RiskTier {
    /// True for RED_WARNING and RED_CRITICAL.
    pub fn is_red_zone(&self) -> bool {
        matches!(self, RiskTier::RedWarning | RiskTier::RedCritical)
    }

    /// True for WATCH_YELLOW and WATCH_ORANGE.
    pub fn is_watch(&self) -> bool {
        matches!(self, RiskTier::WatchYellow | RiskTier::WatchOrange)
    }

    /// Sort key within a list; lower is more urgent.
    pub fn severity_rank(&self) -> u8 {
        match self {
            RiskTier::RedCritical => 0,
            RiskTier::RedWarning => 1,
            RiskTier::WatchOrange => 2,
            RiskTier::WatchYellow => 3,
            RiskTier::Normal => 4,
            RiskTier::TopPerformer => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::TopPerformer => "TOP_PERFORMER",
            RiskTier::WatchYellow => "WATCH_YELLOW",
            RiskTier::WatchOrange => "WATCH_ORANGE",
            RiskTier::RedWarning => "RED_WARNING",
            RiskTier::RedCritical => "RED_CRITICAL",
            RiskTier::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-level of a top performer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLevel {
    Outstanding,
    Excellent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_serialize_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&RiskTier::WatchOrange).unwrap(),
            "\"WATCH_ORANGE\""
        );
        assert_eq!(
            serde_json::to_string(&RiskTier::TopPerformer).unwrap(),
            "\"TOP_PERFORMER\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceLevel::Outstanding).unwrap(),
            "\"OUTSTANDING\""
        );
    }

    #[test]
    fn display_matches_serialized_name() {
        for tier in [
            RiskTier::TopPerformer,
            RiskTier::WatchYellow,
            RiskTier::WatchOrange,
            RiskTier::RedWarning,
            RiskTier::RedCritical,
            RiskTier::Normal,
        ] {
            assert_eq!(
                serde_json::to_string(&tier).unwrap(),
                format!("\"{}\"", tier)
            );
        }
    }

    #[test]
    fn zone_predicates() {
        assert!(RiskTier::RedCritical.is_red_zone());
        assert!(RiskTier::RedWarning.is_red_zone());
        assert!(!RiskTier::WatchOrange.is_red_zone());
        assert!(RiskTier::WatchYellow.is_watch());
        assert!(!RiskTier::Normal.is_watch());
    }

    #[test]
    fn outstanding_sorts_before_excellent() {
        assert!(PerformanceLevel::Outstanding < PerformanceLevel::Excellent);
        assert!(RiskTier::RedCritical.severity_rank() < RiskTier::RedWarning.severity_rank());
    }
}
