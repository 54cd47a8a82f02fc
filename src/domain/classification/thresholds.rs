//! Classification thresholds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Cut-offs used by the classification rules.
///
/// HCROI values are ratios, scores are on the 0..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Below this HCROI an employee is in the red zone.
    pub red_hcroi: f64,
    pub red_score: f64,
    /// Below this (with open alerts) an employee is critical.
    pub critical_hcroi: f64,
    pub critical_score: f64,
    /// At or above this an employee is a top performer.
    pub top_hcroi: f64,
    pub top_score: f64,
    /// Reaching either of these makes a top performer OUTSTANDING.
    pub outstanding_hcroi: f64,
    pub outstanding_score: f64,
    /// Width of the watch band above each red threshold.
    pub watch_hcroi_band: f64,
    pub watch_score_band: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            red_hcroi: 1.0,
            red_score: 700.0,
            critical_hcroi: 0.8,
            critical_score: 600.0,
            top_hcroi: 1.5,
            top_score: 900.0,
            outstanding_hcroi: 2.0,
            outstanding_score: 950.0,
            watch_hcroi_band: 0.2,
            watch_score_band: 50.0,
        }
    }
}

impl ClassificationThresholds {
    /// Upper edge (exclusive) of the HCROI watch band.
    pub fn watch_hcroi_ceiling(&self) -> f64 {
        self.red_hcroi + self.watch_hcroi_band
    }

    /// Upper edge (exclusive) of the score watch band.
    pub fn watch_score_ceiling(&self) -> f64 {
        self.red_score + self.watch_score_band
    }

    /// Checks every value is finite and non-negative and the cut-offs are
    /// ordered critical <= red < top <= outstanding.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = [
            ("red_hcroi", self.red_hcroi),
            ("red_score", self.red_score),
            ("critical_hcroi", self.critical_hcroi),
            ("critical_score", self.critical_score),
            ("top_hcroi", self.top_hcroi),
            ("top_score", self.top_score),
            ("outstanding_hcroi", self.outstanding_hcroi),
            ("outstanding_score", self.outstanding_score),
            ("watch_hcroi_band", self.watch_hcroi_band),
            ("watch_score_band", self.watch_score_band),
        ];
        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
            }
        }

        ordered("critical_hcroi", self.critical_hcroi, "red_hcroi", self.red_hcroi, false)?;
        ordered("red_hcroi", self.red_hcroi, "top_hcroi", self.top_hcroi, true)?;
        ordered("top_hcroi", self.top_hcroi, "outstanding_hcroi", self.outstanding_hcroi, false)?;
        ordered("critical_score", self.critical_score, "red_score", self.red_score, false)?;
        ordered("red_score", self.red_score, "top_score", self.top_score, true)?;
        ordered("top_score", self.top_score, "outstanding_score", self.outstanding_score, false)?;
        Ok(())
    }
}

fn ordered(
    low_name: &str,
    low: f64,
    high_name: &str,
    high: f64,
    strict: bool,
) -> Result<(), ValidationError> {
    let ok = if strict { low < high } else { low <= high };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            low_name,
            format!(
                "must be {} {} ({} vs {})",
                if strict { "below" } else { "at most" },
                high_name,
                low,
                high
            ),
        ))
    }
}
