//! Weighting-specific error types.
//!
//! | Error | ErrorCode |
//! |-------|-----------|
//! | InvalidInput | INVALID_INPUT |
//! | DegenerateWeight | DEGENERATE_WEIGHT |
//! | InvalidWeights | INVALID_WEIGHTS |
//! | InconsistentJudgments | INCONSISTENT_JUDGMENTS |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while building matrices, solving AHP or replacing weights.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightingError {
    /// Malformed matrix, wrong judgment count, non-positive judgment.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A priority weight collapsed to zero during the eigenvalue estimate.
    #[error("Degenerate weight for criterion at index {index}")]
    DegenerateWeight { index: usize },

    /// A manual weight vector failed validation.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Judgments were rejected by the configured consistency policy.
    #[error("Inconsistent judgments: CR {consistency_ratio:.4} >= {threshold}")]
    InconsistentJudgments {
        consistency_ratio: f64,
        threshold: f64,
    },
}

impl WeightingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WeightingError::InvalidInput(message.into())
    }

    pub fn invalid_weights(message: impl Into<String>) -> Self {
        WeightingError::InvalidWeights(message.into())
    }

    /// Returns the matching domain error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WeightingError::InvalidInput(_) => ErrorCode::InvalidInput,
            WeightingError::DegenerateWeight { .. } => ErrorCode::DegenerateWeight,
            WeightingError::InvalidWeights(_) => ErrorCode::InvalidWeights,
            WeightingError::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
        }
    }
}

impl From<ValidationError> for WeightingError {
    fn from(err: ValidationError) -> Self {
        WeightingError::InvalidInput(err.to_string())
    }
}

impl From<WeightingError> for DomainError {
    fn from(err: WeightingError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            WeightingError::DegenerateWeight { index } => {
                domain.with_detail("index", index.to_string())
            }
            WeightingError::InconsistentJudgments {
                consistency_ratio, ..
            } => domain.with_detail("consistency_ratio", format!("{:.6}", consistency_ratio)),
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_invalid_input_code() {
        let err: DomainError = WeightingError::invalid_input("bad matrix").into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "Invalid input: bad matrix");
    }

    #[test]
    fn degenerate_weight_carries_index_detail() {
        let err: DomainError = WeightingError::DegenerateWeight { index: 2 }.into();
        assert_eq!(err.code, ErrorCode::DegenerateWeight);
        assert_eq!(err.details.get("index"), Some(&"2".to_string()));
    }

    #[test]
    fn inconsistent_judgments_displays_ratio() {
        let err = WeightingError::InconsistentJudgments {
            consistency_ratio: 0.1234,
            threshold: 0.1,
        };
        assert_eq!(err.to_string(), "Inconsistent judgments: CR 0.1234 >= 0.1");
    }

    #[test]
    fn validation_error_becomes_invalid_input() {
        let err: WeightingError = ValidationError::empty_field("criterion.name").into();
        assert!(matches!(err, WeightingError::InvalidInput(_)));
    }
}
