//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Period};

/// Errors raised by trend aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Score results were not strictly ascending by period.
    #[error("Invalid input: period {current} does not follow {previous}")]
    OutOfOrder { previous: Period, current: Period },
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        match &err {
            ScoringError::OutOfOrder { previous, current } => {
                DomainError::new(ErrorCode::InvalidInput, err.to_string())
                    .with_detail("previous", previous.to_string())
                    .with_detail("current", current.to_string())
            }
        }
    }
}
