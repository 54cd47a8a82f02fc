//! WeightProfileHistory port - Append-only log of replaced weight profiles

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::weighting::WeightProfile;

/// Keeps every profile that was ever replaced in the registry.
#[async_trait]
pub trait WeightProfileHistory: Send + Sync {
    /// Append a replaced profile
    async fn append(&self, profile: &WeightProfile) -> Result<(), DomainError>;

    /// All appended profiles, oldest first
    async fn list(&self) -> Result<Vec<WeightProfile>, DomainError>;
}
