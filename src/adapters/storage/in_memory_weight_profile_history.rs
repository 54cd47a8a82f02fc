//! In-Memory Weight Profile History Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::weighting::WeightProfile;
use crate::ports::WeightProfileHistory;

/// Append-only in-memory log of replaced profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeightProfileHistory {
    profiles: Arc<RwLock<Vec<WeightProfile>>>,
}

impl InMemoryWeightProfileHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl WeightProfileHistory for InMemoryWeightProfileHistory {
    async fn append(&self, profile: &WeightProfile) -> Result<(), DomainError> {
        self.profiles.write().await.push(profile.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<WeightProfile>, DomainError> {
        Ok(self.profiles.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weighting::Criterion;

    #[tokio::test]
    async fn test_append_keeps_order() {
        let history = InMemoryWeightProfileHistory::new();
        let criteria = Criterion::from_names(&["A", "B"]).unwrap();
        let first = WeightProfile::equal_weights(criteria.clone()).unwrap();
        let second = WeightProfile::manual(criteria, vec![0.7, 0.3]).unwrap();

        history.append(&first).await.unwrap();
        history.append(&second).await.unwrap();

        let listed = history.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), first.id());
        assert_eq!(listed[1].id(), second.id());
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let history = InMemoryWeightProfileHistory::new();
        assert!(history.is_empty().await);
        assert!(history.list().await.unwrap().is_empty());
    }
}
