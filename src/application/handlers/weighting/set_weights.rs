//! SetWeightsHandler - Command handler for activating explicit weights.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::weighting::{Criterion, WeightProfile, WeightRegistry};
use crate::ports::WeightProfileHistory;

/// Command to activate a manual weight vector.
///
/// Weights align index-for-index with `criteria` and must sum to 1 within
/// the manual tolerance; they are renormalized before activation.
#[derive(Debug, Clone)]
pub struct SetWeightsCommand {
    pub criteria: Vec<Criterion>,
    pub weights: Vec<f64>,
}

/// Result of a successful activation.
#[derive(Debug, Clone)]
pub struct SetWeightsResult {
    pub profile: Arc<WeightProfile>,
    pub replaced: Arc<WeightProfile>,
}

/// Handler for setting weights directly.
pub struct SetWeightsHandler {
    registry: Arc<WeightRegistry>,
    history: Arc<dyn WeightProfileHistory>,
}

impl SetWeightsHandler {
    pub fn new(registry: Arc<WeightRegistry>, history: Arc<dyn WeightProfileHistory>) -> Self {
        Self { registry, history }
    }

    pub async fn handle(&self, cmd: SetWeightsCommand) -> Result<SetWeightsResult, DomainError> {
        let profile = WeightProfile::manual(cmd.criteria, cmd.weights)?;

        let history = Arc::clone(&self.history);
        let activation = self
            .registry
            .activate_with(profile, |outgoing| async move {
                history.append(&outgoing).await
            })
            .await?;

        info!(
            profile_id = %activation.active.id(),
            version = activation.active.version(),
            "Activated manual weight profile"
        );

        Ok(SetWeightsResult {
            profile: activation.active,
            replaced: activation.replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryWeightProfileHistory;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::weighting::ProfileSource;
    use async_trait::async_trait;

    struct FailingHistory;

    #[async_trait]
    impl WeightProfileHistory for FailingHistory {
        async fn append(&self, _profile: &WeightProfile) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "history unavailable"))
        }

        async fn list(&self) -> Result<Vec<WeightProfile>, DomainError> {
            Ok(Vec::new())
        }
    }

    fn criteria() -> Vec<Criterion> {
        Criterion::from_names(&["Sales", "Attendance"]).unwrap()
    }

    fn setup() -> (SetWeightsHandler, Arc<WeightRegistry>, Arc<InMemoryWeightProfileHistory>) {
        let registry = Arc::new(WeightRegistry::bootstrap(criteria()).unwrap());
        let history = Arc::new(InMemoryWeightProfileHistory::new());
        (SetWeightsHandler::new(registry.clone(), history.clone()), registry, history)
    }

    #[tokio::test]
    async fn test_sets_and_round_trips_weights() {
        let (handler, registry, history) = setup();

        let result = handler
            .handle(SetWeightsCommand {
                criteria: criteria(),
                weights: vec![0.7, 0.3],
            })
            .await
            .unwrap();

        let active = registry.active();
        assert_eq!(active.id(), result.profile.id());
        assert!((active.weight_for("Sales").unwrap() - 0.7).abs() < 1e-6);
        assert!((active.weight_for("Attendance").unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(active.source(), &ProfileSource::Manual);
        assert_eq!(active.is_consistent(), None);
        assert_eq!(history.len().await, 1);
    }

    #[tokio::test]
    async fn test_rejects_bad_sum_and_keeps_active() {
        let (handler, registry, history) = setup();
        let before = registry.active();

        let err = handler
            .handle(SetWeightsCommand {
                criteria: criteria(),
                weights: vec![0.7, 0.2],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidWeights);
        assert_eq!(registry.active().id(), before.id());
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn test_rejects_length_mismatch() {
        let (handler, _, _) = setup();

        let err = handler
            .handle(SetWeightsCommand {
                criteria: criteria(),
                weights: vec![1.0],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidWeights);
    }

    #[tokio::test]
    async fn test_versions_increase() {
        let (handler, _, history) = setup();

        for weights in [vec![0.5, 0.5], vec![0.6, 0.4], vec![0.9, 0.1]] {
            handler
                .handle(SetWeightsCommand {
                    criteria: criteria(),
                    weights,
                })
                .await
                .unwrap();
        }

        let replaced: Vec<u64> = history
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.version())
            .collect();
        assert_eq!(replaced, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_history_failure_leaves_active_profile_unchanged() {
        let registry = Arc::new(WeightRegistry::bootstrap(criteria()).unwrap());
        let handler = SetWeightsHandler::new(registry.clone(), Arc::new(FailingHistory));

        let err = handler
            .handle(SetWeightsCommand {
                criteria: criteria(),
                weights: vec![0.9, 0.1],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        let active = registry.active();
        assert_eq!(active.version(), 1);
        assert_eq!(active.weights(), &[0.5, 0.5]);
    }
}
