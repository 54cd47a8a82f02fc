//! DeriveWeightsHandler - Command handler for activating AHP-derived weights.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::weighting::{
    Criterion, InconsistencyPolicy, PriorityMethod, WeightProfile, WeightRegistry,
    WeightingError, CONSISTENCY_THRESHOLD,
};
use crate::ports::WeightProfileHistory;

/// Command to derive weights from pairwise judgments.
#[derive(Debug, Clone)]
pub struct DeriveWeightsCommand {
    pub criteria: Vec<Criterion>,
    /// Row-major upper triangle, `n(n-1)/2` values.
    pub judgments: Vec<f64>,
    pub method: PriorityMethod,
}

impl DeriveWeightsCommand {
    pub fn new(criteria: Vec<Criterion>, judgments: Vec<f64>) -> Self {
        Self {
            criteria,
            judgments,
            method: PriorityMethod::default(),
        }
    }
}

/// Result of a successful derivation.
#[derive(Debug, Clone)]
pub struct DeriveWeightsResult {
    /// The newly active profile.
    pub profile: Arc<WeightProfile>,
    /// The profile it replaced, now in history.
    pub replaced: Arc<WeightProfile>,
}

/// Handler for deriving and activating AHP weights.
pub struct DeriveWeightsHandler {
    registry: Arc<WeightRegistry>,
    history: Arc<dyn WeightProfileHistory>,
    policy: InconsistencyPolicy,
}

impl DeriveWeightsHandler {
    pub fn new(
        registry: Arc<WeightRegistry>,
        history: Arc<dyn WeightProfileHistory>,
        policy: InconsistencyPolicy,
    ) -> Self {
        Self {
            registry,
            history,
            policy,
        }
    }

    pub async fn handle(&self, cmd: DeriveWeightsCommand) -> Result<DeriveWeightsResult, DomainError> {
        let profile = WeightProfile::from_ahp(cmd.criteria, cmd.judgments, cmd.method)?;
        let cr = profile.consistency_ratio().unwrap_or_default();

        if profile.is_consistent() == Some(false) {
            match self.policy {
                InconsistencyPolicy::Reject => {
                    warn!(
                        consistency_ratio = cr,
                        threshold = CONSISTENCY_THRESHOLD,
                        "Rejected inconsistent judgments"
                    );
                    return Err(WeightingError::InconsistentJudgments {
                        consistency_ratio: cr,
                        threshold: CONSISTENCY_THRESHOLD,
                    }
                    .into());
                }
                InconsistencyPolicy::Warn => {
                    warn!(
                        consistency_ratio = cr,
                        threshold = CONSISTENCY_THRESHOLD,
                        "Activating weights from inconsistent judgments"
                    );
                }
            }
        }

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
            consistency_ratio = cr,
            "Activated AHP weight profile"
        );

        Ok(DeriveWeightsResult {
            profile: activation.active,
            replaced: activation.replaced,
        })
    }
}
