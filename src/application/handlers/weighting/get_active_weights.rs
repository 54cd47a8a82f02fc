//! GetActiveWeightsHandler - Query handler for the active weight profile.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Timestamp, WeightProfileId};
use crate::domain::weighting::{ProfileSource, WeightProfile, WeightRegistry};

/// One criterion with its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionWeight {
    pub criterion: String,
    pub description: String,
    pub weight: f64,
}

/// Flat view of the active profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWeightsView {
    pub profile_id: WeightProfileId,
    pub version: u64,
    pub weights: Vec<CriterionWeight>,
    pub lambda_max: Option<f64>,
    pub consistency_index: Option<f64>,
    pub consistency_ratio: Option<f64>,
    pub is_consistent: Option<bool>,
    pub source: ProfileSource,
    pub created_at: Timestamp,
}

impl From<&WeightProfile> for ActiveWeightsView {
    fn from(profile: &WeightProfile) -> Self {
        let mut entries: Vec<_> = profile.entries().collect();
        entries.sort_by_key(|(criterion, _)| criterion.display_order);

        let weights = entries
            .into_iter()
            .map(|(criterion, weight)| CriterionWeight {
                criterion: criterion.name.clone(),
                description: criterion.description.clone(),
                weight,
            })
            .collect();

        Self {
            profile_id: profile.id(),
            version: profile.version(),
            weights,
            lambda_max: profile.lambda_max(),
            consistency_index: profile.consistency_index(),
            consistency_ratio: profile.consistency_ratio(),
            is_consistent: profile.is_consistent(),
            source: profile.source().clone(),
            created_at: profile.created_at(),
        }
    }
}

/// Handler for reading the active weights.
pub struct GetActiveWeightsHandler {
    registry: Arc<WeightRegistry>,
}

impl GetActiveWeightsHandler {
    pub fn new(registry: Arc<WeightRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> ActiveWeightsView {
        ActiveWeightsView::from(self.registry.active().as_ref())
    }
}
