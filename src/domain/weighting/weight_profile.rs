//! Weight profile - The named, versioned weight vector used for scoring.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Timestamp, WeightProfileId};

use super::{
    validate_criteria, AhpResult, AhpSolver, Criterion, PairwiseMatrix, PriorityMethod,
    WeightingError,
};

/// Allowed deviation of a manual weight vector's sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Where a profile's weights came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileSource {
    /// Equal weights installed at startup.
    Default,
    /// Derived from pairwise judgments.
    Ahp {
        judgments: Vec<f64>,
        method: PriorityMethod,
    },
    /// Set directly by an administrator.
    Manual,
}

/// Active weighting of the evaluation criteria.
///
/// Weights align index-for-index with `criteria`, are non-negative and sum
/// to 1. Consistency metrics are present only for AHP-derived profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProfile {
    id: WeightProfileId,
    version: u64,
    criteria: Vec<Criterion>,
    weights: Vec<f64>,
    lambda_max: Option<f64>,
    consistency_index: Option<f64>,
    consistency_ratio: Option<f64>,
    is_consistent: Option<bool>,
    source: ProfileSource,
    created_at: Timestamp,
}

impl WeightProfile {
    /// Equal weights over the given criteria.
    pub fn equal_weights(criteria: Vec<Criterion>) -> Result<Self, WeightingError> {
        validate_criteria(&criteria)?;
        let weight = 1.0 / criteria.len() as f64;
        let weights = vec![weight; criteria.len()];
        Ok(Self::assemble(criteria, weights, None, ProfileSource::Default))
    }

    /// Derives weights from row-major upper-triangle judgments.
    ///
    /// Inconsistent judgments still produce a profile; callers decide
    /// whether to activate it.
    pub fn from_ahp(
        criteria: Vec<Criterion>,
        judgments: Vec<f64>,
        method: PriorityMethod,
    ) -> Result<Self, WeightingError> {
        validate_criteria(&criteria)?;
        let matrix = PairwiseMatrix::build(criteria.len(), &judgments)?;
        let result = AhpSolver::solve_with(&matrix, method)?;
        let weights = result.weights.clone();

        Ok(Self::assemble(
            criteria,
            weights,
            Some(&result),
            ProfileSource::Ahp { judgments, method },
        ))
    }

    /// Validates and renormalizes an explicit weight vector.
    ///
    /// # Errors
    /// `InvalidWeights` when lengths differ, the list is empty, names repeat,
    /// a weight is negative or non-finite, or the sum is off by more than
    /// [`WEIGHT_SUM_TOLERANCE`].
    pub fn manual(criteria: Vec<Criterion>, weights: Vec<f64>) -> Result<Self, WeightingError> {
        let weights = Self::validate_manual(&criteria, weights)?;
        Ok(Self::assemble(criteria, weights, None, ProfileSource::Manual))
    }

    fn validate_manual(
        criteria: &[Criterion],
        weights: Vec<f64>,
    ) -> Result<Vec<f64>, WeightingError> {
        if criteria.is_empty() {
            return Err(WeightingError::invalid_weights(
                "at least one criterion is required",
            ));
        }
        if criteria.len() != weights.len() {
            return Err(WeightingError::invalid_weights(format!(
                "{} criteria but {} weights",
                criteria.len(),
                weights.len()
            )));
        }

        let mut names = HashSet::new();
        for criterion in criteria {
            if criterion.name.trim().is_empty() {
                return Err(WeightingError::invalid_weights("criterion name is empty"));
            }
            if !names.insert(criterion.name.as_str()) {
                return Err(WeightingError::invalid_weights(format!(
                    "duplicate criterion name '{}'",
                    criterion.name
                )));
            }
        }

        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(WeightingError::invalid_weights(format!(
                "weight for '{}' must be a finite non-negative number, got {}",
                criteria[i].name, w
            )));
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightingError::invalid_weights(format!(
                "weights must sum to 1, got {:.8}",
                sum
            )));
        }

        Ok(weights.into_iter().map(|w| w / sum).collect())
    }

    fn assemble(
        criteria: Vec<Criterion>,
        weights: Vec<f64>,
        ahp: Option<&AhpResult>,
        source: ProfileSource,
    ) -> Self {
        Self {
            id: WeightProfileId::new(),
            version: 1,
            criteria,
            weights,
            lambda_max: ahp.map(|r| r.lambda_max),
            consistency_index: ahp.map(|r| r.consistency_index),
            consistency_ratio: ahp.map(|r| r.consistency_ratio),
            is_consistent: ahp.map(|r| r.is_consistent),
            source,
            created_at: Timestamp::now(),
        }
    }

    pub(crate) fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn id(&self) -> WeightProfileId {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the weight assigned to a criterion by name.
    pub fn weight_for(&self, name: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c.name == name)
            .map(|i| self.weights[i])
    }

    /// Iterates `(criterion, weight)` pairs in criterion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Criterion, f64)> {
        self.criteria.iter().zip(self.weights.iter().copied())
    }

    pub fn lambda_max(&self) -> Option<f64> {
        self.lambda_max
    }

    pub fn consistency_index(&self) -> Option<f64> {
        self.consistency_index
    }

    pub fn consistency_ratio(&self) -> Option<f64> {
        self.consistency_ratio
    }

    /// `None` for profiles not derived from judgments.
    pub fn is_consistent(&self) -> Option<bool> {
        self.is_consistent
    }

    pub fn source(&self) -> &ProfileSource {
        &self.source
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
