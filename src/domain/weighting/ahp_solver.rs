//! AHP Solver - Priority vector and consistency verdict for a pairwise matrix.
//!
//! Weights are approximated from the principal eigenvector, then checked
//! against Saaty's random index:
//!
//! ```text
//! λmax = mean_i( (A·w)_i / w_i )
//! CI   = (λmax - n) / (n - 1)
//! CR   = CI / RI(n)
//! ```
//!
//! A high CR never fails the solve; it only clears `is_consistent`.

use serde::{Deserialize, Serialize};

use super::{PairwiseMatrix, WeightingError};

/// CR strictly below this value counts as consistent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Weights at or below this value make λmax undefined.
pub const DEGENERATE_WEIGHT_EPSILON: f64 = 1e-12;

/// Saaty's random consistency index for n = 1..15.
const RANDOM_INDEX: [f64; 15] = [
    0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// How the priority vector is approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMethod {
    /// Normalize each column by its sum, then average each row.
    #[default]
    ColumnNormalization,
    /// n-th root of each row product, normalized.
    GeometricMean,
}

/// Output of a solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AhpResult {
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

/// Stateless AHP solver.
pub struct AhpSolver;

impl AhpSolver {
    /// Solves with the default column-normalization method.
    pub fn solve(matrix: &PairwiseMatrix) -> Result<AhpResult, WeightingError> {
        Self::solve_with(matrix, PriorityMethod::default())
    }

    /// Solves with an explicit priority method.
    ///
    /// # Errors
    /// - `InvalidInput` if the matrix is empty, not square, not positive,
    ///   has a diagonal other than 1, or is not reciprocal
    /// - `DegenerateWeight` if any weight collapses to (near) zero
    pub fn solve_with(
        matrix: &PairwiseMatrix,
        method: PriorityMethod,
    ) -> Result<AhpResult, WeightingError> {
        matrix.validate()?;
        let n = matrix.size();
        let rows = matrix.rows();

        let raw = match method {
            PriorityMethod::ColumnNormalization => Self::column_normalized(rows),
            PriorityMethod::GeometricMean => Self::geometric_mean(rows),
        };
        let weights = Self::renormalize(raw)?;

        let lambda_max = Self::lambda_max(rows, &weights)?;
        let consistency_index = Self::consistency_index(lambda_max, n);
        let consistency_ratio = Self::consistency_ratio(consistency_index, n);

        Ok(AhpResult {
            weights,
            lambda_max,
            consistency_index,
            consistency_ratio,
            is_consistent: consistency_ratio < CONSISTENCY_THRESHOLD,
        })
    }

    /// Returns RI(n), clamping beyond the tabulated range.
    pub fn random_index(n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n > RANDOM_INDEX.len() => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
            n => RANDOM_INDEX[n - 1],
        }
    }

    /// CI = (λmax − n)/(n − 1), or 0 for a single criterion.
    pub fn consistency_index(lambda_max: f64, n: usize) -> f64 {
        if n <= 1 {
            return 0.0;
        }
        (lambda_max - n as f64) / (n as f64 - 1.0)
    }

    /// CR = CI / RI(n), or 0 where RI(n) is 0.
    pub fn consistency_ratio(consistency_index: f64, n: usize) -> f64 {
        let ri = Self::random_index(n);
        if ri == 0.0 {
            return 0.0;
        }
        consistency_index / ri
    }

    fn column_normalized(rows: &[Vec<f64>]) -> Vec<f64> {
        let n = rows.len();
        let column_sums: Vec<f64> = (0..n)
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();

        rows.iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum::<f64>()
                    / n as f64
            })
            .collect()
    }

    fn geometric_mean(rows: &[Vec<f64>]) -> Vec<f64> {
        let n = rows.len() as f64;
        rows.iter()
            .map(|row| {
                // Sum of logs keeps large matrices from overflowing the product.
                let log_sum: f64 = row.iter().map(|v| v.ln()).sum();
                (log_sum / n).exp()
            })
            .collect()
    }

    fn renormalize(raw: Vec<f64>) -> Result<Vec<f64>, WeightingError> {
        let total: f64 = raw.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(WeightingError::invalid_input(
                "priority vector does not have a positive finite sum",
            ));
        }
        Ok(raw.into_iter().map(|w| w / total).collect())
    }

    fn lambda_max(rows: &[Vec<f64>], weights: &[f64]) -> Result<f64, WeightingError> {
        if let Some(index) = weights.iter().position(|w| *w <= DEGENERATE_WEIGHT_EPSILON) {
            return Err(WeightingError::DegenerateWeight { index });
        }

        let ratio_sum: f64 = rows
            .iter()
            .zip(weights)
            .map(|(row, w_i)| {
                let aw_i: f64 = row.iter().zip(weights).map(|(a, w)| a * w).sum();
                aw_i / w_i
            })
            .sum();

        Ok(ratio_sum / weights.len() as f64)
    }
}
