//! Pairwise Matrix - Reciprocal comparison matrix built from upper-triangle judgments.

use serde::{Deserialize, Serialize};

use super::WeightingError;

/// Relative tolerance for the reciprocal check `m[i][j] * m[j][i] == 1`.
pub const RECIPROCAL_TOLERANCE: f64 = 1e-4;

/// A square, positive, reciprocal matrix of pairwise judgments.
///
/// Cell `(i, j)` states how much more important criterion `i` is than `j`.
/// Deserializes from plain rows through [`PairwiseMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    cells: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Number of upper-triangle judgments required for `n` criteria.
    pub fn expected_judgments(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    /// Builds a matrix from row-major upper-triangle judgments.
    ///
    /// For `n = 3` the order is `[a12, a13, a23]`. The lower triangle is
    /// filled with reciprocals and the diagonal with 1. Values outside the
    /// 1/9..9 scale are accepted; they only show up as a poor consistency
    /// ratio.
    ///
    /// # Errors
    /// - `InvalidInput` if `n < 2`
    /// - `InvalidInput` if `judgments.len() != n(n-1)/2`
    /// - `InvalidInput` if any judgment is non-positive or not finite
    pub fn build(n: usize, judgments: &[f64]) -> Result<Self, WeightingError> {
        if n < 2 {
            return Err(WeightingError::invalid_input(format!(
                "matrix needs at least 2 criteria, got {}",
                n
            )));
        }

        let expected = Self::expected_judgments(n);
        if judgments.len() != expected {
            return Err(WeightingError::invalid_input(format!(
                "expected {} upper-triangle judgments for {} criteria, got {}",
                expected,
                n,
                judgments.len()
            )));
        }

        if let Some((idx, value)) = judgments
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(WeightingError::invalid_input(format!(
                "judgment #{} must be a positive number, got {}",
                idx, value
            )));
        }

        let mut cells = vec![vec![1.0; n]; n];
        let mut values = judgments.iter();
        for i in 0..n {
            for j in (i + 1)..n {
                // Length was checked above.
                let value = values.next().copied().unwrap_or(1.0);
                cells[i][j] = value;
                cells[j][i] = 1.0 / value;
            }
        }

        Ok(Self { cells })
    }

    /// Accepts a fully specified matrix after validating its structure.
    ///
    /// # Errors
    /// `InvalidInput` if the matrix is empty, not square, has non-positive
    /// entries, a diagonal other than 1, or violates reciprocity.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, WeightingError> {
        validate_rows(&rows)?;
        Ok(Self { cells: rows })
    }

    #[cfg(test)]
    pub(super) fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        Self { cells: rows }
    }

    /// Re-checks the structural invariants of this matrix.
    pub fn validate(&self) -> Result<(), WeightingError> {
        validate_rows(&self.cells)
    }

    /// Returns the number of criteria compared.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns the judgment at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.cells
    }

    /// Returns the canonical row-major upper-triangle judgment vector.
    pub fn upper_triangle(&self) -> Vec<f64> {
        let n = self.size();
        let mut values = Vec::with_capacity(Self::expected_judgments(n));
        for i in 0..n {
            for j in (i + 1)..n {
                values.push(self.cells[i][j]);
            }
        }
        values
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = WeightingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.cells
    }
}

fn validate_rows(rows: &[Vec<f64>]) -> Result<(), WeightingError> {
    let n = rows.len();
    if n == 0 {
        return Err(WeightingError::invalid_input("matrix cannot be empty"));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(WeightingError::invalid_input(format!(
                "matrix must be square: row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    for i in 0..n {
        for j in 0..n {
            let value = rows[i][j];
            if !value.is_finite() || value <= 0.0 {
                return Err(WeightingError::invalid_input(format!(
                    "matrix[{}][{}] must be positive, got {}",
                    i, j, value
                )));
            }
            if i == j && (value - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(WeightingError::invalid_input(format!(
                    "diagonal matrix[{}][{}] must be 1, got {}",
                    i, j, value
                )));
            }
            if i < j && (value * rows[j][i] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(WeightingError::invalid_input(format!(
                    "reciprocity violated: matrix[{}][{}]={} but matrix[{}][{}]={}",
                    i, j, value, j, i, rows[j][i]
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_judgments_counts_upper_triangle() {
        assert_eq!(PairwiseMatrix::expected_judgments(1), 0);
        assert_eq!(PairwiseMatrix::expected_judgments(2), 1);
        assert_eq!(PairwiseMatrix::expected_judgments(3), 3);
        assert_eq!(PairwiseMatrix::expected_judgments(5), 10);
    }

    #[test]
    fn build_fills_reciprocals_and_diagonal() {
        let m = PairwiseMatrix::build(3, &[3.0, 5.0, 2.0]).unwrap();

        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(0, 1), Some(3.0));
        assert_eq!(m.get(0, 2), Some(5.0));
        assert_eq!(m.get(1, 2), Some(2.0));
        assert!((m.get(1, 0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.get(2, 0).unwrap() - 0.2).abs() < 1e-12);
        assert!((m.get(2, 1).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn build_follows_row_major_order() {
        let m = PairwiseMatrix::build(4, &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(0, 3), Some(4.0));
        assert_eq!(m.get(1, 2), Some(5.0));
        assert_eq!(m.get(2, 3), Some(7.0));
        assert_eq!(m.upper_triangle(), vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn build_rejects_wrong_judgment_count() {
        let err = PairwiseMatrix::build(3, &[3.0, 5.0]).unwrap_err();
        assert!(matches!(err, WeightingError::InvalidInput(_)));
    }

    #[test]
    fn build_rejects_non_positive_judgments() {
        assert!(PairwiseMatrix::build(3, &[3.0, 0.0, 2.0]).is_err());
        assert!(PairwiseMatrix::build(3, &[3.0, -1.0, 2.0]).is_err());
        assert!(PairwiseMatrix::build(2, &[f64::NAN]).is_err());
    }

    #[test]
    fn build_rejects_single_criterion() {
        assert!(PairwiseMatrix::build(1, &[]).is_err());
    }

    #[test]
    fn build_accepts_values_outside_saaty_scale() {
        let m = PairwiseMatrix::build(2, &[20.0]).unwrap();
        assert_eq!(m.get(0, 1), Some(20.0));
    }

    #[test]
    fn from_rows_accepts_valid_matrix() {
        let m = PairwiseMatrix::from_rows(vec![vec![1.0, 4.0], vec![0.25, 1.0]]).unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn from_rows_accepts_single_criterion() {
        let m = PairwiseMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let err = PairwiseMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5]]).unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn from_rows_rejects_broken_reciprocity() {
        let err = PairwiseMatrix::from_rows(vec![vec![1.0, 3.0], vec![0.5, 1.0]]).unwrap_err();
        assert!(err.to_string().contains("reciprocity"));
    }

    #[test]
    fn from_rows_rejects_bad_diagonal() {
        assert!(PairwiseMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]]).is_err());
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(PairwiseMatrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn deserialize_rejects_non_reciprocal_rows() {
        let result = serde_json::from_str::<PairwiseMatrix>("[[1.0, 5.0], [1.0, 1.0]]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("reciprocity"), "unexpected error: {}", err);
    }

    #[test]
    fn serde_uses_plain_rows() {
        let m = PairwiseMatrix::build(2, &[4.0]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,4.0],[0.25,1.0]]");

        let back: PairwiseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
