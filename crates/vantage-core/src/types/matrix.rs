//! Square symmetric matrices produced and consumed by cross-asset metrics.

use nalgebra::DMatrix;
use vantage_math::linear_algebra::is_symmetric;

use super::ensure_finite;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Absolute tolerance used when checking symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

fn from_rows(context: &str, rows: &[Vec<f64>]) -> AnalyticsResult<DMatrix<f64>> {
    let n = rows.len();
    if let Some(row) = rows.iter().find(|r| r.len() != n) {
        return Err(AnalyticsError::dimension_mismatch(context, n, row.len()));
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    ensure_finite(context, &flat)?;
    Ok(DMatrix::from_row_slice(n, n, &flat))
}

fn check_square_symmetric(context: &str, m: &DMatrix<f64>) -> AnalyticsResult<()> {
    if m.nrows() != m.ncols() {
        return Err(AnalyticsError::dimension_mismatch(context, m.nrows(), m.ncols()));
    }
    ensure_finite(context, m.as_slice())?;
    if !is_symmetric(m, SYMMETRY_TOLERANCE) {
        return Err(AnalyticsError::invalid_parameter(context, "matrix is not symmetric"));
    }
    Ok(())
}

fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter().map(|row| row.iter().copied().collect()).collect()
}

/// Pairwise correlation coefficients between series.
///
/// Symmetric, with every diagonal entry exactly `1.0` and every entry
/// in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix(DMatrix<f64>);

impl CorrelationMatrix {
    /// Wraps a matrix after checking the correlation matrix invariants.
    pub fn from_matrix(matrix: DMatrix<f64>) -> AnalyticsResult<Self> {
        check_square_symmetric("correlation matrix", &matrix)?;
        if (0..matrix.nrows()).any(|i| matrix[(i, i)] != 1.0) {
            return Err(AnalyticsError::invalid_parameter(
                "correlation matrix",
                "diagonal entries must be 1.0",
            ));
        }
        if matrix.iter().any(|c| !(-1.0..=1.0).contains(c)) {
            return Err(AnalyticsError::invalid_parameter(
                "correlation matrix",
                "coefficients must lie in [-1, 1]",
            ));
        }
        Ok(Self(matrix))
    }

    /// Builds a matrix from rows of coefficients.
    pub fn from_rows(rows: &[Vec<f64>]) -> AnalyticsResult<Self> {
        Self::from_matrix(from_rows("correlation matrix", rows)?)
    }

    /// The `n × n` identity correlation (uncorrelated series).
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Number of series.
    pub fn dimension(&self) -> usize {
        self.0.nrows()
    }

    /// Coefficient between series `i` and `j`, if both indices are in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    /// Borrows the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Copies the coefficients out row by row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.0)
    }
}

/// Pairwise covariances between series.
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceMatrix(DMatrix<f64>);

impl CovarianceMatrix {
    /// Wraps a matrix after checking it is square, finite and symmetric.
    pub fn from_matrix(matrix: DMatrix<f64>) -> AnalyticsResult<Self> {
        check_square_symmetric("covariance matrix", &matrix)?;
        if (0..matrix.nrows()).any(|i| matrix[(i, i)] < 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "covariance matrix",
                "variances on the diagonal must be non-negative",
            ));
        }
        Ok(Self(matrix))
    }

    /// Builds a matrix from rows of covariances.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vantage_core::CovarianceMatrix;
    ///
    /// let cov = CovarianceMatrix::from_rows(&[vec![0.04, 0.01], vec![0.01, 0.09]]).unwrap();
    /// assert_eq!(cov.dimension(), 2);
    /// assert_eq!(cov.variances(), vec![0.04, 0.09]);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> AnalyticsResult<Self> {
        Self::from_matrix(from_rows("covariance matrix", rows)?)
    }

    /// Number of series.
    pub fn dimension(&self) -> usize {
        self.0.nrows()
    }

    /// Covariance between series `i` and `j`, if both indices are in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    /// The per-series variances on the diagonal.
    pub fn variances(&self) -> Vec<f64> {
        self.0.diagonal().iter().copied().collect()
    }

    /// Borrows the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Copies the covariances out row by row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.0)
    }
}
