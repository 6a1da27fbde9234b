//! Linear algebra utilities.
//!
//! Thin wrappers over `nalgebra` that check shapes and report
//! mismatches as errors instead of panicking.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Dot product of two equally sized vectors.
pub fn dot(a: &[f64], b: &[f64]) -> MathResult<f64> {
    if a.len() != b.len() {
        return Err(MathError::length_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Evaluates the quadratic form `xᵀ · A · x`.
///
/// # Arguments
///
/// * `x` - Vector of length n
/// * `a` - Square n×n matrix
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use vantage_math::linear_algebra::quadratic_form;
///
/// let a = DMatrix::from_row_slice(2, 2, &[0.04, 0.01, 0.01, 0.09]);
/// let q = quadratic_form(&[0.5, 0.5], &a).unwrap();
/// assert!((q - 0.0375).abs() < 1e-12);
/// ```
pub fn quadratic_form(x: &[f64], a: &DMatrix<f64>) -> MathResult<f64> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if x.len() != n {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: x.len(),
            cols2: 1,
        });
    }

    let v = DVector::from_column_slice(x);
    Ok(v.dot(&(a * &v)))
}

/// Returns true if the matrix is square and symmetric within `tolerance`.
pub fn is_symmetric(a: &DMatrix<f64>, tolerance: f64) -> bool {
    let n = a.nrows();
    if n != a.ncols() {
        return false;
    }
    for i in 0..n {
        for j in i + 1..n {
            if (a[(i, j)] - a[(j, i)]).abs() > tolerance {
                return false;
            }
        }
    }
    true
}
