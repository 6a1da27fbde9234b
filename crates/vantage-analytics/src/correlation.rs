//! Cross-series correlation and covariance matrices.

use log::debug;
use nalgebra::DMatrix;
use vantage_core::{AnalyticsError, AnalyticsResult, CorrelationMatrix, CovarianceMatrix};
use vantage_math::statistics::{pearson_correlation, sample_covariance};
use vantage_math::MathError;

use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_map;
use crate::validation::require_series_list;

/// Index pairs `(i, j)` of the upper triangle, diagonal included if asked.
fn upper_triangle(n: usize, include_diagonal: bool) -> Vec<(usize, usize)> {
    let offset = usize::from(!include_diagonal);
    (0..n)
        .flat_map(|i| (i + offset..n).map(move |j| (i, j)))
        .collect()
}

/// Pairwise Pearson correlation of equally long series.
///
/// The diagonal is exactly `1.0`. An empty list yields a `0 × 0` matrix.
///
/// # Errors
///
/// - `DimensionMismatch` if the series differ in length
/// - `InsufficientData` if the series have fewer than two observations
/// - `DegenerateInput` if any series has zero variance
///
/// # Example
///
/// ```rust
/// use vantage_analytics::correlation::compute_correlation_matrix;
///
/// let a = vec![0.01, -0.02, 0.03, 0.00];
/// let b = vec![0.02, -0.04, 0.06, 0.00];
/// let corr = compute_correlation_matrix(&[a, b]).unwrap();
/// assert_eq!(corr.get(0, 0), Some(1.0));
/// assert!((corr.get(0, 1).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn compute_correlation_matrix<S>(series_list: &[S]) -> AnalyticsResult<CorrelationMatrix>
where
    S: AsRef<[f64]>,
{
    compute_correlation_matrix_with(series_list, &AnalyticsConfig::default())
}

/// [`compute_correlation_matrix`] with explicit parallelism settings.
pub fn compute_correlation_matrix_with<S>(
    series_list: &[S],
    config: &AnalyticsConfig,
) -> AnalyticsResult<CorrelationMatrix>
where
    S: AsRef<[f64]>,
{
    let series = require_series_list("correlation matrix", series_list, 2)?;
    let n = series.len();
    let pairs = upper_triangle(n, false);
    debug!(
        "correlation matrix: {n} series, {} pairs, parallel={}",
        pairs.len(),
        config.should_parallelize(pairs.len())
    );

    let coefficients = maybe_parallel_map(&pairs, config, |&(i, j)| {
        pearson_correlation(series[i], series[j]).map_err(|e| match e {
            MathError::DivisionByZero { .. } => AnalyticsError::degenerate(
                "correlation",
                format!("series {i} or {j} has zero variance"),
            ),
            other => AnalyticsError::from_math("correlation", other),
        })
    });

    let mut matrix = DMatrix::identity(n, n);
    for (&(i, j), rho) in pairs.iter().zip(coefficients) {
        let rho = rho?;
        matrix[(i, j)] = rho;
        matrix[(j, i)] = rho;
    }

    CorrelationMatrix::from_matrix(matrix)
}

/// Pairwise sample covariance (divisor `n - 1`) of equally long series.
///
/// # Errors
///
/// - `DimensionMismatch` if the series differ in length
/// - `InsufficientData` if the series have fewer than two observations
pub fn compute_covariance_matrix<S>(series_list: &[S]) -> AnalyticsResult<CovarianceMatrix>
where
    S: AsRef<[f64]>,
{
    compute_covariance_matrix_with(series_list, &AnalyticsConfig::default())
}

/// [`compute_covariance_matrix`] with explicit parallelism settings.
pub fn compute_covariance_matrix_with<S>(
    series_list: &[S],
    config: &AnalyticsConfig,
) -> AnalyticsResult<CovarianceMatrix>
where
    S: AsRef<[f64]>,
{
    let series = require_series_list("covariance matrix", series_list, 2)?;
    let n = series.len();
    let pairs = upper_triangle(n, true);
    debug!("covariance matrix: {n} series, {} entries", pairs.len());

    let covariances = maybe_parallel_map(&pairs, config, |&(i, j)| {
        sample_covariance(series[i], series[j])
            .map_err(|e| AnalyticsError::from_math("covariance", e))
    });

    let mut matrix = DMatrix::zeros(n, n);
    for (&(i, j), cov) in pairs.iter().zip(covariances) {
        let cov = cov?;
        matrix[(i, j)] = cov;
        matrix[(j, i)] = cov;
    }

    CovarianceMatrix::from_matrix(matrix)
}
