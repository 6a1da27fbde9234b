//! Statistics relative to a benchmark series.

use vantage_core::{AnalyticsError, AnalyticsResult, ReturnSeries, RiskFreeRate};
use vantage_math::statistics::{sample_covariance, sample_std_dev, sample_variance};

use crate::returns::{annualize_risk_free, compute_annualized_return};
use crate::validation::{require_aligned, require_len, require_periods_per_year};

/// Beta: `Cov(returns, benchmark) / Var(benchmark)` using sample estimators.
///
/// # Errors
///
/// - `DimensionMismatch` if the series differ in length
/// - `InsufficientData` with fewer than two observations
/// - `DegenerateInput` if the benchmark has zero variance
///
/// # Example
///
/// ```rust
/// use vantage_analytics::benchmark::compute_beta;
///
/// let benchmark = [0.01, -0.02, 0.015, 0.005];
/// let levered: Vec<f64> = benchmark.iter().map(|r| 1.5 * r).collect();
/// let beta = compute_beta(&levered, &benchmark).unwrap();
/// assert!((beta - 1.5).abs() < 1e-12);
/// ```
pub fn compute_beta(returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<f64> {
    require_aligned("beta", returns, benchmark)?;
    require_len("beta", returns, 2)?;

    let var = sample_variance(benchmark).map_err(|e| AnalyticsError::from_math("beta", e))?;
    if var == 0.0 {
        return Err(AnalyticsError::degenerate(
            "beta",
            "benchmark variance is zero",
        ));
    }
    let cov = sample_covariance(returns, benchmark)
        .map_err(|e| AnalyticsError::from_math("beta", e))?;

    Ok(cov / var)
}

/// Jensen's alpha, annualized:
/// `R_p - (R_f + beta * (R_b - R_f))` with every return annualized.
pub fn compute_alpha(
    returns: &[f64],
    benchmark: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    let beta = compute_beta(returns, benchmark)?;
    let portfolio = compute_annualized_return(returns, periods_per_year)?;
    let market = compute_annualized_return(benchmark, periods_per_year)?;
    let rf = annualize_risk_free(risk_free, returns.len(), periods_per_year)?;

    Ok(portfolio - (rf + beta * (market - rf)))
}

/// Period-by-period excess of `returns` over `benchmark`.
pub fn compute_active_returns(returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<ReturnSeries> {
    require_aligned("active returns", returns, benchmark)?;
    require_len("active returns", returns, 1)?;

    ReturnSeries::new(returns.iter().zip(benchmark).map(|(r, b)| r - b).collect())
}

/// Annualized tracking error: sample standard deviation of active returns
/// times `sqrt(periods_per_year)`.
pub fn compute_tracking_error(
    returns: &[f64],
    benchmark: &[f64],
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    require_periods_per_year(periods_per_year)?;
    let active = compute_active_returns(returns, benchmark)?;
    require_len("tracking error", &active, 2)?;

    let sd = sample_std_dev(&active).map_err(|e| AnalyticsError::from_math("tracking error", e))?;
    Ok(sd * periods_per_year.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vantage_core::ErrorKind;

    const BENCHMARK: [f64; 5] = [0.01, -0.01, 0.02, -0.005, 0.015];

    #[test]
    fn test_beta_of_benchmark_is_one() {
        assert_relative_eq!(compute_beta(&BENCHMARK, &BENCHMARK).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_errors() {
        assert_eq!(
            compute_beta(&BENCHMARK, &BENCHMARK[..3]).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
        assert_eq!(
            compute_beta(&[0.01], &[0.02]).unwrap_err().kind(),
            ErrorKind::InsufficientData
        );
        assert_eq!(
            compute_beta(&BENCHMARK, &[0.01; 5]).unwrap_err().kind(),
            ErrorKind::DegenerateInput
        );
    }

    #[test]
    fn test_alpha_of_benchmark_is_zero() {
        let alpha =
            compute_alpha(&BENCHMARK, &BENCHMARK, &RiskFreeRate::Annual(0.02), 12.0).unwrap();
        assert_relative_eq!(alpha, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_with_zero_rate() {
        let returns = [0.02, -0.005, 0.025, 0.0, 0.02];
        let beta = compute_beta(&returns, &BENCHMARK).unwrap();
        let rp = compute_annualized_return(&returns, 12.0).unwrap();
        let rb = compute_annualized_return(&BENCHMARK, 12.0).unwrap();
        let alpha = compute_alpha(&returns, &BENCHMARK, &RiskFreeRate::zero(), 12.0).unwrap();
        assert_relative_eq!(alpha, rp - beta * rb, epsilon = 1e-12);
    }

    #[test]
    fn test_active_returns() {
        let returns = [0.02, -0.005, 0.025, 0.0, 0.02];
        let active = compute_active_returns(&returns, &BENCHMARK).unwrap();
        let expected = [0.01, 0.005, 0.005, 0.005, 0.005];
        for (a, e) in active.iter().zip(expected) {
            assert_relative_eq!(*a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tracking_error() {
        let shifted: Vec<f64> = BENCHMARK.iter().map(|r| r + 0.001).collect();
        let te = compute_tracking_error(&shifted, &BENCHMARK, 252.0).unwrap();
        assert_relative_eq!(te, 0.0, epsilon = 1e-12);

        let returns = [0.02, -0.005, 0.025, 0.0, 0.02];
        let te = compute_tracking_error(&returns, &BENCHMARK, 4.0).unwrap();
        let active = [0.01, 0.005, 0.005, 0.005, 0.005];
        assert_relative_eq!(te, sample_std_dev(&active).unwrap() * 2.0, epsilon = 1e-12);
    }
}
