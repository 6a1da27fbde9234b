//! Risk-adjusted return ratios and portfolio variance.
//!
//! Excess-return ratios share one numerator: the annualized return less the
//! annualized risk-free rate. They differ only in the risk measure used as
//! the denominator, and every zero denominator is reported as
//! `DegenerateInput` rather than returned as infinity.

use vantage_core::{AnalyticsError, AnalyticsResult, CovarianceMatrix, RiskFreeRate};
use vantage_math::linear_algebra::quadratic_form;
use vantage_math::statistics::{mean, sample_std_dev};

use crate::benchmark::{compute_active_returns, compute_beta};
use crate::drawdowns::{compute_max_drawdown, WealthCurve};
use crate::returns::{annualize_risk_free, compute_annualized_return};
use crate::validation::{
    require_finite, require_finite_scalar, require_len, require_periods_per_year,
};
use crate::volatility::{compute_annualized_volatility, compute_downside_deviation};

/// Annualized return less the annualized risk-free rate.
fn excess_return(
    returns: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    let annual = compute_annualized_return(returns, periods_per_year)?;
    let rf = annualize_risk_free(risk_free, returns.len(), periods_per_year)?;
    Ok(annual - rf)
}

/// Sharpe ratio: annualized excess return over annualized volatility.
///
/// # Errors
///
/// - `InsufficientData` with fewer than two returns
/// - `DegenerateInput` if volatility is zero
///
/// # Example
///
/// ```rust
/// use vantage_analytics::ratios::compute_sharpe_ratio;
/// use vantage_core::RiskFreeRate;
///
/// let returns = [0.01, -0.005, 0.012, 0.003, -0.002];
/// let sharpe = compute_sharpe_ratio(&returns, &RiskFreeRate::Annual(0.02), 252.0).unwrap();
/// assert!(sharpe > 0.0);
/// ```
pub fn compute_sharpe_ratio(
    returns: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    let vol = compute_annualized_volatility(returns, periods_per_year)?;
    if vol == 0.0 {
        return Err(AnalyticsError::degenerate(
            "sharpe ratio",
            "volatility is zero",
        ));
    }
    Ok(excess_return(returns, risk_free, periods_per_year)? / vol)
}

/// Sortino ratio with a zero minimum acceptable return.
pub fn compute_sortino_ratio(
    returns: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    compute_sortino_ratio_with_threshold(returns, risk_free, periods_per_year, 0.0)
}

/// Sortino ratio: annualized excess return over annualized downside
/// deviation below `mar` (a per-period return).
///
/// # Errors
///
/// `DegenerateInput` if no return falls below `mar`.
pub fn compute_sortino_ratio_with_threshold(
    returns: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
    mar: f64,
) -> AnalyticsResult<f64> {
    let downside = compute_downside_deviation(returns, mar, periods_per_year)?;
    Ok(excess_return(returns, risk_free, periods_per_year)? / downside)
}

/// Calmar ratio: annualized return over the maximum drawdown magnitude.
///
/// # Errors
///
/// `DegenerateInput` if the series never draws down.
pub fn compute_calmar_ratio(returns: &[f64], periods_per_year: f64) -> AnalyticsResult<f64> {
    let mdd = compute_max_drawdown(returns)?;
    if mdd == 0.0 {
        return Err(AnalyticsError::degenerate(
            "calmar ratio",
            "maximum drawdown is zero",
        ));
    }
    Ok(compute_annualized_return(returns, periods_per_year)? / mdd.abs())
}

/// Sterling ratio: annualized return over the mean magnitude of the
/// `drawdown_count` deepest drawdown episodes.
///
/// Fewer episodes than `drawdown_count` are averaged as they are.
///
/// # Errors
///
/// - `InvalidParameter` if `drawdown_count` is zero
/// - `DegenerateInput` if the series never draws down
pub fn compute_sterling_ratio(
    returns: &[f64],
    periods_per_year: f64,
    drawdown_count: usize,
) -> AnalyticsResult<f64> {
    if drawdown_count == 0 {
        return Err(AnalyticsError::invalid_parameter(
            "drawdown_count",
            "must be at least 1",
        ));
    }
    require_len("sterling ratio", returns, 1)?;
    let annual = compute_annualized_return(returns, periods_per_year)?;

    let mut depths: Vec<f64> = WealthCurve::from_returns(returns)?
        .episodes()
        .iter()
        .map(|e| e.depth.abs())
        .collect();
    if depths.is_empty() {
        return Err(AnalyticsError::degenerate(
            "sterling ratio",
            "no drawdowns in the series",
        ));
    }

    depths.sort_by(|a, b| b.total_cmp(a));
    depths.truncate(drawdown_count);
    let average = depths.iter().sum::<f64>() / depths.len() as f64;

    Ok(annual / average)
}

/// Omega ratio: summed gains above `threshold` over summed shortfalls
/// below it.
///
/// # Errors
///
/// `DegenerateInput` if no return falls below `threshold`.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::ratios::compute_omega_ratio;
///
/// let omega = compute_omega_ratio(&[0.02, -0.01, 0.03, -0.02], 0.0).unwrap();
/// assert!((omega - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn compute_omega_ratio(returns: &[f64], threshold: f64) -> AnalyticsResult<f64> {
    require_len("omega ratio", returns, 1)?;
    require_finite_scalar("threshold", threshold)?;

    let (gains, losses) = returns.iter().fold((0.0, 0.0), |(g, l), r| {
        if *r >= threshold {
            (g + (r - threshold), l)
        } else {
            (g, l + (threshold - r))
        }
    });

    if losses == 0.0 {
        return Err(AnalyticsError::degenerate(
            "omega ratio",
            format!("no returns below the threshold {threshold}"),
        ));
    }
    Ok(gains / losses)
}

/// Treynor ratio: annualized excess return over beta to the benchmark.
///
/// # Errors
///
/// - `DimensionMismatch` if the benchmark is not aligned
/// - `DegenerateInput` if the benchmark variance or the beta is zero
pub fn compute_treynor_ratio(
    returns: &[f64],
    benchmark: &[f64],
    risk_free: &RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    let beta = compute_beta(returns, benchmark)?;
    if beta == 0.0 {
        return Err(AnalyticsError::degenerate("treynor ratio", "beta is zero"));
    }
    Ok(excess_return(returns, risk_free, periods_per_year)? / beta)
}

/// Information ratio: annualized mean active return over tracking error.
///
/// # Errors
///
/// - `DimensionMismatch` if the benchmark is not aligned
/// - `InsufficientData` with fewer than two returns
/// - `DegenerateInput` if the tracking error is zero
pub fn compute_information_ratio(
    returns: &[f64],
    benchmark: &[f64],
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    require_periods_per_year(periods_per_year)?;
    let active = compute_active_returns(returns, benchmark)?;
    require_len("information ratio", &active, 2)?;

    let te = sample_std_dev(&active)
        .map_err(|e| AnalyticsError::from_math("information ratio", e))?;
    if te == 0.0 {
        return Err(AnalyticsError::degenerate(
            "information ratio",
            "tracking error is zero",
        ));
    }
    let mean_active =
        mean(&active).map_err(|e| AnalyticsError::from_math("information ratio", e))?;

    Ok(mean_active * periods_per_year / (te * periods_per_year.sqrt()))
}

/// Portfolio variance `wᵀ · Σ · w`.
///
/// # Errors
///
/// `DimensionMismatch` if the weight count differs from the matrix dimension.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::ratios::compute_portfolio_variance;
/// use vantage_core::CovarianceMatrix;
///
/// let cov = CovarianceMatrix::from_rows(&[vec![0.04, 0.01], vec![0.01, 0.09]]).unwrap();
/// let var = compute_portfolio_variance(&[0.5, 0.5], &cov).unwrap();
/// assert!((var - 0.0375).abs() < 1e-12);
/// ```
pub fn compute_portfolio_variance(
    weights: &[f64],
    covariance: &CovarianceMatrix,
) -> AnalyticsResult<f64> {
    if weights.len() != covariance.dimension() {
        return Err(AnalyticsError::dimension_mismatch(
            "portfolio weights",
            covariance.dimension(),
            weights.len(),
        ));
    }
    require_finite("weights", weights)?;
    quadratic_form(weights, covariance.as_matrix())
        .map_err(|e| AnalyticsError::from_math("portfolio variance", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vantage_core::ErrorKind;

    const RETURNS: [f64; 5] = [0.01, -0.02, 0.03, -0.01, 0.02];

    #[test]
    fn test_sharpe_ratio() {
        let vol = compute_annualized_volatility(&RETURNS, 252.0).unwrap();
        let annual = compute_annualized_return(&RETURNS, 252.0).unwrap();
        let sharpe = compute_sharpe_ratio(&RETURNS, &RiskFreeRate::zero(), 252.0).unwrap();
        assert_relative_eq!(sharpe, annual / vol, epsilon = 1e-12);

        let with_rf = compute_sharpe_ratio(&RETURNS, &RiskFreeRate::Annual(0.05), 252.0).unwrap();
        assert_relative_eq!(with_rf, (annual - 0.05) / vol, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_zero_volatility() {
        let err = compute_sharpe_ratio(&[0.01; 4], &RiskFreeRate::zero(), 12.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_sortino_ratio() {
        let sortino = compute_sortino_ratio(&RETURNS, &RiskFreeRate::zero(), 252.0).unwrap();
        let annual = compute_annualized_return(&RETURNS, 252.0).unwrap();
        // shortfalls 0.02 and 0.01
        let dd = (0.0005_f64 / 2.0).sqrt() * 252.0_f64.sqrt();
        assert_relative_eq!(sortino, annual / dd, epsilon = 1e-10);

        let err = compute_sortino_ratio(&[0.01, 0.02], &RiskFreeRate::zero(), 252.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_sortino_threshold() {
        // With a 1.5% threshold, 0.01 becomes a shortfall as well.
        let r = [0.01, 0.02, 0.03];
        assert!(compute_sortino_ratio(&r, &RiskFreeRate::zero(), 12.0).is_err());
        assert!(
            compute_sortino_ratio_with_threshold(&r, &RiskFreeRate::zero(), 12.0, 0.015).is_ok()
        );
    }

    #[test]
    fn test_calmar_ratio() {
        let annual = compute_annualized_return(&RETURNS, 252.0).unwrap();
        let calmar = compute_calmar_ratio(&RETURNS, 252.0).unwrap();
        assert_relative_eq!(calmar, annual / 0.02, epsilon = 1e-9);

        let err = compute_calmar_ratio(&[0.01, 0.0, 0.02], 252.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_sterling_ratio() {
        // Episodes of depth 2% and 1%.
        let annual = compute_annualized_return(&RETURNS, 12.0).unwrap();

        let one = compute_sterling_ratio(&RETURNS, 12.0, 1).unwrap();
        assert_relative_eq!(one, annual / 0.02, epsilon = 1e-9);

        let three = compute_sterling_ratio(&RETURNS, 12.0, 3).unwrap();
        assert_relative_eq!(three, annual / 0.015, epsilon = 1e-9);
    }

    #[test]
    fn test_sterling_errors() {
        assert_eq!(
            compute_sterling_ratio(&RETURNS, 12.0, 0).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            compute_sterling_ratio(&[0.01, 0.02], 12.0, 3)
                .unwrap_err()
                .kind(),
            ErrorKind::DegenerateInput
        );
    }

    #[test]
    fn test_omega_ratio() {
        let omega = compute_omega_ratio(&RETURNS, 0.0).unwrap();
        assert_relative_eq!(omega, 0.06 / 0.03, epsilon = 1e-12);

        let shifted = compute_omega_ratio(&RETURNS, 0.01).unwrap();
        assert_relative_eq!(shifted, 0.03 / 0.05, epsilon = 1e-12);

        let err = compute_omega_ratio(&[0.01, 0.02], 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_treynor_ratio() {
        let benchmark: Vec<f64> = RETURNS.iter().map(|r| r / 2.0).collect();
        let annual = compute_annualized_return(&RETURNS, 252.0).unwrap();
        let treynor =
            compute_treynor_ratio(&RETURNS, &benchmark, &RiskFreeRate::zero(), 252.0).unwrap();
        assert_relative_eq!(treynor, annual / 2.0, epsilon = 1e-9);

        let flat = [0.01; 5];
        let err =
            compute_treynor_ratio(&RETURNS, &flat, &RiskFreeRate::zero(), 252.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_information_ratio() {
        let benchmark = [0.0, -0.01, 0.02, -0.01, 0.01];
        // active = [0.01, -0.01, 0.01, 0.0, 0.01]
        let ir = compute_information_ratio(&RETURNS, &benchmark, 12.0).unwrap();
        let active = [0.01, -0.01, 0.01, 0.0, 0.01];
        let m = 0.004;
        let sd = sample_std_dev(&active).unwrap();
        assert_relative_eq!(ir, m * 12.0 / (sd * 12.0_f64.sqrt()), epsilon = 1e-9);

        let err = compute_information_ratio(&RETURNS, &RETURNS, 12.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);

        let err = compute_information_ratio(&RETURNS, &benchmark[..4], 12.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn test_portfolio_variance() {
        let cov = CovarianceMatrix::from_rows(&[
            vec![0.04, 0.006, 0.0],
            vec![0.006, 0.09, 0.0],
            vec![0.0, 0.0, 0.01],
        ])
        .unwrap();
        let w = [0.5, 0.3, 0.2];
        let expected = 0.25 * 0.04 + 0.09 * 0.09 + 0.04 * 0.01 + 2.0 * 0.5 * 0.3 * 0.006;
        assert_relative_eq!(
            compute_portfolio_variance(&w, &cov).unwrap(),
            expected,
            epsilon = 1e-12
        );

        let err = compute_portfolio_variance(&[0.5, 0.5], &cov).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }
}
