//! Period, total, annualized and mean returns.
//!
//! Every other module builds on these: the wealth curve compounds the same
//! growth factors as [`compute_total_return`], and the excess-return ratios
//! use [`compute_annualized_return`] as their numerator.

use vantage_core::{AnalyticsError, AnalyticsResult, ReturnSeries, RiskFreeRate};
use vantage_math::statistics::mean;

use crate::validation::{
    require_finite_result, require_len, require_periods_per_year, require_series_list,
};

/// Accepted absolute deviation of portfolio weights from summing to 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Converts prices to simple period-over-period returns.
///
/// Element `i` of the result is `prices[i + 1] / prices[i] - 1`.
///
/// # Errors
///
/// - `InsufficientData` with fewer than two prices
/// - `InvalidParameter` for a non-finite or non-positive price
///
/// # Example
///
/// ```rust
/// use vantage_analytics::returns::compute_daily_returns;
///
/// let returns = compute_daily_returns(&[100.0, 110.0, 99.0]).unwrap();
/// assert!((returns[0] - 0.10).abs() < 1e-12);
/// assert!((returns[1] + 0.10).abs() < 1e-12);
/// ```
pub fn compute_daily_returns(prices: &[f64]) -> AnalyticsResult<ReturnSeries> {
    require_len("daily returns", prices, 2)?;
    if let Some(p) = prices.iter().find(|p| **p <= 0.0) {
        return Err(AnalyticsError::invalid_parameter(
            "prices",
            format!("prices must be positive, got {p}"),
        ));
    }

    let returns = prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
    ReturnSeries::new(returns)
}

/// Compounded growth factor `∏(1 + r)`, failing if the product overflows.
pub(crate) fn growth_factor(metric: &str, returns: &[f64]) -> AnalyticsResult<f64> {
    require_finite_result(metric, returns.iter().map(|r| 1.0 + r).product())
}

/// Compounds the series into a single holding-period return.
///
/// # Errors
///
/// - `InsufficientData` for an empty series
/// - `DegenerateInput` if compounding overflows
pub fn compute_total_return(returns: &[f64]) -> AnalyticsResult<f64> {
    require_len("total return", returns, 1)?;
    Ok(growth_factor("total return", returns)? - 1.0)
}

/// Geometric annualized return `(1 + total)^(ppy / n) - 1`.
///
/// # Errors
///
/// - `InsufficientData` for an empty series
/// - `InvalidParameter` if `periods_per_year` is not positive
/// - `DegenerateInput` if the compounded growth is zero or negative, or if
///   compounding or annualizing overflows
pub fn compute_annualized_return(returns: &[f64], periods_per_year: f64) -> AnalyticsResult<f64> {
    require_len("annualized return", returns, 1)?;
    require_periods_per_year(periods_per_year)?;

    let growth = growth_factor("annualized return", returns)?;
    if growth <= 0.0 {
        return Err(AnalyticsError::degenerate(
            "annualized return",
            format!("compounded growth factor {growth} is not positive"),
        ));
    }

    let annualized = growth.powf(periods_per_year / returns.len() as f64);
    Ok(require_finite_result("annualized return", annualized)? - 1.0)
}

/// Arithmetic mean of one return series.
pub fn mean_return(returns: &[f64]) -> AnalyticsResult<f64> {
    require_len("mean return", returns, 1)?;
    mean(returns).map_err(|e| AnalyticsError::from_math("mean return", e))
}

/// Mean return of each series, in input order.
///
/// The result is the per-asset vector consumed by
/// [`expected_portfolio_return`]. A single series yields its simple mean.
///
/// # Errors
///
/// - `InsufficientData` for an empty list or an empty series
/// - `DimensionMismatch` if the series differ in length
pub fn mean_returns<S: AsRef<[f64]>>(series_list: &[S]) -> AnalyticsResult<Vec<f64>> {
    if series_list.is_empty() {
        return Err(AnalyticsError::insufficient_data("mean returns", 1, 0));
    }
    require_series_list("mean returns", series_list, 1)?
        .into_iter()
        .map(mean_return)
        .collect()
}

/// Weighted sum of per-asset mean returns.
///
/// Weights must sum to 1 within [`WEIGHT_TOLERANCE`].
///
/// # Errors
///
/// - `DimensionMismatch` if the vectors differ in length
/// - `WeightsNotNormalized` (kind `DimensionMismatch`) if the weights do not
///   sum to 1
///
/// # Example
///
/// ```rust
/// use vantage_analytics::returns::expected_portfolio_return;
///
/// let r = expected_portfolio_return(&[0.6, 0.4], &[0.01, 0.02]).unwrap();
/// assert!((r - 0.014).abs() < 1e-12);
///
/// assert!(expected_portfolio_return(&[0.6, 0.5], &[0.01, 0.02]).is_err());
/// ```
pub fn expected_portfolio_return(weights: &[f64], mean_returns: &[f64]) -> AnalyticsResult<f64> {
    expected_portfolio_return_with_tolerance(weights, mean_returns, WEIGHT_TOLERANCE)
}

/// [`expected_portfolio_return`] with an explicit weight tolerance.
///
/// # Errors
///
/// As [`expected_portfolio_return`], plus `InvalidParameter` for a negative
/// or non-finite `tolerance`.
pub fn expected_portfolio_return_with_tolerance(
    weights: &[f64],
    mean_returns: &[f64],
    tolerance: f64,
) -> AnalyticsResult<f64> {
    if weights.len() != mean_returns.len() {
        return Err(AnalyticsError::dimension_mismatch(
            "portfolio weights",
            mean_returns.len(),
            weights.len(),
        ));
    }
    require_len("expected portfolio return", weights, 1)?;
    require_len("expected portfolio return", mean_returns, 1)?;
    check_weights(weights, tolerance)?;

    vantage_math::linear_algebra::dot(weights, mean_returns)
        .map_err(|e| AnalyticsError::from_math("expected portfolio return", e))
}

pub(crate) fn check_weights(weights: &[f64], tolerance: f64) -> AnalyticsResult<()> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(AnalyticsError::invalid_parameter(
            "weight_tolerance",
            format!("must be non-negative, got {tolerance}"),
        ));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(AnalyticsError::WeightsNotNormalized { sum, tolerance });
    }
    Ok(())
}

/// Annualizes a risk-free rate for a return series of `len` periods.
pub(crate) fn annualize_risk_free(
    risk_free: &RiskFreeRate,
    len: usize,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    risk_free.validate(len)?;
    match risk_free {
        RiskFreeRate::PerPeriod(r) => {
            let growth = (1.0 + r).powf(periods_per_year);
            Ok(require_finite_result("risk-free rate", growth)? - 1.0)
        }
        RiskFreeRate::Annual(r) => Ok(*r),
        RiskFreeRate::Series(rates) => compute_annualized_return(rates, periods_per_year),
    }
}
