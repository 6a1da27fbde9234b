//! Up- and down-market capture against a benchmark.
//!
//! Both ratios compound the portfolio and benchmark returns over the
//! periods where the benchmark moved in the given direction, then divide
//! the compounded portfolio return by the compounded benchmark return.

use vantage_core::{AnalyticsError, AnalyticsResult};

use crate::returns::growth_factor;
use crate::validation::{require_aligned, require_finite_result, require_len};

fn capture_ratio(
    metric: &str,
    returns: &[f64],
    benchmark: &[f64],
    qualifies: fn(f64) -> bool,
) -> AnalyticsResult<f64> {
    require_aligned(metric, returns, benchmark)?;
    require_len(metric, returns, 1)?;

    let (portfolio, market): (Vec<f64>, Vec<f64>) = returns
        .iter()
        .zip(benchmark)
        .filter(|(_, b)| qualifies(**b))
        .map(|(r, b)| (*r, *b))
        .unzip();

    if market.is_empty() {
        return Err(AnalyticsError::degenerate(
            metric,
            "benchmark has no qualifying periods",
        ));
    }

    let market_return = growth_factor(metric, &market)? - 1.0;
    if market_return == 0.0 {
        return Err(AnalyticsError::degenerate(
            metric,
            "compounded benchmark return is zero",
        ));
    }

    let ratio = (growth_factor(metric, &portfolio)? - 1.0) / market_return;
    require_finite_result(metric, ratio)
}

/// Upside capture: compounded portfolio return over compounded benchmark
/// return across periods where the benchmark rose.
///
/// # Errors
///
/// - `DimensionMismatch` if the series differ in length
/// - `DegenerateInput` if the benchmark never rose
///
/// # Example
///
/// ```rust
/// use vantage_analytics::capture::compute_upside_capture_ratio;
///
/// let benchmark = [0.02, -0.01, 0.03];
/// let returns = [0.04, -0.01, 0.06];
/// let up = compute_upside_capture_ratio(&returns, &benchmark).unwrap();
/// assert!(up > 1.0);
/// ```
pub fn compute_upside_capture_ratio(returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<f64> {
    capture_ratio("upside capture", returns, benchmark, |b| b > 0.0)
}

/// Downside capture: the same ratio across periods where the benchmark
/// fell.
///
/// # Errors
///
/// - `DimensionMismatch` if the series differ in length
/// - `DegenerateInput` if the benchmark never fell
pub fn compute_downside_capture_ratio(
    returns: &[f64],
    benchmark: &[f64],
) -> AnalyticsResult<f64> {
    capture_ratio("downside capture", returns, benchmark, |b| b < 0.0)
}
