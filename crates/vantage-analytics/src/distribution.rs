//! Shape of the return distribution.

use serde::{Deserialize, Serialize};
use vantage_core::{AnalyticsError, AnalyticsResult};
use vantage_math::statistics::{central_moments, CentralMoments};

use crate::validation::require_len;

/// Estimator used for the standardized third and fourth moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MomentEstimator {
    /// Biased population estimator (`g1`, `g2`).
    Population,
    /// Bias-corrected sample estimator (`G1`, `G2`).
    #[default]
    SampleAdjusted,
}

/// Central moments of a series that is long enough and not constant.
fn moments(metric: &str, returns: &[f64], required: usize) -> AnalyticsResult<CentralMoments> {
    require_len(metric, returns, required)?;
    let m = central_moments(returns).map_err(|e| AnalyticsError::from_math(metric, e))?;
    if m.m2 == 0.0 {
        return Err(AnalyticsError::degenerate(metric, "standard deviation is zero"));
    }
    Ok(m)
}

/// Sample-adjusted skewness (adjusted Fisher-Pearson coefficient `G1`).
///
/// # Errors
///
/// - `InsufficientData` with fewer than three returns
/// - `DegenerateInput` if all returns are equal
pub fn compute_skewness(returns: &[f64]) -> AnalyticsResult<f64> {
    compute_skewness_with(returns, MomentEstimator::SampleAdjusted)
}

/// Skewness with an explicit estimator.
///
/// The population estimator is `g1 = m3 / m2^1.5`; the sample-adjusted one
/// is `G1 = g1 * sqrt(n(n-1)) / (n-2)`.
pub fn compute_skewness_with(returns: &[f64], estimator: MomentEstimator) -> AnalyticsResult<f64> {
    let m = moments("skewness", returns, 3)?;
    let g1 = m.m3 / m.m2.powf(1.5);

    Ok(match estimator {
        MomentEstimator::Population => g1,
        MomentEstimator::SampleAdjusted => {
            let n = m.count as f64;
            g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
        }
    })
}

/// Population excess kurtosis `g2 = m4 / m2² - 3`.
///
/// # Errors
///
/// - `InsufficientData` with fewer than three returns
/// - `DegenerateInput` if all returns are equal
pub fn compute_kurtosis(returns: &[f64]) -> AnalyticsResult<f64> {
    compute_kurtosis_with(returns, MomentEstimator::Population)
}

/// Excess kurtosis with an explicit estimator.
///
/// The sample-adjusted estimator
/// `G2 = ((n+1) g2 + 6) (n-1) / ((n-2)(n-3))` needs at least four returns.
pub fn compute_kurtosis_with(returns: &[f64], estimator: MomentEstimator) -> AnalyticsResult<f64> {
    let required = match estimator {
        MomentEstimator::Population => 3,
        MomentEstimator::SampleAdjusted => 4,
    };
    let m = moments("kurtosis", returns, required)?;
    let g2 = m.m4 / (m.m2 * m.m2) - 3.0;

    Ok(match estimator {
        MomentEstimator::Population => g2,
        MomentEstimator::SampleAdjusted => {
            let n = m.count as f64;
            ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
        }
    })
}

/// Fraction of periods with a strictly positive return.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::distribution::compute_hit_ratio;
///
/// assert_eq!(compute_hit_ratio(&[0.01, -0.02, 0.0, 0.03]).unwrap(), 0.5);
/// ```
pub fn compute_hit_ratio(returns: &[f64]) -> AnalyticsResult<f64> {
    require_len("hit ratio", returns, 1)?;
    let hits = returns.iter().filter(|r| **r > 0.0).count();
    Ok(hits as f64 / returns.len() as f64)
}

/// Mean gain over mean loss magnitude.
///
/// Zero returns count as neither. A series with losses but no gains has a
/// ratio of `0.0`.
///
/// # Errors
///
/// `DegenerateInput` if there are no negative returns.
pub fn compute_gain_loss_ratio(returns: &[f64]) -> AnalyticsResult<f64> {
    require_len("gain/loss ratio", returns, 1)?;

    let (gain_sum, gain_count, loss_sum, loss_count) =
        returns
            .iter()
            .fold((0.0, 0usize, 0.0, 0usize), |(gs, gc, ls, lc), r| {
                if *r > 0.0 {
                    (gs + r, gc + 1, ls, lc)
                } else if *r < 0.0 {
                    (gs, gc, ls - r, lc + 1)
                } else {
                    (gs, gc, ls, lc)
                }
            });

    if loss_count == 0 {
        return Err(AnalyticsError::degenerate(
            "gain/loss ratio",
            "no negative returns",
        ));
    }
    if gain_count == 0 {
        return Ok(0.0);
    }

    let mean_gain = gain_sum / gain_count as f64;
    let mean_loss = loss_sum / loss_count as f64;
    Ok(mean_gain / mean_loss)
}
