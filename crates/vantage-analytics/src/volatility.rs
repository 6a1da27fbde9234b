//! Volatility and rolling-window statistics.
//!
//! Rolling computations are lazy: each returns an iterator over window
//! results that borrows the input series. The iterators are `Clone`, so a
//! caller can re-walk the same windows deterministically without the
//! results ever being buffered.

use std::iter::FusedIterator;

use log::debug;
use vantage_core::{AnalyticsError, AnalyticsResult, RiskFreeRate, Window};
use vantage_math::statistics::sample_std_dev;

use crate::ratios::{compute_sharpe_ratio, compute_sortino_ratio};
use crate::validation::{
    require_finite, require_finite_scalar, require_len, require_periods_per_year,
};

/// Annualized volatility: sample standard deviation (divisor `n - 1`)
/// times `sqrt(periods_per_year)`.
///
/// # Errors
///
/// - `InsufficientData` if fewer than two returns are supplied
/// - `InvalidParameter` if `periods_per_year` is not positive
///
/// # Example
///
/// ```rust
/// use vantage_analytics::volatility::compute_annualized_volatility;
///
/// let vol = compute_annualized_volatility(&[0.01, -0.01, 0.01, -0.01], 252.0).unwrap();
/// assert!(vol > 0.0);
///
/// let flat = compute_annualized_volatility(&[0.01, 0.01, 0.01], 252.0).unwrap();
/// assert_eq!(flat, 0.0);
/// ```
pub fn compute_annualized_volatility(returns: &[f64], periods_per_year: f64) -> AnalyticsResult<f64> {
    require_len("annualized volatility", returns, 2)?;
    require_periods_per_year(periods_per_year)?;

    let sd = sample_std_dev(returns)
        .map_err(|e| AnalyticsError::from_math("annualized volatility", e))?;
    Ok(sd * periods_per_year.sqrt())
}

/// Annualized downside deviation below a minimum acceptable return.
///
/// Root mean square of the shortfalls `mar - r` taken over the returns that
/// fall strictly below `mar`, scaled by `sqrt(periods_per_year)`.
///
/// # Errors
///
/// `DegenerateInput` if no return falls below `mar`.
pub fn compute_downside_deviation(
    returns: &[f64],
    mar: f64,
    periods_per_year: f64,
) -> AnalyticsResult<f64> {
    require_len("downside deviation", returns, 1)?;
    require_finite_scalar("minimum_acceptable_return", mar)?;
    require_periods_per_year(periods_per_year)?;

    let (sum_sq, count) = returns
        .iter()
        .filter(|r| **r < mar)
        .fold((0.0, 0usize), |(s, c), r| (s + (mar - r) * (mar - r), c + 1));

    if count == 0 {
        return Err(AnalyticsError::degenerate(
            "downside deviation",
            format!("no returns below the threshold {mar}"),
        ));
    }

    let dd = (sum_sq / count as f64).sqrt();
    if dd == 0.0 {
        return Err(AnalyticsError::degenerate(
            "downside deviation",
            "shortfalls are too small to measure",
        ));
    }

    Ok(dd * periods_per_year.sqrt())
}

/// Lazy iterator over the windows of a series.
///
/// Yields `values[start..start + size]` for `start = 0, step, 2 * step, ...`
/// while a complete window fits.
#[derive(Debug, Clone)]
pub struct RollingWindows<'a> {
    values: &'a [f64],
    size: usize,
    step: usize,
    next_start: usize,
    remaining: usize,
}

impl<'a> RollingWindows<'a> {
    /// Creates the window iterator.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the window is longer than the series.
    pub fn new(values: &'a [f64], window: Window) -> AnalyticsResult<Self> {
        if window.size() > values.len() {
            return Err(AnalyticsError::invalid_parameter(
                "window.size",
                format!(
                    "window of {} exceeds series length {}",
                    window.size(),
                    values.len()
                ),
            ));
        }
        Ok(Self {
            values,
            size: window.size(),
            step: window.step(),
            next_start: 0,
            remaining: window.count(values.len()),
        })
    }
}

impl<'a> Iterator for RollingWindows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next_start;
        self.next_start += self.step;
        self.remaining -= 1;
        self.values.get(start..start + self.size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RollingWindows<'_> {}

impl FusedIterator for RollingWindows<'_> {}

fn rolling_windows<'a>(
    metric: &str,
    returns: &'a [f64],
    window: Window,
) -> AnalyticsResult<RollingWindows<'a>> {
    require_finite(metric, returns)?;
    let windows = RollingWindows::new(returns, window)?;
    debug!(
        "{metric}: {} windows of {} over {} observations",
        windows.len(),
        window.size(),
        returns.len()
    );
    Ok(windows)
}

// Windows hold at least `Window::MIN_SIZE` finite values, so the sample
// deviation is always defined.
fn window_std_dev(values: &[f64]) -> f64 {
    sample_std_dev(values).unwrap_or(0.0)
}

/// Per-window sample standard deviation.
///
/// Yields `(n - size) / step + 1` values.
///
/// # Errors
///
/// `InvalidParameter` if `window.size()` exceeds the series length.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::volatility::compute_rolling_standard_deviation;
/// use vantage_core::Window;
///
/// let returns = [0.01, 0.02, 0.01, 0.02, 0.01];
/// let rolling = compute_rolling_standard_deviation(&returns, Window::new(3).unwrap()).unwrap();
/// assert_eq!(rolling.len(), 3);
/// ```
pub fn compute_rolling_standard_deviation(
    returns: &[f64],
    window: Window,
) -> AnalyticsResult<impl ExactSizeIterator<Item = f64> + Clone + '_> {
    Ok(rolling_windows("rolling standard deviation", returns, window)?.map(window_std_dev))
}

/// Per-window annualized volatility.
pub fn compute_rolling_volatility(
    returns: &[f64],
    window: Window,
    periods_per_year: f64,
) -> AnalyticsResult<impl ExactSizeIterator<Item = f64> + Clone + '_> {
    require_periods_per_year(periods_per_year)?;
    let scale = periods_per_year.sqrt();
    Ok(rolling_windows("rolling volatility", returns, window)?
        .map(move |w| window_std_dev(w) * scale))
}

/// Per-window Sharpe ratio.
///
/// A series risk-free rate is sliced to each window. Each item is the
/// result of [`compute_sharpe_ratio`] over that window, so a window with
/// zero volatility yields `Err(DegenerateInput)` without ending the
/// iteration.
///
/// # Errors
///
/// Fails up front on an oversized window, a bad annualization factor or a
/// risk-free series of the wrong length.
pub fn compute_rolling_sharpe<'a>(
    returns: &'a [f64],
    window: Window,
    risk_free: &'a RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<impl ExactSizeIterator<Item = AnalyticsResult<f64>> + Clone + 'a> {
    require_periods_per_year(periods_per_year)?;
    risk_free.validate(returns.len())?;
    let windows = rolling_windows("rolling sharpe", returns, window)?;
    let step = window.step();

    Ok(windows.enumerate().map(move |(i, w)| {
        let rate = risk_free.window(i * step, w.len())?;
        compute_sharpe_ratio(w, &rate, periods_per_year)
    }))
}

/// Per-window Sortino ratio with a zero minimum acceptable return.
///
/// Windows without a negative return yield `Err(DegenerateInput)`.
pub fn compute_rolling_sortino<'a>(
    returns: &'a [f64],
    window: Window,
    risk_free: &'a RiskFreeRate,
    periods_per_year: f64,
) -> AnalyticsResult<impl ExactSizeIterator<Item = AnalyticsResult<f64>> + Clone + 'a> {
    require_periods_per_year(periods_per_year)?;
    risk_free.validate(returns.len())?;
    let windows = rolling_windows("rolling sortino", returns, window)?;
    let step = window.step();

    Ok(windows.enumerate().map(move |(i, w)| {
        let rate = risk_free.window(i * step, w.len())?;
        compute_sortino_ratio(w, &rate, periods_per_year)
    }))
}
