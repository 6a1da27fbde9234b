//! Moving averages over price or return series.

use std::iter::FusedIterator;

use vantage_core::{AnalyticsError, AnalyticsResult, Window};

use crate::validation::{require_finite, require_len};

/// Lazy simple moving average.
///
/// Overlapping windows update a running sum: the values leaving the window
/// are subtracted and the values entering it are added, so each step costs
/// `step` operations rather than `size`.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage<'a> {
    values: &'a [f64],
    size: usize,
    step: usize,
    next_start: usize,
    remaining: usize,
    sum: Option<f64>,
}

impl Iterator for SimpleMovingAverage<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next_start;
        let end = start + self.size;

        let sum = match self.sum {
            Some(prev) if self.step < self.size => {
                let leaving: f64 = self.values[start - self.step..start].iter().sum();
                let entering: f64 = self.values[end - self.step..end].iter().sum();
                prev - leaving + entering
            }
            _ => self.values[start..end].iter().sum(),
        };

        self.sum = Some(sum);
        self.next_start += self.step;
        self.remaining -= 1;
        Some(sum / self.size as f64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SimpleMovingAverage<'_> {}

impl FusedIterator for SimpleMovingAverage<'_> {}

/// Simple moving average, one value per window position.
///
/// # Errors
///
/// - `InvalidParameter` for a non-finite value
/// - `InvalidParameter` if the window is longer than the series
///
/// # Example
///
/// ```rust
/// use vantage_analytics::smoothing::simple_moving_average;
/// use vantage_core::Window;
///
/// let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sma: Vec<f64> = simple_moving_average(&prices, Window::new(3).unwrap())
///     .unwrap()
///     .collect();
/// assert_eq!(sma, vec![2.0, 3.0, 4.0]);
/// ```
pub fn simple_moving_average(
    values: &[f64],
    window: Window,
) -> AnalyticsResult<SimpleMovingAverage<'_>> {
    require_finite("values", values)?;
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

    Ok(SimpleMovingAverage {
        values,
        size: window.size(),
        step: window.step(),
        next_start: 0,
        remaining: window.count(values.len()),
        sum: None,
    })
}

/// Exponential moving average with smoothing `alpha = 2 / (span + 1)`,
/// seeded with the first value.
///
/// # Errors
///
/// - `InsufficientData` for an empty series
/// - `InvalidParameter` if `span` is zero
pub fn exponential_moving_average(values: &[f64], span: usize) -> AnalyticsResult<Vec<f64>> {
    require_len("exponential moving average", values, 1)?;
    if span == 0 {
        return Err(AnalyticsError::invalid_parameter("span", "must be at least 1"));
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len());
    let mut current = values[0];
    ema.push(current);
    for v in &values[1..] {
        current = alpha * v + (1.0 - alpha) * current;
        ema.push(current);
    }
    Ok(ema)
}
