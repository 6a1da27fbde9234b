//! Descriptive statistics over `f64` slices.
//!
//! All estimators use two passes (mean first, then deviations). A slice whose
//! elements are all identical is detected up front and reported with a
//! variance of exactly `0.0`, so callers can rely on `== 0.0` checks without
//! rounding noise from the mean.

use crate::error::{MathError, MathResult};

/// Population central moments of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Second central moment (population variance).
    pub m2: f64,
    /// Third central moment.
    pub m3: f64,
    /// Fourth central moment.
    pub m4: f64,
}

/// Returns the arithmetic mean.
///
/// # Example
///
/// ```rust
/// use vantage_math::statistics::mean;
///
/// let m = mean(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((m - 2.0).abs() < 1e-12);
/// ```
pub fn mean(xs: &[f64]) -> MathResult<f64> {
    if xs.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Returns true if every element equals the first one.
///
/// An empty slice is considered constant.
pub fn is_constant(xs: &[f64]) -> bool {
    match xs.first() {
        Some(first) => xs.iter().all(|x| x == first),
        None => true,
    }
}

/// Sum of squared deviations from the mean.
fn sum_squared_deviations(xs: &[f64]) -> MathResult<f64> {
    let m = mean(xs)?;
    if is_constant(xs) {
        return Ok(0.0);
    }
    Ok(xs.iter().map(|x| (x - m) * (x - m)).sum())
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
pub fn sample_variance(xs: &[f64]) -> MathResult<f64> {
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    Ok(sum_squared_deviations(xs)? / (xs.len() - 1) as f64)
}

/// Population variance (divisor `n`).
pub fn population_variance(xs: &[f64]) -> MathResult<f64> {
    Ok(sum_squared_deviations(xs)? / xs.len() as f64)
}

/// Sample standard deviation (divisor `n - 1`).
pub fn sample_std_dev(xs: &[f64]) -> MathResult<f64> {
    sample_variance(xs).map(f64::sqrt)
}

/// Population standard deviation (divisor `n`).
pub fn population_std_dev(xs: &[f64]) -> MathResult<f64> {
    population_variance(xs).map(f64::sqrt)
}

/// Sample covariance of two paired series (divisor `n - 1`).
pub fn sample_covariance(xs: &[f64], ys: &[f64]) -> MathResult<f64> {
    if xs.len() != ys.len() {
        return Err(MathError::length_mismatch(xs.len(), ys.len()));
    }
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if is_constant(xs) || is_constant(ys) {
        return Ok(0.0);
    }

    let mx = mean(xs)?;
    let my = mean(ys)?;
    let sum: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mx) * (y - my))
        .sum();

    Ok(sum / (xs.len() - 1) as f64)
}

/// Pearson product-moment correlation of two paired series.
///
/// The result is clamped to `[-1, 1]` to absorb rounding drift.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if either series has zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> MathResult<f64> {
    if xs.len() != ys.len() {
        return Err(MathError::length_mismatch(xs.len(), ys.len()));
    }
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if is_constant(xs) || is_constant(ys) {
        return Err(MathError::division_by_zero(0.0));
    }

    let mx = mean(xs)?;
    let my = mean(ys)?;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return Err(MathError::division_by_zero(denom));
    }

    Ok((sxy / denom).clamp(-1.0, 1.0))
}

/// Computes the population central moments up to order four.
pub fn central_moments(xs: &[f64]) -> MathResult<CentralMoments> {
    let m = mean(xs)?;
    let n = xs.len() as f64;

    if is_constant(xs) {
        return Ok(CentralMoments {
            count: xs.len(),
            mean: m,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
        });
    }

    let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
    for x in xs {
        let d = x - m;
        let d2 = d * d;
        s2 += d2;
        s3 += d2 * d;
        s4 += d2 * d2;
    }

    Ok(CentralMoments {
        count: xs.len(),
        mean: m,
        m2: s2 / n,
        m3: s3 / n,
        m4: s4 / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sample_variance() {
        // Deviations from 5: -3, -1, -1, -1, 0, 0, 2, 4 -> sum of squares 32
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sample_variance(&xs).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&xs).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(population_std_dev(&xs).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_has_exact_zero_variance() {
        let xs = [0.1, 0.1, 0.1];
        assert_eq!(sample_variance(&xs).unwrap(), 0.0);
        assert_eq!(central_moments(&xs).unwrap().m2, 0.0);
    }

    #[test]
    fn test_sample_variance_needs_two_points() {
        assert_eq!(
            sample_variance(&[1.0]),
            Err(MathError::insufficient_data(2, 1))
        );
    }

    #[test]
    fn test_covariance() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0];
        assert_relative_eq!(sample_covariance(&xs, &ys).unwrap(), 2.0, epsilon = 1e-12);
        assert!(matches!(
            sample_covariance(&xs, &ys[..2]),
            Err(MathError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_pearson() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson_correlation(&xs, &up).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pearson_correlation(&xs, &down).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_zero_variance() {
        let xs = [1.0, 2.0, 3.0];
        let flat = [5.0, 5.0, 5.0];
        assert!(matches!(
            pearson_correlation(&xs, &flat),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_central_moments_symmetric() {
        let m = central_moments(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(m.count, 3);
        assert_relative_eq!(m.mean, 0.0);
        assert_relative_eq!(m.m2, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(m.m3, 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.m4, 2.0 / 3.0, epsilon = 1e-12);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn variance_is_non_negative(xs in prop::collection::vec(-1.0f64..1.0, 2..50)) {
                prop_assert!(sample_variance(&xs).unwrap() >= 0.0);
                prop_assert!(population_variance(&xs).unwrap() >= 0.0);
            }

            #[test]
            fn covariance_is_symmetric(
                pairs in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 2..50),
            ) {
                let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                prop_assert_eq!(
                    sample_covariance(&xs, &ys).unwrap(),
                    sample_covariance(&ys, &xs).unwrap()
                );
            }

            #[test]
            fn correlation_is_bounded(
                pairs in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 3..50),
            ) {
                let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                if let Ok(rho) = pearson_correlation(&xs, &ys) {
                    prop_assert!((-1.0..=1.0).contains(&rho));
                }
            }
        }
    }
}
