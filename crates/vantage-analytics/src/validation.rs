//! Precondition checks shared by every metric.

use vantage_core::{AnalyticsError, AnalyticsResult};

/// Requires at least `required` finite observations.
pub(crate) fn require_len(metric: &str, values: &[f64], required: usize) -> AnalyticsResult<()> {
    if values.len() < required {
        return Err(AnalyticsError::insufficient_data(metric, required, values.len()));
    }
    require_finite(metric, values)
}

/// Rejects NaN and infinite values.
pub(crate) fn require_finite(name: &str, values: &[f64]) -> AnalyticsResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(AnalyticsError::invalid_parameter(
            name,
            format!("non-finite value {} at index {i}", values[i]),
        )),
        None => Ok(()),
    }
}

/// Rejects a NaN or infinite scalar parameter.
pub(crate) fn require_finite_scalar(name: &str, value: f64) -> AnalyticsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_parameter(
            name,
            format!("must be finite, got {value}"),
        ))
    }
}

/// Passes a computed value through, reporting overflow to infinity (or a
/// NaN produced by it) as `DegenerateInput`.
pub(crate) fn require_finite_result(metric: &str, value: f64) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::degenerate(
            metric,
            format!("result {value} is not representable as a finite number"),
        ))
    }
}

/// Requires a benchmark aligned index-for-index with the subject series.
pub(crate) fn require_aligned(
    metric: &str,
    subject: &[f64],
    benchmark: &[f64],
) -> AnalyticsResult<()> {
    if subject.len() != benchmark.len() {
        return Err(AnalyticsError::dimension_mismatch(
            format!("{metric} benchmark"),
            subject.len(),
            benchmark.len(),
        ));
    }
    require_finite(metric, benchmark)
}

/// Requires a positive, finite annualization factor.
pub(crate) fn require_periods_per_year(periods_per_year: f64) -> AnalyticsResult<()> {
    if periods_per_year.is_finite() && periods_per_year > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_parameter(
            "periods_per_year",
            format!("must be positive, got {periods_per_year}"),
        ))
    }
}

/// Requires a non-empty list of equally long series of at least `required`
/// finite observations each.
pub(crate) fn require_series_list<'a, S: AsRef<[f64]>>(
    metric: &str,
    series_list: &'a [S],
    required: usize,
) -> AnalyticsResult<Vec<&'a [f64]>> {
    let slices: Vec<&[f64]> = series_list.iter().map(AsRef::as_ref).collect();
    if let Some(first) = slices.first() {
        let len = first.len();
        if let Some(other) = slices.iter().find(|s| s.len() != len) {
            return Err(AnalyticsError::dimension_mismatch(
                format!("{metric} series length"),
                len,
                other.len(),
            ));
        }
        for s in &slices {
            require_len(metric, s, required)?;
        }
    }
    Ok(slices)
}
