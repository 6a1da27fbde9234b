//! Domain value types.

mod frequency;
mod matrix;
mod risk_free;
mod series;
mod window;

pub use frequency::Frequency;
pub use matrix::{CorrelationMatrix, CovarianceMatrix};
pub use risk_free::RiskFreeRate;
pub use series::{BenchmarkSeries, PriceSeries, ReturnSeries};
pub use window::Window;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(name: &str, values: &[f64]) -> AnalyticsResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(AnalyticsError::invalid_parameter(
            name,
            format!("non-finite value {} at index {i}", values[i]),
        )),
        None => Ok(()),
    }
}
