//! # Vantage
//!
//! Portfolio performance and risk analytics over time-ordered return series.
//!
//! This crate re-exports the public API of the Vantage workspace:
//! - [`core`]: series types, sampling frequency, risk-free rates, windows and errors
//! - [`math`]: descriptive statistics and the linear algebra used by the matrices
//! - [`analytics`]: returns, volatility, drawdowns, ratios and correlation
//!
//! ## Quick Start
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 101.0, 98.98, 101.95, 100.93, 102.95])
//!     .unwrap()
//!     .with_ticker("FUND");
//! let returns = compute_daily_returns(prices.prices()).unwrap();
//!
//! let calc = PerformanceCalculator::default();
//! let summary = calc.summary(&returns, &RiskFreeRate::zero()).unwrap();
//! assert!(summary.max_drawdown < 0.0);
//! assert!(summary.annualized_volatility > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-backed correlation and covariance matrix builders

#![warn(missing_docs)]

pub use vantage_analytics as analytics;
pub use vantage_core as core;
pub use vantage_math as math;

pub use vantage_analytics::{AnalyticsConfig, ConfigError, PerformanceCalculator, PerformanceSummary};
pub use vantage_core::{AnalyticsError, AnalyticsResult, ErrorKind};

/// Prelude module for convenient imports.
///
/// Brings every analytics function and core type into scope.
pub mod prelude {
    pub use vantage_analytics::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_facade_reexports() {
        let returns = [0.01, -0.02, 0.03, -0.01, 0.02];
        assert_relative_eq!(
            compute_max_drawdown(&returns).unwrap(),
            -0.02,
            epsilon = 1e-12
        );

        let mean = crate::math::statistics::mean(&returns).unwrap();
        assert_relative_eq!(mean, 0.006, epsilon = 1e-15);

        let err: crate::AnalyticsError = compute_hit_ratio(&[]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InsufficientData);
    }
}
