//! # Vantage Analytics
//!
//! Performance and risk analytics over time-ordered return series.
//!
//! This crate provides independent, stateless function groups:
//! - **Returns**: Period returns from prices, total and annualized return,
//!   mean returns, expected portfolio return
//! - **Volatility**: Annualized volatility, downside deviation and lazy
//!   rolling-window statistics
//! - **Distribution**: Skewness, excess kurtosis, hit ratio, gain/loss ratio
//! - **Drawdowns**: Wealth curves, maximum and average drawdown, recovery time
//! - **Capture**: Upside and downside capture against a benchmark
//! - **Correlation**: Pearson correlation and covariance matrices
//! - **Ratios**: Sharpe, Sortino, Calmar, Sterling, Omega, Treynor,
//!   Information ratio and portfolio variance
//! - **Benchmark**: Beta, Jensen's alpha, active returns, tracking error
//! - **Smoothing**: Simple and exponential moving averages
//!
//! ## Error Policy
//!
//! Every undefined result (zero variance, zero denominator, no qualifying
//! periods) is reported as a named [`AnalyticsError`]. No function returns
//! NaN or infinity.
//!
//! ## Usage
//!
//! ```rust
//! use vantage_analytics::prelude::*;
//!
//! let returns = [0.01, -0.02, 0.03, -0.01, 0.02];
//!
//! let vol = compute_annualized_volatility(&returns, 252.0).unwrap();
//! assert!(vol > 0.0);
//!
//! let mdd = compute_max_drawdown(&returns).unwrap();
//! assert!((mdd + 0.02).abs() < 1e-12);
//!
//! let sharpe = compute_sharpe_ratio(&returns, &RiskFreeRate::zero(), 252.0).unwrap();
//! assert!(sharpe.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for matrix builders

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod benchmark;
pub mod calculator;
pub mod capture;
pub mod config;
pub mod correlation;
pub mod distribution;
pub mod drawdowns;
pub mod parallel;
pub mod ratios;
pub mod returns;
pub mod smoothing;
pub mod volatility;

mod validation;

// Re-export the error types
pub use vantage_core::{AnalyticsError, AnalyticsResult, ErrorKind};

pub use calculator::{PerformanceCalculator, PerformanceSummary};
pub use config::{AnalyticsConfig, ConfigError};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vantage_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use vantage_core::prelude::*;

    pub use crate::benchmark::{
        compute_active_returns, compute_alpha, compute_beta, compute_tracking_error,
    };
    pub use crate::calculator::{PerformanceCalculator, PerformanceSummary};
    pub use crate::capture::{compute_downside_capture_ratio, compute_upside_capture_ratio};
    pub use crate::config::{AnalyticsConfig, ConfigError};
    pub use crate::correlation::{
        compute_correlation_matrix, compute_correlation_matrix_with, compute_covariance_matrix,
        compute_covariance_matrix_with,
    };
    pub use crate::distribution::{
        compute_gain_loss_ratio, compute_hit_ratio, compute_kurtosis, compute_kurtosis_with,
        compute_skewness, compute_skewness_with, MomentEstimator,
    };
    pub use crate::drawdowns::{
        compute_average_drawdown, compute_max_drawdown, compute_max_recovery_time,
        DrawdownEpisode, RecoveryPolicy, WealthCurve,
    };
    pub use crate::ratios::{
        compute_calmar_ratio, compute_information_ratio, compute_omega_ratio,
        compute_portfolio_variance, compute_sharpe_ratio, compute_sortino_ratio,
        compute_sortino_ratio_with_threshold, compute_sterling_ratio, compute_treynor_ratio,
    };
    pub use crate::returns::{
        compute_annualized_return, compute_daily_returns, compute_total_return,
        expected_portfolio_return, expected_portfolio_return_with_tolerance, mean_return,
        mean_returns, WEIGHT_TOLERANCE,
    };
    pub use crate::smoothing::{
        exponential_moving_average, simple_moving_average, SimpleMovingAverage,
    };
    pub use crate::volatility::{
        compute_annualized_volatility, compute_downside_deviation, compute_rolling_sharpe,
        compute_rolling_sortino, compute_rolling_standard_deviation, compute_rolling_volatility,
        RollingWindows,
    };
}
