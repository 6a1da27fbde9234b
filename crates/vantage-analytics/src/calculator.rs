//! Configured entry point for computing many metrics.
//!
//! [`PerformanceCalculator`] binds an [`AnalyticsConfig`] so the
//! annualization factor, thresholds and recovery policy are chosen once
//! instead of at every call.
//!
//! # Example
//!
//! ```rust
//! use vantage_analytics::{AnalyticsConfig, PerformanceCalculator};
//! use vantage_core::{Frequency, RiskFreeRate};
//!
//! let config = AnalyticsConfig::new()
//!     .with_periods_per_year(Frequency::Monthly.periods_per_year());
//! let calc = PerformanceCalculator::new(config).unwrap();
//!
//! let returns = [0.02, -0.01, 0.015, -0.03, 0.025, 0.01];
//! let summary = calc.summary(&returns, &RiskFreeRate::Annual(0.02)).unwrap();
//!
//! assert!(summary.annualized_volatility > 0.0);
//! assert!(summary.max_drawdown <= 0.0);
//! ```

use serde::{Deserialize, Serialize};
use vantage_core::{
    AnalyticsError, AnalyticsResult, CorrelationMatrix, CovarianceMatrix, ErrorKind,
    RiskFreeRate, Window,
};

use crate::benchmark::{compute_alpha, compute_beta, compute_tracking_error};
use crate::capture::{compute_downside_capture_ratio, compute_upside_capture_ratio};
use crate::config::AnalyticsConfig;
use crate::correlation::{compute_correlation_matrix_with, compute_covariance_matrix_with};
use crate::distribution::{
    compute_gain_loss_ratio, compute_hit_ratio, compute_kurtosis_with, compute_skewness_with,
};
use crate::drawdowns::{compute_average_drawdown, compute_max_drawdown, compute_max_recovery_time};
use crate::parallel::maybe_parallel_map;
use crate::ratios::{
    compute_calmar_ratio, compute_information_ratio, compute_omega_ratio,
    compute_sharpe_ratio, compute_sortino_ratio_with_threshold, compute_sterling_ratio,
    compute_treynor_ratio,
};
use crate::returns::{
    compute_annualized_return, compute_total_return, expected_portfolio_return_with_tolerance,
    mean_return,
};
use crate::validation::require_series_list;
use crate::volatility::{
    compute_annualized_volatility, compute_downside_deviation, compute_rolling_sharpe,
    compute_rolling_volatility,
};

/// Headline statistics of a single return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Compounded holding-period return.
    pub total_return: f64,
    /// Geometric annualized return.
    pub annualized_return: f64,
    /// Annualized sample volatility.
    pub annualized_volatility: f64,
    /// Sharpe ratio, if volatility is non-zero.
    pub sharpe_ratio: Option<f64>,
    /// Sortino ratio, if any return falls below the threshold.
    pub sortino_ratio: Option<f64>,
    /// Maximum drawdown (non-positive).
    pub max_drawdown: f64,
    /// Longest recovery time in periods under the configured policy.
    pub max_recovery_time: usize,
    /// Fraction of positive periods.
    pub hit_ratio: f64,
}

/// Metric calculator bound to an [`AnalyticsConfig`].
#[derive(Debug, Clone, Default)]
pub struct PerformanceCalculator {
    config: AnalyticsConfig,
}

impl PerformanceCalculator {
    /// Creates a calculator after validating the configuration.
    pub fn new(config: AnalyticsConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The bound configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    fn periods_per_year(&self) -> f64 {
        self.config.periods_per_year
    }

    // ---- Returns ----

    /// Geometric annualized return.
    pub fn annualized_return(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_annualized_return(returns, self.periods_per_year())
    }

    /// Mean return of each series, fanned out across threads for large lists.
    pub fn mean_returns<S: AsRef<[f64]>>(&self, series_list: &[S]) -> AnalyticsResult<Vec<f64>> {
        let series = require_series_list("mean returns", series_list, 1)?;
        if series.is_empty() {
            return Err(AnalyticsError::insufficient_data("mean returns", 1, 0));
        }
        maybe_parallel_map(&series, &self.config, |s| mean_return(s))
            .into_iter()
            .collect()
    }

    /// Expected portfolio return under the configured weight tolerance.
    pub fn expected_portfolio_return(
        &self,
        weights: &[f64],
        mean_returns: &[f64],
    ) -> AnalyticsResult<f64> {
        expected_portfolio_return_with_tolerance(weights, mean_returns, self.config.weight_tolerance)
    }

    // ---- Volatility ----

    /// Annualized volatility.
    pub fn annualized_volatility(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_annualized_volatility(returns, self.periods_per_year())
    }

    /// Annualized downside deviation below the configured threshold.
    pub fn downside_deviation(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_downside_deviation(
            returns,
            self.config.minimum_acceptable_return,
            self.periods_per_year(),
        )
    }

    /// Rolling annualized volatility, collected.
    pub fn rolling_volatility(&self, returns: &[f64], window: Window) -> AnalyticsResult<Vec<f64>> {
        Ok(compute_rolling_volatility(returns, window, self.periods_per_year())?.collect())
    }

    /// Rolling Sharpe ratio, collected; fails on the first degenerate window.
    pub fn rolling_sharpe(
        &self,
        returns: &[f64],
        window: Window,
        risk_free: &RiskFreeRate,
    ) -> AnalyticsResult<Vec<f64>> {
        compute_rolling_sharpe(returns, window, risk_free, self.periods_per_year())?.collect()
    }

    // ---- Distribution ----

    /// Skewness with the configured estimator.
    pub fn skewness(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_skewness_with(returns, self.config.moment_estimator)
    }

    /// Excess kurtosis with the configured estimator.
    ///
    /// The sample-adjusted estimator needs at least four returns.
    pub fn kurtosis(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_kurtosis_with(returns, self.config.moment_estimator)
    }

    /// Hit ratio.
    pub fn hit_ratio(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_hit_ratio(returns)
    }

    /// Gain/loss ratio.
    pub fn gain_loss_ratio(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_gain_loss_ratio(returns)
    }

    // ---- Drawdowns ----

    /// Maximum drawdown.
    pub fn max_drawdown(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_max_drawdown(returns)
    }

    /// Average drawdown.
    pub fn average_drawdown(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_average_drawdown(returns)
    }

    /// Longest recovery time under the configured policy.
    pub fn max_recovery_time(&self, returns: &[f64]) -> AnalyticsResult<usize> {
        compute_max_recovery_time(returns, self.config.recovery_policy)
    }

    // ---- Ratios ----

    /// Sharpe ratio.
    pub fn sharpe_ratio(&self, returns: &[f64], risk_free: &RiskFreeRate) -> AnalyticsResult<f64> {
        compute_sharpe_ratio(returns, risk_free, self.periods_per_year())
    }

    /// Sortino ratio against the configured minimum acceptable return.
    pub fn sortino_ratio(&self, returns: &[f64], risk_free: &RiskFreeRate) -> AnalyticsResult<f64> {
        compute_sortino_ratio_with_threshold(
            returns,
            risk_free,
            self.periods_per_year(),
            self.config.minimum_acceptable_return,
        )
    }

    /// Calmar ratio.
    pub fn calmar_ratio(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_calmar_ratio(returns, self.periods_per_year())
    }

    /// Sterling ratio over the configured number of drawdowns.
    pub fn sterling_ratio(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_sterling_ratio(
            returns,
            self.periods_per_year(),
            self.config.sterling_drawdown_count,
        )
    }

    /// Omega ratio at the configured threshold.
    pub fn omega_ratio(&self, returns: &[f64]) -> AnalyticsResult<f64> {
        compute_omega_ratio(returns, self.config.omega_threshold)
    }

    /// Treynor ratio.
    pub fn treynor_ratio(
        &self,
        returns: &[f64],
        benchmark: &[f64],
        risk_free: &RiskFreeRate,
    ) -> AnalyticsResult<f64> {
        compute_treynor_ratio(returns, benchmark, risk_free, self.periods_per_year())
    }

    /// Information ratio.
    pub fn information_ratio(&self, returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<f64> {
        compute_information_ratio(returns, benchmark, self.periods_per_year())
    }

    // ---- Benchmark ----

    /// Beta to the benchmark.
    pub fn beta(&self, returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<f64> {
        compute_beta(returns, benchmark)
    }

    /// Annualized Jensen's alpha.
    pub fn alpha(
        &self,
        returns: &[f64],
        benchmark: &[f64],
        risk_free: &RiskFreeRate,
    ) -> AnalyticsResult<f64> {
        compute_alpha(returns, benchmark, risk_free, self.periods_per_year())
    }

    /// Annualized tracking error.
    pub fn tracking_error(&self, returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<f64> {
        compute_tracking_error(returns, benchmark, self.periods_per_year())
    }

    /// Upside and downside capture ratios, in that order.
    pub fn capture_ratios(&self, returns: &[f64], benchmark: &[f64]) -> AnalyticsResult<(f64, f64)> {
        Ok((
            compute_upside_capture_ratio(returns, benchmark)?,
            compute_downside_capture_ratio(returns, benchmark)?,
        ))
    }

    // ---- Cross-series ----

    /// Correlation matrix with the configured parallelism.
    pub fn correlation_matrix<S: AsRef<[f64]>>(
        &self,
        series_list: &[S],
    ) -> AnalyticsResult<CorrelationMatrix> {
        compute_correlation_matrix_with(series_list, &self.config)
    }

    /// Covariance matrix with the configured parallelism.
    pub fn covariance_matrix<S: AsRef<[f64]>>(
        &self,
        series_list: &[S],
    ) -> AnalyticsResult<CovarianceMatrix> {
        compute_covariance_matrix_with(series_list, &self.config)
    }

    /// Computes the headline statistics in one pass over the API.
    ///
    /// Ratios whose denominator vanishes are reported as `None`; every other
    /// failure is returned as an error.
    pub fn summary(
        &self,
        returns: &[f64],
        risk_free: &RiskFreeRate,
    ) -> AnalyticsResult<PerformanceSummary> {
        Ok(PerformanceSummary {
            total_return: compute_total_return(returns)?,
            annualized_return: self.annualized_return(returns)?,
            annualized_volatility: self.annualized_volatility(returns)?,
            sharpe_ratio: degenerate_as_none(self.sharpe_ratio(returns, risk_free))?,
            sortino_ratio: degenerate_as_none(self.sortino_ratio(returns, risk_free))?,
            max_drawdown: self.max_drawdown(returns)?,
            max_recovery_time: self.max_recovery_time(returns)?,
            hit_ratio: self.hit_ratio(returns)?,
        })
    }
}

fn degenerate_as_none(result: AnalyticsResult<f64>) -> AnalyticsResult<Option<f64>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind() == ErrorKind::DegenerateInput => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::MomentEstimator;
    use crate::drawdowns::RecoveryPolicy;
    use approx::assert_relative_eq;

    const RETURNS: [f64; 6] = [0.02, -0.01, 0.015, -0.03, 0.025, 0.01];

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnalyticsConfig::new().with_periods_per_year(-1.0);
        assert_eq!(
            PerformanceCalculator::new(config).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }

    #[test]
    fn test_uses_configured_frequency() {
        let calc =
            PerformanceCalculator::new(AnalyticsConfig::new().with_periods_per_year(12.0)).unwrap();
        assert_relative_eq!(
            calc.annualized_volatility(&RETURNS).unwrap(),
            compute_annualized_volatility(&RETURNS, 12.0).unwrap()
        );
        assert_relative_eq!(
            calc.calmar_ratio(&RETURNS).unwrap(),
            compute_calmar_ratio(&RETURNS, 12.0).unwrap()
        );
    }

    #[test]
    fn test_kurtosis_follows_configured_estimator() {
        let sample = PerformanceCalculator::default();
        let population = PerformanceCalculator::new(
            AnalyticsConfig::new().with_moment_estimator(MomentEstimator::Population),
        )
        .unwrap();

        let adjusted = sample.kurtosis(&RETURNS).unwrap();
        assert_relative_eq!(
            adjusted,
            compute_kurtosis_with(&RETURNS, MomentEstimator::SampleAdjusted).unwrap()
        );
        assert!((adjusted - population.kurtosis(&RETURNS).unwrap()).abs() > 1e-6);

        // G2 needs four observations; g2 only three.
        let short = [0.01, -0.02, 0.03];
        assert_eq!(
            sample.kurtosis(&short).unwrap_err().kind(),
            ErrorKind::InsufficientData
        );
        assert!(population.kurtosis(&short).is_ok());
    }

    #[test]
    fn test_uses_configured_estimator_and_policy() {
        let config = AnalyticsConfig::new()
            .with_moment_estimator(MomentEstimator::Population)
            .with_recovery_policy(RecoveryPolicy::ExcludeOpen);
        let calc = PerformanceCalculator::new(config).unwrap();

        assert_relative_eq!(
            calc.skewness(&RETURNS).unwrap(),
            compute_skewness_with(&RETURNS, MomentEstimator::Population).unwrap()
        );
        assert_relative_eq!(
            calc.kurtosis(&RETURNS).unwrap(),
            compute_kurtosis_with(&RETURNS, MomentEstimator::Population).unwrap()
        );

        let open = [0.01, -0.05, 0.01];
        assert_eq!(calc.max_recovery_time(&open).unwrap(), 0);
        assert_eq!(
            PerformanceCalculator::default()
                .max_recovery_time(&open)
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_mean_returns() {
        let calc = PerformanceCalculator::new(AnalyticsConfig::new().with_threshold(1)).unwrap();
        let means = calc
            .mean_returns(&[vec![0.01, 0.03], vec![0.0, -0.02]])
            .unwrap();
        assert_relative_eq!(means[0], 0.02, epsilon = 1e-12);
        assert_relative_eq!(means[1], -0.01, epsilon = 1e-12);

        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(calc.mean_returns(&empty).is_err());
    }

    #[test]
    fn test_weight_tolerance() {
        let calc =
            PerformanceCalculator::new(AnalyticsConfig::new().with_weight_tolerance(0.2)).unwrap();
        assert!(calc
            .expected_portfolio_return(&[0.6, 0.5], &[0.01, 0.02])
            .is_ok());
        assert!(PerformanceCalculator::default()
            .expected_portfolio_return(&[0.6, 0.5], &[0.01, 0.02])
            .is_err());
    }

    #[test]
    fn test_summary() {
        let calc = PerformanceCalculator::default();
        let summary = calc.summary(&RETURNS, &RiskFreeRate::zero()).unwrap();
        assert!(summary.sharpe_ratio.is_some());
        assert!(summary.sortino_ratio.is_some());
        assert_relative_eq!(summary.hit_ratio, 4.0 / 6.0);
        assert_relative_eq!(
            summary.max_drawdown,
            compute_max_drawdown(&RETURNS).unwrap()
        );
    }

    #[test]
    fn test_summary_flat_series() {
        let summary = PerformanceCalculator::default()
            .summary(&[0.01; 4], &RiskFreeRate::zero())
            .unwrap();
        assert_eq!(summary.sharpe_ratio, None);
        assert_eq!(summary.sortino_ratio, None);
        assert_eq!(summary.max_drawdown, 0.0);
    }

    #[test]
    fn test_rolling_sharpe_propagates_degenerate_window() {
        let calc = PerformanceCalculator::default();
        let r = [0.01, 0.01, 0.01, 0.02];
        let err = calc
            .rolling_sharpe(&r, Window::new(3).unwrap(), &RiskFreeRate::zero())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }
}
