//! Configuration for analytics computation.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vantage_core::{AnalyticsError, AnalyticsResult};

use crate::distribution::MomentEstimator;
use crate::drawdowns::RecoveryPolicy;
use crate::returns::WEIGHT_TOLERANCE;

/// Errors raised while loading configuration text.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document could not be parsed.
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed but holds out-of-range values.
    #[error(transparent)]
    Invalid(#[from] AnalyticsError),
}

/// Configuration for analytics computation.
///
/// Controls annualization, ratio thresholds, drawdown recovery handling and
/// parallelism. Missing fields take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of return periods per year.
    pub periods_per_year: f64,

    /// Minimum acceptable return per period for the Sortino ratio.
    pub minimum_acceptable_return: f64,

    /// Per-period threshold separating gains from losses in the Omega ratio.
    pub omega_threshold: f64,

    /// Number of largest drawdowns averaged by the Sterling ratio.
    pub sterling_drawdown_count: usize,

    /// How drawdowns still open at the end of the series count toward
    /// recovery time.
    pub recovery_policy: RecoveryPolicy,

    /// Estimator for skewness and kurtosis.
    pub moment_estimator: MomentEstimator,

    /// Accepted absolute deviation of portfolio weights from summing to 1.
    pub weight_tolerance: f64,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum series count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            periods_per_year: 252.0,
            minimum_acceptable_return: 0.0,
            omega_threshold: 0.0,
            sterling_drawdown_count: 3,
            recovery_policy: RecoveryPolicy::CountToEnd,
            moment_estimator: MomentEstimator::SampleAdjusted,
            weight_tolerance: WEIGHT_TOLERANCE,
            parallel: true,
            parallel_threshold: 16,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the annualization factor.
    #[must_use]
    pub fn with_periods_per_year(mut self, periods_per_year: f64) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// Sets the Sortino minimum acceptable return.
    #[must_use]
    pub fn with_minimum_acceptable_return(mut self, mar: f64) -> Self {
        self.minimum_acceptable_return = mar;
        self
    }

    /// Sets the Omega threshold.
    #[must_use]
    pub fn with_omega_threshold(mut self, threshold: f64) -> Self {
        self.omega_threshold = threshold;
        self
    }

    /// Sets how many drawdowns the Sterling ratio averages.
    #[must_use]
    pub fn with_sterling_drawdown_count(mut self, count: usize) -> Self {
        self.sterling_drawdown_count = count;
        self
    }

    /// Sets the open-drawdown recovery policy.
    #[must_use]
    pub fn with_recovery_policy(mut self, policy: RecoveryPolicy) -> Self {
        self.recovery_policy = policy;
        self
    }

    /// Sets the moment estimator.
    #[must_use]
    pub fn with_moment_estimator(mut self, estimator: MomentEstimator) -> Self {
        self.moment_estimator = estimator;
        self
    }

    /// Sets the weight normalization tolerance.
    #[must_use]
    pub fn with_weight_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_tolerance = tolerance;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(self.periods_per_year.is_finite() && self.periods_per_year > 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "periods_per_year",
                format!("must be positive, got {}", self.periods_per_year),
            ));
        }
        if !self.minimum_acceptable_return.is_finite() {
            return Err(AnalyticsError::invalid_parameter(
                "minimum_acceptable_return",
                "must be finite",
            ));
        }
        if !self.omega_threshold.is_finite() {
            return Err(AnalyticsError::invalid_parameter(
                "omega_threshold",
                "must be finite",
            ));
        }
        if self.sterling_drawdown_count == 0 {
            return Err(AnalyticsError::invalid_parameter(
                "sterling_drawdown_count",
                "must be at least 1",
            ));
        }
        if !(self.weight_tolerance.is_finite() && self.weight_tolerance >= 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "weight_tolerance",
                format!("must be non-negative, got {}", self.weight_tolerance),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        debug!("loaded analytics config from JSON: {config:?}");
        Ok(config)
    }

    /// Parses and validates a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!("loaded analytics config from TOML: {config:?}");
        Ok(config)
    }
}
