//! Error types for the Vantage library.
//!
//! Every metric fails with one of four kinds: the series is too short, two
//! inputs do not line up, a configuration value is out of range, or the
//! result is mathematically undefined for the given data. Failures are
//! detected before computation and are never encoded as NaN or infinity.

use thiserror::Error;
use vantage_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Coarse classification of an [`AnalyticsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Series shorter than the statistic requires.
    InsufficientData,
    /// Series, vectors or matrices of incompatible shape.
    DimensionMismatch,
    /// Out-of-range configuration or input value.
    InvalidParameter,
    /// Mathematically undefined result (zero variance, zero denominator, ...).
    DegenerateInput,
}

/// The main error type for analytics operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Series shorter than the statistic requires.
    #[error("Insufficient data for {metric}: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Metric being computed.
        metric: String,
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// Inputs that must be aligned have different shapes.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What was being aligned.
        context: String,
        /// Expected length or dimension.
        expected: usize,
        /// Supplied length or dimension.
        actual: usize,
    },

    /// Portfolio weights do not sum to one.
    #[error("Weights sum to {sum}, expected 1.0 within {tolerance:e}")]
    WeightsNotNormalized {
        /// Sum of the supplied weights.
        sum: f64,
        /// Accepted absolute deviation from 1.0.
        tolerance: f64,
    },

    /// Out-of-range parameter or input value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The metric is undefined for this input.
    #[error("{metric} is undefined: {reason}")]
    DegenerateInput {
        /// Metric being computed.
        metric: String,
        /// Why the result is undefined.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(metric: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            metric: metric.into(),
            required,
            actual,
        }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a degenerate input error.
    #[must_use]
    pub fn degenerate(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            metric: metric.into(),
            reason: reason.into(),
        }
    }

    /// Converts a math kernel error, attaching the metric being computed.
    #[must_use]
    pub fn from_math(metric: &str, err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_data(metric, required, actual)
            }
            MathError::LengthMismatch { left, right } => {
                Self::dimension_mismatch(metric, left, right)
            }
            MathError::DimensionMismatch { rows1, rows2, .. } => {
                Self::dimension_mismatch(metric, rows1, rows2)
            }
            MathError::DivisionByZero { .. } => Self::degenerate(metric, "zero denominator"),
            MathError::InvalidInput { reason } => Self::invalid_parameter(metric, reason),
        }
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::DimensionMismatch { .. } | Self::WeightsNotNormalized { .. } => {
                ErrorKind::DimensionMismatch
            }
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::DegenerateInput { .. } => ErrorKind::DegenerateInput,
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        Self::from_math("calculation", err)
    }
}
