//! Risk-free rate input.

use serde::{Deserialize, Serialize};

use super::ensure_finite;
use crate::error::{AnalyticsError, AnalyticsResult};

/// The riskless return used as the hurdle in excess-return ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskFreeRate {
    /// Constant riskless return per period (same frequency as the returns).
    PerPeriod(f64),
    /// Constant annual riskless return.
    Annual(f64),
    /// Riskless return for each period, aligned with the return series.
    Series(Vec<f64>),
}

impl Default for RiskFreeRate {
    fn default() -> Self {
        Self::PerPeriod(0.0)
    }
}

impl RiskFreeRate {
    /// A zero risk-free rate.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks the rate against a return series of `len` periods.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for non-finite rates or rates at or below
    /// -100%, and `DimensionMismatch` if a series rate has the wrong length.
    pub fn validate(&self, len: usize) -> AnalyticsResult<()> {
        let values: &[f64] = match self {
            Self::PerPeriod(r) | Self::Annual(r) => std::slice::from_ref(r),
            Self::Series(v) => {
                if v.len() != len {
                    return Err(AnalyticsError::dimension_mismatch(
                        "risk-free rate series",
                        len,
                        v.len(),
                    ));
                }
                v
            }
        };
        ensure_finite("risk_free_rate", values)?;
        if let Some(r) = values.iter().find(|r| **r <= -1.0) {
            return Err(AnalyticsError::invalid_parameter(
                "risk_free_rate",
                format!("rate {r} is at or below -100%"),
            ));
        }
        Ok(())
    }

    /// Restricts the rate to the periods `start..start + len`.
    ///
    /// Constant rates are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the range runs past the end of a
    /// series rate.
    pub fn window(&self, start: usize, len: usize) -> AnalyticsResult<Self> {
        match self {
            Self::Series(v) => start
                .checked_add(len)
                .and_then(|end| v.get(start..end))
                .map(|slice| Self::Series(slice.to_vec()))
                .ok_or_else(|| {
                    AnalyticsError::dimension_mismatch(
                        "risk-free rate window",
                        start.saturating_add(len),
                        v.len(),
                    )
                }),
            other => Ok(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate() {
        assert!(RiskFreeRate::PerPeriod(0.0001).validate(10).is_ok());
        assert!(RiskFreeRate::Series(vec![0.0; 3]).validate(3).is_ok());
        assert_eq!(
            RiskFreeRate::Series(vec![0.0; 3])
                .validate(4)
                .unwrap_err()
                .kind(),
            ErrorKind::DimensionMismatch
        );
        assert_eq!(
            RiskFreeRate::Annual(f64::INFINITY)
                .validate(1)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            RiskFreeRate::PerPeriod(-1.0).validate(1).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }

    #[test]
    fn test_window() {
        let rf = RiskFreeRate::Series(vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(rf.window(1, 2).unwrap(), RiskFreeRate::Series(vec![0.2, 0.3]));
        assert_eq!(rf.window(0, 4).unwrap(), rf);
        assert_eq!(
            RiskFreeRate::Annual(0.03).window(5, 10).unwrap(),
            RiskFreeRate::Annual(0.03)
        );
    }

    #[test]
    fn test_window_out_of_range() {
        let rf = RiskFreeRate::Series(vec![0.001, 0.002]);
        assert_eq!(
            rf.window(1, 5).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
        assert_eq!(
            rf.window(3, 0).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
        assert_eq!(
            rf.window(usize::MAX, 2).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
    }
}
