//! Return and price series.

use std::ops::Deref;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ensure_finite;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Ordered, gap-free sequence of fractional per-period returns.
///
/// Dereferences to `[f64]`, so it can be passed anywhere a slice of
/// returns is accepted.
///
/// # Example
///
/// ```rust
/// use vantage_core::ReturnSeries;
///
/// let r = ReturnSeries::new(vec![0.01, -0.02, 0.03]).unwrap();
/// assert_eq!(r.len(), 3);
/// assert_eq!(r[1], -0.02);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ReturnSeries(Vec<f64>);

/// A return series aligned index-for-index with a subject series.
pub type BenchmarkSeries = ReturnSeries;

impl ReturnSeries {
    /// Creates a return series.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for an empty vector and `InvalidParameter`
    /// if any value is NaN or infinite.
    pub fn new(values: Vec<f64>) -> AnalyticsResult<Self> {
        if values.is_empty() {
            return Err(AnalyticsError::insufficient_data("return series", 1, 0));
        }
        ensure_finite("returns", &values)?;
        Ok(Self(values))
    }

    /// Returns the underlying values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the series and returns the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Returns true if `other` has the same number of periods.
    pub fn is_aligned_with(&self, other: &[f64]) -> bool {
        self.0.len() == other.len()
    }
}

impl Deref for ReturnSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for ReturnSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for ReturnSeries {
    type Error = AnalyticsError;

    fn try_from(values: Vec<f64>) -> AnalyticsResult<Self> {
        Self::new(values)
    }
}

impl From<ReturnSeries> for Vec<f64> {
    fn from(series: ReturnSeries) -> Self {
        series.0
    }
}

/// Ordered sequence of strictly positive prices.
///
/// Optionally carries the instrument ticker and one date per observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PriceSeriesData")]
pub struct PriceSeries {
    ticker: Option<String>,
    dates: Option<Vec<NaiveDate>>,
    prices: Vec<f64>,
}

#[derive(Deserialize)]
struct PriceSeriesData {
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    dates: Option<Vec<NaiveDate>>,
    prices: Vec<f64>,
}

impl TryFrom<PriceSeriesData> for PriceSeries {
    type Error = AnalyticsError;

    fn try_from(data: PriceSeriesData) -> AnalyticsResult<Self> {
        let mut series = PriceSeries::new(data.prices)?;
        series.ticker = data.ticker;
        match data.dates {
            Some(dates) => series.with_dates(dates),
            None => Ok(series),
        }
    }
}

impl PriceSeries {
    /// Creates a price series.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for an empty vector and `InvalidParameter`
    /// if any price is non-finite or not strictly positive.
    pub fn new(prices: Vec<f64>) -> AnalyticsResult<Self> {
        if prices.is_empty() {
            return Err(AnalyticsError::insufficient_data("price series", 1, 0));
        }
        ensure_finite("prices", &prices)?;
        if let Some(i) = prices.iter().position(|p| *p <= 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "prices",
                format!("price {} at index {i} is not positive", prices[i]),
            ));
        }
        Ok(Self {
            ticker: None,
            dates: None,
            prices,
        })
    }

    /// Attaches an instrument ticker.
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Attaches one observation date per price.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the date count differs from the price
    /// count and `InvalidParameter` if dates are not strictly increasing.
    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> AnalyticsResult<Self> {
        if dates.len() != self.prices.len() {
            return Err(AnalyticsError::dimension_mismatch(
                "price dates",
                self.prices.len(),
                dates.len(),
            ));
        }
        if let Some(i) = dates.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AnalyticsError::invalid_parameter(
                "dates",
                format!("{} does not follow {}", dates[i + 1], dates[i]),
            ));
        }
        self.dates = Some(dates);
        Ok(self)
    }

    /// Instrument ticker, if set.
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    /// Observation dates, if set.
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Price observations.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.prices
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_return_series_rejects_non_finite() {
        let err = ReturnSeries::new(vec![0.01, f64::NAN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.to_string().contains("index 1"));

        let err = ReturnSeries::new(vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn test_return_series_derefs_to_slice() {
        let r = ReturnSeries::new(vec![0.01, 0.02]).unwrap();
        let total: f64 = r.iter().sum();
        assert_relative_eq!(total, 0.03, epsilon = 1e-12);
        assert!(r.is_aligned_with(&[0.0, 0.0]));
    }

    #[test]
    fn test_return_series_serde() {
        let r: ReturnSeries = serde_json::from_str("[0.01, -0.01]").unwrap();
        assert_eq!(r.as_slice(), &[0.01, -0.01]);
        assert!(serde_json::from_str::<ReturnSeries>("[]").is_err());
        assert_eq!(serde_json::to_string(&r).unwrap(), "[0.01,-0.01]");
    }

    #[test]
    fn test_price_series_rejects_non_positive() {
        let err = PriceSeries::new(vec![100.0, 0.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_price_series_dates() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let series = PriceSeries::new(vec![100.0, 101.0])
            .unwrap()
            .with_ticker("MSFT")
            .with_dates(vec![d(2), d(3)])
            .unwrap();
        assert_eq!(series.ticker(), Some("MSFT"));
        assert_eq!(series.dates().map(<[NaiveDate]>::len), Some(2));

        let err = PriceSeries::new(vec![100.0, 101.0])
            .unwrap()
            .with_dates(vec![d(2)])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

        let err = PriceSeries::new(vec![100.0, 101.0])
            .unwrap()
            .with_dates(vec![d(3), d(2)])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_price_series_deserialize_validates() {
        let json = r#"{"ticker": "SPY", "prices": [400.0, 401.5]}"#;
        let series: PriceSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.ticker(), Some("SPY"));
        assert!(serde_json::from_str::<PriceSeries>(r#"{"prices": [-1.0]}"#).is_err());
    }
}
