//! Observation frequency of a series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling frequency of a return series.
///
/// Supplies the annualization constant used by every annualized metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Trading days (252 per year)
    #[default]
    Daily,
    /// Weekly observations (52 per year)
    Weekly,
    /// Monthly observations (12 per year)
    Monthly,
    /// Quarterly observations (4 per year)
    Quarterly,
    /// Semi-annual observations (2 per year)
    SemiAnnual,
    /// Annual observations (1 per year)
    Annual,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Frequency::Daily => 252.0,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
            Frequency::Quarterly => 4.0,
            Frequency::SemiAnnual => 2.0,
            Frequency::Annual => 1.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Annual => "Annual",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Daily.periods_per_year(), 252.0);
        assert_eq!(Frequency::Weekly.periods_per_year(), 52.0);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12.0);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4.0);
        assert_eq!(Frequency::Annual.periods_per_year(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Frequency::SemiAnnual.to_string(), "Semi-Annual");
        assert_eq!(Frequency::default(), Frequency::Daily);
    }
}
