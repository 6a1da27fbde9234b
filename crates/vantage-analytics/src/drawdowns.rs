//! Path-dependent drawdown statistics.
//!
//! A [`WealthCurve`] compounds a return series from an initial level of
//! `1.0`, so index `i` of the curve is the wealth after `i` periods. A
//! drawdown at index `t` is `level[t] / peak[t] - 1`, where `peak[t]` is the
//! running maximum up to and including `t`. Drawdowns are therefore
//! non-positive, and exactly zero at a new peak.
//!
//! An *episode* is a maximal run of indices below the prevailing peak. It
//! recovers at the first later index whose level is at or above that peak.

use log::trace;
use serde::{Deserialize, Serialize};
use vantage_core::{AnalyticsError, AnalyticsResult};

use crate::validation::{require_finite, require_finite_result, require_len};

/// How an episode still open at the end of the series counts toward
/// recovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecoveryPolicy {
    /// Unrecovered episodes are ignored.
    ExcludeOpen,
    /// Unrecovered episodes count the periods up to the end of the series.
    #[default]
    CountToEnd,
}

/// One peak-to-recovery drawdown episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownEpisode {
    /// Curve index of the peak the episode is measured against.
    pub peak_index: usize,
    /// First curve index below the peak.
    pub start_index: usize,
    /// Curve index of the lowest level in the episode.
    pub trough_index: usize,
    /// First curve index back at or above the peak, if reached.
    pub recovery_index: Option<usize>,
    /// Drawdown at the trough, a non-positive fraction.
    pub depth: f64,
    /// Number of underwater points: up to the recovery, or to the end of the
    /// curve for an open episode.
    pub length: usize,
}

impl DrawdownEpisode {
    /// Returns true if the curve regained the peak.
    pub fn is_recovered(&self) -> bool {
        self.recovery_index.is_some()
    }

    /// Periods from the start of the drawdown to recovery under `policy`.
    ///
    /// Returns `None` for an open episode under
    /// [`RecoveryPolicy::ExcludeOpen`].
    pub fn recovery_time(&self, policy: RecoveryPolicy) -> Option<usize> {
        match (self.recovery_index, policy) {
            (Some(_), _) | (None, RecoveryPolicy::CountToEnd) => Some(self.length),
            (None, RecoveryPolicy::ExcludeOpen) => None,
        }
    }
}

/// Cumulative growth path of a return series.
#[derive(Debug, Clone, PartialEq)]
pub struct WealthCurve {
    levels: Vec<f64>,
}

impl WealthCurve {
    /// Compounds `returns` from `1.0`; the curve has `returns.len() + 1`
    /// points.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a non-finite return or a return below -100%
    /// - `DegenerateInput` if compounding overflows
    ///
    /// # Example
    ///
    /// ```rust
    /// use vantage_analytics::drawdowns::WealthCurve;
    ///
    /// let curve = WealthCurve::from_returns(&[0.10, -0.50]).unwrap();
    /// assert_eq!(curve.levels().len(), 3);
    /// assert!((curve.max_drawdown() + 0.50).abs() < 1e-12);
    /// ```
    pub fn from_returns(returns: &[f64]) -> AnalyticsResult<Self> {
        require_finite("returns", returns)?;
        if let Some(r) = returns.iter().find(|r| **r < -1.0) {
            return Err(AnalyticsError::invalid_parameter(
                "returns",
                format!("return {r} is below -100%"),
            ));
        }

        let mut levels = Vec::with_capacity(returns.len() + 1);
        let mut wealth = 1.0;
        levels.push(wealth);
        for r in returns {
            wealth = require_finite_result("wealth curve", wealth * (1.0 + r))?;
            levels.push(wealth);
        }
        Ok(Self { levels })
    }

    /// Wraps an already-cumulative curve such as an equity or price path.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` for an empty curve
    /// - `InvalidParameter` for a non-finite or non-positive level
    pub fn from_levels(levels: Vec<f64>) -> AnalyticsResult<Self> {
        require_len("wealth curve", &levels, 1)?;
        require_finite("levels", &levels)?;
        if let Some(l) = levels.iter().find(|l| **l <= 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "levels",
                format!("wealth levels must be positive, got {l}"),
            ));
        }
        Ok(Self { levels })
    }

    /// The curve points.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of curve points.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Running maximum of the curve.
    pub fn running_peaks(&self) -> Vec<f64> {
        self.levels
            .iter()
            .scan(f64::NEG_INFINITY, |peak, &l| {
                *peak = peak.max(l);
                Some(*peak)
            })
            .collect()
    }

    /// Drawdown at every curve point.
    pub fn drawdown_series(&self) -> Vec<f64> {
        self.levels
            .iter()
            .zip(self.running_peaks())
            .map(|(l, p)| if *l >= p { 0.0 } else { l / p - 1.0 })
            .collect()
    }

    /// Most negative drawdown, or `0.0` for a non-decreasing curve.
    pub fn max_drawdown(&self) -> f64 {
        self.drawdown_series().into_iter().fold(0.0, f64::min)
    }

    /// Every drawdown episode in chronological order.
    pub fn episodes(&self) -> Vec<DrawdownEpisode> {
        let mut episodes = Vec::new();
        let Some(&first) = self.levels.first() else {
            return episodes;
        };

        let mut peak = first;
        let mut peak_index = 0;
        let mut open: Option<DrawdownEpisode> = None;

        for (i, &level) in self.levels.iter().enumerate().skip(1) {
            if level >= peak {
                if let Some(mut episode) = open.take() {
                    episode.recovery_index = Some(i);
                    episode.length = i - episode.start_index;
                    trace!("drawdown episode closed: {episode:?}");
                    episodes.push(episode);
                }
                peak = level;
                peak_index = i;
                continue;
            }

            let depth = level / peak - 1.0;
            match open.as_mut() {
                Some(episode) => {
                    if depth < episode.depth {
                        episode.depth = depth;
                        episode.trough_index = i;
                    }
                }
                None => {
                    open = Some(DrawdownEpisode {
                        peak_index,
                        start_index: i,
                        trough_index: i,
                        recovery_index: None,
                        depth,
                        length: 0,
                    });
                }
            }
        }

        if let Some(mut episode) = open {
            episode.length = self.levels.len() - episode.start_index;
            trace!("drawdown episode open at end of series: {episode:?}");
            episodes.push(episode);
        }

        episodes
    }

    /// Longest recovery time across episodes, or `0` when nothing counts.
    pub fn max_recovery_time(&self, policy: RecoveryPolicy) -> usize {
        self.episodes()
            .iter()
            .filter_map(|e| e.recovery_time(policy))
            .max()
            .unwrap_or(0)
    }
}

fn wealth_curve(metric: &str, returns: &[f64]) -> AnalyticsResult<WealthCurve> {
    require_len(metric, returns, 1)?;
    WealthCurve::from_returns(returns)
}

/// Maximum drawdown of the compounded series, a non-positive fraction.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::drawdowns::compute_max_drawdown;
///
/// let mdd = compute_max_drawdown(&[0.01, -0.02, 0.03, -0.01, 0.02]).unwrap();
/// assert!((mdd + 0.02).abs() < 1e-12);
/// ```
pub fn compute_max_drawdown(returns: &[f64]) -> AnalyticsResult<f64> {
    Ok(wealth_curve("max drawdown", returns)?.max_drawdown())
}

/// Mean trough drawdown across episodes, or `0.0` if there are none.
///
/// Like [`compute_max_drawdown`] the result is signed: depths are averaged
/// as non-positive fractions, so a mean trough of 5% is reported as
/// `-0.05`. Take `.abs()` for the magnitude.
pub fn compute_average_drawdown(returns: &[f64]) -> AnalyticsResult<f64> {
    let episodes = wealth_curve("average drawdown", returns)?.episodes();
    if episodes.is_empty() {
        return Ok(0.0);
    }
    Ok(episodes.iter().map(|e| e.depth).sum::<f64>() / episodes.len() as f64)
}

/// Longest number of periods spent below a prior peak.
pub fn compute_max_recovery_time(returns: &[f64], policy: RecoveryPolicy) -> AnalyticsResult<usize> {
    Ok(wealth_curve("max recovery time", returns)?.max_recovery_time(policy))
}
