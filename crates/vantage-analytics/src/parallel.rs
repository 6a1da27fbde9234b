//! Fan-out over independent units of work.
//!
//! Two callers use it: the correlation and covariance builders map over
//! `(i, j)` index pairs of the upper triangle, and
//! [`PerformanceCalculator::mean_returns`](crate::PerformanceCalculator::mean_returns)
//! maps over the input series. Rayon is used only with the `parallel`
//! feature; results are identical either way.

use crate::config::AnalyticsConfig;

/// Applies `f` to every item, on the rayon pool when
/// [`AnalyticsConfig::should_parallelize`] agrees for `items.len()` and the
/// `parallel` feature is compiled in.
///
/// Output order matches input order.
///
/// # Example
///
/// ```rust
/// use vantage_analytics::parallel::maybe_parallel_map;
/// use vantage_analytics::AnalyticsConfig;
///
/// let pairs = [(0usize, 1usize), (0, 2), (1, 2)];
/// let config = AnalyticsConfig::new().with_threshold(2);
/// let sums = maybe_parallel_map(&pairs, &config, |&(i, j)| i + j);
/// assert_eq!(sums, vec![1, 2, 3]);
/// ```
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
