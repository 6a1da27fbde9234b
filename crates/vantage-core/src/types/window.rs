//! Rolling window configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Size and step of a rolling computation.
///
/// A window of `size` consecutive observations advances by `step`
/// observations between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct Window {
    size: usize,
    step: usize,
}

#[derive(Deserialize)]
struct RawWindow {
    size: usize,
    #[serde(default = "default_step")]
    step: usize,
}

fn default_step() -> usize {
    1
}

impl TryFrom<RawWindow> for Window {
    type Error = AnalyticsError;

    fn try_from(raw: RawWindow) -> AnalyticsResult<Self> {
        Window::with_step(raw.size, raw.step)
    }
}

impl Window {
    /// Smallest window a dispersion statistic can be computed over.
    pub const MIN_SIZE: usize = 2;

    /// Creates a window advancing one observation at a time.
    pub fn new(size: usize) -> AnalyticsResult<Self> {
        Self::with_step(size, 1)
    }

    /// Creates a window with an explicit step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size < 2` or `step == 0`.
    pub fn with_step(size: usize, step: usize) -> AnalyticsResult<Self> {
        if size < Self::MIN_SIZE {
            return Err(AnalyticsError::invalid_parameter(
                "window.size",
                format!("must be at least {}, got {size}", Self::MIN_SIZE),
            ));
        }
        if step == 0 {
            return Err(AnalyticsError::invalid_parameter(
                "window.step",
                "must be at least 1",
            ));
        }
        Ok(Self { size, step })
    }

    /// Number of observations per window.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Observations skipped between consecutive windows.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of complete windows over a series of length `len`.
    pub fn count(&self, len: usize) -> usize {
        if self.size > len {
            0
        } else {
            (len - self.size) / self.step + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_window_count() {
        let w = Window::new(3).unwrap();
        assert_eq!(w.count(5), 3);
        assert_eq!(w.count(3), 1);
        assert_eq!(w.count(2), 0);

        let stepped = Window::with_step(3, 2).unwrap();
        assert_eq!(stepped.count(7), 3);
        assert_eq!(stepped.count(8), 3);
    }

    #[test]
    fn test_window_validation() {
        assert_eq!(Window::new(1).unwrap_err().kind(), ErrorKind::InvalidParameter);
        assert_eq!(
            Window::with_step(5, 0).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }

    #[test]
    fn test_serde_validates() {
        let w: Window = serde_json::from_str(r#"{"size": 20}"#).unwrap();
        assert_eq!(w.step(), 1);
        assert!(serde_json::from_str::<Window>(r#"{"size": 1}"#).is_err());
    }
}
