//! # Vantage Core
//!
//! Core value types and errors for the Vantage performance analytics library.
//!
//! This crate provides the foundational building blocks used throughout Vantage:
//!
//! - **Series**: `ReturnSeries`, `PriceSeries` and the `BenchmarkSeries` alias
//! - **Parameters**: `Frequency`, `Window`, `RiskFreeRate`
//! - **Matrices**: `CorrelationMatrix`, `CovarianceMatrix`
//! - **Errors**: `AnalyticsError` with the four failure kinds every metric reports
//!
//! ## Design Philosophy
//!
//! - **Validated Values**: Constructors reject non-finite or out-of-range data
//! - **Immutable Data**: Types are created, consumed and dropped within a call
//! - **Explicit Over Implicit**: Undefined results are named errors, never NaN
//!
//! ## Example
//!
//! ```rust
//! use vantage_core::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 101.0, 99.5]).unwrap().with_ticker("AAPL");
//! assert_eq!(prices.ticker(), Some("AAPL"));
//!
//! let window = Window::new(20).unwrap();
//! assert_eq!(window.count(252), 233);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult, ErrorKind};
    pub use crate::types::{
        BenchmarkSeries, CorrelationMatrix, CovarianceMatrix, Frequency, PriceSeries,
        ReturnSeries, RiskFreeRate, Window,
    };
}

// Re-export commonly used types at crate root
pub use error::{AnalyticsError, AnalyticsResult, ErrorKind};
pub use types::{
    BenchmarkSeries, CorrelationMatrix, CovarianceMatrix, Frequency, PriceSeries, ReturnSeries,
    RiskFreeRate, Window,
};
