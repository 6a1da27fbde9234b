//! # Vantage Math
//!
//! Numeric kernels for the Vantage performance analytics library.
//!
//! This crate provides:
//!
//! - **Statistics**: Mean, variance, covariance, Pearson correlation and
//!   central moments over `f64` slices
//! - **Linear Algebra**: Dot products and quadratic forms on `nalgebra` matrices
//!
//! ## Design Philosophy
//!
//! - **Explicit Failure**: Undefined results are errors, never NaN
//! - **Numerical Stability**: Two-pass moments, exact zero variance for
//!   constant input
//! - **Slices In, Scalars Out**: No allocation beyond what the result needs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod linear_algebra;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{dot, is_symmetric, quadratic_form};
    pub use crate::statistics::{
        central_moments, is_constant, mean, pearson_correlation, population_std_dev,
        population_variance, sample_covariance, sample_std_dev, sample_variance, CentralMoments,
    };
}

pub use error::{MathError, MathResult};
