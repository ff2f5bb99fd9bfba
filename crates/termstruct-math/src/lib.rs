//! # Termstruct Math
//!
//! Numerical building blocks for the termstruct library.
//!
//! This crate provides:
//!
//! - **Statistics**: Log ratios, log-return matrices, unbiased sample covariance
//! - **Linear Algebra**: Eigendecomposition of covariance matrices with
//!   numerical diagnostics
//!
//! Eigenvalue problems are delegated to `nalgebra`; this crate only adds the
//! checks that make the results safe to report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod linear_algebra;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{
        eigen_decomposition, max_asymmetry, EigenDecomposition, EigenPair, NumericalWarning,
        DEFAULT_EIGEN_TOLERANCE,
    };
    pub use crate::statistics::{log_ratio, log_returns, sample_covariance};
}

pub use error::{MathError, MathResult};
