//! # Termstruct Analytics
//!
//! Curve time series and principal risk factors over a quote history.
//!
//! This crate provides:
//!
//! - **Time Series**: Per-date curves stacked into `[date, tenor]` matrices
//!   ([`CurveMatrix`])
//! - **Tenor Selection**: Named conventions for which curve points enter the
//!   covariance ([`TenorSelection`])
//! - **Factors**: Log returns, sample covariance and eigenpairs
//!   ([`FactorAnalysis`])
//! - **Pipeline**: Quotes to factors in one call ([`TermStructureAnalysis`])
//! - **Configuration**: TOML-backed [`AnalysisConfig`]
//!
//! ## Features
//!
//! - `parallel`: build each date's curves on the rayon thread pool.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use termstruct_analytics::prelude::*;
//! use termstruct_core::io::read_quote_history;
//!
//! let history = read_quote_history("data/sample_quotes.csv")?;
//! let report = TermStructureAnalysis::new(AnalysisConfig::default()).run(&history)?;
//!
//! // Each curve kind and each factor analysis succeeds or fails on its own.
//! let factors = report.yield_factors?;
//! for (value, share) in factors
//!     .eigen
//!     .values()
//!     .iter()
//!     .zip(factors.eigen.explained_variance())
//! {
//!     println!("{value:.3e} ({:.1}%)", share * 100.0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod error;
pub mod factors;
pub mod parallel;
pub mod pipeline;
pub mod selection;
pub mod timeseries;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::factors::{FactorAnalysis, MIN_DATES};
    pub use crate::pipeline::{AnalysisReport, CurveSeries, SpotSeries, TermStructureAnalysis};
    pub use crate::selection::{annual_yield_indices, TenorSelection, ANNUAL_FORWARD_INDICES};
    pub use crate::timeseries::CurveMatrix;
}

pub use config::AnalysisConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use factors::FactorAnalysis;
pub use pipeline::{AnalysisReport, CurveSeries, TermStructureAnalysis};
pub use selection::TenorSelection;
pub use timeseries::CurveMatrix;
