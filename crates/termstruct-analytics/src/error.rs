//! Error types for the analytics pipeline.

use termstruct_core::{CoreError, Date};
use termstruct_curves::{CurveError, CurveKind};
use termstruct_math::MathError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A curve value feeding a log return is zero, negative or not finite.
    #[error("Non-positive {curve} rate {value} on {date} at tenor index {tenor_index}: log return undefined")]
    NonPositiveRate {
        /// Curve the value belongs to.
        curve: CurveKind,
        /// Date of the offending value.
        date: Date,
        /// Position on the curve's axis.
        tenor_index: usize,
        /// The offending value.
        value: f64,
    },

    /// A curve does not share the axis of the first curve in the series.
    #[error("{curve} curve on {date} does not match the series axis: expected {expected} points, got {got}")]
    LadderMismatch {
        /// Curve kind.
        curve: CurveKind,
        /// Date of the mismatching curve.
        date: Date,
        /// Axis length of the first curve.
        expected: usize,
        /// Axis length of the mismatching curve.
        got: usize,
    },

    /// A tenor selection does not fit the curve.
    #[error("Invalid tenor selection: {reason}")]
    InvalidSelection {
        /// Why the selection was rejected.
        reason: String,
    },

    /// Too few dates for the requested statistic.
    #[error("Insufficient dates: need at least {required}, got {got}")]
    InsufficientDates {
        /// Minimum required dates.
        required: usize,
        /// Actual number of dates.
        got: usize,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Input data error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Curve construction error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Numerical error.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl AnalyticsError {
    /// Creates an invalid selection error.
    #[must_use]
    pub fn invalid_selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient dates error.
    #[must_use]
    pub fn insufficient_dates(required: usize, got: usize) -> Self {
        Self::InsufficientDates { required, got }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
