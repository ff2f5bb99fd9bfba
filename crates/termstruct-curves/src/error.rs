//! Error types for curve construction.

use termstruct_core::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Stripping earlier coupons left a non-positive value for the final
    /// cashflow. The quote set is internally inconsistent (arbitrage or bad data).
    #[error(
        "Inconsistent quote on {date}, bond {bond_index} (maturity {maturity:.4}): \
         residual present value {residual:.6} is not positive"
    )]
    InconsistentQuote {
        /// Observation date.
        date: Date,
        /// Position of the bond in the maturity ladder.
        bond_index: usize,
        /// Bond maturity in years.
        maturity: f64,
        /// Dirty price left after stripping earlier coupons.
        residual: f64,
    },

    /// Not enough curve points for the requested operation.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// A computed rate is not a finite number.
    #[error("Invalid value on {date}, bond {bond_index}: {reason}")]
    InvalidValue {
        /// Observation date.
        date: Date,
        /// Position of the bond in the maturity ladder.
        bond_index: usize,
        /// Why the value is invalid.
        reason: String,
    },

    /// The bootstrapped curve fails to reprice its own quotes.
    #[error("Repricing failed on {date}: {failed_count} bonds, max error {max_error:.2e} (bonds {bonds:?})")]
    RepricingFailed {
        /// Observation date.
        date: Date,
        /// Number of bonds outside tolerance.
        failed_count: usize,
        /// Largest absolute pricing error.
        max_error: f64,
        /// Indices of the failing bonds.
        bonds: Vec<usize>,
    },
}

impl CurveError {
    /// Creates an inconsistent quote error.
    #[must_use]
    pub fn inconsistent_quote(date: Date, bond_index: usize, maturity: f64, residual: f64) -> Self {
        Self::InconsistentQuote {
            date,
            bond_index,
            maturity,
            residual,
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(date: Date, bond_index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            date,
            bond_index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_quote_display() {
        let date = Date::from_ymd(2025, 1, 6).unwrap();
        let err = CurveError::inconsistent_quote(date, 1, 1.0, -0.25);
        let msg = err.to_string();
        assert!(msg.contains("2025-01-06"));
        assert!(msg.contains("bond 1"));
        assert!(msg.contains("-0.25"));
    }

    #[test]
    fn test_insufficient_points_display() {
        let err = CurveError::insufficient_points(10, 9);
        assert!(err.to_string().contains("at least 10, got 9"));
    }
}
