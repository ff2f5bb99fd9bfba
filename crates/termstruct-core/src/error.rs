//! Error types for quote handling.
//!
//! Every variant carries enough context (date, bond index, offending values)
//! to tell which input row needs fixing.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or loading quote data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid or unparseable date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A single bond quote failed validation.
    #[error("Invalid quote at bond {index}: {reason}")]
    InvalidQuote {
        /// Position of the quote within its date.
        index: usize,
        /// Why the quote was rejected.
        reason: String,
    },

    /// Quotes for a date are not in ascending maturity order.
    #[error("Maturities not ascending at bond {index}: {prev:.4} >= {current:.4}")]
    UnsortedMaturities {
        /// Index where ordering breaks.
        index: usize,
        /// Maturity of the previous quote.
        prev: f64,
        /// Maturity of the offending quote.
        current: f64,
    },

    /// A date's maturity ladder differs from the first date's ladder.
    #[error("Maturity ladder mismatch on {date}: expected {expected:?}, got {got:?}")]
    LadderMismatch {
        /// Date whose ladder differs.
        date: Date,
        /// Ladder of the first date.
        expected: Vec<f64>,
        /// Ladder found on `date`.
        got: Vec<f64>,
    },

    /// Observation dates are not strictly increasing.
    #[error("Dates not chronological at position {index}: {prev} >= {current}")]
    NonChronological {
        /// Position of the offending quote set.
        index: usize,
        /// Preceding date.
        prev: Date,
        /// Offending date.
        current: Date,
    },

    /// No quotes were supplied.
    #[error("Empty input: {what}")]
    EmptyInput {
        /// What was empty.
        what: String,
    },

    /// File could not be read.
    #[error("IO error: {reason}")]
    Io {
        /// Underlying error message.
        reason: String,
    },

    /// A row of the quote table could not be parsed.
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the source (header is line 1).
        line: u64,
        /// Description of the failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            index,
            reason: reason.into(),
        }
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::EmptyInput { what: what.into() }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}
