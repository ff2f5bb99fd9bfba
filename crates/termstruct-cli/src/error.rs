//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Quote file could not be loaded.
    #[error("Cannot load quotes from {path}: {reason}")]
    Input {
        /// Quote file path.
        path: PathBuf,
        /// Underlying problem.
        reason: String,
    },

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more dates failed the repricing check.
    #[error("{failed} of {total} dates failed the bootstrap check")]
    CheckFailed {
        /// Dates that failed.
        failed: usize,
        /// Dates checked.
        total: usize,
    },
}
