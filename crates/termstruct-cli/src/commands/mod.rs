//! CLI command implementations.

pub mod check;
pub mod curves;
pub mod factors;

pub use check::CheckArgs;
pub use curves::CurvesArgs;
pub use factors::FactorsArgs;

use std::path::Path;

use termstruct_analytics::{AnalysisConfig, AnalyticsResult};
use termstruct_core::io::read_quote_history;
use termstruct_core::QuoteHistory;
use termstruct_curves::CurveKind;

use crate::error::CliError;
use crate::output::print_warning;

/// Loads the analysis configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    match path {
        Some(path) => {
            let config = AnalysisConfig::from_file(path)
                .map_err(|e| CliError::Config(e.to_string()))?;
            tracing::info!("loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

/// Reads and validates a quote file.
pub fn load_history(path: &Path) -> Result<QuoteHistory, CliError> {
    let history = read_quote_history(path).map_err(|e| CliError::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::info!(
        "loaded {} dates x {} bonds from {}",
        history.len(),
        history.ladder().len(),
        path.display()
    );
    Ok(history)
}

/// Keeps the curve kinds that were built, warning about the others.
///
/// Fails with the first error only when every requested kind failed.
pub fn available<T>(outcomes: Vec<(CurveKind, AnalyticsResult<T>)>) -> anyhow::Result<Vec<T>> {
    let mut built = Vec::with_capacity(outcomes.len());
    let mut failed = Vec::new();
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(value) => built.push(value),
            Err(err) => failed.push((kind, err)),
        }
    }

    if built.is_empty() {
        if let Some((_, err)) = failed.into_iter().next() {
            return Err(err.into());
        }
        return Ok(built);
    }
    for (kind, err) in &failed {
        print_warning(&format!("{kind} unavailable: {err}"));
    }
    Ok(built)
}
