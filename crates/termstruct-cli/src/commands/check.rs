//! Check command implementation.
//!
//! Validates a quote file and audits each date's spot bootstrap by repricing
//! every bond from the curve.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use termstruct_analytics::AnalysisConfig;
use termstruct_curves::SpotBootstrapper;

use crate::cli::OutputFormat;
use crate::commands::load_history;
use crate::error::CliError;
use crate::output::{format_sci, print_error, print_header, print_output, print_success};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Quote file (CSV: date,maturity,coupon_rate,clean_price,accrual_days)
    pub input: PathBuf,
}

/// Bootstrap audit of one date.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CheckRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Bonds")]
    pub bonds: usize,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Max Error", display_with = "format_sci")]
    pub max_error: f64,
    #[tabled(rename = "RMS Error", display_with = "format_sci")]
    pub rms_error: f64,
    #[tabled(rename = "Build (µs)")]
    pub build_micros: u64,
    #[tabled(rename = "Detail")]
    pub detail: String,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let history = load_history(&args.input)?;
    let bootstrapper = SpotBootstrapper::new()
        .with_basis(config.accrual_basis)
        .with_tolerance(config.repricing_tolerance);

    let rows: Vec<CheckRow> = history
        .iter()
        .map(|set| match bootstrapper.bootstrap_validated(set) {
            Ok(result) => {
                let report = &result.repricing_report;
                let failed = report.failed_bonds();
                CheckRow {
                    date: set.date().to_string(),
                    bonds: set.len(),
                    status: if report.is_valid() { "PASSED" } else { "FAILED" }.to_string(),
                    max_error: report.max_error(),
                    rms_error: report.rms_error(),
                    build_micros: u64::try_from(result.build_duration.as_micros()).unwrap_or(u64::MAX),
                    detail: if failed.is_empty() {
                        String::new()
                    } else {
                        format!("bonds {failed:?} outside {:.0e}", config.repricing_tolerance)
                    },
                }
            }
            Err(err) => CheckRow {
                date: set.date().to_string(),
                bonds: set.len(),
                status: "ERROR".to_string(),
                max_error: f64::NAN,
                rms_error: f64::NAN,
                build_micros: 0,
                detail: err.to_string(),
            },
        })
        .collect();

    let failed = rows.iter().filter(|r| r.status != "PASSED").count();

    if format == OutputFormat::Table {
        print_header(&format!(
            "Bootstrap check: {} dates x {} bonds",
            history.len(),
            history.ladder().len()
        ));
    }
    print_output(&rows, format)?;

    if failed > 0 {
        if format == OutputFormat::Table {
            print_error(&format!("{failed} of {} dates failed", rows.len()));
        }
        return Err(CliError::CheckFailed {
            failed,
            total: rows.len(),
        }
        .into());
    }

    if format == OutputFormat::Table {
        print_success(&format!("all {} dates reprice within tolerance", rows.len()));
    }
    Ok(())
}
