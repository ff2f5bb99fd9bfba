//! Factors command implementation.
//!
//! Log-return covariance of selected curve points and its eigenpairs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use termstruct_analytics::{AnalysisConfig, FactorAnalysis, TermStructureAnalysis};
use termstruct_curves::CurveKind;

use crate::cli::OutputFormat;
use crate::commands::{available, load_history};
use crate::output::{
    format_percent, format_sci, print_header, print_json, print_output, print_warning,
};

/// Arguments for the factors command.
#[derive(Args, Debug)]
pub struct FactorsArgs {
    /// Quote file (CSV: date,maturity,coupon_rate,clean_price,accrual_days)
    pub input: PathBuf,

    /// Which curve's factors to compute
    #[arg(long, value_enum, default_value = "both")]
    pub curve: FactorCurveChoice,

    /// Order eigenpairs by descending eigenvalue instead of solver order
    #[arg(long)]
    pub sorted: bool,
}

/// Curve choices for factor analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FactorCurveChoice {
    /// Approximate yields
    Yield,
    /// Forward rates
    Forward,
    /// Both
    Both,
}

/// One eigenpair for tabular output.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EigenRow {
    #[tabled(rename = "Curve")]
    pub curve: String,
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Eigenvalue", display_with = "format_sci")]
    pub eigenvalue: f64,
    #[tabled(rename = "Explained", display_with = "format_percent")]
    pub explained: f64,
    #[tabled(rename = "Residual", display_with = "format_sci")]
    pub residual: f64,
    #[tabled(rename = "Eigenvector")]
    pub vector: String,
}

/// Full factor output for JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FactorReport {
    pub curve: String,
    pub selection: Vec<usize>,
    pub tenors: Vec<f64>,
    pub dates: Vec<String>,
    pub log_returns: Vec<Vec<f64>>,
    pub covariance: Vec<Vec<f64>>,
    pub eigenpairs: Vec<EigenPairReport>,
    pub warnings: Vec<String>,
}

/// One eigenpair for JSON.
#[derive(Debug, Clone, Serialize)]
pub struct EigenPairReport {
    pub eigenvalue: f64,
    pub explained_variance: f64,
    pub residual_norm: f64,
    pub eigenvector: Vec<f64>,
}

fn eigen_pairs(factors: &FactorAnalysis, sorted: bool) -> Vec<EigenPairReport> {
    let explained = factors.eigen.explained_variance();
    let residuals = factors.residual_norms();
    let mut pairs: Vec<EigenPairReport> = factors
        .eigen
        .pairs
        .iter()
        .zip(explained)
        .zip(residuals)
        .map(|((pair, explained_variance), residual_norm)| EigenPairReport {
            eigenvalue: pair.value,
            explained_variance,
            residual_norm,
            eigenvector: pair.vector.iter().copied().collect(),
        })
        .collect();

    if sorted {
        pairs.sort_by(|a, b| b.eigenvalue.total_cmp(&a.eigenvalue));
    }
    pairs
}

fn factor_report(factors: &FactorAnalysis, sorted: bool) -> FactorReport {
    FactorReport {
        curve: factors.kind.to_string(),
        selection: factors.selection.clone(),
        tenors: factors.tenors.clone(),
        dates: factors.dates.iter().map(ToString::to_string).collect(),
        log_returns: factors
            .log_returns
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect(),
        covariance: factors
            .covariance
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect(),
        eigenpairs: eigen_pairs(factors, sorted),
        warnings: factors.eigen.warnings.iter().map(ToString::to_string).collect(),
    }
}

fn eigen_rows(report: &FactorReport) -> Vec<EigenRow> {
    report
        .eigenpairs
        .iter()
        .enumerate()
        .map(|(index, pair)| EigenRow {
            curve: report.curve.clone(),
            index,
            eigenvalue: pair.eigenvalue,
            explained: pair.explained_variance,
            residual: pair.residual_norm,
            vector: pair
                .eigenvector
                .iter()
                .map(|x| format!("{x:+.4}"))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}

/// Execute the factors command.
pub fn execute(args: FactorsArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let history = load_history(&args.input)?;
    let pipeline = TermStructureAnalysis::new(config.clone());

    let mut outcomes = Vec::new();
    if matches!(args.curve, FactorCurveChoice::Yield | FactorCurveChoice::Both) {
        let factors = pipeline.build_yield_curves(&history).and_then(|yields| {
            FactorAnalysis::analyze(&yields, &config.yield_points, config.eigen_tolerance)
        });
        outcomes.push((CurveKind::Yield, factors));
    }
    if matches!(args.curve, FactorCurveChoice::Forward | FactorCurveChoice::Both) {
        let factors = pipeline
            .build_spot_curves(&history)
            .and_then(|spot| pipeline.build_forward_curves(&spot))
            .and_then(|forwards| {
                FactorAnalysis::analyze(&forwards, &config.forward_points, config.eigen_tolerance)
            });
        outcomes.push((CurveKind::Forward, factors));
    }
    let analyses = available(outcomes)?;

    let reports: Vec<FactorReport> = analyses
        .iter()
        .map(|factors| factor_report(factors, args.sorted))
        .collect();

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Csv => {
            let rows: Vec<EigenRow> = reports.iter().flat_map(eigen_rows).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Table => {
            for report in &reports {
                let tenors: Vec<String> = report.tenors.iter().map(|t| format!("{t}Y")).collect();
                print_header(&format!(
                    "{} factors: {} points [{}], {} log returns",
                    report.curve,
                    report.selection.len(),
                    tenors.join(", "),
                    report.dates.len()
                ));
                print_output(&eigen_rows(report), format)?;
                for warning in &report.warnings {
                    print_warning(warning);
                }
            }
        }
    }

    Ok(())
}
