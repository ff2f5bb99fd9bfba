//! Curves command implementation.
//!
//! Builds spot, yield and forward curves for every date of a quote file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use termstruct_analytics::{AnalysisConfig, AnalyticsResult, CurveMatrix, TermStructureAnalysis};
use termstruct_core::QuoteHistory;
use termstruct_curves::CurveKind;

use crate::cli::OutputFormat;
use crate::commands::{available, load_history};
use crate::output::{format_percent, format_tenor, print_header, print_output};

/// Arguments for the curves command.
#[derive(Args, Debug)]
pub struct CurvesArgs {
    /// Quote file (CSV: date,maturity,coupon_rate,clean_price,accrual_days)
    pub input: PathBuf,

    /// Which curves to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub kind: KindChoice,
}

/// Curve kind choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindChoice {
    /// Bootstrapped spot rates
    Spot,
    /// Approximate yields
    Yield,
    /// One-year-anchored forwards
    Forward,
    /// All three
    All,
}

/// One curve point on one date.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CurvePointRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Curve")]
    pub curve: String,
    #[tabled(rename = "Index")]
    pub index: usize,
    #[tabled(rename = "Tenor", display_with = "format_tenor")]
    pub tenor: f64,
    #[tabled(rename = "Rate", display_with = "format_percent")]
    pub rate: f64,
}

/// Flattens a curve matrix into rows, date-major.
fn matrix_rows(matrix: &CurveMatrix) -> Vec<CurvePointRow> {
    let curve = matrix.kind().to_string();
    matrix
        .dates()
        .iter()
        .enumerate()
        .flat_map(|(d, date)| {
            let curve = curve.clone();
            matrix
                .row(d)
                .iter()
                .zip(matrix.axis())
                .enumerate()
                .map(move |(index, (&rate, &tenor))| CurvePointRow {
                    date: date.to_string(),
                    curve: curve.clone(),
                    index,
                    tenor,
                    rate,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Builds only the requested curve kinds.
fn build(
    pipeline: &TermStructureAnalysis,
    history: &QuoteHistory,
    kind: KindChoice,
) -> Vec<(CurveKind, AnalyticsResult<CurveMatrix>)> {
    match kind {
        KindChoice::Spot => vec![(
            CurveKind::Spot,
            pipeline
                .build_spot_curves(history)
                .and_then(|spot| CurveMatrix::from_curves(&spot.curves)),
        )],
        KindChoice::Yield => vec![(CurveKind::Yield, pipeline.build_yield_curves(history))],
        KindChoice::Forward => vec![(
            CurveKind::Forward,
            pipeline
                .build_spot_curves(history)
                .and_then(|spot| pipeline.build_forward_curves(&spot)),
        )],
        KindChoice::All => {
            let series = pipeline.build_curves(history);
            vec![
                (CurveKind::Spot, series.spot),
                (CurveKind::Yield, series.yields),
                (CurveKind::Forward, series.forwards),
            ]
        }
    }
}

/// Execute the curves command.
pub fn execute(args: CurvesArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let history = load_history(&args.input)?;
    let pipeline = TermStructureAnalysis::new(config.clone());
    let matrices = available(build(&pipeline, &history, args.kind))?;

    match format {
        OutputFormat::Table => {
            for matrix in &matrices {
                print_header(&format!(
                    "{} curves ({} dates x {} points)",
                    matrix.kind(),
                    matrix.n_dates(),
                    matrix.n_points()
                ));
                print_output(&matrix_rows(matrix), format)?;
            }
        }
        OutputFormat::Json | OutputFormat::Csv => {
            let rows: Vec<CurvePointRow> = matrices.iter().flat_map(matrix_rows).collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
