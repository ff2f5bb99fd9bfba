//! Log-return covariance and its principal factors.

use nalgebra::DMatrix;
use ndarray::Array2;
use termstruct_core::Date;
use termstruct_curves::CurveKind;
use termstruct_math::linear_algebra::{eigen_decomposition, EigenDecomposition};
use termstruct_math::statistics::{log_returns, sample_covariance};
use termstruct_math::MathError;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::selection::TenorSelection;
use crate::timeseries::CurveMatrix;

/// Dates needed for a covariance: two log-return observations.
pub const MIN_DATES: usize = 3;

/// Factor analysis of one curve kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorAnalysis {
    /// Curve kind analysed.
    pub kind: CurveKind,
    /// Curve indices that were selected.
    pub selection: Vec<usize>,
    /// Axis value (years) of each selected point.
    pub tenors: Vec<f64>,
    /// Date of each log-return observation's end point.
    pub dates: Vec<Date>,
    /// `[selected point, transition]` log returns.
    pub log_returns: Array2<f64>,
    /// Sample covariance of the log returns.
    pub covariance: DMatrix<f64>,
    /// Eigendecomposition of the covariance, in solver order.
    pub eigen: EigenDecomposition,
}

impl FactorAnalysis {
    /// Runs the analysis over `matrix` restricted to `selection`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InsufficientDates` with fewer than [`MIN_DATES`] dates
    /// - `AnalyticsError::InvalidSelection` if the selection does not fit
    /// - `AnalyticsError::NonPositiveRate` if a selected rate is not positive
    pub fn analyze(
        matrix: &CurveMatrix,
        selection: &TenorSelection,
        tolerance: f64,
    ) -> AnalyticsResult<Self> {
        if matrix.n_dates() < MIN_DATES {
            return Err(AnalyticsError::insufficient_dates(MIN_DATES, matrix.n_dates()));
        }
        let indices = selection.indices(matrix.n_points())?;
        let levels = matrix.select(&indices);

        let returns = log_returns(levels.view()).map_err(|err| match err {
            MathError::NonPositiveValue { row, col, value } => AnalyticsError::NonPositiveRate {
                curve: matrix.kind(),
                date: matrix.dates()[row],
                tenor_index: indices[col],
                value,
            },
            other => other.into(),
        })?;

        let covariance = sample_covariance(returns.view())?;
        let eigen = eigen_decomposition(&covariance, tolerance)?;

        log::debug!(
            "{} factors: {} points over {} transitions, {} advisories",
            matrix.kind(),
            indices.len(),
            returns.ncols(),
            eigen.warnings.len()
        );

        Ok(Self {
            kind: matrix.kind(),
            tenors: indices.iter().map(|&i| matrix.axis()[i]).collect(),
            dates: matrix.dates()[1..].to_vec(),
            selection: indices,
            log_returns: returns,
            covariance,
            eigen,
        })
    }

    /// `‖C·v − λ·v‖` for every eigenpair.
    #[must_use]
    pub fn residual_norms(&self) -> Vec<f64> {
        (0..self.eigen.len())
            .map(|i| self.eigen.residual_norm(&self.covariance, i))
            .collect()
    }
}
