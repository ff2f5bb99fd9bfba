//! Per-date curves stacked into date × tenor matrices.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::Serialize;
use termstruct_core::types::LADDER_TOLERANCE;
use termstruct_core::Date;
use termstruct_curves::{CurveKind, RateCurve};

use crate::error::{AnalyticsError, AnalyticsResult};

/// One curve kind over a run of dates.
///
/// `values[[d, k]]` is the rate at axis point `k` on `dates[d]`. Dates keep
/// the order of the input curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveMatrix {
    kind: CurveKind,
    dates: Vec<Date>,
    axis: Vec<f64>,
    values: Array2<f64>,
}

impl CurveMatrix {
    /// Stacks curves of one kind, one row per curve.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InsufficientDates` if `curves` is empty
    /// - `AnalyticsError::LadderMismatch` if a curve's axis differs from the
    ///   first curve's
    pub fn from_curves<C: RateCurve>(curves: &[C]) -> AnalyticsResult<Self> {
        let first = curves
            .first()
            .ok_or_else(|| AnalyticsError::insufficient_dates(1, 0))?;
        let kind = first.kind();
        let axis = first.axis().to_vec();

        for curve in curves {
            let same_axis = curve.axis().len() == axis.len()
                && curve
                    .axis()
                    .iter()
                    .zip(&axis)
                    .all(|(a, b)| (a - b).abs() <= LADDER_TOLERANCE);
            if !same_axis {
                return Err(AnalyticsError::LadderMismatch {
                    curve: kind,
                    date: curve.date(),
                    expected: axis.len(),
                    got: curve.axis().len(),
                });
            }
        }

        let mut values = Array2::zeros((curves.len(), axis.len()));
        for (mut row, curve) in values.axis_iter_mut(Axis(0)).zip(curves) {
            for (cell, rate) in row.iter_mut().zip(curve.rates()) {
                *cell = *rate;
            }
        }

        log::debug!(
            "assembled {kind} matrix: {} dates x {} points",
            curves.len(),
            axis.len()
        );

        Ok(Self {
            kind,
            dates: curves.iter().map(RateCurve::date).collect(),
            axis,
            values,
        })
    }

    /// Curve kind.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Observation dates, one per row.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Axis points (years), one per column.
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// The `[date, point]` matrix.
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Number of dates.
    pub fn n_dates(&self) -> usize {
        self.dates.len()
    }

    /// Number of axis points.
    pub fn n_points(&self) -> usize {
        self.axis.len()
    }

    /// Curve on date index `d`.
    pub fn row(&self, d: usize) -> ArrayView1<'_, f64> {
        self.values.row(d)
    }

    /// History of axis point `k`.
    pub fn column(&self, k: usize) -> ArrayView1<'_, f64> {
        self.values.column(k)
    }

    /// Columns `indices` as a new `[date, selected point]` matrix.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range; resolve indices with
    /// [`crate::selection::TenorSelection::indices`] first.
    pub fn select(&self, indices: &[usize]) -> Array2<f64> {
        self.values.select(Axis(1), indices)
    }
}
