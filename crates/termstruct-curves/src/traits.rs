//! Common view over the curve types.

use std::fmt;

use serde::Serialize;
use termstruct_core::Date;

/// Which kind of curve a [`RateCurve`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Bootstrapped zero-coupon spot rates.
    Spot,
    /// Approximate yields.
    Yield,
    /// One-year-anchored forward rates.
    Forward,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CurveKind::Spot => "spot",
            CurveKind::Yield => "yield",
            CurveKind::Forward => "forward",
        })
    }
}

/// A per-date sequence of continuously-compounded rates on a fixed axis.
///
/// The axis is the bond maturity ladder for spot and yield curves and the
/// forward horizons ([`crate::forward::FORWARD_START_TIMES`]) for forward
/// curves.
pub trait RateCurve {
    /// Kind of curve.
    fn kind(&self) -> CurveKind;

    /// Observation date the curve was built for.
    fn date(&self) -> Date;

    /// Axis points (years), index-aligned with [`RateCurve::rates`].
    fn axis(&self) -> &[f64];

    /// Rates, index-aligned with [`RateCurve::axis`].
    fn rates(&self) -> &[f64];

    /// Number of points.
    fn len(&self) -> usize {
        self.rates().len()
    }

    /// True when the curve has no points.
    fn is_empty(&self) -> bool {
        self.rates().is_empty()
    }

    /// Rate at position `index`, if any.
    fn rate_at(&self, index: usize) -> Option<f64> {
        self.rates().get(index).copied()
    }
}
