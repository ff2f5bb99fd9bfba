//! Curve types produced once per observation date.
//!
//! All three are immutable after construction and index-aligned with their
//! axis: spot and yield rates with the bond maturity ladder, forward rates
//! with the forward horizons of [`crate::forward::FORWARD_START_TIMES`].

use serde::Serialize;
use termstruct_core::Date;

use crate::traits::{CurveKind, RateCurve};

/// Bootstrapped zero-coupon spot rates, one per bond.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotCurve {
    date: Date,
    tenors: Vec<f64>,
    rates: Vec<f64>,
}

impl SpotCurve {
    /// Creates a spot curve. `tenors` and `rates` must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn new(date: Date, tenors: Vec<f64>, rates: Vec<f64>) -> Self {
        assert_eq!(tenors.len(), rates.len(), "tenors and rates must align");
        Self { date, tenors, rates }
    }

    /// Observation date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Bond maturities (years).
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Spot rates, continuously compounded.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Discount factor at pillar `index`.
    pub fn discount_factor(&self, index: usize) -> Option<f64> {
        let rate = self.rates.get(index)?;
        Some(termstruct_core::discounting::continuous_discount_factor(
            *rate,
            self.tenors[index],
        ))
    }
}

impl RateCurve for SpotCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Spot
    }

    fn date(&self) -> Date {
        self.date
    }

    fn axis(&self) -> &[f64] {
        &self.tenors
    }

    fn rates(&self) -> &[f64] {
        &self.rates
    }
}

/// Approximate yields, one per bond.
///
/// See [`crate::yields`] for the closed-form approximation used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldCurve {
    date: Date,
    tenors: Vec<f64>,
    rates: Vec<f64>,
}

impl YieldCurve {
    /// Creates a yield curve. `tenors` and `rates` must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn new(date: Date, tenors: Vec<f64>, rates: Vec<f64>) -> Self {
        assert_eq!(tenors.len(), rates.len(), "tenors and rates must align");
        Self { date, tenors, rates }
    }

    /// Observation date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Bond maturities (years).
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Approximate yields.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateCurve for YieldCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Yield
    }

    fn date(&self) -> Date {
        self.date
    }

    fn axis(&self) -> &[f64] {
        &self.tenors
    }

    fn rates(&self) -> &[f64] {
        &self.rates
    }
}

/// One-year-anchored forward rates derived from a single spot curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardCurve {
    date: Date,
    start_times: Vec<f64>,
    rates: Vec<f64>,
}

impl ForwardCurve {
    /// Creates a forward curve. `start_times` and `rates` must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn new(date: Date, start_times: Vec<f64>, rates: Vec<f64>) -> Self {
        assert_eq!(start_times.len(), rates.len(), "start times and rates must align");
        Self {
            date,
            start_times,
            rates,
        }
    }

    /// Observation date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Axis values (years): the horizon of each forward from the one-year
    /// anchor, as in [`crate::forward::FORWARD_START_TIMES`].
    pub fn start_times(&self) -> &[f64] {
        &self.start_times
    }

    /// Forward rates.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateCurve for ForwardCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Forward
    }

    fn date(&self) -> Date {
        self.date
    }

    fn axis(&self) -> &[f64] {
        &self.start_times
    }

    fn rates(&self) -> &[f64] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date() -> Date {
        Date::from_ymd(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_spot_curve_accessors() {
        let curve = SpotCurve::new(date(), vec![0.5, 1.0], vec![0.02, 0.03]);
        assert_eq!(curve.len(), 2);
        assert_eq!(RateCurve::kind(&curve), CurveKind::Spot);
        assert_eq!(RateCurve::axis(&curve), &[0.5, 1.0]);
        assert_eq!(curve.rate_at(1), Some(0.03));
        assert_eq!(curve.rate_at(2), None);
        assert_relative_eq!(
            curve.discount_factor(1).unwrap(),
            (-0.03_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    #[should_panic(expected = "must align")]
    fn test_misaligned_panics() {
        let _ = YieldCurve::new(date(), vec![0.5], vec![0.02, 0.03]);
    }

    #[test]
    fn test_forward_curve_kind() {
        let curve = ForwardCurve::new(date(), vec![1.0], vec![0.04]);
        assert_eq!(RateCurve::kind(&curve), CurveKind::Forward);
        assert_eq!(curve.start_times(), &[1.0]);
        assert_eq!(CurveKind::Forward.to_string(), "forward");
    }
}
