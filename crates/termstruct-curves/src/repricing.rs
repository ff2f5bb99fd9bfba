//! Repricing validation for the spot bootstrap.
//!
//! A bootstrapped spot curve must reprice every bond it was stripped from.
//! Each bond's model dirty price is rebuilt from the curve's discount factors
//! and compared with the market dirty price:
//!
//! ```text
//! model_i = Σ_{j<i} (c_i/2)·exp(-r_j·t_j) + (100 + c_i/2)·exp(-r_i·t_i)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use termstruct_core::{BondQuote, Date, QuoteSet};
//! use termstruct_curves::prelude::*;
//!
//! let quotes = QuoteSet::new(
//!     Date::from_ymd(2025, 1, 6).unwrap(),
//!     vec![BondQuote::new(99.5, 1.0, 0.5, 0), BondQuote::new(98.0, 1.5, 1.0, 90)],
//! )
//! .unwrap();
//!
//! let result = SpotBootstrapper::new().bootstrap_validated(&quotes).unwrap();
//! assert!(result.is_valid());
//! assert!(result.repricing_report.max_error() < tolerances::STRICT);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use termstruct_core::{AccrualBasis, QuoteSet};

use crate::curves::SpotCurve;

/// Repricing tolerances, in absolute dirty-price units per 100 face.
pub mod tolerances {
    /// Near machine precision for prices around par.
    pub const STRICT: f64 = 1e-10;

    /// Default tolerance for bootstrap validation.
    pub const DEFAULT: f64 = 1e-9;

    /// Relaxed tolerance for noisy inputs.
    pub const RELAXED: f64 = 1e-4;
}

/// Result of repricing a single bond against the spot curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingCheck {
    /// Position of the bond in the maturity ladder.
    pub bond_index: usize,

    /// Bond maturity in years.
    pub maturity: f64,

    /// Market dirty price.
    pub market: f64,

    /// Dirty price implied by the curve.
    pub model: f64,

    /// Absolute error |model - market|.
    pub error: f64,

    /// Tolerance applied.
    pub tolerance: f64,

    /// Whether this bond passed.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new check result.
    #[must_use]
    pub fn new(bond_index: usize, maturity: f64, market: f64, model: f64, tolerance: f64) -> Self {
        let error = (model - market).abs();
        Self {
            bond_index,
            maturity,
            market,
            model,
            error,
            tolerance,
            passed: error <= tolerance,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} bond {} ({:.2}y) | market {:.6} | model {:.6} | error {:.2e} (tol {:.2e})",
            status, self.bond_index, self.maturity, self.market, self.model, self.error, self.tolerance
        )
    }
}

/// Repricing report for one date's spot curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);
        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };
        Self {
            checks,
            max_error,
            rms_error,
        }
    }

    /// Reprices every quote in `quotes` against `curve`.
    ///
    /// `curve` must have been built from `quotes`; pillars are matched by index.
    #[must_use]
    pub fn from_curve(
        quotes: &QuoteSet,
        curve: &SpotCurve,
        basis: AccrualBasis,
        tolerance: f64,
    ) -> Self {
        let discount_factors: Vec<f64> = (0..curve.len())
            .filter_map(|j| curve.discount_factor(j))
            .collect();

        let checks = quotes
            .iter()
            .enumerate()
            .zip(&discount_factors)
            .map(|((i, quote), df_i)| {
                let coupons: f64 = discount_factors[..i]
                    .iter()
                    .map(|df| quote.coupon_payment() * df)
                    .sum();
                let model = coupons + quote.final_cashflow() * df_i;
                RepricingCheck::new(i, quote.maturity, quote.dirty_price(basis), model, tolerance)
            })
            .collect();

        Self::new(checks)
    }

    /// Returns whether every bond repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Individual checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Root mean square error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Number of bonds outside tolerance.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Ladder indices of the bonds outside tolerance.
    #[must_use]
    pub fn failed_bonds(&self) -> Vec<usize> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.bond_index)
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(
            f,
            "Bonds: {}/{} passed",
            self.checks.len() - self.failed_count(),
            self.checks.len()
        )?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;
        for check in &self.checks {
            writeln!(f, "  {check}")?;
        }
        Ok(())
    }
}

/// A bootstrapped curve together with its repricing audit.
#[derive(Debug, Clone)]
pub struct BootstrapResult<C> {
    /// The bootstrapped curve.
    pub curve: C,

    /// Repricing validation report.
    pub repricing_report: RepricingReport,

    /// Time taken to build the curve.
    pub build_duration: Duration,
}

impl<C> BootstrapResult<C> {
    /// Creates a new bootstrap result.
    #[must_use]
    pub fn new(curve: C, repricing_report: RepricingReport, build_duration: Duration) -> Self {
        Self {
            curve,
            repricing_report,
            build_duration,
        }
    }

    /// Returns whether every input bond repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing_report.is_valid()
    }

    /// Unwraps the curve, discarding the report.
    #[must_use]
    pub fn into_curve(self) -> C {
        self.curve
    }
}

/// Wall-clock timer for curve builds.
#[derive(Debug, Clone, Copy)]
pub struct BuildTimer {
    start: Instant,
}

impl BuildTimer {
    /// Starts a new timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns the elapsed duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_check_passes_within_tolerance() {
        let check = RepricingCheck::new(0, 0.5, 99.5, 99.5 + 1e-12, tolerances::STRICT);
        assert!(check.passed);
        assert!(check.to_string().starts_with('✓'));
    }

    #[test]
    fn test_check_fails_outside_tolerance() {
        let check = RepricingCheck::new(3, 2.0, 97.0, 97.1, tolerances::DEFAULT);
        assert!(!check.passed);
        assert_relative_eq!(check.error, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_report_statistics() {
        let report = RepricingReport::new(vec![
            RepricingCheck::new(0, 0.5, 100.0, 100.0, 1e-6),
            RepricingCheck::new(1, 1.0, 100.0, 100.3, 1e-6),
            RepricingCheck::new(2, 1.5, 100.0, 99.6, 1e-6),
        ]);
        assert!(!report.is_valid());
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.failed_bonds(), vec![1, 2]);
        assert_relative_eq!(report.max_error(), 0.4, epsilon = 1e-12);
        assert_relative_eq!(
            report.rms_error(),
            ((0.09 + 0.16) / 3.0_f64).sqrt(),
            epsilon = 1e-12
        );
        assert!(report.to_string().contains("FAILED"));
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.max_error(), 0.0);
        assert_eq!(report.rms_error(), 0.0);
    }
}
