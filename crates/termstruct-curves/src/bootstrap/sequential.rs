//! Sequential spot bootstrap.
//!
//! For bond `i` with semi-annual coupon figure `c_i`, maturity `t_i` and dirty
//! price `P_i`:
//!
//! ```text
//! residual = P_i - Σ_{j<i} (c_i/2)·exp(-r_j·t_j)
//! r_i      = -ln(residual / (100 + c_i/2)) / t_i
//! ```
//!
//! Earlier coupons are assumed to fall on the earlier ladder pillars.

use termstruct_core::discounting::{continuous_discount_factor, continuous_zero_rate};
use termstruct_core::{AccrualBasis, BondQuote, Date, QuoteSet};

use crate::curves::SpotCurve;
use crate::error::{CurveError, CurveResult};
use crate::repricing::{tolerances, BootstrapResult, BuildTimer, RepricingReport};

/// Configuration for the spot bootstrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotBootstrapConfig {
    /// Year basis for turning accrual days into accrued coupon.
    pub basis: AccrualBasis,
    /// Repricing tolerance used by the validated bootstrap.
    pub tolerance: f64,
}

impl Default for SpotBootstrapConfig {
    fn default() -> Self {
        Self {
            basis: AccrualBasis::default(),
            tolerance: tolerances::DEFAULT,
        }
    }
}

/// Sequential bootstrapper turning one date's quotes into a spot curve.
///
/// The bootstrapper is stateless apart from its configuration; the same
/// instance can be reused across dates and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotBootstrapper {
    config: SpotBootstrapConfig,
}

impl SpotBootstrapper {
    /// Creates a bootstrapper with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: SpotBootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the accrual basis.
    #[must_use]
    pub fn with_basis(mut self, basis: AccrualBasis) -> Self {
        self.config.basis = basis;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SpotBootstrapConfig {
        &self.config
    }

    /// Bootstraps the spot curve for one date.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InconsistentQuote`] when stripping earlier
    /// coupons leaves a non-positive value for a bond's final cashflow.
    pub fn bootstrap(&self, quotes: &QuoteSet) -> CurveResult<SpotCurve> {
        let date = quotes.date();
        let pillars = quotes.iter().enumerate().try_fold(
            Vec::with_capacity(quotes.len()),
            |mut pillars: Vec<(f64, f64)>, (index, quote)| {
                let rate = self.solve_rate(date, index, quote, &pillars)?;
                log::trace!(
                    "{date}: bond {index} maturity {:.4} -> spot {rate:.8}",
                    quote.maturity
                );
                pillars.push((quote.maturity, rate));
                Ok::<_, CurveError>(pillars)
            },
        )?;

        log::debug!("{date}: bootstrapped {} spot rates", pillars.len());

        let (tenors, rates) = pillars.into_iter().unzip();
        Ok(SpotCurve::new(date, tenors, rates))
    }

    /// Bootstraps and reprices every input bond.
    ///
    /// The curve is returned even when some bonds fall outside tolerance; the
    /// report records which ones.
    pub fn bootstrap_validated(&self, quotes: &QuoteSet) -> CurveResult<BootstrapResult<SpotCurve>> {
        let timer = BuildTimer::start();
        let curve = self.bootstrap(quotes)?;
        let report =
            RepricingReport::from_curve(quotes, &curve, self.config.basis, self.config.tolerance);

        if !report.is_valid() {
            log::warn!(
                "{}: {} bonds outside repricing tolerance (max error {:.2e})",
                quotes.date(),
                report.failed_count(),
                report.max_error()
            );
        }

        Ok(BootstrapResult::new(curve, report, timer.elapsed()))
    }

    /// Like [`SpotBootstrapper::bootstrap_validated`], but fails when any bond
    /// does not reprice.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::RepricingFailed`] on repricing failure, in
    /// addition to the errors of [`SpotBootstrapper::bootstrap`].
    pub fn bootstrap_validated_strict(
        &self,
        quotes: &QuoteSet,
    ) -> CurveResult<BootstrapResult<SpotCurve>> {
        let result = self.bootstrap_validated(quotes)?;

        if !result.is_valid() {
            let report = &result.repricing_report;
            return Err(CurveError::RepricingFailed {
                date: quotes.date(),
                failed_count: report.failed_count(),
                max_error: report.max_error(),
                bonds: report.failed_bonds(),
            });
        }

        Ok(result)
    }

    /// Solves bond `index`'s spot rate given the pillars already solved.
    fn solve_rate(
        &self,
        date: Date,
        index: usize,
        quote: &BondQuote,
        pillars: &[(f64, f64)],
    ) -> CurveResult<f64> {
        let coupon = quote.coupon_payment();
        let earlier_coupons: f64 = pillars
            .iter()
            .map(|&(t, r)| coupon * continuous_discount_factor(r, t))
            .sum();

        let residual = quote.dirty_price(self.config.basis) - earlier_coupons;
        if residual.is_nan() || residual <= 0.0 {
            return Err(CurveError::inconsistent_quote(
                date,
                index,
                quote.maturity,
                residual,
            ));
        }

        continuous_zero_rate(residual / quote.final_cashflow(), quote.maturity).ok_or_else(|| {
            CurveError::invalid_value(
                date,
                index,
                format!("spot rate is not finite (residual {residual})"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date() -> Date {
        Date::from_ymd(2025, 1, 6).unwrap()
    }

    fn two_bond_set() -> QuoteSet {
        QuoteSet::new(
            date(),
            vec![
                BondQuote::new(99.5, 1.0, 0.5, 0),
                BondQuote::new(98.0, 1.5, 1.0, 90),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_first_bond_has_no_earlier_coupons() {
        let curve = SpotBootstrapper::new().bootstrap(&two_bond_set()).unwrap();
        let expected = -(99.5_f64 / 100.5).ln() / 0.5;
        assert_relative_eq!(curve.rates()[0], expected, epsilon = 1e-15);
        assert_relative_eq!(curve.rates()[0], 0.020_000_166_7, epsilon = 1e-9);
    }

    #[test]
    fn test_second_bond_strips_coupon_at_first_pillar() {
        let curve = SpotBootstrapper::new().bootstrap(&two_bond_set()).unwrap();

        let dirty = 98.0 + 90.0 / 365.0 * 1.5;
        let residual = dirty - 0.75 * (-curve.rates()[0] * 0.5).exp();
        let expected = -(residual / 100.75).ln() / 1.0;

        assert_relative_eq!(curve.rates()[1], expected, epsilon = 1e-14);
        assert_relative_eq!(curve.rates()[1], 0.031_484_770_2, epsilon = 1e-9);
    }

    #[test]
    fn test_act360_changes_accrued() {
        let act365 = SpotBootstrapper::new().bootstrap(&two_bond_set()).unwrap();
        let act360 = SpotBootstrapper::new()
            .with_basis(AccrualBasis::Act360)
            .bootstrap(&two_bond_set())
            .unwrap();

        // No accrual on the first bond, so only the second rate moves.
        assert_eq!(act365.rates()[0], act360.rates()[0]);
        assert!(act360.rates()[1] < act365.rates()[1]);
    }

    #[test]
    fn test_inconsistent_quote_is_rejected() {
        let quotes = QuoteSet::new(
            date(),
            vec![
                BondQuote::new(99.0, 2.0, 0.5, 0),
                BondQuote::new(0.5, 400.0, 1.0, 0),
            ],
        )
        .unwrap();

        let err = SpotBootstrapper::new().bootstrap(&quotes).unwrap_err();
        match err {
            CurveError::InconsistentQuote {
                bond_index,
                residual,
                ..
            } => {
                assert_eq!(bond_index, 1);
                assert!(residual <= 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validated_reprices_inputs() {
        let result = SpotBootstrapper::new()
            .bootstrap_validated(&two_bond_set())
            .unwrap();
        assert!(result.is_valid());
        assert_eq!(result.repricing_report.checks().len(), 2);
        assert!(result.repricing_report.max_error() < tolerances::STRICT);
    }

    #[test]
    fn test_strict_rejects_impossible_tolerance() {
        let err = SpotBootstrapper::new()
            .with_tolerance(-1.0)
            .bootstrap_validated_strict(&two_bond_set())
            .unwrap_err();
        assert!(matches!(
            err,
            CurveError::RepricingFailed { failed_count: 2, .. }
        ));
    }

    #[test]
    fn test_deterministic() {
        let bootstrapper = SpotBootstrapper::new();
        let a = bootstrapper.bootstrap(&two_bond_set()).unwrap();
        let b = bootstrapper.bootstrap(&two_bond_set()).unwrap();
        assert_eq!(a, b);
    }
}
