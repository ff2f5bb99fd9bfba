//! Closed-form yield approximation.
//!
//! This is **not** an internal-rate-of-return solve. Each bond's yield is read
//! off a single closed-form expression:
//!
//! ```text
//! y_0 = -ln(P_0 / (100 + c_0/2)) / t_0
//! y_i = -(ln(P_i / (100 + c_i/2)) - i·ln(c_i/2)) / T_i,   T_i = Σ_{j≤i} t_j
//! ```
//!
//! where `P` is the dirty price. Zero-coupon bonds have no `ln(c/2)` term and
//! are priced with the `y_0` expression at any position, so an all-zero-coupon
//! ladder yields the same rates as the spot bootstrap.
//!
//! The approximation can produce values far from a true yield to maturity
//! (including negative ones for ordinary coupon bonds); it is kept as is so
//! that results stay comparable across runs.

use termstruct_core::discounting::continuous_zero_rate;
use termstruct_core::{AccrualBasis, BondQuote, Date, QuoteSet};

use crate::curves::YieldCurve;
use crate::error::{CurveError, CurveResult};

/// Builds a [`YieldCurve`] from one date's quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldApproximator {
    basis: AccrualBasis,
}

impl YieldApproximator {
    /// Creates an approximator using the default accrual basis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accrual basis.
    #[must_use]
    pub fn with_basis(mut self, basis: AccrualBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Returns the accrual basis.
    #[must_use]
    pub fn basis(&self) -> AccrualBasis {
        self.basis
    }

    /// Approximates the yield of every quote in the set.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidValue`] when a yield is not finite.
    pub fn approximate(&self, quotes: &QuoteSet) -> CurveResult<YieldCurve> {
        let date = quotes.date();
        let mut cumulative_maturity = 0.0;

        let rates = quotes
            .iter()
            .enumerate()
            .map(|(index, quote)| {
                cumulative_maturity += quote.maturity;
                self.approximate_one(date, index, quote, cumulative_maturity)
            })
            .collect::<CurveResult<Vec<f64>>>()?;

        log::debug!("{date}: approximated {} yields", rates.len());

        Ok(YieldCurve::new(date, quotes.maturities(), rates))
    }

    fn approximate_one(
        &self,
        date: Date,
        index: usize,
        quote: &BondQuote,
        cumulative_maturity: f64,
    ) -> CurveResult<f64> {
        let ratio = quote.dirty_price(self.basis) / quote.final_cashflow();

        let rate = if index == 0 || quote.is_zero_coupon() {
            continuous_zero_rate(ratio, quote.maturity)
        } else {
            let value =
                -(ratio.ln() - index as f64 * quote.coupon_payment().ln()) / cumulative_maturity;
            value.is_finite().then_some(value)
        };

        rate.ok_or_else(|| {
            CurveError::invalid_value(
                date,
                index,
                format!("yield is not finite (price ratio {ratio})"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::SpotBootstrapper;
    use approx::assert_relative_eq;

    fn date() -> Date {
        Date::from_ymd(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_closed_form_values() {
        let quotes = QuoteSet::new(
            date(),
            vec![
                BondQuote::new(99.5, 1.0, 0.5, 0),
                BondQuote::new(98.0, 1.5, 1.0, 90),
            ],
        )
        .unwrap();

        let curve = YieldApproximator::new().approximate(&quotes).unwrap();

        let dirty = 98.0 + 90.0 / 365.0 * 1.5;
        let expected = -((dirty / 100.75_f64).ln() - 0.75_f64.ln()) / 1.5;
        assert_relative_eq!(curve.rates()[0], 0.020_000_166_7, epsilon = 1e-9);
        assert_relative_eq!(curve.rates()[1], expected, epsilon = 1e-14);
        assert_relative_eq!(curve.rates()[1], -0.175_849_572_4, epsilon = 1e-9);
        assert_eq!(curve.tenors(), &[0.5, 1.0]);
    }

    #[test]
    fn test_zero_coupon_ladder_matches_spot() {
        let quotes = QuoteSet::new(
            date(),
            vec![
                BondQuote::new(99.0, 0.0, 0.5, 0),
                BondQuote::new(97.5, 0.0, 1.0, 0),
                BondQuote::new(95.8, 0.0, 1.5, 0),
                BondQuote::new(94.0, 0.0, 2.0, 0),
            ],
        )
        .unwrap();

        let spot = SpotBootstrapper::new().bootstrap(&quotes).unwrap();
        let yields = YieldApproximator::new().approximate(&quotes).unwrap();

        for (s, y) in spot.rates().iter().zip(yields.rates()) {
            assert_relative_eq!(s, y, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_independent_of_bootstrap_failure() {
        // The spot strip rejects this set; the approximation does not need it.
        let quotes = QuoteSet::new(
            date(),
            vec![
                BondQuote::new(99.0, 2.0, 0.5, 0),
                BondQuote::new(0.5, 400.0, 1.0, 0),
            ],
        )
        .unwrap();

        assert!(SpotBootstrapper::new().bootstrap(&quotes).is_err());
        let curve = YieldApproximator::new().approximate(&quotes).unwrap();
        assert_eq!(curve.len(), 2);
        assert!(curve.rates().iter().all(|r| r.is_finite()));
    }
}
