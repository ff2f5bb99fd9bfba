//! Bond quote type.

use serde::{Deserialize, Serialize};

use crate::accrual::AccrualBasis;
use crate::error::{CoreError, CoreResult};

/// Largest accepted number of days since the last coupon.
///
/// A semi-annual period runs at most 184 calendar days.
pub const MAX_ACCRUAL_DAYS: u32 = 184;

/// Face value each bond redeems at.
pub const FACE_VALUE: f64 = 100.0;

/// A single bond observation on one trading date.
///
/// `coupon_rate` is the quoted coupon figure; each coupon cashflow is
/// `coupon_rate / 2` per 100 face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondQuote {
    /// Clean price per 100 face.
    pub clean_price: f64,
    /// Quoted coupon figure.
    pub coupon_rate: f64,
    /// Time to maturity in years.
    pub maturity: f64,
    /// Days since the last coupon payment.
    pub accrual_days: u32,
}

impl BondQuote {
    /// Creates a new quote without validation.
    #[must_use]
    pub fn new(clean_price: f64, coupon_rate: f64, maturity: f64, accrual_days: u32) -> Self {
        Self {
            clean_price,
            coupon_rate,
            maturity,
            accrual_days,
        }
    }

    /// Single coupon cashflow, `coupon_rate / 2`.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.coupon_rate / 2.0
    }

    /// Final cashflow at maturity: face plus the last coupon.
    #[must_use]
    pub fn final_cashflow(&self) -> f64 {
        FACE_VALUE + self.coupon_payment()
    }

    /// Accrued coupon since the last payment.
    #[must_use]
    pub fn accrued_interest(&self, basis: AccrualBasis) -> f64 {
        basis.year_fraction(self.accrual_days) * self.coupon_rate
    }

    /// Dirty (full) price: clean price plus accrued coupon.
    ///
    /// ```rust
    /// use termstruct_core::{AccrualBasis, BondQuote};
    ///
    /// let quote = BondQuote::new(98.0, 1.5, 1.0, 73);
    /// let dirty = quote.dirty_price(AccrualBasis::Act365Fixed);
    /// assert!((dirty - 98.3).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn dirty_price(&self, basis: AccrualBasis) -> f64 {
        self.clean_price + self.accrued_interest(basis)
    }

    /// Returns true when the bond pays no coupon.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }

    /// Validates the quote.
    ///
    /// `index` is the quote's position within its date and is only used for
    /// the error message.
    pub fn validate(&self, index: usize) -> CoreResult<()> {
        if !self.clean_price.is_finite() || self.clean_price <= 0.0 {
            return Err(CoreError::invalid_quote(
                index,
                format!("clean price must be positive, got {}", self.clean_price),
            ));
        }
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(CoreError::invalid_quote(
                index,
                format!("coupon rate must be non-negative, got {}", self.coupon_rate),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(CoreError::invalid_quote(
                index,
                format!("maturity must be positive, got {}", self.maturity),
            ));
        }
        if self.accrual_days > MAX_ACCRUAL_DAYS {
            return Err(CoreError::invalid_quote(
                index,
                format!(
                    "accrual days must be within [0, {MAX_ACCRUAL_DAYS}], got {}",
                    self.accrual_days
                ),
            ));
        }
        Ok(())
    }
}
