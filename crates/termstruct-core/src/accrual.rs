//! Accrual year basis.
//!
//! Quotes carry the number of days since the last coupon payment. The accrued
//! coupon added to the clean price is `accrual_days / basis × coupon_rate`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Year basis used to convert accrual days into a year fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualBasis {
    /// Actual/365 Fixed: the year is always 365 days.
    #[default]
    Act365Fixed,
    /// Actual/360: the year is 360 days.
    Act360,
}

impl AccrualBasis {
    /// Number of days in the basis year.
    #[must_use]
    pub fn days_per_year(&self) -> f64 {
        match self {
            AccrualBasis::Act365Fixed => 365.0,
            AccrualBasis::Act360 => 360.0,
        }
    }

    /// Year fraction covered by `days`.
    #[must_use]
    pub fn year_fraction(&self, days: u32) -> f64 {
        f64::from(days) / self.days_per_year()
    }

    /// Short market name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AccrualBasis::Act365Fixed => "ACT/365F",
            AccrualBasis::Act360 => "ACT/360",
        }
    }
}

impl fmt::Display for AccrualBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
