//! Continuous compounding helpers.
//!
//! All curves in termstruct are continuously compounded:
//!
//! ```text
//! DF(t) = exp(-r·t)        r = -ln(DF) / t
//! ```

/// Discount factor for a continuously-compounded rate over `t` years.
///
/// ```rust
/// use termstruct_core::discounting::continuous_discount_factor;
///
/// let df = continuous_discount_factor(0.05, 1.0);
/// assert!((df - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[must_use]
pub fn continuous_discount_factor(rate: f64, t: f64) -> f64 {
    (-rate * t).exp()
}

/// Continuously-compounded rate implied by a discount factor over `t` years.
///
/// Returns `None` when the discount factor is not strictly positive, the
/// horizon is not strictly positive, or the result is not finite.
#[must_use]
pub fn continuous_zero_rate(df: f64, t: f64) -> Option<f64> {
    if df.is_nan() || t.is_nan() || df <= 0.0 || t <= 0.0 {
        return None;
    }
    let rate = -df.ln() / t;
    rate.is_finite().then_some(rate)
}
