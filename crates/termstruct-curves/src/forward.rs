//! One-year-anchored forward rates.
//!
//! With a semi-annual spot ladder, spot index `k` sits at `(k + 1)/2` years.
//! Every forward starts at one year (spot index 1) and runs for
//! `n = (k - 1)/2` years, ending at `k`:
//!
//! ```text
//! f = (s_k·(n + 1) - s_1) / n
//! ```
//!
//! evaluated for `k = 3..=9`, so `n = 1.0, 1.5, …, 4.0`.
//!
//! These horizons `n` are the values of [`FORWARD_START_TIMES`], and they are
//! also the axis of the resulting [`ForwardCurve`] (its `start_times`): axis
//! point `i` holds the forward from 1 year to `1 + n_i` years.

use crate::curves::{ForwardCurve, SpotCurve};
use crate::error::{CurveError, CurveResult};

/// Forward horizons `n` (years) and forward curve axis; see the module docs.
pub const FORWARD_START_TIMES: [f64; 7] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

/// Spot index of the one-year anchor.
pub const ONE_YEAR_INDEX: usize = 1;

/// Spot index of the first forward terminal point.
pub const FIRST_TERMINAL_INDEX: usize = 3;

/// Minimum spot curve length; the last forward reads spot index 9.
pub const MIN_SPOT_POINTS: usize = FIRST_TERMINAL_INDEX + FORWARD_START_TIMES.len();

/// Derives a [`ForwardCurve`] from a [`SpotCurve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardRateDeriver;

impl ForwardRateDeriver {
    /// Creates a new deriver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Derives the forward curve for one date.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] when the spot curve has fewer
    /// than [`MIN_SPOT_POINTS`] entries.
    pub fn derive(&self, spot: &SpotCurve) -> CurveResult<ForwardCurve> {
        let rates = self.derive_rates(spot.rates())?;
        log::debug!("{}: derived {} forward rates", spot.date(), rates.len());
        Ok(ForwardCurve::new(
            spot.date(),
            FORWARD_START_TIMES.to_vec(),
            rates,
        ))
    }

    /// Derives forward rates from raw spot rates.
    ///
    /// ```rust
    /// use termstruct_curves::forward::ForwardRateDeriver;
    ///
    /// let spot = [0.03; 10];
    /// let forwards = ForwardRateDeriver::new().derive_rates(&spot).unwrap();
    /// assert!(forwards.iter().all(|f| (f - 0.03).abs() < 1e-15));
    /// ```
    pub fn derive_rates(&self, spot: &[f64]) -> CurveResult<Vec<f64>> {
        if spot.len() < MIN_SPOT_POINTS {
            return Err(CurveError::insufficient_points(MIN_SPOT_POINTS, spot.len()));
        }

        let anchor = spot[ONE_YEAR_INDEX];
        Ok(FORWARD_START_TIMES
            .iter()
            .enumerate()
            .map(|(i, &n)| (spot[FIRST_TERMINAL_INDEX + i] * (n + 1.0) - anchor) / n)
            .collect())
    }
}
