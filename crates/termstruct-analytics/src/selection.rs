//! Tenor-point selection for factor analysis.
//!
//! Curves are built on a semi-annual ladder (0.5y, 1.0y, 1.5y, ...). The
//! annual points of a yield curve therefore sit at the odd indices, and the
//! forward curve's whole-year horizons 1y, 2y, 3y, 4y at the even indices.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Forward curve indices at whole-year horizons.
pub const ANNUAL_FORWARD_INDICES: [usize; 4] = [0, 2, 4, 6];

/// Odd indices `1, 3, 5, …` below `len`: the whole-year points of a
/// semi-annual ladder.
///
/// ```rust
/// use termstruct_analytics::selection::annual_yield_indices;
///
/// assert_eq!(annual_yield_indices(10), vec![1, 3, 5, 7, 9]);
/// assert_eq!(annual_yield_indices(18).len(), 9);
/// ```
#[must_use]
pub fn annual_yield_indices(len: usize) -> Vec<usize> {
    (1..len).step_by(2).collect()
}

/// Which curve points enter the log-return covariance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenorSelection {
    /// Whole-year points of a semi-annual yield or spot curve.
    AnnualYieldPoints,
    /// Whole-year horizons of the forward curve.
    AnnualForwardPoints,
    /// Explicit, strictly ascending indices.
    Explicit(Vec<usize>),
}

impl TenorSelection {
    /// Resolves the selection against a curve with `len` points.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidSelection` when the selection is empty,
    /// reaches past the curve, or is not strictly ascending.
    pub fn indices(&self, len: usize) -> AnalyticsResult<Vec<usize>> {
        let indices = match self {
            TenorSelection::AnnualYieldPoints => annual_yield_indices(len),
            TenorSelection::AnnualForwardPoints => ANNUAL_FORWARD_INDICES.to_vec(),
            TenorSelection::Explicit(indices) => indices.clone(),
        };

        if indices.is_empty() {
            return Err(AnalyticsError::invalid_selection(format!(
                "no points selected from a curve of {len}"
            )));
        }
        if let Some(&out_of_range) = indices.iter().find(|&&i| i >= len) {
            return Err(AnalyticsError::invalid_selection(format!(
                "index {out_of_range} is out of range for a curve of {len}"
            )));
        }
        if indices.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AnalyticsError::invalid_selection(format!(
                "indices must be strictly ascending, got {indices:?}"
            )));
        }

        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_yield_points() {
        assert_eq!(
            TenorSelection::AnnualYieldPoints.indices(10).unwrap(),
            vec![1, 3, 5, 7, 9]
        );
        assert_eq!(
            TenorSelection::AnnualYieldPoints.indices(18).unwrap(),
            vec![1, 3, 5, 7, 9, 11, 13, 15, 17]
        );
        assert!(TenorSelection::AnnualYieldPoints.indices(1).is_err());
    }

    #[test]
    fn test_annual_forward_points() {
        assert_eq!(
            TenorSelection::AnnualForwardPoints.indices(7).unwrap(),
            vec![0, 2, 4, 6]
        );
        assert!(TenorSelection::AnnualForwardPoints.indices(6).is_err());
    }

    #[test]
    fn test_explicit_validation() {
        assert_eq!(
            TenorSelection::Explicit(vec![0, 4]).indices(5).unwrap(),
            vec![0, 4]
        );
        assert!(TenorSelection::Explicit(vec![]).indices(5).is_err());
        assert!(TenorSelection::Explicit(vec![0, 5]).indices(5).is_err());
        assert!(TenorSelection::Explicit(vec![3, 1]).indices(5).is_err());
        assert!(TenorSelection::Explicit(vec![2, 2]).indices(5).is_err());
    }
}
