//! Analysis configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use termstruct_core::AccrualBasis;
use termstruct_curves::repricing::tolerances;
use termstruct_math::linear_algebra::DEFAULT_EIGEN_TOLERANCE;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::selection::TenorSelection;

/// Settings for [`crate::pipeline::TermStructureAnalysis`].
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// accrual_basis = "act360"
/// yield_points = { explicit = [1, 5, 9] }
/// eigen_tolerance = 1e-12
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Year basis for accrued coupon.
    pub accrual_basis: AccrualBasis,

    /// Points of the yield curve used for factor analysis.
    pub yield_points: TenorSelection,

    /// Points of the forward curve used for factor analysis.
    pub forward_points: TenorSelection,

    /// Absolute dirty-price tolerance for bootstrap repricing.
    pub repricing_tolerance: f64,

    /// Fail a date whose spot curve does not reprice its quotes.
    pub strict_repricing: bool,

    /// Relative threshold for eigen advisories.
    pub eigen_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            accrual_basis: AccrualBasis::default(),
            yield_points: TenorSelection::AnnualYieldPoints,
            forward_points: TenorSelection::AnnualForwardPoints,
            repricing_tolerance: tolerances::DEFAULT,
            strict_repricing: false,
            eigen_tolerance: DEFAULT_EIGEN_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> AnalyticsResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| AnalyticsError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalyticsError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Checks that tolerances are usable.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.repricing_tolerance.is_finite() || self.repricing_tolerance < 0.0 {
            return Err(AnalyticsError::config(format!(
                "repricing_tolerance must be a non-negative number, got {}",
                self.repricing_tolerance
            )));
        }
        if !self.eigen_tolerance.is_finite() || self.eigen_tolerance < 0.0 {
            return Err(AnalyticsError::config(format!(
                "eigen_tolerance must be a non-negative number, got {}",
                self.eigen_tolerance
            )));
        }
        Ok(())
    }
}
