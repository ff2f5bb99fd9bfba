//! End-to-end analysis of a quote history.
//!
//! ```text
//! QuoteHistory ──► spot (bootstrap) ──► forward
//!              ──► yield (approximation)
//!              ──► CurveMatrix per kind ──► FactorAnalysis (yield, forward)
//! ```
//!
//! Each curve kind is built on its own. A failure only takes out the curve
//! kind it occurred in and whatever is derived from it: a spot bootstrap
//! failure also fails the forwards, while the yields are unaffected.

use termstruct_core::{Date, QuoteHistory, QuoteSet};
use termstruct_curves::bootstrap::SpotBootstrapConfig;
use termstruct_curves::repricing::{BootstrapResult, RepricingReport};
use termstruct_curves::{
    CurveKind, ForwardRateDeriver, SpotBootstrapper, SpotCurve, YieldApproximator, YieldCurve,
};

use crate::config::AnalysisConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::factors::FactorAnalysis;
use crate::parallel::maybe_parallel_map;
use crate::selection::TenorSelection;
use crate::timeseries::CurveMatrix;

/// Spot curves over a history, with their repricing audits.
#[derive(Debug, Clone)]
pub struct SpotSeries {
    /// One bootstrapped curve per date, in date order.
    pub curves: Vec<SpotCurve>,
    /// Repricing audit per date, in date order.
    pub repricing: Vec<(Date, RepricingReport)>,
}

/// Curve matrices over the whole history, one outcome per curve kind.
#[derive(Debug, Clone)]
pub struct CurveSeries {
    /// Spot rates, `[date, bond]`.
    pub spot: AnalyticsResult<CurveMatrix>,
    /// Approximate yields, `[date, bond]`.
    pub yields: AnalyticsResult<CurveMatrix>,
    /// Forward rates, `[date, horizon]`. Fails whenever `spot` does.
    pub forwards: AnalyticsResult<CurveMatrix>,
    /// Repricing audit per date; empty when the spot bootstrap failed.
    pub repricing: Vec<(Date, RepricingReport)>,
}

impl CurveSeries {
    /// Outcome for one curve kind.
    pub fn matrix(&self, kind: CurveKind) -> &AnalyticsResult<CurveMatrix> {
        match kind {
            CurveKind::Spot => &self.spot,
            CurveKind::Yield => &self.yields,
            CurveKind::Forward => &self.forwards,
        }
    }
}

/// Full analysis output.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Spot rates, `[date, bond]`.
    pub spot: AnalyticsResult<CurveMatrix>,
    /// Approximate yields, `[date, bond]`.
    pub yields: AnalyticsResult<CurveMatrix>,
    /// Forward rates, `[date, horizon]`.
    pub forwards: AnalyticsResult<CurveMatrix>,
    /// Factors of the selected yield points.
    pub yield_factors: AnalyticsResult<FactorAnalysis>,
    /// Factors of the selected forward points.
    pub forward_factors: AnalyticsResult<FactorAnalysis>,
    /// Repricing audit per date, in date order.
    pub repricing: Vec<(Date, RepricingReport)>,
}

/// Runs the curve and factor pipeline with one configuration.
#[derive(Debug, Clone, Default)]
pub struct TermStructureAnalysis {
    config: AnalysisConfig,
}

impl TermStructureAnalysis {
    /// Creates a pipeline with the given configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn bootstrapper(&self) -> SpotBootstrapper {
        SpotBootstrapper::new().with_config(SpotBootstrapConfig {
            basis: self.config.accrual_basis,
            tolerance: self.config.repricing_tolerance,
        })
    }

    /// Bootstraps and audits one date's spot curve.
    pub fn spot_curve(&self, quotes: &QuoteSet) -> AnalyticsResult<BootstrapResult<SpotCurve>> {
        let bootstrapper = self.bootstrapper();
        let result = if self.config.strict_repricing {
            bootstrapper.bootstrap_validated_strict(quotes)?
        } else {
            bootstrapper.bootstrap_validated(quotes)?
        };
        log::debug!(
            "{}: spot curve built in {:?}",
            quotes.date(),
            result.build_duration
        );
        Ok(result)
    }

    /// Approximate yields for one date.
    pub fn yield_curve(&self, quotes: &QuoteSet) -> AnalyticsResult<YieldCurve> {
        Ok(YieldApproximator::new()
            .with_basis(self.config.accrual_basis)
            .approximate(quotes)?)
    }

    /// Spot curves for every date.
    ///
    /// Dates are bootstrapped independently (in parallel with the `parallel`
    /// feature); the first failing date, in date order, is reported.
    pub fn build_spot_curves(&self, history: &QuoteHistory) -> AnalyticsResult<SpotSeries> {
        let results = maybe_parallel_map(history.sets(), |set| self.spot_curve(set))
            .into_iter()
            .collect::<AnalyticsResult<Vec<_>>>()?;

        let mut curves = Vec::with_capacity(results.len());
        let mut repricing = Vec::with_capacity(results.len());
        for result in results {
            repricing.push((result.curve.date(), result.repricing_report));
            curves.push(result.curve);
        }
        Ok(SpotSeries { curves, repricing })
    }

    /// Approximate yields for every date, stacked.
    pub fn build_yield_curves(&self, history: &QuoteHistory) -> AnalyticsResult<CurveMatrix> {
        let curves = maybe_parallel_map(history.sets(), |set| self.yield_curve(set))
            .into_iter()
            .collect::<AnalyticsResult<Vec<_>>>()?;
        CurveMatrix::from_curves(&curves)
    }

    /// Forward curves derived from each date's spot curve, stacked.
    pub fn build_forward_curves(&self, spot: &SpotSeries) -> AnalyticsResult<CurveMatrix> {
        let deriver = ForwardRateDeriver::new();
        let curves = maybe_parallel_map(&spot.curves, |curve| deriver.derive(curve))
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        CurveMatrix::from_curves(&curves)
    }

    /// Builds every curve kind over the history.
    pub fn build_curves(&self, history: &QuoteHistory) -> CurveSeries {
        let yields = self.build_yield_curves(history);
        let (spot, forwards, repricing) = match self.build_spot_curves(history) {
            Ok(series) => (
                CurveMatrix::from_curves(&series.curves),
                self.build_forward_curves(&series),
                series.repricing,
            ),
            Err(err) => (Err(err.clone()), Err(err), Vec::new()),
        };

        for (kind, outcome) in [
            (CurveKind::Spot, &spot),
            (CurveKind::Yield, &yields),
            (CurveKind::Forward, &forwards),
        ] {
            match outcome {
                Ok(matrix) => log::info!("built {kind} curves for {} dates", matrix.n_dates()),
                Err(err) => log::warn!("{kind} curves unavailable: {err}"),
            }
        }

        CurveSeries {
            spot,
            yields,
            forwards,
            repricing,
        }
    }

    /// Factor analysis of one curve outcome.
    fn factors(
        &self,
        matrix: &AnalyticsResult<CurveMatrix>,
        selection: &TenorSelection,
    ) -> AnalyticsResult<FactorAnalysis> {
        let matrix = matrix.as_ref().map_err(AnalyticsError::clone)?;
        FactorAnalysis::analyze(matrix, selection, self.config.eigen_tolerance)
    }

    /// Runs the full pipeline: curves, log returns, covariance, eigenpairs.
    ///
    /// Only an invalid configuration fails the whole run; curve and factor
    /// failures are reported per curve kind in the [`AnalysisReport`].
    pub fn run(&self, history: &QuoteHistory) -> AnalyticsResult<AnalysisReport> {
        self.config.validate()?;
        let series = self.build_curves(history);

        let yield_factors = self.factors(&series.yields, &self.config.yield_points);
        let forward_factors = self.factors(&series.forwards, &self.config.forward_points);

        Ok(AnalysisReport {
            spot: series.spot,
            yields: series.yields,
            forwards: series.forwards,
            yield_factors,
            forward_factors,
            repricing: series.repricing,
        })
    }
}
