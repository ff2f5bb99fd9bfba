//! Full pipeline over the bundled sample quotes.

use std::path::PathBuf;

use approx::assert_relative_eq;
use termstruct_analytics::prelude::*;
use termstruct_core::io::read_quote_history;
use termstruct_core::QuoteHistory;
use termstruct_curves::CurveKind;

fn sample_history() -> QuoteHistory {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_quotes.csv");
    read_quote_history(path).unwrap()
}

fn check_factors(factors: &FactorAnalysis, points: usize, transitions: usize) {
    assert_eq!(factors.log_returns.dim(), (points, transitions));
    assert_eq!(factors.covariance.shape(), (points, points));
    assert_eq!(factors.eigen.len(), points);

    for i in 0..points {
        for j in 0..points {
            assert_eq!(factors.covariance[(i, j)], factors.covariance[(j, i)]);
        }
    }

    let scale = factors.covariance.amax();
    for residual in factors.residual_norms() {
        assert!(residual <= 1e-9 * scale.max(1e-12), "residual {residual}");
    }

    let shares: f64 = factors.eigen.explained_variance().iter().sum();
    assert_relative_eq!(shares, 1.0, epsilon = 1e-9);
}

#[test]
fn sample_history_runs_end_to_end() {
    let history = sample_history();
    let report = TermStructureAnalysis::default().run(&history).unwrap();

    let spot = report.spot.unwrap();
    assert_eq!(spot.kind(), CurveKind::Spot);
    assert_eq!(spot.values().dim(), (10, 10));
    assert_eq!(report.yields.unwrap().values().dim(), (10, 10));
    assert_eq!(report.forwards.unwrap().values().dim(), (10, 7));
    assert_eq!(spot.dates(), history.dates().as_slice());

    let yield_factors = report.yield_factors.unwrap();
    let forward_factors = report.forward_factors.unwrap();
    assert_eq!(yield_factors.selection, vec![1, 3, 5, 7, 9]);
    assert_eq!(yield_factors.tenors, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(forward_factors.selection, vec![0, 2, 4, 6]);
    assert_eq!(forward_factors.tenors, vec![1.0, 2.0, 3.0, 4.0]);

    check_factors(&yield_factors, 5, 9);
    check_factors(&forward_factors, 4, 9);

    assert!(report.repricing.iter().all(|(_, r)| r.is_valid()));
}

#[test]
fn explicit_selection_from_config() {
    let config = AnalysisConfig::from_toml_str(
        r#"
        yield_points = { explicit = [0, 9] }
        forward_points = { explicit = [6] }
        "#,
    )
    .unwrap();
    let report = TermStructureAnalysis::new(config)
        .run(&sample_history())
        .unwrap();

    check_factors(&report.yield_factors.unwrap(), 2, 9);
    check_factors(&report.forward_factors.unwrap(), 1, 9);
}

#[test]
fn out_of_range_selection_only_fails_that_curve() {
    let config = AnalysisConfig {
        forward_points: TenorSelection::Explicit(vec![7]),
        ..AnalysisConfig::default()
    };
    let report = TermStructureAnalysis::new(config)
        .run(&sample_history())
        .unwrap();
    assert!(matches!(
        report.forward_factors,
        Err(AnalyticsError::InvalidSelection { .. })
    ));
    check_factors(&report.yield_factors.unwrap(), 5, 9);
}

#[test]
fn runs_are_deterministic() {
    let pipeline = TermStructureAnalysis::default();
    let a = pipeline.run(&sample_history()).unwrap();
    let b = pipeline.run(&sample_history()).unwrap();
    assert_eq!(a.spot, b.spot);
    assert_eq!(a.forwards, b.forwards);
    assert_eq!(a.yield_factors, b.yield_factors);
}
