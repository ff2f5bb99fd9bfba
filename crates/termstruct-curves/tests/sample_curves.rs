//! Curve construction over the bundled sample quotes.

use std::path::PathBuf;

use approx::assert_relative_eq;
use termstruct_core::io::read_quote_history;
use termstruct_core::{AccrualBasis, QuoteHistory};
use termstruct_curves::prelude::*;

fn sample_history() -> QuoteHistory {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_quotes.csv");
    read_quote_history(path).unwrap()
}

#[test]
fn every_date_bootstraps_and_reprices() {
    let history = sample_history();
    let bootstrapper = SpotBootstrapper::new();

    for set in &history {
        let result = bootstrapper.bootstrap_validated_strict(set).unwrap();
        assert_eq!(result.curve.len(), set.len());
        assert_eq!(result.curve.date(), set.date());
        assert!(result.repricing_report.max_error() < tolerances::DEFAULT);
        assert!(result.curve.rates().iter().all(|r| *r > 0.0 && r.is_finite()));
    }
}

#[test]
fn forwards_and_yields_are_positive() {
    let history = sample_history();
    let deriver = ForwardRateDeriver::new();
    let approximator = YieldApproximator::new();

    for set in &history {
        let spot = SpotBootstrapper::new().bootstrap(set).unwrap();
        let forward = deriver.derive(&spot).unwrap();
        let yields = approximator.approximate(set).unwrap();

        assert_eq!(forward.len(), FORWARD_START_TIMES.len());
        assert!(forward.rates().iter().all(|f| *f > 0.0));
        assert!(yields.rates().iter().all(|y| *y > 0.0));
        assert_eq!(RateCurve::axis(&yields), RateCurve::axis(&spot));
    }
}

#[test]
fn first_spot_equals_first_yield() {
    let history = sample_history();
    for set in &history {
        let spot = SpotBootstrapper::new().bootstrap(set).unwrap();
        let yields = YieldApproximator::new().approximate(set).unwrap();
        assert_relative_eq!(spot.rates()[0], yields.rates()[0], epsilon = 1e-15);
    }
}

#[test]
fn bootstrap_is_deterministic_across_bases() {
    let history = sample_history();
    let set = &history.sets()[0];

    for basis in [AccrualBasis::Act365Fixed, AccrualBasis::Act360] {
        let bootstrapper = SpotBootstrapper::new().with_basis(basis);
        let a = bootstrapper.bootstrap(set).unwrap();
        let b = bootstrapper.bootstrap(set).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn report_display_lists_every_bond() {
    let history = sample_history();
    let result = SpotBootstrapper::new()
        .bootstrap_validated(&history.sets()[0])
        .unwrap();
    let text = result.repricing_report.to_string();
    assert!(text.contains("PASSED"));
    assert!(text.contains("bond 9"));
}
