//! Property tests: covariance symmetry and eigen reconstruction.

use ndarray::Array2;
use proptest::prelude::*;
use termstruct_math::prelude::*;

fn level_matrix() -> impl Strategy<Value = Array2<f64>> {
    (3usize..12, 1usize..6).prop_flat_map(|(observations, variables)| {
        prop::collection::vec(0.005f64..0.08, observations * variables).prop_map(move |data| {
            Array2::from_shape_vec((observations, variables), data).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_covariance_is_symmetric(levels in level_matrix()) {
        let returns = log_returns(levels.view()).unwrap();
        let cov = sample_covariance(returns.view()).unwrap();

        prop_assert_eq!(cov.nrows(), levels.ncols());
        for i in 0..cov.nrows() {
            prop_assert!(cov[(i, i)] >= 0.0);
            for j in 0..cov.ncols() {
                prop_assert_eq!(cov[(i, j)], cov[(j, i)]);
            }
        }
    }

    #[test]
    fn prop_eigenpairs_reconstruct(levels in level_matrix()) {
        let returns = log_returns(levels.view()).unwrap();
        let cov = sample_covariance(returns.view()).unwrap();
        let eig = eigen_decomposition(&cov, DEFAULT_EIGEN_TOLERANCE).unwrap();

        prop_assert_eq!(eig.len(), cov.nrows());
        let scale = cov.amax().max(1e-300);
        for i in 0..eig.len() {
            prop_assert!(eig.residual_norm(&cov, i) <= 1e-9 * scale.max(1.0));
        }
        let has_asymmetric = eig
            .warnings
            .iter()
            .any(|w| matches!(w, NumericalWarning::Asymmetric { .. }));
        prop_assert!(!has_asymmetric);
    }

    #[test]
    fn prop_log_returns_shape(levels in level_matrix()) {
        let returns = log_returns(levels.view()).unwrap();
        prop_assert_eq!(returns.nrows(), levels.ncols());
        prop_assert_eq!(returns.ncols(), levels.nrows() - 1);
    }
}
