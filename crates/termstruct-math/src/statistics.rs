//! Log returns and sample covariance.
//!
//! Orientation follows the usual "variables as rows" convention: a log-return
//! matrix has one row per variable (tenor point) and one column per
//! observation (date transition).

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

use crate::error::{MathError, MathResult};

/// Natural log of `next / prev`.
///
/// Returns `None` when either value is not strictly positive and finite.
///
/// ```rust
/// use termstruct_math::statistics::log_ratio;
///
/// let r = log_ratio(0.030, 0.033).unwrap();
/// assert!((r - (1.1_f64).ln()).abs() < 1e-12);
/// assert!(log_ratio(0.03, -0.01).is_none());
/// ```
#[must_use]
pub fn log_ratio(prev: f64, next: f64) -> Option<f64> {
    let positive = |x: f64| x.is_finite() && x > 0.0;
    if positive(prev) && positive(next) {
        Some((next / prev).ln())
    } else {
        None
    }
}

/// Day-over-day log returns of a level matrix.
///
/// `levels[[d, k]]` is the level of variable `k` on observation `d`. The
/// result has shape `(variables, observations - 1)` with
/// `out[[k, d]] = ln(levels[[d + 1, k]] / levels[[d, k]])`.
///
/// # Errors
///
/// - `MathError::InsufficientData` with fewer than two observations
/// - `MathError::NonPositiveValue` naming the first non-positive level
pub fn log_returns(levels: ArrayView2<'_, f64>) -> MathResult<Array2<f64>> {
    let (observations, variables) = levels.dim();
    if observations < 2 {
        return Err(MathError::insufficient_data(2, observations));
    }

    // reject before computing so the error names the level, not a transition
    for ((row, col), &value) in levels.indexed_iter() {
        if !value.is_finite() || value <= 0.0 {
            return Err(MathError::NonPositiveValue { row, col, value });
        }
    }

    let mut out = Array2::zeros((variables, observations - 1));
    for k in 0..variables {
        for d in 0..observations - 1 {
            out[[k, d]] = (levels[[d + 1, k]] / levels[[d, k]]).ln();
        }
    }
    Ok(out)
}

/// Unbiased sample covariance of row variables.
///
/// `data` has one row per variable and one column per observation; the
/// estimator divides by `N - 1`. The result is exactly symmetric: only the
/// upper triangle is computed and mirrored.
///
/// # Errors
///
/// - `MathError::InsufficientData` with fewer than two observations
/// - `MathError::InvalidInput` with no variables or non-finite data
pub fn sample_covariance(data: ArrayView2<'_, f64>) -> MathResult<DMatrix<f64>> {
    let (variables, observations) = data.dim();
    if variables == 0 {
        return Err(MathError::invalid_input("covariance needs at least one variable"));
    }
    if observations < 2 {
        return Err(MathError::insufficient_data(2, observations));
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(MathError::invalid_input("covariance input contains non-finite values"));
    }

    let n = observations as f64;
    let means: Vec<f64> = data.rows().into_iter().map(|row| row.sum() / n).collect();

    let mut cov = DMatrix::zeros(variables, variables);
    for i in 0..variables {
        for j in i..variables {
            let mut acc = 0.0;
            for t in 0..observations {
                acc += (data[[i, t]] - means[i]) * (data[[j, t]] - means[j]);
            }
            let value = acc / (n - 1.0);
            cov[(i, j)] = value;
            cov[(j, i)] = value;
        }
    }
    Ok(cov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_log_returns_shape_and_values() {
        // three observations of two variables
        let levels = array![[0.030, 0.040], [0.033, 0.038], [0.0297, 0.0399]];
        let out = log_returns(levels.view()).unwrap();

        assert_eq!(out.dim(), (2, 2));
        assert_relative_eq!(out[[0, 0]], (0.033_f64 / 0.030).ln(), epsilon = 1e-15);
        assert_relative_eq!(out[[0, 1]], (0.0297_f64 / 0.033).ln(), epsilon = 1e-15);
        assert_relative_eq!(out[[1, 0]], (0.038_f64 / 0.040).ln(), epsilon = 1e-15);
        assert_relative_eq!(out[[1, 1]], (0.0399_f64 / 0.038).ln(), epsilon = 1e-15);
    }

    #[test]
    fn test_log_returns_rejects_non_positive() {
        let levels = array![[0.030, 0.040], [0.033, 0.0], [0.0297, 0.0399]];
        let err = log_returns(levels.view()).unwrap_err();
        assert_eq!(
            err,
            MathError::NonPositiveValue {
                row: 1,
                col: 1,
                value: 0.0
            }
        );

        let negative = array![[-0.01], [0.02]];
        assert!(matches!(
            log_returns(negative.view()),
            Err(MathError::NonPositiveValue { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_log_returns_needs_two_observations() {
        let levels = array![[0.03, 0.04]];
        assert!(matches!(
            log_returns(levels.view()),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_sample_covariance_known_values() {
        // x = [1, 2, 3, 4], y = [2, 4, 6, 8]
        let data = array![[1.0, 2.0, 3.0, 4.0], [2.0, 4.0, 6.0, 8.0]];
        let cov = sample_covariance(data.view()).unwrap();

        // var(x) = 5/3 with the N-1 divisor
        assert_relative_eq!(cov[(0, 0)], 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(0, 1)], 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(1, 1)], 20.0 / 3.0, epsilon = 1e-12);
        assert_eq!(cov[(0, 1)], cov[(1, 0)]);
    }

    #[test]
    fn test_sample_covariance_constant_series() {
        let data = array![[0.5, 0.5, 0.5]];
        let cov = sample_covariance(data.view()).unwrap();
        assert_eq!(cov[(0, 0)], 0.0);
    }

    #[test]
    fn test_sample_covariance_errors() {
        let one_obs = array![[1.0], [2.0]];
        assert!(matches!(
            sample_covariance(one_obs.view()),
            Err(MathError::InsufficientData { .. })
        ));

        let nan = array![[1.0, f64::NAN]];
        assert!(matches!(
            sample_covariance(nan.view()),
            Err(MathError::InvalidInput { .. })
        ));

        let empty = Array2::<f64>::zeros((0, 3));
        assert!(sample_covariance(empty.view()).is_err());
    }

    #[test]
    fn test_log_ratio() {
        assert_relative_eq!(log_ratio(2.0, 2.0).unwrap(), 0.0);
        assert!(log_ratio(0.0, 1.0).is_none());
        assert!(log_ratio(1.0, f64::INFINITY).is_none());
    }
}
