//! Eigendecomposition of covariance matrices.
//!
//! Covariance matrices are symmetric positive semi-definite in theory, but a
//! floating-point estimate can carry tiny asymmetries, slightly negative
//! eigenvalues, or (for a general solver) complex conjugate pairs. Those
//! artifacts are reported as [`NumericalWarning`]s next to the result; they
//! never abort the decomposition.
//!
//! The eigenpairs come from `nalgebra::SymmetricEigen` applied to the
//! symmetrised matrix `(C + Cᵀ) / 2`. They are returned in solver order.

use std::fmt;

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use crate::error::{MathError, MathResult};

/// Default relative tolerance for the numerical diagnostics.
pub const DEFAULT_EIGEN_TOLERANCE: f64 = 1e-10;

/// Advisory raised while decomposing a nominally symmetric PSD matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericalWarning {
    /// The input was not symmetric within tolerance; it was symmetrised.
    Asymmetric {
        /// Largest `|C[i][j] - C[j][i]|`.
        max_deviation: f64,
    },
    /// The unsymmetrised matrix has an eigenvalue with a non-negligible
    /// imaginary part; only the real part is reported.
    ComplexEigenvalue {
        /// Real part.
        re: f64,
        /// Imaginary part.
        im: f64,
    },
    /// An eigenvalue is negative beyond tolerance.
    NegativeEigenvalue {
        /// Position in the returned pairs.
        index: usize,
        /// The eigenvalue.
        value: f64,
    },
    /// An eigenvalue is zero within tolerance (rank deficiency).
    NearZeroEigenvalue {
        /// Position in the returned pairs.
        index: usize,
        /// The eigenvalue.
        value: f64,
    },
}

impl fmt::Display for NumericalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asymmetric { max_deviation } => {
                write!(f, "matrix not symmetric (max deviation {max_deviation:.3e}); symmetrised")
            }
            Self::ComplexEigenvalue { re, im } => {
                write!(f, "complex eigenvalue {re:.6e} {im:+.3e}i; real part kept")
            }
            Self::NegativeEigenvalue { index, value } => {
                write!(f, "eigenvalue {index} is negative ({value:.3e})")
            }
            Self::NearZeroEigenvalue { index, value } => {
                write!(f, "eigenvalue {index} is numerically zero ({value:.3e})")
            }
        }
    }
}

/// One eigenvalue with its unit-norm eigenvector.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    /// Eigenvalue.
    pub value: f64,
    /// Eigenvector (unit norm, sign as returned by the solver).
    pub vector: DVector<f64>,
}

/// Result of [`eigen_decomposition`].
///
/// The pairs are those of the symmetrised input `(C + Cᵀ) / 2`. For a
/// symmetric `C` that is `C` itself; for an asymmetric one (flagged by
/// [`NumericalWarning::Asymmetric`]) they are not eigenpairs of `C`, and
/// [`residual_norm`](Self::residual_norm) against `C` will not be near zero.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition {
    /// Eigenpairs in solver order. Callers must not assume a sort order.
    pub pairs: Vec<EigenPair>,
    /// Numerical advisories.
    pub warnings: Vec<NumericalWarning>,
}

impl EigenDecomposition {
    /// Number of eigenpairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Eigenvalues in solver order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.value).collect()
    }

    /// Eigenvectors as matrix columns, in solver order.
    #[must_use]
    pub fn vectors(&self) -> DMatrix<f64> {
        let columns: Vec<DVector<f64>> = self.pairs.iter().map(|p| p.vector.clone()).collect();
        DMatrix::from_columns(&columns)
    }

    /// Share of total variance carried by each pair, index-aligned.
    ///
    /// Negative eigenvalues count as zero. Returns zeros when the total is zero.
    #[must_use]
    pub fn explained_variance(&self) -> Vec<f64> {
        let total: f64 = self.pairs.iter().map(|p| p.value.max(0.0)).sum();
        self.pairs
            .iter()
            .map(|p| {
                if total > 0.0 {
                    p.value.max(0.0) / total
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Copy of the pairs sorted by descending eigenvalue.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<EigenPair> {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|a, b| b.value.total_cmp(&a.value));
        pairs
    }

    /// `‖C·v − λ·v‖` for pair `index` against `matrix`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()` or if `matrix` is not `len() × len()`.
    #[must_use]
    pub fn residual_norm(&self, matrix: &DMatrix<f64>, index: usize) -> f64 {
        let pair = &self.pairs[index];
        (matrix * &pair.vector - &pair.vector * pair.value).norm()
    }

    /// True when no advisory was raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Largest absolute asymmetry `|C[i][j] - C[j][i]|` of a square matrix.
#[must_use]
pub fn max_asymmetry(matrix: &DMatrix<f64>) -> f64 {
    let n = matrix.nrows().min(matrix.ncols());
    let mut worst = 0.0_f64;
    for i in 0..n {
        for j in i + 1..n {
            worst = worst.max((matrix[(i, j)] - matrix[(j, i)]).abs());
        }
    }
    worst
}

/// Eigendecomposition of a (nominally symmetric) square matrix.
///
/// `tolerance` is relative to the largest absolute entry / eigenvalue.
///
/// # Errors
///
/// - `MathError::DimensionMismatch` if the matrix is not square
/// - `MathError::InsufficientData` if the matrix is empty
/// - `MathError::InvalidInput` if the matrix has non-finite entries
pub fn eigen_decomposition(
    matrix: &DMatrix<f64>,
    tolerance: f64,
) -> MathResult<EigenDecomposition> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(MathError::not_square(rows, cols));
    }
    if rows == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }
    if matrix.iter().any(|x| !x.is_finite()) {
        return Err(MathError::invalid_input("matrix contains non-finite values"));
    }

    let mut warnings = Vec::new();
    let scale = matrix.amax();

    let asymmetry = max_asymmetry(matrix);
    if asymmetry > tolerance * scale {
        warnings.push(NumericalWarning::Asymmetric {
            max_deviation: asymmetry,
        });
    }

    // A general (Schur) solve on the raw matrix exposes complex pairs that the
    // symmetric solver cannot represent.
    for lambda in matrix.complex_eigenvalues().iter() {
        if lambda.im.abs() > tolerance * scale.max(lambda.re.abs()) {
            warnings.push(NumericalWarning::ComplexEigenvalue {
                re: lambda.re,
                im: lambda.im,
            });
        }
    }

    let symmetric = (matrix + matrix.transpose()) * 0.5;
    let eigen = SymmetricEigen::new(symmetric);

    let largest = eigen.eigenvalues.amax();
    let threshold = tolerance * largest;

    let mut pairs = Vec::with_capacity(rows);
    for (index, &value) in eigen.eigenvalues.iter().enumerate() {
        if value < -threshold {
            warnings.push(NumericalWarning::NegativeEigenvalue { index, value });
        } else if value.abs() <= threshold {
            warnings.push(NumericalWarning::NearZeroEigenvalue { index, value });
        }
        pairs.push(EigenPair {
            value,
            vector: eigen.eigenvectors.column(index).into_owned(),
        });
    }

    for warning in &warnings {
        log::warn!("eigendecomposition: {warning}");
    }

    Ok(EigenDecomposition { pairs, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn covariance_3x3() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[4.0, 1.2, 0.4, 1.2, 3.0, 0.6, 0.4, 0.6, 2.0],
        )
    }

    #[test]
    fn test_reconstruction() {
        let c = covariance_3x3();
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();

        assert_eq!(eig.len(), 3);
        assert!(eig.is_clean(), "warnings: {:?}", eig.warnings);
        for i in 0..eig.len() {
            assert!(eig.residual_norm(&c, i) < 1e-10);
            assert_relative_eq!(eig.pairs[i].vector.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trace_equals_eigenvalue_sum() {
        let c = covariance_3x3();
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();
        let sum: f64 = eig.values().iter().sum();
        assert_relative_eq!(sum, c.trace(), epsilon = 1e-10);
    }

    #[test]
    fn test_diagonal_matrix() {
        let c = DMatrix::from_diagonal(&DVector::from_vec(vec![3.0, 1.0, 2.0]));
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();
        let mut values = eig.values();
        values.sort_by(f64::total_cmp);
        assert_relative_eq!(values[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(values[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(values[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sorted_and_explained_variance() {
        let c = DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 3.0]));
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();

        let sorted = eig.sorted_by_value();
        assert_relative_eq!(sorted[0].value, 3.0, epsilon = 1e-12);
        assert_relative_eq!(sorted[1].value, 1.0, epsilon = 1e-12);

        let shares = eig.explained_variance();
        let total: f64 = shares.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        for (pair, share) in eig.pairs.iter().zip(&shares) {
            assert_relative_eq!(*share, pair.value / 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rank_deficient_flags_near_zero() {
        // rank one: v vᵀ with v = (1, 2)
        let c = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let eig = eigen_decomposition(&c, 1e-10).unwrap();
        assert!(eig
            .warnings
            .iter()
            .any(|w| matches!(w, NumericalWarning::NearZeroEigenvalue { .. })));
        // decomposition still succeeds with the full set of pairs
        assert_eq!(eig.len(), 2);
    }

    #[test]
    fn test_indefinite_flags_negative() {
        let c = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();
        assert!(eig
            .warnings
            .iter()
            .any(|w| matches!(w, NumericalWarning::NegativeEigenvalue { value, .. } if *value < 0.0)));
    }

    #[test]
    fn test_asymmetric_input_is_tolerated() {
        // rotation-like block has complex eigenvalues ±i
        let c = DMatrix::from_row_slice(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();
        assert!(eig
            .warnings
            .iter()
            .any(|w| matches!(w, NumericalWarning::Asymmetric { .. })));
        assert!(eig
            .warnings
            .iter()
            .any(|w| matches!(w, NumericalWarning::ComplexEigenvalue { .. })));
        assert_eq!(eig.len(), 2);
    }

    #[test]
    fn test_asymmetric_pairs_belong_to_symmetric_part() {
        let c = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 0.0, 2.0]);
        let symmetric = (&c + c.transpose()) * 0.5;
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();

        let mut values = eig.values();
        values.sort_by(f64::total_cmp);
        assert_relative_eq!(values[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(values[1], 2.5, epsilon = 1e-12);
        for i in 0..eig.len() {
            assert!(eig.residual_norm(&symmetric, i) < 1e-12);
            assert_relative_eq!(eig.residual_norm(&c, i), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn test_residual_norm_out_of_range() {
        let c = covariance_3x3();
        let eig = eigen_decomposition(&c, DEFAULT_EIGEN_TOLERANCE).unwrap();
        let _ = eig.residual_norm(&c, 3);
    }

    #[test]
    fn test_rejects_non_square() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            eigen_decomposition(&m, DEFAULT_EIGEN_TOLERANCE),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_nan() {
        let empty = DMatrix::<f64>::zeros(0, 0);
        assert!(eigen_decomposition(&empty, DEFAULT_EIGEN_TOLERANCE).is_err());

        let nan = DMatrix::from_row_slice(1, 1, &[f64::NAN]);
        assert!(eigen_decomposition(&nan, DEFAULT_EIGEN_TOLERANCE).is_err());
    }

    #[test]
    fn test_max_asymmetry() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.25, 1.0]);
        assert_relative_eq!(max_asymmetry(&m), 0.25);
        assert_eq!(max_asymmetry(&covariance_3x3()), 0.0);
    }
}
