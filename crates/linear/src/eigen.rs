//! Eigenvalues through an injected eigensolver.
//!
//! Eigenvalue computation is not implemented here. Callers supply an [`EigenSolver`];
//! [`NalgebraEigen`] delegates to nalgebra's Schur-based `complex_eigenvalues`.

use matrix::DenseMatrix;
use nalgebra::{Complex, DMatrix, RealField};

use crate::{ensure_square, Error};

pub trait EigenSolver<T: RealField> {
    /// All eigenvalues of the square matrix `a`, real ones with a zero imaginary part. The order is
    /// up to the implementation.
    fn complex_eigenvalues(&self, a: &DenseMatrix<T>) -> Result<Vec<Complex<T>>, Error>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NalgebraEigen;

impl<T: RealField + Copy> EigenSolver<T> for NalgebraEigen {
    fn complex_eigenvalues(&self, a: &DenseMatrix<T>) -> Result<Vec<Complex<T>>, Error> {
        if !a.as_slice().iter().all(|x| x.is_finite()) {
            return Err(Error::Eigen {
                reason: "matrix has non-finite entries".to_string(),
            });
        }
        let m = DMatrix::from(a);
        Ok(m.complex_eigenvalues().as_slice().to_vec())
    }
}

/// Eigenvalues of `a` computed by `solver`.
pub fn eigenvalues<T, E>(a: &DenseMatrix<T>, solver: &E) -> Result<Vec<Complex<T>>, Error>
where
    T: RealField,
    E: EigenSolver<T>,
{
    ensure_square(a)?;
    solver.complex_eigenvalues(a)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn sorted_by_re(mut values: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
        values.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
        values
    }

    #[test]
    fn test_nonsquare() {
        let a = DenseMatrix::from_rows(&[[1.0], [-7.0]]).unwrap();
        assert_eq!(
            eigenvalues(&a, &NalgebraEigen),
            Err(Error::NotSquare { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn test_identity() {
        let values = eigenvalues(&DenseMatrix::<f64>::identity(3), &NalgebraEigen).unwrap();
        assert_eq!(values.len(), 3);
        for v in values {
            assert_relative_eq!(v.re, 1.0, epsilon = 1e-12);
            assert_relative_eq!(v.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_upper_triangular() {
        let a = DenseMatrix::from_rows(&[
            [1.0, 10.0, 9.0, 3.0, 4.0],
            [0.0, 3.0, -6.0, 7.234, -3.0],
            [0.0, 0.0, 4.0, 13098.38, 239.0],
            [0.0, 0.0, 0.0, 5.0, -70.0],
            [0.0, 0.0, 0.0, 0.0, 2.0],
        ])
        .unwrap();
        let values = sorted_by_re(eigenvalues(&a, &NalgebraEigen).unwrap());
        for (v, expected) in values.iter().zip([1.0, 2.0, 3.0, 4.0, 5.0]) {
            assert_relative_eq!(v.re, expected, epsilon = 1e-8);
            assert_relative_eq!(v.im, 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_rotation() {
        let a = DenseMatrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]]).unwrap();
        let values = sorted_by_re(eigenvalues(&a, &NalgebraEigen).unwrap());
        let mut im: Vec<f64> = values.iter().map(|v| v.im).collect();
        im.sort_by(f64::total_cmp);
        assert_relative_eq!(im.as_slice(), [-1.0, 1.0].as_slice(), epsilon = 1e-12);
        assert!(values.iter().all(|v| v.re.abs() < 1e-12));
    }

    #[test]
    fn test_non_finite() {
        let a = DenseMatrix::from_rows(&[[f64::NAN, 0.0], [0.0, 1.0]]).unwrap();
        assert!(matches!(
            eigenvalues(&a, &NalgebraEigen),
            Err(Error::Eigen { .. })
        ));
    }

    /// Returns the diagonal, standing in for a real eigensolver.
    struct DiagonalOnly;

    impl EigenSolver<f64> for DiagonalOnly {
        fn complex_eigenvalues(&self, a: &DenseMatrix<f64>) -> Result<Vec<Complex<f64>>, Error> {
            Ok((0..a.rows()).map(|i| Complex::new(a[(i, i)], 0.0)).collect())
        }
    }

    #[test]
    fn test_injected_solver() {
        let a = DenseMatrix::from_rows(&[[5.0, 1.0], [0.0, -2.0]]).unwrap();
        assert_eq!(
            eigenvalues(&a, &DiagonalOnly).unwrap(),
            vec![Complex::new(5.0, 0.0), Complex::new(-2.0, 0.0)]
        );
    }
}
