//! Convenience entry points over [`Lup`] using the default [`crate::LupConfig`].

use matrix::DenseMatrix;
use nalgebra::RealField;

use crate::{Dense, Error, LinearSolver, Lup};

/// Factorizes `a` as `P A = L U`.
pub fn lup<T: RealField + Copy>(a: &DenseMatrix<T>) -> Result<Lup<T>, Error> {
    Lup::factorize(a)
}

/// `det(a)`. A singular matrix yields (nearly) zero rather than an error.
pub fn determinant<T: RealField + Copy>(a: &DenseMatrix<T>) -> Result<T, Error> {
    Ok(Lup::factorize(a)?.determinant())
}

/// Solves `a x = b`.
pub fn solve<T: RealField + Copy>(a: &DenseMatrix<T>, b: &[T]) -> Result<Vec<T>, Error> {
    let mut solver = Dense::new();
    solver.setup(a)?;
    solver.solve(b)
}

/// `a^-1`, failing with [`Error::SingularMatrix`] when `a` has no inverse.
pub fn inverse<T: RealField + Copy>(a: &DenseMatrix<T>) -> Result<DenseMatrix<T>, Error> {
    Lup::factorize(a)?.inverse()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_determinant() {
        let nonsquare = DenseMatrix::from_rows(&[[1.0], [-7.0]]).unwrap();
        assert_eq!(
            determinant(&nonsquare),
            Err(Error::NotSquare { rows: 2, cols: 1 })
        );

        assert_eq!(determinant(&DenseMatrix::<f64>::identity(3)).unwrap(), 1.0);

        let upper = DenseMatrix::from_rows(&[
            [5.0, 10.0, 9.0, 3.0, 4.0],
            [0.0, 4.0, -6.0, 7.234, -3.0],
            [0.0, 0.0, 3.0, 13098.38, 239.0],
            [0.0, 0.0, 0.0, 2.0, -70.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_relative_eq!(determinant(&upper).unwrap(), 120.0);
    }

    #[test]
    fn test_solve() {
        let a = DenseMatrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 7.0], [1.0, 1.0, 0.0]]).unwrap();
        let x = solve(&a, &[1.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(x.as_slice(), [-0.25, 1.25, -0.5].as_slice(), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_errors() {
        let nonsquare = DenseMatrix::from_rows(&[[1.0], [-7.0]]).unwrap();
        assert_eq!(
            inverse(&nonsquare),
            Err(Error::NotSquare { rows: 2, cols: 1 })
        );

        let singular = DenseMatrix::from_rows(&[[2.0, -2.0], [-2.0, 2.0]]).unwrap();
        assert_eq!(inverse(&singular), Err(Error::SingularMatrix { col: 1 }));
    }

    #[test]
    fn test_inverse_two() {
        let a = DenseMatrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let expected = DenseMatrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap();
        assert_relative_eq!(inverse(&a).unwrap(), expected, epsilon = 1e-12);
    }
}
