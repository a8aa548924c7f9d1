//! Direct linear solver for dense matrices, built on the LUP factorization.

use matrix::DenseMatrix;
use nalgebra::RealField;

use crate::{Error, LinearSolver, Lup, LupConfig};

#[derive(Clone, Debug)]
pub struct Dense<T = f64> {
    config: LupConfig<T>,
    factors: Option<Lup<T>>,
}

impl<T: RealField + Copy> Default for Dense<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealField + Copy> Dense<T> {
    /// Creates a new dense linear solver with partial pivoting.
    pub fn new() -> Self {
        Self::with_config(LupConfig::default())
    }

    pub fn with_config(config: LupConfig<T>) -> Self {
        Dense {
            config,
            factors: None,
        }
    }

    pub fn config(&self) -> &LupConfig<T> {
        &self.config
    }

    /// The factorization computed by the last successful `setup`.
    pub fn factorization(&self) -> Option<&Lup<T>> {
        self.factors.as_ref()
    }
}

impl<T: RealField + Copy> LinearSolver<T> for Dense<T> {
    fn setup(&mut self, mat_a: &DenseMatrix<T>) -> Result<(), Error> {
        // drop stale factors first so a failed setup leaves nothing behind
        self.factors = None;
        self.factors = Some(Lup::factorize_with(mat_a, &self.config)?);
        Ok(())
    }

    fn solve(&self, b: &[T]) -> Result<Vec<T>, Error> {
        self.factors.as_ref().ok_or(Error::Unfactorized)?.solve(b)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Pivoting;

    #[test]
    fn test_dense1() {
        let mat_a = DenseMatrix::from_rows(&[
            [5.0, 0.0, 0.0, 1.0],
            [2.0, 2.0, 2.0, 1.0],
            [4.0, 5.0, 5.0, 5.0],
            [1.0, 6.0, 4.0, 5.0],
        ])
        .unwrap();
        let b = [9.0, 16.0, 49.0, 45.0];
        let expected = [1.0, 2.0, 3.0, 4.0];

        let mut dense = Dense::<f64>::new();
        dense.setup(&mat_a).unwrap();
        let x = dense.solve(&b).unwrap();
        assert_relative_eq!(x.as_slice(), expected.as_slice(), max_relative = 1e-9);

        // the same factors serve another right-hand side
        let x = dense.solve(&[6.0, 7.0, 19.0, 16.0]).unwrap();
        assert_relative_eq!(x.as_slice(), [1.0, 1.0, 1.0, 1.0].as_slice(), max_relative = 1e-9);
    }

    #[test]
    fn test_solve_before_setup() {
        let dense = Dense::<f64>::new();
        assert!(dense.factorization().is_none());
        assert_eq!(dense.solve(&[1.0]), Err(Error::Unfactorized));
    }

    #[test]
    fn test_failed_setup_clears_factors() {
        let mut dense = Dense::with_config(LupConfig::<f64>::default().with_pivoting(Pivoting::Static));
        dense.setup(&DenseMatrix::identity(2)).unwrap();
        assert!(dense.factorization().is_some());

        let bad = DenseMatrix::from_rows(&[[2.0, 1.0, 0.0], [1.0, 0.5, 1.0], [0.0, 0.4, 1.0]]).unwrap();
        assert_eq!(dense.setup(&bad), Err(Error::SingularMatrix { col: 1 }));
        assert!(dense.factorization().is_none());
        assert_eq!(dense.solve(&[1.0, 1.0]), Err(Error::Unfactorized));
    }

    #[test]
    fn test_rhs_length() {
        let mut dense = Dense::<f64>::new();
        dense.setup(&DenseMatrix::identity(3)).unwrap();
        assert_eq!(
            dense.solve(&[1.0, 2.0]),
            Err(Error::RhsLength {
                expected: 3,
                found: 2
            })
        );
    }
}
