use matrix::DenseMatrix;
use nalgebra::Scalar;

use crate::Error;

/// A direct solver for `A x = b` that factorizes once and solves many times.
pub trait LinearSolver<T: Scalar> {
    /// Performs any setup needed for subsequent solves against `mat_a`, replacing whatever the
    /// solver held before. On failure the solver is left without a factorization.
    fn setup(&mut self, mat_a: &DenseMatrix<T>) -> Result<(), Error>;

    /// Solves `A x = b` for the matrix given to the last successful [`LinearSolver::setup`].
    ///
    /// ## Arguments
    /// * `b` the linear system right-hand side, of length `n`.
    fn solve(&self, b: &[T]) -> Result<Vec<T>, Error>;
}
