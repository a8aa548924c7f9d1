//! LUP factorization of dense matrices and the operations built on it: linear solves,
//! determinants and inverses.
//!
//! ```
//! use matrix::DenseMatrix;
//!
//! let a = DenseMatrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 7.0], [1.0, 1.0, 0.0]]).unwrap();
//! let x = linear::solve(&a, &[1.0, 1.0, 1.0]).unwrap();
//! let b: Vec<f64> = a.mul_vec(&x).unwrap();
//! assert!(b.iter().all(|bi| (bi - 1.0).abs() < 1e-12));
//! assert!((linear::determinant(&a).unwrap() - 4.0).abs() < 1e-12);
//! ```

mod config;
mod dense;
mod derived;
pub mod eigen;
mod lup;
mod permutation;
pub mod pivot;
mod traits;
pub mod triangular;

pub use config::{LupConfig, Pivoting, DEFAULT_SINGULAR_TOL};
pub use dense::Dense;
pub use derived::{determinant, inverse, lup, solve};
pub use eigen::{eigenvalues, EigenSolver, NalgebraEigen};
pub use lup::Lup;
pub use permutation::Permutation;
pub use traits::LinearSolver;

pub use matrix::DenseMatrix;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A zero (or near-zero) pivot was met on the diagonal of U.
    #[error("A singular matrix was encountered during a LU factorization (col {col})")]
    SingularMatrix { col: usize },

    #[error("Matrix is not a row permutation of the identity")]
    NotPermutation,

    #[error("Right-hand side has length {found}, expected {expected}")]
    RhsLength { expected: usize, found: usize },

    #[error("The linear solver has no factorization, call setup first")]
    Unfactorized,

    /// Reported by an injected eigensolver.
    #[error("Eigenvalue decomposition failed: {reason}")]
    Eigen { reason: String },

    #[error("Non-finite entry at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    #[error(transparent)]
    Matrix(#[from] matrix::Error),
}

pub(crate) fn ensure_square<T>(a: &DenseMatrix<T>) -> Result<usize, Error> {
    let (rows, cols) = a.dims();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(rows)
}
