//! Dense, row-major, real-valued matrices.
//!
//! [`DenseMatrix`] owns its storage exclusively. Elementwise updates (`add`, `scale`) mutate the
//! receiver in place, while `multiply` and `transpose` return new matrices. Every binary operation
//! checks operand shapes and reports incompatibilities through [`Error`].

mod convert;
mod dense;
mod ops;

pub use dense::DenseMatrix;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation.
    #[error("Dimension mismatch in {}: {}x{} vs {}x{}", .op, .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Ragged input: row `row` does not have the length of the first row.
    #[error("Row {row} has {found} elements, expected {expected}")]
    Construction {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("A matrix must have at least one row and one column")]
    Empty,

    #[error("Backing buffer has {found} elements, expected {expected}")]
    DataLength { expected: usize, found: usize },
}
