//! Pivot row selection.

use log::debug;
use matrix::DenseMatrix;
use nalgebra::RealField;

use crate::Permutation;

/// Position of the largest-magnitude candidate.
///
/// Only a strictly larger magnitude replaces the current best, so the lowest index wins ties. NaN
/// candidates are never selected. Returns 0 for an empty iterator.
pub fn select_pivot<T, I>(candidates: I) -> usize
where
    T: RealField + Copy,
    I: IntoIterator<Item = T>,
{
    let mut best = 0;
    let mut best_abs: Option<T> = None;
    for (i, c) in candidates.into_iter().enumerate() {
        let mag = c.abs();
        let improves = match best_abs {
            Some(b) => mag > b,
            // false only for NaN
            None => mag >= T::zero(),
        };
        if improves {
            best = i;
            best_abs = Some(mag);
        }
    }
    best
}

/// Static pivoting: builds the whole row permutation up front from the original matrix.
///
/// For each column `j`, rows `j..n` of the *unreduced* column are scanned and the row holding the
/// largest magnitude is swapped into position `j` of a running identity. The matrix itself is never
/// updated between columns, so a pivot that only becomes small after elimination goes unnoticed.
/// Kept for compatibility with [`crate::Pivoting::Static`].
pub fn static_permutation<T: RealField + Copy>(a: &DenseMatrix<T>) -> Permutation {
    let n = a.rows();
    let mut perm = Permutation::identity(n);
    for j in 0..n.min(a.cols()) {
        let p = j + select_pivot((j..n).map(|i| a[(i, j)]));
        if p != j {
            debug!("static pivot col {j}: swapping rows {j} and {p}");
            perm.swap(j, p);
        }
    }
    perm
}
