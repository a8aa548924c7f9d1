//! Forward and backward substitution against triangular factors.

use matrix::DenseMatrix;
use nalgebra::RealField;

use crate::{ensure_square, Error, Permutation};

fn check_rhs<T>(n: usize, b: &[T]) -> Result<(), Error> {
    if b.len() != n {
        return Err(Error::RhsLength {
            expected: n,
            found: b.len(),
        });
    }
    Ok(())
}

/// Solves `L y = b` for lower-triangular `L`, resolving `y[0]` first.
///
/// Entries above the diagonal of `l` are ignored. Fails with [`Error::SingularMatrix`] on an exactly
/// zero diagonal entry; for the unit-diagonal L of a factorization this cannot happen.
pub fn forward_substitution<T>(l: &DenseMatrix<T>, b: &[T]) -> Result<Vec<T>, Error>
where
    T: RealField + Copy,
{
    let n = ensure_square(l)?;
    check_rhs(n, b)?;

    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let mut sum = b[i];
        for (j, &yj) in y.iter().enumerate() {
            sum -= l[(i, j)] * yj;
        }
        let diag = l[(i, i)];
        if diag == T::zero() {
            return Err(Error::SingularMatrix { col: i });
        }
        y.push(sum / diag);
    }
    Ok(y)
}

/// Solves `U x = y` for upper-triangular `U`, resolving `x[n - 1]` first.
///
/// Entries below the diagonal of `u` are ignored. A diagonal entry with magnitude at or below
/// `singular_tol`, an absolute threshold here, fails with [`Error::SingularMatrix`]. Non-finite
/// entries are not checked and propagate into `x` as NaN or infinity; [`crate::Lup`] rejects
/// them before factorizing.
pub fn back_substitution<T>(u: &DenseMatrix<T>, y: &[T], singular_tol: T) -> Result<Vec<T>, Error>
where
    T: RealField + Copy,
{
    let n = ensure_square(u)?;
    check_rhs(n, y)?;

    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let diag = u[(i, i)];
        if diag.abs() <= singular_tol {
            return Err(Error::SingularMatrix { col: i });
        }
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= u[(i, j)] * x[j];
        }
        x[i] = sum / diag;
    }
    Ok(x)
}

/// Solves `A x = b` given `P A = L U`, with `P` as an explicit permutation matrix.
///
/// Computes `P b`, then `L y = P b` and `U x = y`.
pub fn solve_factors<T>(
    l: &DenseMatrix<T>,
    u: &DenseMatrix<T>,
    p: &DenseMatrix<T>,
    b: &[T],
    singular_tol: T,
) -> Result<Vec<T>, Error>
where
    T: RealField + Copy,
{
    let n = ensure_square(l)?;
    if u.dims() != (n, n) || p.dims() != (n, n) {
        return Err(matrix::Error::DimensionMismatch {
            op: "solve_factors",
            left: l.dims(),
            right: if u.dims() != (n, n) { u.dims() } else { p.dims() },
        }
        .into());
    }
    check_rhs(n, b)?;

    let pb = p.mul_vec(b)?;
    let y = forward_substitution(l, &pb)?;
    back_substitution(u, &y, singular_tol)
}

/// Same as [`solve_factors`] with the permutation in index form.
pub(crate) fn solve_permuted<T>(
    l: &DenseMatrix<T>,
    u: &DenseMatrix<T>,
    p: &Permutation,
    b: &[T],
    singular_tol: T,
) -> Result<Vec<T>, Error>
where
    T: RealField + Copy,
{
    let pb = p.apply(b)?;
    let y = forward_substitution(l, &pb)?;
    back_substitution(u, &y, singular_tol)
}
