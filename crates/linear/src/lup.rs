//! LU factorization with row pivoting, `P A = L U`.

use log::{debug, trace, warn};
use matrix::DenseMatrix;
use nalgebra::RealField;

use crate::{
    ensure_square, pivot::select_pivot, pivot::static_permutation, triangular, Error, LupConfig,
    Permutation, Pivoting,
};

/// The factors of `P A = L U` for a square `A` of order `n`.
///
/// `L` is unit lower triangular, `U` is upper triangular and `P` is a row permutation. A value of
/// this type only exists for a factorization that ran to completion.
#[derive(Clone, Debug, PartialEq)]
pub struct Lup<T = f64> {
    l: DenseMatrix<T>,
    u: DenseMatrix<T>,
    p: Permutation,
    // already scaled by the magnitude of A
    singular_tol: T,
}

impl<T> Lup<T>
where
    T: RealField + Copy,
{
    /// Factorizes `a` with partial pivoting and the default tolerance.
    pub fn factorize(a: &DenseMatrix<T>) -> Result<Self, Error> {
        Self::factorize_with(a, &LupConfig::default())
    }

    /// Doolittle's method applied to `P A`.
    ///
    /// Column `j` is processed as
    ///
    /// ```text
    /// U[i][j] = PA[i][j] - sum_{k<i} L[i][k] U[k][j]              for i <= j
    /// L[i][j] = (PA[i][j] - sum_{k<j} L[i][k] U[k][j]) / U[j][j]  for i >  j
    /// ```
    ///
    /// With [`Pivoting::Partial`] the candidates `PA[i][j] - sum_{k<j} L[i][k] U[k][j]`, `i >= j`,
    /// are computed first and the largest one is swapped onto the diagonal. With
    /// [`Pivoting::Static`] the permutation is fixed before elimination starts.
    ///
    /// Pivots are compared against `config.singular_tol * max |A[i][j]|`. A pivot at or below
    /// that is accepted only when the whole candidate column is negligible; its multipliers are
    /// then set to zero and `U` keeps the tiny pivot, so the determinant comes out as (nearly)
    /// zero.
    ///
    /// # Errors
    ///
    /// [`Error::NotSquare`] for a non-square `a`, [`Error::NonFinite`] if `a` holds a NaN or an
    /// infinity, and [`Error::SingularMatrix`] for a negligible pivot above non-negligible
    /// candidates, which can only happen under static pivoting.
    pub fn factorize_with(a: &DenseMatrix<T>, config: &LupConfig<T>) -> Result<Self, Error> {
        let n = ensure_square(a)?;
        trace!("Lup::factorize_with(n={n}, pivoting={:?})", config.pivoting);

        if let Some(pos) = a.as_slice().iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFinite {
                row: pos / n,
                col: pos % n,
            });
        }
        let tol = config.singular_tol * a.max_abs();

        let (mut pa, mut p) = match config.pivoting {
            Pivoting::Partial => (a.clone(), Permutation::identity(n)),
            Pivoting::Static => {
                let p = static_permutation(a);
                (p.apply_rows(a)?, p)
            }
        };

        let mut l = DenseMatrix::zeros(n, n);
        let mut u = DenseMatrix::zeros(n, n);
        let mut candidates = vec![T::zero(); n];

        for j in 0..n {
            // rows above the diagonal: final entries of U
            for i in 0..j {
                let mut sum = pa[(i, j)];
                for k in 0..i {
                    sum -= l[(i, k)] * u[(k, j)];
                }
                u[(i, j)] = sum;
            }

            // diagonal and below: pivot candidates
            for (i, c) in candidates.iter_mut().enumerate().skip(j) {
                let mut sum = pa[(i, j)];
                for k in 0..j {
                    sum -= l[(i, k)] * u[(k, j)];
                }
                *c = sum;
            }

            if config.pivoting == Pivoting::Partial {
                let r = j + select_pivot(candidates[j..].iter().copied());
                if r != j {
                    debug!("pivot col {j}: swapping rows {j} and {r}");
                    pa.swap_rows(j, r);
                    // only columns < j of these rows are filled in so far
                    l.swap_rows(j, r);
                    p.swap(j, r);
                    candidates.swap(j, r);
                }
            }

            let pivot = candidates[j];
            u[(j, j)] = pivot;
            l[(j, j)] = T::one();

            if pivot.abs() <= tol {
                if candidates[j + 1..].iter().all(|c| c.abs() <= tol) {
                    warn!("zero pivot in col {j}, the matrix is singular");
                    continue;
                }
                warn!("zero pivot in col {j} with non-zero entries below it");
                return Err(Error::SingularMatrix { col: j });
            }

            for i in (j + 1)..n {
                l[(i, j)] = candidates[i] / pivot;
            }
        }

        Ok(Lup {
            l,
            u,
            p,
            singular_tol: tol,
        })
    }

    /// Order of the factorized matrix.
    pub fn order(&self) -> usize {
        self.p.len()
    }

    pub fn l(&self) -> &DenseMatrix<T> {
        &self.l
    }

    pub fn u(&self) -> &DenseMatrix<T> {
        &self.u
    }

    pub fn permutation(&self) -> &Permutation {
        &self.p
    }

    /// `P` as an explicit 0/1 matrix.
    pub fn p(&self) -> DenseMatrix<T> {
        self.p.to_matrix()
    }

    /// Consumes the factorization, returning `(L, U, P)`.
    pub fn into_matrices(self) -> (DenseMatrix<T>, DenseMatrix<T>, DenseMatrix<T>) {
        let p = self.p.to_matrix();
        (self.l, self.u, p)
    }

    /// `det(A) = det(P)^-1 * det(L) * det(U)`.
    ///
    /// `det(L)` is 1, `det(U)` is the product of its diagonal and `det(P) = +-1` follows from the
    /// parity of the permutation.
    pub fn determinant(&self) -> T {
        (0..self.order()).fold(self.p.sign(), |det, i| det * self.u[(i, i)])
    }

    /// Solves `A x = b` using the stored factors.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, Error> {
        triangular::solve_permuted(&self.l, &self.u, &self.p, b, self.singular_tol)
    }

    /// `A^-1`, from one solve per unit basis vector.
    ///
    /// The solution for `e_i` is column `i` of the inverse; solutions are stacked as rows and the
    /// result transposed.
    pub fn inverse(&self) -> Result<DenseMatrix<T>, Error> {
        let n = self.order();
        trace!("Lup::inverse(n={n})");

        let mut stacked = Vec::with_capacity(n * n);
        let mut e = vec![T::zero(); n];
        for i in 0..n {
            e[i] = T::one();
            stacked.extend(self.solve(&e)?);
            e[i] = T::zero();
        }
        Ok(DenseMatrix::from_vec(n, n, stacked)?.transpose())
    }
}
