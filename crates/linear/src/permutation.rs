use matrix::DenseMatrix;
use nalgebra::{RealField, Scalar};
use num_traits::{One, Zero};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A row permutation, stored as an index vector.
///
/// Row `i` of `P * A` is row `perm[i]` of `A`. As a matrix, row `i` of `P` is the unit row vector
/// `e_{perm[i]}`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    perm: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Permutation {
            perm: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.perm
    }

    /// Exchanges rows `a` and `b` of the permutation matrix.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.perm.swap(a, b);
    }

    /// `P * b` for a vector `b`.
    pub fn apply<T: Clone>(&self, b: &[T]) -> Result<Vec<T>, Error> {
        if b.len() != self.len() {
            return Err(Error::RhsLength {
                expected: self.len(),
                found: b.len(),
            });
        }
        Ok(self.perm.iter().map(|&src| b[src].clone()).collect())
    }

    /// `P * A`, reordering the rows of `a`.
    pub fn apply_rows<T: Scalar>(&self, a: &DenseMatrix<T>) -> Result<DenseMatrix<T>, Error> {
        if a.rows() != self.len() {
            return Err(matrix::Error::DimensionMismatch {
                op: "permute",
                left: (self.len(), self.len()),
                right: a.dims(),
            }
            .into());
        }
        let mut data = Vec::with_capacity(a.as_slice().len());
        for &src in &self.perm {
            data.extend_from_slice(a.row(src)?);
        }
        Ok(DenseMatrix::from_vec(a.rows(), a.cols(), data)?)
    }

    /// The explicit 0/1 permutation matrix.
    ///
    /// # Panics
    ///
    /// Panics if the permutation is empty.
    pub fn to_matrix<T: Scalar + Zero + One>(&self) -> DenseMatrix<T> {
        let mut p = DenseMatrix::zeros(self.len(), self.len());
        for (i, &j) in self.perm.iter().enumerate() {
            p[(i, j)] = T::one();
        }
        p
    }

    /// Number of transpositions in a cycle decomposition of the permutation.
    ///
    /// Only its parity is meaningful: a cycle of length `k` takes `k - 1` transpositions.
    pub fn transpositions(&self) -> usize {
        let mut visited = vec![false; self.len()];
        let mut count = 0;
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle_len = 0;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.perm[i];
                cycle_len += 1;
            }
            count += cycle_len - 1;
        }
        count
    }

    pub fn is_even(&self) -> bool {
        self.transpositions() % 2 == 0
    }

    /// `det(P)`, either `1` or `-1`.
    pub fn sign<T: RealField>(&self) -> T {
        if self.is_even() {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Number of rows not in their identity position.
    ///
    /// This is not the transposition count (a 3-cycle has 3 mismatches but is even); use
    /// [`Permutation::sign`] for determinants.
    pub fn mismatches(&self) -> usize {
        self.perm
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i != j)
            .count()
    }
}

impl<T: RealField + Copy> TryFrom<&DenseMatrix<T>> for Permutation {
    type Error = Error;

    /// Recovers the index form of a 0/1 permutation matrix.
    fn try_from(p: &DenseMatrix<T>) -> Result<Self, Error> {
        let n = crate::ensure_square(p)?;
        let mut perm = Vec::with_capacity(n);
        let mut seen = vec![false; n];
        for i in 0..n {
            let row = p.row(i)?;
            let mut ones = row
                .iter()
                .enumerate()
                .filter(|&(_, &x)| x != T::zero());
            match (ones.next(), ones.next()) {
                (Some((j, &x)), None) if x == T::one() && !seen[j] => {
                    seen[j] = true;
                    perm.push(j);
                }
                _ => return Err(Error::NotPermutation),
            }
        }
        Ok(Permutation { perm })
    }
}
