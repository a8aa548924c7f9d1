//! Dimension-checked elementwise arithmetic and products.

use nalgebra::RealField;

use crate::{DenseMatrix, Error};

impl<T> DenseMatrix<T>
where
    T: RealField + Copy,
{
    /// In-place `self[i][j] += other[i][j]`. Both operands must have identical shape.
    pub fn add(&mut self, other: &Self) -> Result<(), Error> {
        if self.dims() != other.dims() {
            return Err(Error::DimensionMismatch {
                op: "add",
                left: self.dims(),
                right: other.dims(),
            });
        }
        for (a, &b) in self.data_mut().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    /// Multiplies every element by `factor` in place.
    pub fn scale(&mut self, factor: T) {
        for a in self.data_mut() {
            *a *= factor;
        }
    }

    /// Matrix product `self * other`, requiring `self.cols == other.rows`.
    ///
    /// Returns a new `self.rows x other.cols` matrix.
    pub fn multiply(&self, other: &Self) -> Result<Self, Error> {
        let (m, inner) = self.dims();
        let (other_rows, n) = other.dims();
        if inner != other_rows {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: self.dims(),
                right: other.dims(),
            });
        }

        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let mut out = vec![T::zero(); m * n];
        for i in 0..m {
            let out_row = &mut out[i * n..(i + 1) * n];
            for k in 0..inner {
                let a_ik = lhs[i * inner + k];
                for (o, &b_kj) in out_row.iter_mut().zip(&rhs[k * n..(k + 1) * n]) {
                    *o += a_ik * b_kj;
                }
            }
        }
        DenseMatrix::from_vec(m, n, out)
    }

    /// Matrix-vector product `self * v`, with `v` taken as a `cols x 1` column.
    pub fn mul_vec(&self, v: &[T]) -> Result<Vec<T>, Error> {
        if v.len() != self.cols() {
            return Err(Error::DimensionMismatch {
                op: "mul_vec",
                left: self.dims(),
                right: (v.len(), 1),
            });
        }
        Ok((0..self.rows())
            .map(|i| {
                self.as_slice()[i * self.cols()..(i + 1) * self.cols()]
                    .iter()
                    .zip(v)
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect())
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }
}
