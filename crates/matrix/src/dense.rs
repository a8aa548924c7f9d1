use std::ops::{Index, IndexMut};

use nalgebra::Scalar;
use num_traits::{One, Zero};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A rectangular matrix stored row-major in a single owned buffer.
///
/// Invariants: `rows >= 1`, `cols >= 1` and `data.len() == rows * cols`. All constructors enforce
/// them, so every row has exactly `cols` elements.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> DenseMatrix<T> {
    /// Wraps a row-major buffer of `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }
        if data.len() != rows * cols {
            return Err(Error::DataLength {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The backing buffer, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow row `row` as a slice of length `cols`.
    pub fn row(&self, row: usize) -> Result<&[T], Error> {
        if row >= self.rows {
            return Err(self.out_of_bounds(row, 0));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Overwrites element `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), Error> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    pub(crate) fn offset(&self, row: usize, col: usize) -> Result<usize, Error> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::IndexOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// Builds a matrix from explicit rows. All rows must have the length of the first one.
    ///
    /// ```
    /// # use matrix::DenseMatrix;
    /// let m = DenseMatrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 7.0]]).unwrap();
    /// assert_eq!(m.dims(), (2, 3));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, Error> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(Error::Empty);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::Construction {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(DenseMatrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<T, Error> {
        self.offset(row, col).map(|idx| self.data[idx].clone())
    }

    /// Returns a new `cols x rows` matrix with `result[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j].clone());
            }
        }
        DenseMatrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Scalar + Zero> DenseMatrix<T> {
    /// A zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        DenseMatrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T: Scalar + Zero + One> DenseMatrix<T> {
    /// The `n x n` identity.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
