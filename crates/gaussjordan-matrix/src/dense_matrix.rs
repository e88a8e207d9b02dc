//! Dense matrix backing.
//!
//! Entries live in one contiguous `Vec` in row-major order, so a row is a
//! slice and swapping or scaling a row never allocates.

use std::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::scalar::Scalar;
use crate::traits::{product_dims, product_row, Matrix};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "DenseMatrixRepr<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Creates a matrix from a flat row-major list with explicit dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_flat(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if num_rows.checked_mul(num_cols) != Some(data.len()) {
            return Err(MatrixError::InvalidShape {
                rows: num_rows,
                cols: num_cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the rows have different
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(MatrixError::DimensionMismatch {
                    expected: num_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.num_cols == 0 {
            return vec![Vec::new(); self.num_rows];
        }
        self.data.chunks(self.num_cols).map(<[T]>::to_vec).collect()
    }

}

/// Unchecked wire form; goes through [`DenseMatrix::from_flat`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DenseMatrixRepr<T> {
    data: Vec<T>,
    num_rows: usize,
    num_cols: usize,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<DenseMatrixRepr<T>> for DenseMatrix<T> {
    type Error = MatrixError;

    fn try_from(repr: DenseMatrixRepr<T>) -> Result<Self, Self::Error> {
        Self::from_flat(repr.num_rows, repr.num_cols, repr.data)
    }
}

impl<T: Scalar> Matrix for DenseMatrix<T> {
    type Scalar = T;

    fn dims(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    fn row(&self, i: usize) -> Vec<T> {
        self.row_slice(i).to_vec()
    }

    fn set_row(&mut self, i: usize, values: &[T]) -> Result<(), MatrixError> {
        if values.len() != self.num_cols {
            return Err(MatrixError::DimensionMismatch {
                expected: self.num_cols,
                found: values.len(),
            });
        }
        self.row_mut(i).copy_from_slice(values);
        Ok(())
    }

    fn mul<A, B>(&mut self, a: &A, b: &B) -> Result<(), MatrixError>
    where
        A: Matrix<Scalar = T>,
        B: Matrix<Scalar = T>,
    {
        let (rows, cols) = product_dims(a, b)?;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            data.extend(product_row(a, b, i));
        }
        self.data = data;
        self.num_rows = rows;
        self.num_cols = cols;
        Ok(())
    }

    fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), MatrixError> {
        if i == j {
            return Ok(());
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &mut self.data[row * self.num_cols + col]
    }
}
