//! The matrix capability required by the elimination engine.
//!
//! The engine never looks at how entries are stored. It reads and writes
//! single entries, reads and replaces whole rows, and (for the scaling-matrix
//! normalization) multiplies two matrices into a third. Both
//! [`DenseMatrix`](crate::DenseMatrix) and [`CsrMatrix`](crate::CsrMatrix)
//! implement this trait.

use num_traits::Zero;

use crate::error::MatrixError;
use crate::scalar::Scalar;

/// Read/write access to an m×n matrix.
///
/// All mutating methods change the backing store directly; there is no
/// copy-on-write.
pub trait Matrix {
    /// Element type.
    type Scalar: Scalar;

    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Returns the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the matrix.
    fn at(&self, row: usize, col: usize) -> Self::Scalar;

    /// Overwrites the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the matrix.
    fn set(&mut self, row: usize, col: usize, value: Self::Scalar);

    /// Returns a copy of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid row.
    fn row(&self, i: usize) -> Vec<Self::Scalar>;

    /// Replaces row `i` wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `values` does not have
    /// exactly one entry per column.
    fn set_row(&mut self, i: usize, values: &[Self::Scalar]) -> Result<(), MatrixError>;

    /// Stores the product `a * b` in `self`, replacing its contents and shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the column count of `a`
    /// differs from the row count of `b`.
    fn mul<A, B>(&mut self, a: &A, b: &B) -> Result<(), MatrixError>
    where
        A: Matrix<Scalar = Self::Scalar>,
        B: Matrix<Scalar = Self::Scalar>;

    /// Returns the number of rows.
    fn num_rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn num_cols(&self) -> usize {
        self.dims().1
    }

    /// Exchanges rows `i` and `j`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Matrix::set_row`].
    fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), MatrixError> {
        if i == j {
            return Ok(());
        }
        let row_i = self.row(i);
        let row_j = self.row(j);
        self.set_row(i, &row_j)?;
        self.set_row(j, &row_i)
    }
}

/// Computes row `i` of `a * b` as a dense vector.
///
/// Zero entries of `a` contribute nothing and are skipped.
pub(crate) fn product_row<A, B>(a: &A, b: &B, i: usize) -> Vec<A::Scalar>
where
    A: Matrix,
    B: Matrix<Scalar = A::Scalar>,
{
    let mut acc = vec![<A::Scalar as Zero>::zero(); b.num_cols()];
    for (k, a_ik) in a.row(i).into_iter().enumerate() {
        if a_ik.is_zero() {
            continue;
        }
        for (slot, b_kj) in acc.iter_mut().zip(b.row(k)) {
            *slot = *slot + a_ik * b_kj;
        }
    }
    acc
}

/// Checks that `a * b` is defined and returns the shape of the product.
pub(crate) fn product_dims<A, B>(a: &A, b: &B) -> Result<(usize, usize), MatrixError>
where
    A: Matrix,
    B: Matrix,
{
    let (a_rows, a_cols) = a.dims();
    let (b_rows, b_cols) = b.dims();
    if a_cols != b_rows {
        return Err(MatrixError::DimensionMismatch {
            expected: a_cols,
            found: b_rows,
        });
    }
    Ok((a_rows, b_cols))
}
