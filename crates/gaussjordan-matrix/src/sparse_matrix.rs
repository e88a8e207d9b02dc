//! Sparse matrix in Compressed Sparse Row (CSR) format.
//!
//! CSR keeps each row's non-zero entries contiguous and sorted by column,
//! which suits the row-at-a-time updates of Gauss-Jordan elimination.
//! Zero entries are never stored: writing a zero removes the entry.

use std::ops::Range;

use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;
use crate::scalar::Scalar;
use crate::traits::{product_dims, product_row, Matrix};

/// Sparse matrix in Compressed Sparse Row (CSR) format.
///
/// # Memory Layout
///
/// For an m×n matrix with nnz non-zero entries:
/// - `values`: Vec of nnz non-zero values
/// - `col_indices`: Vec of nnz column indices
/// - `row_ptrs`: Vec of m+1 row pointers
///
/// Row i contains entries from `row_ptrs[i]` to `row_ptrs[i+1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "CsrMatrixRepr<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct CsrMatrix<T> {
    /// Non-zero values in row-major order.
    values: Vec<T>,
    /// Column index for each non-zero value.
    col_indices: Vec<usize>,
    /// Row pointers: `row_ptrs[i]` is the index into values where row i starts.
    row_ptrs: Vec<usize>,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Creates a new all-zero sparse matrix.
    #[must_use]
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            values: Vec::new(),
            col_indices: Vec::new(),
            row_ptrs: vec![0; num_rows + 1],
            num_cols,
        }
    }

    /// Creates a sparse matrix from a dense matrix.
    ///
    /// Zero entries are not stored.
    #[must_use]
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let num_rows = dense.num_rows();
        let mut values = Vec::new();
        let mut col_indices = Vec::new();
        let mut row_ptrs = Vec::with_capacity(num_rows + 1);

        for row in 0..num_rows {
            row_ptrs.push(values.len());
            for (col, val) in dense.row_slice(row).iter().enumerate() {
                if !val.is_zero() {
                    values.push(*val);
                    col_indices.push(col);
                }
            }
        }
        row_ptrs.push(values.len());

        Self {
            values,
            col_indices,
            row_ptrs,
            num_cols: dense.num_cols(),
        }
    }

    /// Creates a sparse matrix from triplets (row, col, value).
    ///
    /// Duplicate entries are summed. Entries are sorted by (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if a triplet lies outside the
    /// requested shape.
    pub fn from_triplets(
        num_rows: usize,
        num_cols: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self, MatrixError> {
        if let Some(&(row, col, _)) = triplets
            .iter()
            .find(|(r, c, _)| *r >= num_rows || *c >= num_cols)
        {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: num_rows,
                cols: num_cols,
            });
        }

        Ok(Self::assemble(num_rows, num_cols, triplets.to_vec()))
    }

    /// Builds CSR from in-range triplets in any order.
    pub(crate) fn assemble(
        num_rows: usize,
        num_cols: usize,
        mut triplets: Vec<(usize, usize, T)>,
    ) -> Self {
        triplets.sort_by_key(|(r, c, _)| (*r, *c));

        // Sum duplicates before dropping zeros so cancelling pairs vanish.
        let mut merged: Vec<(usize, usize, T)> = Vec::with_capacity(triplets.len());
        for (row, col, val) in triplets {
            match merged.last_mut() {
                Some(last) if last.0 == row && last.1 == col => last.2 = last.2 + val,
                _ => merged.push((row, col, val)),
            }
        }

        let mut values = Vec::with_capacity(merged.len());
        let mut col_indices = Vec::with_capacity(merged.len());
        let mut row_ptrs = Vec::with_capacity(num_rows + 1);
        row_ptrs.push(0);
        let mut current_row = 0;

        for (row, col, val) in merged {
            if val.is_zero() {
                continue;
            }
            // Fill in empty rows
            while current_row < row {
                row_ptrs.push(values.len());
                current_row += 1;
            }
            values.push(val);
            col_indices.push(col);
        }

        while row_ptrs.len() <= num_rows {
            row_ptrs.push(values.len());
        }

        Self {
            values,
            col_indices,
            row_ptrs,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.row_ptrs.len().saturating_sub(1)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over non-zero entries in a row.
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, &T)> {
        let range = self.row_range(row);
        self.col_indices[range.clone()]
            .iter()
            .zip(&self.values[range])
            .map(|(&col, val)| (col, val))
    }

    /// Returns the entry at (row, col), or None if zero.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.num_rows() || col >= self.num_cols {
            return None;
        }
        let range = self.row_range(row);
        let idx = self.col_indices[range.clone()].binary_search(&col).ok()?;
        Some(&self.values[range.start + idx])
    }

    /// Converts to dense matrix representation.
    #[must_use]
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeros(self.num_rows(), self.num_cols);
        for row in 0..self.num_rows() {
            for (col, val) in self.row_iter(row) {
                dense[(row, col)] = *val;
            }
        }
        dense
    }

    fn row_range(&self, row: usize) -> Range<usize> {
        self.row_ptrs[row]..self.row_ptrs[row + 1]
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.num_rows() && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows(),
            self.num_cols
        );
    }

    /// Replaces the stored entries of `row` and shifts the following row
    /// pointers by the change in length.
    fn splice_row(&mut self, row: usize, entries: Vec<(usize, T)>) {
        let range = self.row_range(row);
        let old_len = range.len();
        let new_len = entries.len();
        let (cols, vals): (Vec<usize>, Vec<T>) = entries.into_iter().unzip();
        self.col_indices.splice(range.clone(), cols);
        self.values.splice(range, vals);

        for ptr in &mut self.row_ptrs[row + 1..] {
            *ptr = *ptr + new_len - old_len;
        }
    }
}

/// Unchecked wire form of [`CsrMatrix`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CsrMatrixRepr<T> {
    values: Vec<T>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
    num_cols: usize,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<CsrMatrixRepr<T>> for CsrMatrix<T> {
    type Error = MatrixError;

    fn try_from(repr: CsrMatrixRepr<T>) -> Result<Self, Self::Error> {
        let malformed = |reason| Err(MatrixError::MalformedCsr { reason });
        let CsrMatrixRepr {
            values,
            col_indices,
            row_ptrs,
            num_cols,
        } = repr;

        if row_ptrs.first() != Some(&0) {
            return malformed("row pointers must start at 0");
        }
        if row_ptrs.windows(2).any(|w| w[0] > w[1]) {
            return malformed("row pointers must be non-decreasing");
        }
        if values.len() != col_indices.len() || row_ptrs.last() != Some(&values.len()) {
            return malformed("row pointers, column indices and values disagree on nnz");
        }
        for w in row_ptrs.windows(2) {
            let cols = &col_indices[w[0]..w[1]];
            if cols.iter().any(|&col| col >= num_cols) {
                return malformed("column index out of range");
            }
            if cols.windows(2).any(|c| c[0] >= c[1]) {
                return malformed("column indices must be strictly increasing within a row");
            }
        }
        if values.iter().any(|v| v.is_zero()) {
            return malformed("explicit zero stored");
        }

        Ok(Self {
            values,
            col_indices,
            row_ptrs,
            num_cols,
        })
    }
}

impl<T: Scalar> Matrix for CsrMatrix<T> {
    type Scalar = T;

    fn dims(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols)
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.check_bounds(row, col);
        self.get(row, col).copied().unwrap_or_else(T::zero)
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.check_bounds(row, col);
        let range = self.row_range(row);
        match self.col_indices[range.clone()].binary_search(&col) {
            Ok(idx) if value.is_zero() => {
                self.col_indices.remove(range.start + idx);
                self.values.remove(range.start + idx);
                for ptr in &mut self.row_ptrs[row + 1..] {
                    *ptr -= 1;
                }
            }
            Ok(idx) => self.values[range.start + idx] = value,
            Err(_) if value.is_zero() => {}
            Err(idx) => {
                self.col_indices.insert(range.start + idx, col);
                self.values.insert(range.start + idx, value);
                for ptr in &mut self.row_ptrs[row + 1..] {
                    *ptr += 1;
                }
            }
        }
    }

    fn row(&self, i: usize) -> Vec<T> {
        let mut dense = vec![T::zero(); self.num_cols];
        for (col, val) in self.row_iter(i) {
            dense[col] = *val;
        }
        dense
    }

    fn set_row(&mut self, i: usize, values: &[T]) -> Result<(), MatrixError> {
        if values.len() != self.num_cols {
            return Err(MatrixError::DimensionMismatch {
                expected: self.num_cols,
                found: values.len(),
            });
        }
        let entries = values
            .iter()
            .enumerate()
            .filter(|(_, val)| !val.is_zero())
            .map(|(col, val)| (col, *val))
            .collect();
        self.splice_row(i, entries);
        Ok(())
    }

    fn mul<A, B>(&mut self, a: &A, b: &B) -> Result<(), MatrixError>
    where
        A: Matrix<Scalar = T>,
        B: Matrix<Scalar = T>,
    {
        let (rows, cols) = product_dims(a, b)?;
        let mut values = Vec::new();
        let mut col_indices = Vec::new();
        let mut row_ptrs = Vec::with_capacity(rows + 1);

        for i in 0..rows {
            row_ptrs.push(values.len());
            for (col, val) in product_row(a, b, i).into_iter().enumerate() {
                if !val.is_zero() {
                    values.push(val);
                    col_indices.push(col);
                }
            }
        }
        row_ptrs.push(values.len());

        *self = Self {
            values,
            col_indices,
            row_ptrs,
            num_cols: cols,
        };
        Ok(())
    }
}
