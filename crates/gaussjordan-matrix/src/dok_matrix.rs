//! Dictionary-of-keys assembly format.
//!
//! A `DokMatrix` is the mutable staging area for building a sparse system
//! entry by entry. It is converted to [`CsrMatrix`] once, before elimination.

use rustc_hash::FxHashMap;

use crate::error::MatrixError;
use crate::scalar::Scalar;
use crate::sparse_matrix::CsrMatrix;

/// Sparse matrix keyed by `(row, col)`.
#[derive(Debug, Clone)]
pub struct DokMatrix<T> {
    entries: FxHashMap<(usize, usize), T>,
    num_rows: usize,
    num_cols: usize,
}

impl<T: Scalar> DokMatrix<T> {
    /// Creates an empty (all-zero) matrix.
    #[must_use]
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            num_rows,
            num_cols,
        }
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry at (row, col); missing entries read as zero.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Writes the entry at (row, col). Writing zero removes it.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the coordinate lies outside
    /// the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Converts to compressed sparse row form.
    #[must_use]
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let triplets = self
            .entries
            .iter()
            .map(|(&(row, col), &val)| (row, col, val))
            .collect();

        // `set` keeps every key in range.
        CsrMatrix::assemble(self.num_rows, self.num_cols, triplets)
    }
}
