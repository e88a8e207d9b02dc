//! Errors reported by matrix backings.

use thiserror::Error;

/// Errors that can occur when constructing or updating a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The flat data length does not match the requested shape.
    #[error("cannot build a {rows}x{cols} matrix from {len} entries")]
    InvalidShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Number of entries supplied.
        len: usize,
    },

    /// An operand has the wrong length or inner dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The dimension the operation required.
        expected: usize,
        /// The dimension that was supplied.
        found: usize,
    },

    /// A coordinate lies outside the matrix.
    #[error("entry ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Compressed-row arrays that do not describe a valid matrix.
    #[error("malformed CSR structure: {reason}")]
    MalformedCsr {
        /// Which structural rule was broken.
        reason: &'static str,
    },
}
