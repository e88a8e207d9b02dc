//! Errors reported by the elimination engine.
//!
//! Every variant describes a caller bug (a malformed matrix or an argument
//! outside the matrix), not a property of the linear system. Systems with no
//! solution are reported through [`SolutionType`](crate::SolutionType).

use gaussjordan_matrix::MatrixError;
use thiserror::Error;

/// Errors that can occur during elimination.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EliminationError {
    /// The matrix has no rows or no columns.
    #[error("cannot eliminate an empty matrix")]
    EmptyMatrix,

    /// Two rows combined elementwise have different lengths.
    #[error("row length mismatch: {left} vs {right}")]
    RowLengthMismatch {
        /// Length of the row being updated.
        left: usize,
        /// Length of the row added to it.
        right: usize,
    },

    /// The pivot index is not both a row and a coefficient column.
    #[error("pivot {pivot} is outside the coefficient block of a {rows}x{cols} matrix")]
    PivotOutOfRange {
        /// Requested pivot index.
        pivot: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns, including the right-hand side.
        cols: usize,
    },

    /// The matrix backing rejected an update.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
