//! One elementary-row-operation step for a single pivot column.
//!
//! For pivot column `i` the step:
//! 1. swaps in the first row below `i` with a nonzero entry in column `i`
//!    when the diagonal entry is zero,
//! 2. scales row `i` so the pivot is 1,
//! 3. subtracts multiples of row `i` from every other row so column `i`
//!    becomes the `i`-th unit vector.
//!
//! When column `i` is zero from row `i` down, the step leaves the matrix
//! untouched and reports [`PivotOutcome::NoPivot`].

use gaussjordan_matrix::{DenseMatrix, Matrix};
use log::{trace, warn};
use num_traits::{One, Zero};

use crate::config::{EliminationConfig, Normalization};
use crate::error::EliminationError;
use crate::row_ops::{add, scale};
use crate::LOG_TARGET;

/// What a pivot step did to the matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PivotOutcome {
    /// Column `i` was reduced to a unit vector.
    Reduced {
        /// Row exchanged with the pivot row, if the diagonal entry was zero.
        swapped_with: Option<usize>,
        /// Whether the pivot row had to be scaled.
        normalized: bool,
    },
    /// No row at or below the pivot has a nonzero entry in this column.
    NoPivot,
}

/// Applies one Gauss-Jordan step for pivot column `i`.
///
/// # Errors
///
/// Returns [`EliminationError::PivotOutOfRange`] unless `i` is both a row
/// index and a coefficient column (`i < m` and `i < n - 1`). Errors from the
/// backing are propagated.
pub fn pivot_transform<M: Matrix>(
    matrix: &mut M,
    i: usize,
    config: &EliminationConfig,
) -> Result<PivotOutcome, EliminationError> {
    let (m, n) = matrix.dims();
    if i >= m || i + 1 >= n {
        return Err(EliminationError::PivotOutOfRange {
            pivot: i,
            rows: m,
            cols: n,
        });
    }

    let mut pivot = matrix.at(i, i);
    let mut swapped_with = None;
    if pivot.is_zero() {
        let Some(j) = (i + 1..m).find(|&j| !matrix.at(j, i).is_zero()) else {
            trace!(target: LOG_TARGET, "column {i}: no pivot at or below row {i}");
            return Ok(PivotOutcome::NoPivot);
        };
        matrix.swap_rows(i, j)?;
        trace!(target: LOG_TARGET, "column {i}: swapped rows {i} and {j}");
        pivot = matrix.at(i, i);
        swapped_with = Some(j);
    }

    let normalized = !pivot.is_one();
    if normalized {
        normalize(matrix, i, pivot, config.normalization)?;
    }

    let pivot_row = matrix.row(i);
    for j in (0..m).filter(|&j| j != i) {
        let entry = matrix.at(j, i);
        if entry.is_zero() {
            continue;
        }
        let updated = add(matrix.row(j), &scale(pivot_row.clone(), -entry))?;
        matrix.set_row(j, &updated)?;
    }

    Ok(PivotOutcome::Reduced {
        swapped_with,
        normalized,
    })
}

/// Scales row `i` by `1 / pivot`.
fn normalize<M: Matrix>(
    matrix: &mut M,
    i: usize,
    pivot: M::Scalar,
    strategy: Normalization,
) -> Result<(), EliminationError> {
    match strategy {
        Normalization::DivideRow => {
            let row: Vec<M::Scalar> = matrix.row(i).into_iter().map(|v| v / pivot).collect();
            matrix.set_row(i, &row)?;
        }
        Normalization::ScalingMatrix => {
            let m = matrix.num_rows();
            if m >= EliminationConfig::SCALING_MATRIX_WARN_ROWS {
                warn!(
                    target: LOG_TARGET,
                    "scaling-matrix normalization builds a {m}x{m} product per pivot; prefer DivideRow"
                );
            }
            let mut scaling = DenseMatrix::identity(m);
            scaling[(i, i)] = <M::Scalar as One>::one() / pivot;
            let current = matrix_snapshot(matrix);
            matrix.mul(&scaling, &current)?;
        }
    }
    trace!(target: LOG_TARGET, "column {i}: normalized pivot row");
    Ok(())
}

/// Copies the matrix into dense storage so it can be both an operand and
/// the receiver of a product.
fn matrix_snapshot<M: Matrix>(matrix: &M) -> DenseMatrix<M::Scalar> {
    let (m, n) = matrix.dims();
    let mut snapshot = DenseMatrix::zeros(m, n);
    for i in 0..m {
        snapshot.row_mut(i).copy_from_slice(&matrix.row(i));
    }
    snapshot
}
