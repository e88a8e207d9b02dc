//! Row arithmetic.
//!
//! Both operations take the row by value, update it in place and hand it
//! back, so an elimination update reads `add(row_j, &scale(row_i, -e))?`.

use gaussjordan_matrix::Scalar;

use crate::error::EliminationError;

/// Multiplies every element of `vector` by `k`.
#[must_use]
pub fn scale<T: Scalar>(mut vector: Vec<T>, k: T) -> Vec<T> {
    for v in &mut vector {
        *v = *v * k;
    }
    vector
}

/// Adds `b` to `a` elementwise.
///
/// # Errors
///
/// Returns [`EliminationError::RowLengthMismatch`] if the lengths differ.
pub fn add<T: Scalar>(mut a: Vec<T>, b: &[T]) -> Result<Vec<T>, EliminationError> {
    if a.len() != b.len() {
        return Err(EliminationError::RowLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    for (x, y) in a.iter_mut().zip(b) {
        *x = *x + *y;
    }
    Ok(a)
}
