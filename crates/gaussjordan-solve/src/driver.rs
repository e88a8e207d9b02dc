//! Elimination driver.

use gaussjordan_matrix::Matrix;
use log::debug;

use crate::config::EliminationConfig;
use crate::error::EliminationError;
use crate::pivot::{pivot_transform, PivotOutcome};
use crate::solution::Solution;
use crate::LOG_TARGET;

/// Reduces an augmented matrix to reduced row-echelon form in place with the
/// default configuration.
///
/// See [`gauss_jordan_with`].
///
/// # Errors
///
/// Returns [`EliminationError::EmptyMatrix`] if the matrix has no rows or no
/// columns. Errors from the backing are propagated.
pub fn gauss_jordan<M: Matrix>(matrix: &mut M) -> Result<Solution<'_, M>, EliminationError> {
    gauss_jordan_with(matrix, &EliminationConfig::default())
}

/// Reduces an augmented matrix to reduced row-echelon form in place.
///
/// The last column holds the right-hand side. Every other column is a pivot
/// candidate, processed left to right while the column index is also a row
/// index. The matrix is borrowed exclusively for the reduction; the returned
/// [`Solution`] keeps a shared borrow so the classification always reflects
/// the reduced matrix.
///
/// # Errors
///
/// Returns [`EliminationError::EmptyMatrix`] if the matrix has no rows or no
/// columns. Errors from the backing are propagated.
pub fn gauss_jordan_with<'a, M: Matrix>(
    matrix: &'a mut M,
    config: &EliminationConfig,
) -> Result<Solution<'a, M>, EliminationError> {
    let (m, n) = matrix.dims();
    if m == 0 || n == 0 {
        return Err(EliminationError::EmptyMatrix);
    }
    debug!(
        target: LOG_TARGET,
        "eliminating {m}x{n} augmented matrix ({:?})", config.normalization
    );

    let mut skipped = 0usize;
    for i in 0..(n - 1).min(m) {
        if pivot_transform(matrix, i, config)? == PivotOutcome::NoPivot {
            skipped += 1;
        }
    }

    let solution =
        Solution::new(&*matrix, config.rank_counting).with_classification(config.classification);
    debug!(
        target: LOG_TARGET,
        "elimination finished: {skipped} column(s) without pivot, {:?}",
        solution.solution_type()
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Classification, Normalization};
    use crate::solution::SolutionType;
    use gaussjordan_matrix::DenseMatrix;

    fn dense(rows: Vec<Vec<f64>>) -> DenseMatrix<f64> {
        DenseMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_two_variable_system() {
        let mut m = dense(vec![vec![2.0, 2.0, 4.0], vec![4.0, 8.0, 14.0]]);
        let solution = gauss_jordan(&mut m).unwrap();

        assert_eq!(solution.solution_type(), SolutionType::UniqueSolution);
        assert_eq!(
            solution.matrix().to_rows(),
            vec![vec![1.0, 0.0, 0.5], vec![0.0, 1.0, 1.5]]
        );
    }

    #[test]
    fn test_empty_matrix() {
        let mut m: DenseMatrix<f64> = DenseMatrix::zeros(0, 3);
        assert_eq!(gauss_jordan(&mut m).unwrap_err(), EliminationError::EmptyMatrix);

        let mut m: DenseMatrix<f64> = DenseMatrix::zeros(2, 0);
        assert_eq!(gauss_jordan(&mut m).unwrap_err(), EliminationError::EmptyMatrix);
    }

    #[test]
    fn test_rhs_only_matrix() {
        // No coefficient columns: nothing to pivot on.
        let mut m = dense(vec![vec![0.0], vec![3.0]]);
        let solution = gauss_jordan(&mut m).unwrap();
        assert_eq!(solution.matrix().to_rows(), vec![vec![0.0], vec![3.0]]);
        assert_eq!(solution.solution_type(), SolutionType::NoSolution);
    }

    #[test]
    fn test_more_rows_than_variables() {
        // x = 1, x = 1, 2x = 2
        let rows = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![2.0, 2.0]];
        let reduced = vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0]];

        let mut m = dense(rows.clone());
        let solution = gauss_jordan(&mut m).unwrap();
        assert_eq!(solution.matrix().to_rows(), reduced);
        assert_eq!(solution.solution_type(), SolutionType::InfiniteSolutions);

        let config = EliminationConfig {
            classification: Classification::FreeVariables,
            ..EliminationConfig::default()
        };
        let mut m = dense(rows);
        let solution = gauss_jordan_with(&mut m, &config).unwrap();
        assert_eq!(solution.matrix().to_rows(), reduced);
        assert_eq!(solution.solution_type(), SolutionType::UniqueSolution);
        assert_eq!(solution.values(), Some(vec![1.0]));
    }

    #[test]
    fn test_single_row_two_variables() {
        // x = 5 with y unconstrained
        let mut m = dense(vec![vec![1.0, 0.0, 5.0]]);
        let solution = gauss_jordan(&mut m).unwrap();

        assert_eq!(solution.solution_type(), SolutionType::UniqueSolution);
        assert_eq!(solution.values(), None);

        let strict = solution.with_classification(Classification::FreeVariables);
        assert_eq!(strict.solution_type(), SolutionType::InfiniteSolutions);
    }

    #[test]
    fn test_matrix_stays_reduced_after_solution_drops() {
        let mut m = dense(vec![vec![2.0, 2.0, 4.0], vec![4.0, 8.0, 14.0]]);
        {
            let solution = gauss_jordan(&mut m).unwrap();
            assert!(solution.is_linearly_independent());
        }
        assert_eq!(m.to_rows(), vec![vec![1.0, 0.0, 0.5], vec![0.0, 1.0, 1.5]]);
    }

    #[test]
    fn test_scaling_matrix_config() {
        let config = EliminationConfig {
            normalization: Normalization::ScalingMatrix,
            ..EliminationConfig::default()
        };
        let mut m = dense(vec![vec![2.0, 2.0, 4.0], vec![4.0, 8.0, 14.0]]);
        let solution = gauss_jordan_with(&mut m, &config).unwrap();

        assert_eq!(
            solution.matrix().to_rows(),
            vec![vec![1.0, 0.0, 0.5], vec![0.0, 1.0, 1.5]]
        );
    }
}
