//! Property-based tests for elimination and classification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use gaussjordan_matrix::{CsrMatrix, DenseMatrix, Matrix};

    use crate::config::{Classification, EliminationConfig, RankCounting};
    use crate::driver::{gauss_jordan, gauss_jordan_with};
    use crate::solution::SolutionType;

    // Strategy for small integer-valued entries
    fn small_entry() -> impl Strategy<Value = f64> {
        (-5i32..=5).prop_map(f64::from)
    }

    // Strategy for augmented matrices: 1-4 equations, 1-4 variables
    fn augmented() -> impl Strategy<Value = DenseMatrix<f64>> {
        (1usize..=4, 2usize..=5).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(small_entry(), rows * cols).prop_map(move |data| {
                DenseMatrix::from_flat(rows, cols, data).expect("shape matches data")
            })
        })
    }

    // Square systems with a dominant diagonal, so every pivot is nonzero
    fn full_rank_square() -> impl Strategy<Value = DenseMatrix<f64>> {
        (1usize..=4).prop_flat_map(|n| {
            proptest::collection::vec(small_entry(), n * (n + 1)).prop_map(move |mut data| {
                for i in 0..n {
                    data[i * (n + 1) + i] = 32.0;
                }
                DenseMatrix::from_flat(n, n + 1, data).expect("shape matches data")
            })
        })
    }

    proptest! {
        #[test]
        fn rank_is_bounded_by_rows(m in augmented()) {
            let rows = m.num_rows();
            let mut m = m;
            let solution = gauss_jordan(&mut m).unwrap();
            prop_assert!(solution.rank() <= rows);
        }

        #[test]
        fn no_solution_iff_inconsistent_row(m in augmented()) {
            let mut m = m;
            let solution = gauss_jordan(&mut m).unwrap();
            let kind = solution.solution_type();
            prop_assert_eq!(kind == SolutionType::NoSolution, !solution.is_linearly_independent());
            if kind == SolutionType::NoSolution {
                prop_assert!(solution.values().is_none());
            }
        }

        #[test]
        fn first_inconsistent_row_rank_is_never_smaller(m in augmented()) {
            let mut all = m.clone();
            let mut first = m;
            let compat = EliminationConfig {
                rank_counting: RankCounting::FirstInconsistentRow,
                ..EliminationConfig::default()
            };
            let all = gauss_jordan(&mut all).unwrap();
            let first = gauss_jordan_with(&mut first, &compat).unwrap();
            prop_assert!(first.rank() >= all.rank());
            prop_assert!(first.rank() + 1 >= first.matrix().num_rows());
        }

        #[test]
        fn classification_rules_agree_on_square_systems(m in augmented()) {
            let (rows, cols) = m.dims();
            let mut m = m;
            let pattern = gauss_jordan(&mut m).unwrap();
            let strict = pattern.with_classification(Classification::FreeVariables);

            let pattern_kind = pattern.solution_type();
            let strict_kind = strict.solution_type();
            prop_assert_eq!(
                pattern_kind == SolutionType::NoSolution,
                strict_kind == SolutionType::NoSolution
            );
            if pattern_kind == SolutionType::UniqueSolution {
                prop_assert!(rows < cols);
            }
            if rows + 1 == cols {
                prop_assert_eq!(pattern_kind, strict_kind);
            }
        }

        #[test]
        fn elimination_is_idempotent(m in augmented()) {
            let mut once = m;
            gauss_jordan(&mut once).unwrap();
            let mut twice = once.clone();
            gauss_jordan(&mut twice).unwrap();
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn pivot_columns_are_unit_vectors(m in augmented()) {
            let mut m = m;
            gauss_jordan(&mut m).unwrap();
            let (rows, cols) = m.dims();
            for i in 0..rows.min(cols - 1) {
                if m.at(i, i) == 0.0 {
                    // No pivot: the column stays zero from row i down.
                    for j in i..rows {
                        prop_assert_eq!(m.at(j, i), 0.0);
                    }
                } else {
                    for j in 0..rows {
                        prop_assert_eq!(m.at(j, i), if j == i { 1.0 } else { 0.0 });
                    }
                }
            }
        }

        #[test]
        fn full_rank_square_systems_are_unique(m in full_rank_square()) {
            let n = m.num_rows();
            let mut m = m;
            let solution = gauss_jordan(&mut m).unwrap();
            prop_assert_eq!(solution.solution_type(), SolutionType::UniqueSolution);
            prop_assert_eq!(solution.values().map(|v| v.len()), Some(n));
            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(solution.matrix().at(i, j), if i == j { 1.0 } else { 0.0 });
                }
            }
        }

        #[test]
        fn sparse_matches_dense(m in augmented()) {
            let mut sparse = CsrMatrix::from_dense(&m);
            let mut dense = m;
            let dense_kind = gauss_jordan(&mut dense).unwrap().solution_type();
            let sparse_kind = gauss_jordan(&mut sparse).unwrap().solution_type();
            prop_assert_eq!(sparse_kind, dense_kind);
            prop_assert_eq!(sparse.to_dense(), dense);
        }
    }
}
