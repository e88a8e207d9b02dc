//! Property-based tests for the matrix backings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense_matrix::DenseMatrix;
    use crate::dok_matrix::DokMatrix;
    use crate::sparse_matrix::CsrMatrix;
    use crate::traits::Matrix;

    // Small integer-valued entries, roughly half of them zero
    fn entry() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0), (-9i32..=9).prop_map(f64::from)]
    }

    fn dense_matrix() -> impl Strategy<Value = DenseMatrix<f64>> {
        (1usize..=4, 1usize..=5).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(entry(), rows * cols).prop_map(move |data| {
                DenseMatrix::from_flat(rows, cols, data).expect("shape matches data")
            })
        })
    }

    proptest! {
        #[test]
        fn csr_round_trips_through_dense(m in dense_matrix()) {
            let sparse = CsrMatrix::from_dense(&m);
            prop_assert_eq!(sparse.to_dense(), m);
        }

        #[test]
        fn csr_never_stores_zeros(m in dense_matrix(), row in 0usize..4, zeros in any::<bool>()) {
            let mut sparse = CsrMatrix::from_dense(&m);
            let row = row % m.num_rows();
            let replacement: Vec<f64> = (0..m.num_cols())
                .map(|j| if zeros || j % 2 == 0 { 0.0 } else { 1.0 })
                .collect();
            sparse.set_row(row, &replacement).unwrap();

            let dense = sparse.to_dense();
            let stored = (0..dense.num_rows())
                .flat_map(|i| dense.row(i))
                .filter(|v| *v != 0.0)
                .count();
            prop_assert_eq!(sparse.nnz(), stored);
            prop_assert_eq!(sparse.row(row), replacement);
        }

        #[test]
        fn swap_rows_agrees_across_backings(m in dense_matrix(), i in 0usize..4, j in 0usize..4) {
            let (i, j) = (i % m.num_rows(), j % m.num_rows());
            let mut dense = m.clone();
            let mut sparse = CsrMatrix::from_dense(&m);
            dense.swap_rows(i, j).unwrap();
            sparse.swap_rows(i, j).unwrap();
            prop_assert_eq!(sparse.to_dense(), dense);
        }

        #[test]
        fn dok_conversion_matches_from_dense(m in dense_matrix()) {
            let mut dok = DokMatrix::new(m.num_rows(), m.num_cols());
            for i in 0..m.num_rows() {
                for j in 0..m.num_cols() {
                    dok.set(i, j, m.at(i, j)).unwrap();
                }
            }
            prop_assert_eq!(dok.to_csr(), CsrMatrix::from_dense(&m));
        }
    }
}
