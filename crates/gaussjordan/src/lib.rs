//! # gaussjordan
//!
//! Gauss-Jordan elimination over dense and sparse augmented matrices.
//!
//! An augmented matrix `[A | b]` is reduced in place to reduced row-echelon
//! form, then classified as having no solution, a unique solution, or
//! infinitely many.
//!
//! ## Quick Start
//!
//! ```rust
//! use gaussjordan::prelude::*;
//!
//! // 2x + 2y = 4, 4x + 8y = 14
//! let mut system = DenseMatrix::from_flat(2, 3, vec![2.0, 2.0, 4.0, 4.0, 8.0, 14.0]).unwrap();
//! let solution = gauss_jordan(&mut system).unwrap();
//!
//! assert_eq!(solution.solution_type(), SolutionType::UniqueSolution);
//! assert_eq!(solution.values(), Some(vec![0.5, 1.5]));
//! ```
//!
//! Sparse systems are assembled entry by entry and converted once:
//!
//! ```rust
//! use gaussjordan::prelude::*;
//!
//! let mut dok = DokMatrix::new(2, 3);
//! dok.set(0, 0, 1.0).unwrap();
//! dok.set(0, 1, 2.0).unwrap();
//! dok.set(0, 2, 3.0).unwrap();
//! dok.set(1, 0, 2.0).unwrap();
//! dok.set(1, 1, 4.0).unwrap();
//! dok.set(1, 2, 4.0).unwrap();
//!
//! let mut system = dok.to_csr();
//! let solution = gauss_jordan(&mut system).unwrap();
//! assert_eq!(solution.solution_type(), SolutionType::NoSolution);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gaussjordan_matrix as matrix;
pub use gaussjordan_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gaussjordan_matrix::{CsrMatrix, DenseMatrix, DokMatrix, Matrix, MatrixError, Scalar};
    pub use gaussjordan_solve::{
        gauss_jordan, gauss_jordan_with, Classification, EliminationConfig, EliminationError,
        Normalization, RankCounting, Solution, SolutionType,
    };
}
