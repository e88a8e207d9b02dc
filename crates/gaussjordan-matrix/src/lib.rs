//! # gaussjordan-matrix
//!
//! Matrix backings for Gauss-Jordan elimination.
//!
//! This crate provides:
//! - The [`Matrix`] capability trait the elimination engine is generic over
//! - Dense matrices stored contiguously in row-major order
//! - Sparse matrices in CSR (Compressed Sparse Row) format
//! - A dictionary-of-keys assembly format that converts once to CSR
//!
//! ## Building a sparse system
//!
//! ```text
//! DokMatrix::new(m, n)  --set(row, col, v)-->  DokMatrix  --to_csr()-->  CsrMatrix
//! ```
//!
//! Entries are compared against `zero()` and `one()` exactly; there is no
//! tolerance anywhere in this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod dok_matrix;
pub mod error;
pub mod scalar;
pub mod sparse_matrix;
pub mod traits;

pub use dense_matrix::DenseMatrix;
pub use dok_matrix::DokMatrix;
pub use error::MatrixError;
pub use scalar::Scalar;
pub use sparse_matrix::CsrMatrix;
pub use traits::Matrix;

#[cfg(test)]
mod proptests;
