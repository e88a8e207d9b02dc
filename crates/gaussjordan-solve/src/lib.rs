//! # gaussjordan-solve
//!
//! Gauss-Jordan elimination over augmented matrices.
//!
//! This crate provides:
//! - Row arithmetic used to build elimination updates
//! - A single elementary-row-operation step for one pivot column
//! - The elimination driver that reduces a matrix to RREF in place
//! - A classifier deciding whether the system has no, one, or infinitely
//!   many solutions
//!
//! ## Data Flow
//!
//! ```text
//! &mut M (m×n, last column = RHS)
//!   └── gauss_jordan
//!         ├── pivot_transform(0)
//!         ├── pivot_transform(1)
//!         └── ... up to min(m, n-1) columns
//!   └── Solution<'_, M> { rank, solution_type, is_linearly_independent }
//! ```
//!
//! Zero tests are exact; there is no tolerance and no magnitude pivoting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod driver;
pub mod error;
pub mod pivot;
pub mod row_ops;
pub mod solution;

pub use config::{Classification, EliminationConfig, Normalization, RankCounting};
pub use driver::{gauss_jordan, gauss_jordan_with};
pub use error::EliminationError;
pub use pivot::{pivot_transform, PivotOutcome};
pub use solution::{Solution, SolutionType};

/// Log target used by this crate.
pub(crate) const LOG_TARGET: &str = "gaussjordan";

#[cfg(test)]
mod proptests;
