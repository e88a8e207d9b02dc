//! Solution classification over a reduced augmented matrix.
//!
//! Nothing is cached: every query walks the matrix again. A [`Solution`]
//! holds a shared borrow, so the matrix cannot change underneath it.

use gaussjordan_matrix::Matrix;
use num_traits::{One, Zero};

use crate::config::{Classification, RankCounting};

/// The shape of a linear system's solution set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolutionType {
    /// Some equation reduces to `0 = c` with `c != 0`.
    NoSolution,
    /// Every variable is determined.
    UniqueSolution,
    /// The system is consistent with at least one free variable.
    InfiniteSolutions,
}

/// A reduced augmented matrix together with its classification queries.
#[derive(Debug)]
pub struct Solution<'a, M> {
    matrix: &'a M,
    rank_counting: RankCounting,
    classification: Classification,
}

// Manual impls: deriving would require `M: Clone`.
impl<M> Clone for Solution<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Solution<'_, M> {}

impl<'a, M: Matrix> Solution<'a, M> {
    /// Wraps a reduced matrix, classifying with
    /// [`Classification::IdentityPattern`].
    #[must_use]
    pub fn new(matrix: &'a M, rank_counting: RankCounting) -> Self {
        Self {
            matrix,
            rank_counting,
            classification: Classification::default(),
        }
    }

    /// Replaces the classification rule.
    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Returns the reduced matrix.
    #[must_use]
    pub fn matrix(&self) -> &'a M {
        self.matrix
    }

    /// Returns the number of rows that are not inconsistent.
    ///
    /// With [`RankCounting::FirstInconsistentRow`] the scan stops at the
    /// first inconsistent row, so at most one row is subtracted.
    #[must_use]
    pub fn rank(&self) -> usize {
        let m = self.matrix.num_rows();
        let inconsistent = (0..m).filter(|&i| self.is_inconsistent(i));
        let count = match self.rank_counting {
            RankCounting::AllInconsistentRows => inconsistent.count(),
            RankCounting::FirstInconsistentRow => inconsistent.take(1).count(),
        };
        m - count
    }

    /// Classifies the solution set.
    ///
    /// Any inconsistent row gives [`SolutionType::NoSolution`]. Otherwise the
    /// system is unique when no row deviates from the identity pattern, as
    /// decided by the configured [`Classification`].
    #[must_use]
    pub fn solution_type(&self) -> SolutionType {
        let (m, n) = self.matrix.dims();
        let mut non_identity = match self.classification {
            Classification::IdentityPattern => false,
            Classification::FreeVariables => m < n.saturating_sub(1),
        };

        for i in 0..m {
            if self.is_inconsistent(i) {
                return SolutionType::NoSolution;
            }
            if !self.is_identity_row(i) {
                non_identity = true;
            }
        }

        if non_identity {
            SolutionType::InfiniteSolutions
        } else {
            SolutionType::UniqueSolution
        }
    }

    /// Returns `rank() == m`.
    #[must_use]
    pub fn is_linearly_independent(&self) -> bool {
        self.rank() == self.matrix.num_rows()
    }

    /// Returns the value of each variable when the solution is unique.
    ///
    /// Variable `i` is read from the right-hand side of row `i`. Returns
    /// `None` when some variable has no row to read it from.
    #[must_use]
    pub fn values(&self) -> Option<Vec<M::Scalar>> {
        let (m, n) = self.matrix.dims();
        let rhs = n.saturating_sub(1);
        if m < rhs || self.solution_type() != SolutionType::UniqueSolution {
            return None;
        }
        Some((0..rhs).map(|i| self.matrix.at(i, rhs)).collect())
    }

    /// A row whose coefficients are all zero but whose right-hand side is not.
    fn is_inconsistent(&self, i: usize) -> bool {
        let row = self.matrix.row(i);
        let Some((rhs, coefficients)) = row.split_last() else {
            return false;
        };
        !rhs.is_zero() && coefficients.iter().all(Zero::is_zero)
    }

    /// Whether row `i` has a 1 at column `i` and zeros in every other
    /// coefficient column.
    fn is_identity_row(&self, i: usize) -> bool {
        let row = self.matrix.row(i);
        let Some((_, coefficients)) = row.split_last() else {
            return false;
        };
        let off_diagonal_zero = coefficients
            .iter()
            .enumerate()
            .all(|(j, v)| j == i || v.is_zero());

        match self.classification {
            // Past the coefficients, column `i` is the right-hand side or
            // does not exist.
            Classification::IdentityPattern => {
                row.get(i).is_some_and(One::is_one) && off_diagonal_zero
            }
            Classification::FreeVariables if i >= coefficients.len() => {
                row.iter().all(Zero::is_zero)
            }
            Classification::FreeVariables => row[i].is_one() && off_diagonal_zero,
        }
    }
}
