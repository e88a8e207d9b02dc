//! Elimination configuration.

/// How a pivot row is scaled so that the pivot becomes 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Normalization {
    /// Divide every entry of the pivot row by the pivot.
    #[default]
    DivideRow,
    /// Left-multiply the matrix by an m×m identity whose pivot entry is the
    /// pivot's reciprocal.
    ///
    /// Allocates an auxiliary matrix and a copy of the receiver per pivot.
    /// The pivot entry is `p * (1/p)`, which is not always exactly 1.
    ScalingMatrix,
}

/// Which inconsistent rows [`Solution::rank`](crate::Solution::rank) subtracts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankCounting {
    /// Count every inconsistent row.
    #[default]
    AllInconsistentRows,
    /// Stop at the first inconsistent row, so the rank is at least `m - 1`.
    FirstInconsistentRow,
}

/// How [`Solution::solution_type`](crate::Solution::solution_type) separates
/// unique from infinite solution sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Unique exactly when every row `i` is row `i` of `[I | b]`.
    ///
    /// Rows with no diagonal coefficient (`i >= n - 1`) never match, and a
    /// system with fewer rows than variables can still be reported unique.
    #[default]
    IdentityPattern,
    /// Unique only when every variable is pinned by a pivot row.
    ///
    /// All-zero rows past the last variable carry no constraint, and fewer
    /// rows than variables always leaves a free variable.
    FreeVariables,
}

/// Configuration for Gauss-Jordan elimination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EliminationConfig {
    /// Pivot row normalization strategy.
    pub normalization: Normalization,
    /// Rank counting policy carried into the resulting solution.
    pub rank_counting: RankCounting,
    /// Classification rule carried into the resulting solution.
    pub classification: Classification,
}

impl EliminationConfig {
    /// Matrix height from which the scaling-matrix product is worth a warning.
    pub const SCALING_MATRIX_WARN_ROWS: usize = 256;
}
