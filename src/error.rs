//! Error types for arrangement search.

use thiserror::Error;

/// Failure to score a single candidate arrangement.
///
/// Scoring failures are local: [`ExtremumSearch`](crate::search::ExtremumSearch)
/// skips the candidate and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringFailure {
    /// Two adjacent elements have no relation (or distance) between them.
    #[error("no relation from element {from} to element {to}")]
    MissingRelation {
        /// Index of the element the relation starts from.
        from: usize,
        /// Index of the element the relation points to.
        to: usize,
    },

    /// The candidate does not satisfy the objective's own constraints.
    #[error("candidate rejected: {0}")]
    Rejected(&'static str),

    /// The candidate's total does not fit in the score type.
    #[error("score overflow")]
    Overflow,
}

/// Main error type for search operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every candidate failed to score, or there were no candidates at all.
    #[error("no scorable arrangement ({skipped} candidates failed to score)")]
    NoScorableArrangement {
        /// Number of candidates that were rejected by the score function.
        skipped: usize,
    },

    /// A combination size outside `0..=n` was requested.
    #[error("invalid subset size {k} for a collection of {n} elements")]
    InvalidSubsetSize {
        /// Requested subset size.
        k: usize,
        /// Size of the source collection.
        n: usize,
    },

    /// The search configuration is inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// A relation between the same ordered pair was defined twice.
    #[error("relation from element {from} to element {to} is already defined")]
    DuplicateRelation {
        /// Index of the element the relation starts from.
        from: usize,
        /// Index of the element the relation points to.
        to: usize,
    },
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
