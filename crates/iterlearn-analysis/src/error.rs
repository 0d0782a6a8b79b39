//! Error types for the analysis layer.
//!
//! All errors propagate uncaught to the caller. There is nothing transient
//! to retry in pure computation, and no partial results are produced.
//! Callers that want a "not available" marker for a missing generation
//! should map errors themselves rather than expecting the tests to swallow
//! them.

use iterlearn_core::ShapeError;
use thiserror::Error;

/// Result alias used throughout the analysis crate.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur during statistical analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Pairwise analysis needs at least two strings.
    #[error("at least 2 strings are required for pairwise analysis, got {count}")]
    TooFewStrings {
        /// Number of strings supplied
        count: usize,
    },

    /// The meaning-distance sequence does not match the pairwise length
    /// implied by the number of strings.
    #[error("expected {expected} pairwise distances for {items} items, got {actual}")]
    DistanceLengthMismatch {
        /// Number of items being compared
        items: usize,
        /// Expected condensed length `items * (items - 1) / 2`
        expected: usize,
        /// Actual length supplied
        actual: usize,
    },

    /// Two positionally aligned word lists differ in length.
    #[error("aligned word lists differ in length: {left} vs {right}")]
    AlignedLengthMismatch {
        /// Length of the first list
        left: usize,
        /// Length of the second list
        right: usize,
    },

    /// Empty input where at least one element is required.
    #[error("empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: &'static str,
    },

    /// A permutation or simulation budget of zero was requested.
    #[error("sampling budget must be >= 1, got {requested}")]
    InvalidBudget {
        /// The requested budget
        requested: usize,
    },

    /// The null distribution has zero variance, so the z-score is
    /// undefined. Raised instead of returning NaN or infinity.
    #[error("degenerate null distribution: {samples} samples with zero variance")]
    DegenerateDistribution {
        /// Size of the covariance/score sample
        samples: usize,
    },

    /// Malformed distance-matrix shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
