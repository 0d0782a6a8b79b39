//! String distance computation.
//!
//! Normalized Levenshtein edit distance between word forms, and the
//! condensed pairwise distance sequence over an ordered list of words.

mod levenshtein;
mod pairwise;

pub use levenshtein::{levenshtein, normalized_levenshtein};
pub use pairwise::pairwise_string_distances;
