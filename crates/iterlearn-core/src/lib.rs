//! Computational primitives for iterated-learning language analysis.
//!
//! This crate provides the pure, dependency-light building blocks that the
//! analysis layer (`iterlearn-analysis`) composes into statistical tests:
//!
//! - [`distance`]: Levenshtein edit distance and pairwise condensed
//!   string-distance sequences
//! - [`squareform`]: condensed/square distance-matrix conversion
//! - [`stats`]: residualization and population statistics
//! - [`geometry`]: triangle stimuli and meaning-space distances
//! - [`error`]: shape errors raised by matrix conversion
//!
//! All functions here are deterministic and side-effect free. The pairwise
//! ordering contract is shared across the crate: for `n` items, pair
//! `(i, j)` with `i < j` appears in row-major upper-triangular order, giving
//! a condensed vector of length `n * (n - 1) / 2`.
//!
//! # Example
//!
//! ```
//! use iterlearn_core::{pairwise_string_distances, square_form};
//!
//! let words = ["kapa", "kapu", "nelo"];
//! let condensed = pairwise_string_distances(&words);
//! assert_eq!(condensed.len(), 3);
//!
//! let matrix = square_form(&condensed).unwrap();
//! assert_eq!(matrix[0][1], condensed[0]);
//! assert_eq!(matrix[1][0], condensed[0]);
//! ```

pub mod distance;
pub mod error;
pub mod geometry;
pub mod squareform;
pub mod stats;

pub use distance::{levenshtein, normalized_levenshtein, pairwise_string_distances};
pub use error::ShapeError;
pub use geometry::{area_distance, translate, triangle_distance, Alignment, Point, Triangle};
pub use squareform::{condensed_form, condensed_index, condensed_len, square_form};
pub use stats::{mean, population_std, population_variance, residualize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_are_accessible() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(condensed_len(4), 6);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
