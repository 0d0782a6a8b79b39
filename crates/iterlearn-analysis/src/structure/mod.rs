//! Structure score: the permutation significance test.
//!
//! Measures whether the correlation between pairwise string-form distances
//! and pairwise meaning distances in a generation's language is stronger
//! than expected when category labels are reassigned at random. A positive
//! z-score indicates a systematic form-meaning mapping.

mod permutation;

pub use permutation::{significance, significance_test};
