//! Statistical analyses for iterated-learning language experiments.
//!
//! This crate measures how invented words fare as they are transmitted
//! across simulated generations of learners:
//!
//! - [`structure`]: the permutation significance test relating string-form
//!   distances to meaning distances (structure score)
//! - [`transmission`]: transmission error and Monte Carlo learnability
//! - [`meaning`]: meaning-space distances over triangle stimuli
//! - [`entropy`]: unigram and conditional entropy of segmented languages
//! - [`lexicon`]: expressivity counts and cross-generation word memory
//! - [`sound_symbolism`]: pointedness accumulators over a fixed sound
//!   inventory
//! - [`config`]: serde-derived settings for the stochastic tests
//! - [`error`]: error types and the [`AnalysisResult`] alias
//!
//! Loading experiment logs, segmenting words into syllables, clustering,
//! and plotting are all caller concerns; every function here consumes
//! already-parsed in-memory sequences and returns plain values.
//!
//! # Example
//!
//! ```
//! use iterlearn_analysis::{significance, StructureConfig};
//! use iterlearn_core::pairwise_string_distances;
//!
//! let words = ["nugu", "nugu", "nugo", "wifo"];
//! // Meaning distances would normally come from the stimulus geometry;
//! // here we reuse the string distances to guarantee structure.
//! let meanings = pairwise_string_distances(&words);
//!
//! let config = StructureConfig { permutations: 1000, seed: Some(7) };
//! let z = significance(&words, &meanings, &config).unwrap();
//! assert!(z > 0.0);
//! ```

pub mod config;
pub mod entropy;
pub mod error;
pub mod lexicon;
pub mod meaning;
pub mod sound_symbolism;
pub mod structure;
pub mod transmission;

pub use config::{MonteCarloConfig, StructureConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use meaning::{meaning_distances, MeaningMetric};
pub use sound_symbolism::{pointedness, Sound, SoundProfile};
pub use structure::{significance, significance_test};
pub use transmission::{
    learnability, mean_normalized_levenshtein, monte_carlo_error, Learnability, NullDistribution,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_are_accessible() {
        assert!(StructureConfig::default().validate().is_ok());
        assert_eq!(Sound::ALL.len(), 39);
        assert_eq!(lexicon::unique_strings(&["a", "a", "b"]), 2);
    }
}
