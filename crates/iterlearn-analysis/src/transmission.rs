//! Transmission error and Monte Carlo learnability.
//!
//! Transmission error is the mean normalized Levenshtein distance between a
//! learner's reproduced word set and the word set they were trained on,
//! compared position by position. Learnability standardizes that error
//! against a null distribution obtained by scoring random realignments of
//! the two sets.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use iterlearn_core::{mean, normalized_levenshtein, population_std};

use crate::config::MonteCarloConfig;
use crate::error::{AnalysisError, AnalysisResult};

/// Mean normalized Levenshtein distance between two positionally aligned
/// word lists.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] for empty lists,
/// [`AnalysisError::AlignedLengthMismatch`] when lengths differ.
pub fn mean_normalized_levenshtein<S: AsRef<str>>(a: &[S], b: &[S]) -> AnalysisResult<f64> {
    if a.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "aligned word lists",
        });
    }
    if a.len() != b.len() {
        return Err(AnalysisError::AlignedLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let total: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| normalized_levenshtein(x.as_ref(), y.as_ref()))
        .sum();
    Ok(total / a.len() as f64)
}

/// Null distribution of transmission errors under random realignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NullDistribution {
    /// Mean of the shuffled scores
    pub mean: f64,
    /// Population standard deviation of the shuffled scores
    pub std: f64,
    /// Number of shuffled alignments scored
    pub samples: usize,
}

/// Shuffle `a` against fixed `b` `simulations` times, scoring each
/// alignment with [`mean_normalized_levenshtein`].
pub fn monte_carlo_error<S, R>(
    a: &[S],
    b: &[S],
    simulations: usize,
    rng: &mut R,
) -> AnalysisResult<NullDistribution>
where
    S: AsRef<str>,
    R: Rng,
{
    if simulations == 0 {
        return Err(AnalysisError::InvalidBudget {
            requested: simulations,
        });
    }

    let mut shuffled: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let fixed: Vec<&str> = b.iter().map(AsRef::as_ref).collect();

    let mut scores = Vec::with_capacity(simulations);
    for _ in 0..simulations {
        shuffled.shuffle(rng);
        scores.push(mean_normalized_levenshtein(&shuffled, &fixed)?);
    }

    Ok(NullDistribution {
        mean: mean(&scores),
        std: population_std(&scores),
        samples: simulations,
    })
}

/// Learnability of a generation's language relative to chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Learnability {
    /// Veridical transmission error between the two generations
    pub error: f64,
    /// Null distribution of errors under random realignment
    pub null: NullDistribution,
    /// `(null.mean - error) / null.std`; positive means transmission was
    /// more faithful than chance
    pub z: f64,
}

/// Compare the veridical transmission error between `current` and
/// `previous` against a Monte Carlo null distribution.
///
/// # Errors
///
/// Input errors as in [`mean_normalized_levenshtein`], plus
/// [`AnalysisError::DegenerateDistribution`] when every realignment scores
/// identically (for example when all words are the same).
pub fn learnability<S: AsRef<str>>(
    current: &[S],
    previous: &[S],
    config: &MonteCarloConfig,
) -> AnalysisResult<Learnability> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let error = mean_normalized_levenshtein(current, previous)?;
    let null = monte_carlo_error(current, previous, config.simulations, &mut rng)?;
    debug!(
        error,
        null_mean = null.mean,
        null_std = null.std,
        "learnability null distribution"
    );

    if null.std == 0.0 {
        return Err(AnalysisError::DegenerateDistribution {
            samples: null.samples,
        });
    }

    Ok(Learnability {
        error,
        null,
        z: (null.mean - error) / null.std,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(simulations: usize, seed: u64) -> MonteCarloConfig {
        MonteCarloConfig {
            simulations,
            seed: Some(seed),
        }
    }

    #[test]
    fn identical_lists_have_zero_error() {
        let words = ["kapa", "nelo", "wiful"];
        assert_eq!(mean_normalized_levenshtein(&words, &words).unwrap(), 0.0);
    }

    #[test]
    fn error_averages_over_positions() {
        // "abcd" -> "abcx" is 1 edit / 4 chars; "xy" -> "xy" is 0.
        let e = mean_normalized_levenshtein(&["abcd", "xy"], &["abcx", "xy"]).unwrap();
        assert!((e - 0.125).abs() < 1e-12);
    }

    #[test]
    fn mismatched_and_empty_inputs() {
        assert!(matches!(
            mean_normalized_levenshtein(&["a"], &["a", "b"]).unwrap_err(),
            AnalysisError::AlignedLengthMismatch { left: 1, right: 2 }
        ));
        assert!(matches!(
            mean_normalized_levenshtein::<&str>(&[], &[]).unwrap_err(),
            AnalysisError::EmptyInput { .. }
        ));
    }

    #[test]
    fn learnability_of_faithful_transmission() {
        // Distinct words transmitted perfectly: veridical error 0, shuffled
        // alignments mostly mismatch, so z must be positive.
        let words = ["kapa", "nelo", "wiful", "gopem", "siduk"];
        let result = learnability(&words, &words, &seeded(500, 21)).unwrap();
        assert_eq!(result.error, 0.0);
        assert!(result.null.mean > 0.0);
        assert!(result.z > 0.0);
    }

    #[test]
    fn uniform_language_is_degenerate() {
        // Every realignment of an all-identical lexicon scores the same.
        let words = ["mo", "mo", "mo", "mo"];
        let err = learnability(&words, &words, &seeded(50, 3)).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateDistribution { .. }));
    }

    #[test]
    fn seed_reproducibility() {
        let current = ["kapa", "nelo", "wiful", "gopem"];
        let previous = ["kapu", "nelo", "wifol", "gopem"];
        let a = learnability(&current, &previous, &seeded(200, 9)).unwrap();
        let b = learnability(&current, &previous, &seeded(200, 9)).unwrap();
        assert_eq!(a.z, b.z);
        assert_eq!(a.null, b.null);
    }

    #[test]
    fn zero_simulations_rejected() {
        let words = ["a", "b"];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            monte_carlo_error(&words, &words, 0, &mut rng).unwrap_err(),
            AnalysisError::InvalidBudget { requested: 0 }
        ));
    }
}
