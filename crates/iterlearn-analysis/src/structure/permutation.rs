//! Permutation test over category-label assignments.
//!
//! The test compares the veridical covariance between residualized string
//! distances and residualized meaning distances against a null distribution
//! obtained by permuting which category label maps to which row of a
//! precomputed label-distance matrix.
//!
//! Edit distances between the `K` distinct labels are computed exactly once
//! (`O(K^2)` Levenshtein calls) and every permutation only performs O(1)
//! matrix lookups. Recomputing raw string distances per permutation would
//! cost `O(N^2)` Levenshtein calls per iteration; this precomputation is
//! the load-bearing optimization of the module and must be preserved.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use iterlearn_core::{
    condensed_len, mean, pairwise_string_distances, population_std, residualize, square_form,
};

use crate::config::StructureConfig;
use crate::error::{AnalysisError, AnalysisResult};

/// Run the significance test with settings taken from `config`.
///
/// Builds a `ChaCha8Rng` from `config.seed` (or OS entropy when unseeded)
/// for the sampled branch; the exact branch is deterministic regardless.
pub fn significance<S: AsRef<str>>(
    strings: &[S],
    meaning_distances: &[f64],
    config: &StructureConfig,
) -> AnalysisResult<f64> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    significance_test(strings, meaning_distances, config.permutations, &mut rng)
}

/// Permutation significance test returning a z-score.
///
/// `strings` holds one category label per stimulus (labels may repeat);
/// `meaning_distances` is the condensed pairwise distance sequence over the
/// same stimuli, in the shared upper-triangular order. `perms` bounds the
/// sampling effort: with `K` distinct labels, all `K!` relabelings are
/// enumerated when `K! <= perms`, otherwise `perms` relabelings are sampled
/// with the veridical assignment fixed at index 0.
///
/// In both branches the veridical assignment's covariance occupies index 0
/// of the sample, and the returned value is
/// `(covariances[0] - mean) / population_std` over the full sample.
///
/// # Errors
///
/// - [`AnalysisError::TooFewStrings`] for fewer than two strings
/// - [`AnalysisError::DistanceLengthMismatch`] when `meaning_distances`
///   is not `N * (N - 1) / 2` long
/// - [`AnalysisError::InvalidBudget`] for `perms == 0`
/// - [`AnalysisError::DegenerateDistribution`] when every relabeling yields
///   the same covariance (for example a single distinct label)
pub fn significance_test<S, R>(
    strings: &[S],
    meaning_distances: &[f64],
    perms: usize,
    rng: &mut R,
) -> AnalysisResult<f64>
where
    S: AsRef<str>,
    R: Rng,
{
    let n = strings.len();
    if n < 2 {
        return Err(AnalysisError::TooFewStrings { count: n });
    }
    if perms == 0 {
        return Err(AnalysisError::InvalidBudget { requested: perms });
    }
    let expected = condensed_len(n);
    if meaning_distances.len() != expected {
        return Err(AnalysisError::DistanceLengthMismatch {
            items: n,
            expected,
            actual: meaning_distances.len(),
        });
    }

    let labels = LabelSpace::build(strings)?;
    let meaning_residuals = residualize(meaning_distances);

    let covariances = match exact_count(labels.k, perms) {
        Some(total) => {
            debug!(labels = labels.k, total, "structure test: exact branch");
            enumerate_covariances(&labels, &meaning_residuals, total)
        }
        None => {
            debug!(labels = labels.k, perms, "structure test: sampled branch");
            sample_covariances(&labels, &meaning_residuals, perms, rng)
        }
    };

    let std = population_std(&covariances);
    if std == 0.0 {
        return Err(AnalysisError::DegenerateDistribution {
            samples: covariances.len(),
        });
    }
    Ok((covariances[0] - mean(&covariances)) / std)
}

/// Distinct category labels, their pairwise distance matrix, and the label
/// index of every input string.
struct LabelSpace {
    /// Square normalized edit-distance matrix over the distinct labels.
    /// Computed once and shared by every permutation.
    distances: Vec<Vec<f64>>,
    /// Index into `distances` for each input string.
    string_labels: Vec<usize>,
    /// Number of distinct labels.
    k: usize,
}

impl LabelSpace {
    fn build<S: AsRef<str>>(strings: &[S]) -> AnalysisResult<Self> {
        // Distinct labels in first-appearance order. K is small (bounded by
        // the stimulus count), so a linear scan beats hashing overhead here.
        let mut labels: Vec<&str> = Vec::new();
        let mut string_labels = Vec::with_capacity(strings.len());
        for s in strings {
            let s = s.as_ref();
            match labels.iter().position(|l| *l == s) {
                Some(idx) => string_labels.push(idx),
                None => {
                    string_labels.push(labels.len());
                    labels.push(s);
                }
            }
        }
        let distances = square_form(&pairwise_string_distances(&labels))?;
        Ok(Self {
            k: labels.len(),
            distances,
            string_labels,
        })
    }

    /// Condensed string-distance sequence under a label-to-row assignment.
    ///
    /// `assignment[l]` is the matrix row currently playing the role of
    /// label `l`. The identity assignment reproduces the veridical
    /// distances.
    fn condensed_under(&self, assignment: &[usize]) -> Vec<f64> {
        let n = self.string_labels.len();
        let mut out = Vec::with_capacity(condensed_len(n));
        for i in 0..n {
            let row = assignment[self.string_labels[i]];
            for j in (i + 1)..n {
                let col = assignment[self.string_labels[j]];
                out.push(self.distances[row][col]);
            }
        }
        out
    }
}

/// Residualized covariance between the meaning residuals and a condensed
/// string-distance sequence.
fn covariance(meaning_residuals: &[f64], string_distances: &[f64]) -> f64 {
    let string_residuals = residualize(string_distances);
    meaning_residuals
        .iter()
        .zip(&string_residuals)
        .map(|(m, s)| m * s)
        .sum()
}

/// `K!` when it fits in `usize` and is within the budget, `None` otherwise
/// (factorial overflow counts as exceeding any budget).
fn exact_count(k: usize, perms: usize) -> Option<usize> {
    let mut total: usize = 1;
    for i in 2..=k {
        total = total.checked_mul(i)?;
        if total > perms {
            return None;
        }
    }
    (total <= perms).then_some(total)
}

/// Exact branch: enumerate every assignment of labels to matrix rows in
/// lexicographic order. The identity assignment comes first, so the
/// veridical covariance sits at index 0, consistent with the sampled
/// branch.
fn enumerate_covariances(
    labels: &LabelSpace,
    meaning_residuals: &[f64],
    total: usize,
) -> Vec<f64> {
    let mut assignment: Vec<usize> = (0..labels.k).collect();
    let mut covariances = Vec::with_capacity(total);
    loop {
        covariances.push(covariance(
            meaning_residuals,
            &labels.condensed_under(&assignment),
        ));
        if !next_permutation(&mut assignment) {
            break;
        }
    }
    debug_assert_eq!(covariances.len(), total);
    covariances
}

/// Sampled branch: the veridical assignment at index 0, then `perms - 1`
/// uniform shuffles of the label-to-row assignment.
fn sample_covariances<R: Rng>(
    labels: &LabelSpace,
    meaning_residuals: &[f64],
    perms: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut assignment: Vec<usize> = (0..labels.k).collect();
    let mut covariances = Vec::with_capacity(perms);
    covariances.push(covariance(
        meaning_residuals,
        &labels.condensed_under(&assignment),
    ));
    for _ in 1..perms {
        assignment.shuffle(rng);
        covariances.push(covariance(
            meaning_residuals,
            &labels.condensed_under(&assignment),
        ));
    }
    covariances
}

/// Advance `values` to the next lexicographic permutation in place.
/// Returns false once the final (fully descending) permutation has been
/// visited.
fn next_permutation(values: &mut [usize]) -> bool {
    if values.len() < 2 {
        return false;
    }
    let mut i = values.len() - 1;
    while i > 0 && values[i - 1] >= values[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = values.len() - 1;
    while values[j] <= values[i - 1] {
        j -= 1;
    }
    values.swap(i - 1, j);
    values[i..].reverse();
    true
}

#[cfg(test)]
mod unit {
    use super::{exact_count, next_permutation};

    #[test]
    fn exact_count_within_budget() {
        assert_eq!(exact_count(1, 1), Some(1));
        assert_eq!(exact_count(4, 1000), Some(24));
        assert_eq!(exact_count(4, 24), Some(24));
        assert_eq!(exact_count(4, 23), None);
        // 21! overflows u64; must fall through to sampling, not panic.
        assert_eq!(exact_count(25, usize::MAX), None);
    }

    #[test]
    fn permutations_enumerate_in_lexicographic_order() {
        let mut values = vec![0usize, 1, 2];
        let mut seen = vec![values.clone()];
        while next_permutation(&mut values) {
            seen.push(values.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }
}
