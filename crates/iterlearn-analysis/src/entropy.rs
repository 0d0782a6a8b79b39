//! Entropy of a segmented language.
//!
//! Operates on words that the caller has already segmented (segmentation
//! heuristics live upstream). Unigram entropy measures how evenly segment
//! types are used; conditional entropy measures how predictable the next
//! segment is given the previous one.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Start-of-word marker used when boundaries are requested.
pub const START: &str = "<";
/// End-of-word marker used when boundaries are requested.
pub const STOP: &str = ">";

/// Whether to wrap each word in start/stop markers before counting, so
/// word-initial and word-final transitions are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    None,
    Marked,
}

/// Relative frequency of each segment type across the language.
pub fn segment_probabilities(
    words: &[Vec<String>],
    boundary: Boundary,
) -> HashMap<String, f64> {
    let mut counts: HashMap<String, f64> = HashMap::new();
    let mut total = 0.0;
    for word in words {
        for seg in segments_of(word, boundary) {
            *counts.entry(seg.to_string()).or_insert(0.0) += 1.0;
            total += 1.0;
        }
    }
    for value in counts.values_mut() {
        *value /= total;
    }
    counts
}

/// Relative frequency of each adjacent segment pair.
pub fn bigram_probabilities(
    words: &[Vec<String>],
    boundary: Boundary,
) -> HashMap<(String, String), f64> {
    let mut counts: HashMap<(String, String), f64> = HashMap::new();
    let mut total = 0.0;
    for word in words {
        let segs = segments_of(word, boundary);
        for pair in segs.windows(2) {
            *counts
                .entry((pair[0].to_string(), pair[1].to_string()))
                .or_insert(0.0) += 1.0;
            total += 1.0;
        }
    }
    for value in counts.values_mut() {
        *value /= total;
    }
    counts
}

/// Shannon entropy in bits of a probability distribution.
///
/// Zero-probability entries are skipped; probabilities are assumed to sum
/// to 1.
pub fn shannon_entropy<K: Eq + Hash>(probabilities: &HashMap<K, f64>) -> f64 {
    probabilities
        .values()
        .filter(|p| **p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Conditional entropy `H(next | previous)` in bits over adjacent segments.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the language contains no segment
/// bigrams (all words shorter than two segments and no boundary markers).
pub fn conditional_entropy(words: &[Vec<String>], boundary: Boundary) -> AnalysisResult<f64> {
    let mut pair_counts: HashMap<(String, String), f64> = HashMap::new();
    let mut context_counts: HashMap<String, f64> = HashMap::new();
    let mut total = 0.0;
    for word in words {
        let segs = segments_of(word, boundary);
        for pair in segs.windows(2) {
            *pair_counts
                .entry((pair[0].to_string(), pair[1].to_string()))
                .or_insert(0.0) += 1.0;
            *context_counts.entry(pair[0].to_string()).or_insert(0.0) += 1.0;
            total += 1.0;
        }
    }
    if total == 0.0 {
        return Err(AnalysisError::EmptyInput {
            context: "segment bigrams",
        });
    }

    let mut h = 0.0;
    for ((x, _), joint) in &pair_counts {
        let p_xy = joint / total;
        let p_x = context_counts[x] / total;
        h -= p_xy * (p_xy / p_x).log2();
    }
    Ok(h)
}

fn segments_of<'a>(word: &'a [String], boundary: Boundary) -> Vec<&'a str> {
    let mut segs = Vec::with_capacity(word.len() + 2);
    if boundary == Boundary::Marked {
        segs.push(START);
    }
    segs.extend(word.iter().map(String::as_str));
    if boundary == Boundary::Marked {
        segs.push(STOP);
    }
    segs
}
