//! Lexicon size and cross-generation word memory.

use std::collections::HashSet;

use crate::error::{AnalysisError, AnalysisResult};

/// Number of distinct strings in a word list.
pub fn unique_strings<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<HashSet<&str>>()
        .len()
}

/// Share of words carried over between two generations.
///
/// `|current ∩ previous| / max(|current|, |previous|)` over distinct words.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when either list is empty.
pub fn word_memory<S: AsRef<str>>(current: &[S], previous: &[S]) -> AnalysisResult<f64> {
    if current.is_empty() || previous.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "word lists",
        });
    }
    let a: HashSet<&str> = current.iter().map(AsRef::as_ref).collect();
    let b: HashSet<&str> = previous.iter().map(AsRef::as_ref).collect();
    let overlap = a.intersection(&b).count();
    Ok(overlap as f64 / a.len().max(b.len()) as f64)
}
