//! Pairwise condensed string distances.

use super::normalized_levenshtein;

/// Normalized edit distances for every unordered pair of strings.
///
/// Pairs `(i, j)` with `i < j` are emitted in row-major upper-triangular
/// order: all pairs with `i = 0` first in increasing `j`, then `i = 1`, and
/// so on. The output length is `n * (n - 1) / 2`.
///
/// This ordering is an interface contract: it matches
/// [`square_form`](crate::squareform::square_form) and any externally
/// supplied meaning-distance sequence must follow it.
pub fn pairwise_string_distances<S: AsRef<str>>(strings: &[S]) -> Vec<f64> {
    let n = strings.len();
    let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            distances.push(normalized_levenshtein(
                strings[i].as_ref(),
                strings[j].as_ref(),
            ));
        }
    }
    distances
}
