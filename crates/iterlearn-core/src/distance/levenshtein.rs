//! Levenshtein edit distance over Unicode scalar values.

/// Compute the Levenshtein edit distance between two strings.
///
/// The minimum number of single-character insertions, deletions, and
/// substitutions needed to transform `a` into `b`, computed with the
/// standard dynamic-programming recurrence. Operates on Unicode scalar
/// values, not bytes, so multi-byte characters count as one edit.
///
/// Runs in `O(len_a * len_b)` time and `O(min(len_a, len_b))` space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the shorter string on the inner dimension.
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

    if a.is_empty() {
        return b.len();
    }

    // Single rolling row keeps memory at O(len_a).
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, &cb) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &ca) in a.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Normalized Levenshtein distance: edit distance divided by the character
/// length of the longer string.
///
/// Lies in `[0, 1]`: zero iff the strings are equal, 1.0 when exactly one
/// string is empty. Two empty strings are treated as identical (0.0) rather
/// than dividing by zero.
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longer as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("gato", "gato"), 0);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn symmetric() {
        for (a, b) in [("wuki", "wukolo"), ("", "x"), ("miwn", "nwim")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
            assert_eq!(normalized_levenshtein(a, b), normalized_levenshtein(b, a));
        }
    }

    #[test]
    fn normalized_bounds() {
        assert_eq!(normalized_levenshtein("abc", "abc"), 0.0);
        assert_eq!(normalized_levenshtein("", "abc"), 1.0);
        assert_eq!(normalized_levenshtein("", ""), 0.0);

        let d = normalized_levenshtein("kapa", "kapu");
        assert!((d - 0.25).abs() < 1e-12);
    }

    #[test]
    fn multibyte_characters_count_once() {
        // One substitution, not several byte edits.
        assert_eq!(levenshtein("ŋaʃu", "ŋatu"), 1);
        assert!((normalized_levenshtein("ŋaʃu", "ŋatu") - 0.25).abs() < 1e-12);
    }
}
