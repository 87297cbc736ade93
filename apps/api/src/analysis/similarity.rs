//! Edit-distance based fuzzy equality.

use crate::analysis::text::normalize;

/// Minimum similarity ratio accepted by [`fuzzy_match`].
pub const DEFAULT_THRESHOLD: f64 = 0.80;

/// Strings longer than this (in chars) may match by containment alone.
const CONTAINMENT_MIN_LEN: usize = 5;

/// `1 - levenshtein / max_len` over Unicode scalar values, in [0, 1].
/// Two empty strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Returns true on the first candidate that matches `word`.
///
/// Both sides are normalized. A candidate matches when it is equal, when the
/// longer-than-five-chars side is contained in the other, or when the
/// similarity ratio reaches `threshold`.
#[allow(dead_code)] // raw-text entry point; the scorers pass tokenizer output
pub fn fuzzy_match_with_threshold<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    threshold: f64,
) -> bool {
    let word = normalize(word);
    candidates
        .iter()
        .any(|candidate| matches_normalized(&word, &normalize(candidate.as_ref()), threshold))
}

#[allow(dead_code)]
pub fn fuzzy_match<S: AsRef<str>>(word: &str, candidates: &[S]) -> bool {
    fuzzy_match_with_threshold(word, candidates, DEFAULT_THRESHOLD)
}

/// [`fuzzy_match`] for inputs that are already normalized, such as tokenizer
/// output. Skips the per-candidate normalize pass.
pub fn fuzzy_match_normalized(word: &str, candidates: &[String]) -> bool {
    candidates
        .iter()
        .any(|candidate| matches_normalized(word, candidate, DEFAULT_THRESHOLD))
}

fn matches_normalized(word: &str, candidate: &str, threshold: f64) -> bool {
    if word == candidate {
        return true;
    }
    if word.chars().count() > CONTAINMENT_MIN_LEN && candidate.contains(word) {
        return true;
    }
    if candidate.chars().count() > CONTAINMENT_MIN_LEN && word.contains(candidate) {
        return true;
    }

    similarity_ratio(word, candidate) >= threshold
}
