//! Integer similarity scores between normalized strings.
//!
//! Every score is a percentage in `0..=100`, rounded to the nearest integer
//! using integer arithmetic only.

use std::collections::BTreeSet;

/// Rounds `100 * numerator / denominator` to the nearest integer percentage.
fn percentage(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 100;
    }
    let scaled = (200 * numerator + denominator) / (2 * denominator);
    scaled.min(100) as u8
}

/// Levenshtein edit distance counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// `100 * (1 - distance / max_len)`.
pub fn levenshtein_ratio(a: &str, b: &str) -> u8 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }
    percentage(max_len - levenshtein(a, b), max_len)
}

/// `100 * shared tokens / max token count`, with whitespace-separated tokens.
pub fn token_overlap_ratio(a: &str, b: &str) -> u8 {
    let left: BTreeSet<&str> = a.split_whitespace().collect();
    let right: BTreeSet<&str> = b.split_whitespace().collect();

    let max_tokens = left.len().max(right.len());
    if max_tokens == 0 {
        return 0;
    }
    percentage(left.intersection(&right).count(), max_tokens)
}

/// Ratio of the shorter to the longer string when one contains the other.
///
/// # Returns
/// - `Some(u8)` - `100 * shorter / longer` in chars
/// - `None` - Neither string contains the other, or either is empty
pub fn containment_ratio(a: &str, b: &str) -> Option<u8> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if !a.contains(b) && !b.contains(a) {
        return None;
    }
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    Some(percentage(a_len.min(b_len), a_len.max(b_len)))
}

/// Best of the Levenshtein and token overlap ratios.
pub fn similarity(a: &str, b: &str) -> u8 {
    levenshtein_ratio(a, b).max(token_overlap_ratio(a, b))
}
