//! Text normalization: whitespace, letter-spacing and repeated-pattern
//! cleanup applied to surviving words when not in raw mode.
//!
//! Total over all inputs and idempotent; every precondition failure falls
//! back to the whitespace-collapsed input.

use once_cell::sync::Lazy;
use regex::Regex;

/// A string that is entirely single uppercase letters separated by spaces,
/// e.g. "A B C" rendered with letter-spacing.
static SPACED_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]\s)+[A-Z]$").expect("valid pattern"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Normalizes one word's text.
pub fn normalize(text: &str) -> String {
    let mut s = WHITESPACE_RUN.replace_all(text, " ").into_owned();

    if SPACED_LETTERS.is_match(s.trim()) {
        s.retain(|c| !c.is_whitespace());
    }

    s = remove_duplicates(&s);
    s.trim().to_string()
}

/// Collapses words that fully decompose into repeats of a short unit, e.g.
/// "catcat dogdog" to "cat dog".
///
/// All-or-nothing over the whole string: if any word fails to decompose the
/// input comes back unchanged (modulo whitespace collapse).
fn remove_duplicates(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ").trim().to_string();
    if collapsed.is_empty() {
        return collapsed;
    }

    let words: Vec<&str> = collapsed.split(' ').filter(|w| !w.is_empty()).collect();
    let mut exemplars: Vec<&str> = Vec::with_capacity(words.len());

    for word in &words {
        // Candidate unit starts as the word's first three characters.
        let Some((unit_end, _)) = word.char_indices().nth(3) else {
            return collapsed;
        };
        let candidate = &word[..unit_end];
        let rest = &word[unit_end..];

        let Some(next_occurrence) = rest.find(candidate) else {
            return collapsed;
        };
        let pattern = &word[..unit_end + next_occurrence];

        if !is_repeated_pattern(word, pattern) {
            return collapsed;
        }
        exemplars.push(pattern);
    }

    exemplars.join(" ")
}

/// Whether `word` consists of repeats of `pattern`, allowing the final
/// repeat to be truncated at the word boundary.
fn is_repeated_pattern(word: &str, pattern: &str) -> bool {
    if word.len() < pattern.len() * 2 {
        return false;
    }
    if !word.starts_with(pattern) || !word[pattern.len()..].starts_with(pattern) {
        return false;
    }

    let mut pos = 0;
    while pos < word.len() {
        let remaining = &word[pos..];
        if remaining.len() >= pattern.len() {
            if remaining.starts_with(pattern) {
                pos += pattern.len();
            } else {
                // A leftover tail is fine only if it is a prefix of the unit.
                return pattern.starts_with(remaining);
            }
        } else {
            return pattern.starts_with(remaining);
        }
    }

    true
}
