//! Tests for the text normalizer: whitespace collapse, letter-spacing
//! cleanup and repeated-pattern removal.

use reflow_core::normalize::normalize;

// ============================================================================
// Whitespace and letter-spacing
// ============================================================================

#[test]
fn collapses_whitespace_runs_and_trims() {
    assert_eq!(normalize("  hello   world  "), "hello world");
    assert_eq!(normalize("hello\t\tworld"), "hello world");
}

#[test]
fn collapses_spaced_single_capitals() {
    assert_eq!(normalize("A B C"), "ABC");
    assert_eq!(normalize("S U M M A R Y"), "SUMMARY");
}

#[test]
fn leaves_ordinary_capitalized_words_alone() {
    assert_eq!(normalize("A Bigger Cat"), "A Bigger Cat");
}

// ============================================================================
// Repeated-pattern collapse
// ============================================================================

#[test]
fn collapses_duplicated_words() {
    assert_eq!(normalize("catcat dogdog"), "cat dog");
    assert_eq!(normalize("worldworldworld"), "world");
}

#[test]
fn leaves_unduplicated_text_unchanged() {
    assert_eq!(normalize("cat dog"), "cat dog");
    assert_eq!(normalize("hello world"), "hello world");
}

#[test]
fn collapse_is_all_or_nothing() {
    // "plain" has no repeat, so the duplicated word stays duplicated too.
    assert_eq!(normalize("catcat plain"), "catcat plain");
    // A word shorter than the candidate unit aborts the whole string.
    assert_eq!(normalize("catcat ab"), "catcat ab");
}

#[test]
fn truncated_final_repeat_still_collapses() {
    assert_eq!(normalize("catcatca"), "cat");
}

// ============================================================================
// Totality and idempotence
// ============================================================================

#[test]
fn never_fails_on_degenerate_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("a"), "a");
    assert_eq!(normalize("\u{2022}"), "\u{2022}");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "   ",
        "hello   world",
        "A B C",
        "catcat dogdog",
        "catcat plain",
        "S U M M A R Y",
        "one two three",
        "aaaa",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}
