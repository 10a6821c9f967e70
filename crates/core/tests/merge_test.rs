//! Tests for the word merger: continuation rules, bullet exception, skip
//! rules and EOL flushing over realistic token sequences.

use reflow_core::merge::merge_words;
use reflow_core::model::{
    BoundingBox, Dimension, Direction, Word, WordMetadata, WritingMode,
};

fn word(text: &str, x0: f64, y0: f64, x1: f64, y1: f64, font_size: f64) -> Word {
    Word {
        id: 0,
        text: text.to_string(),
        bbox: BoundingBox::new(x0, y0, x1, y1),
        dimension: Dimension {
            width: x1 - x0,
            height: y1 - y0,
        },
        metadata: WordMetadata {
            font_name: "Helvetica".to_string(),
            font_size,
            direction: Direction::Ltr,
            has_eol: false,
            page_num: 0,
            writing_mode: WritingMode::Horizontal,
        },
    }
}

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(|w| w.text.as_str()).collect()
}

// ============================================================================
// Continuation rules
// ============================================================================

#[test]
fn adjacent_fragments_merge_with_union_bbox() {
    let merged = merge_words(vec![
        word("Hel", 0.0, 0.0, 10.0, 10.0, 10.0),
        word("lo", 10.0, 0.0, 20.0, 10.0, 10.0),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text, "Hello");
    assert_eq!(merged[0].bbox.x0, 0.0);
    assert_eq!(merged[0].bbox.x1, 20.0);
}

#[test]
fn a_full_sentence_assembles_across_fragments() {
    let merged = merge_words(vec![
        word("The", 0.0, 0.0, 20.0, 12.0, 12.0),
        word("quick", 24.0, 0.0, 54.0, 12.0, 12.0),
        word("fox", 58.0, 0.0, 76.0, 12.0, 12.0),
    ]);
    assert_eq!(texts(&merged), ["The quick fox"]);
}

#[test]
fn horizontal_gap_beyond_font_size_splits() {
    // Second fragment starts more than one font-size past the group edge.
    let merged = merge_words(vec![
        word("left", 0.0, 0.0, 20.0, 10.0, 10.0),
        word("right", 31.0, 0.0, 50.0, 10.0, 10.0),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn vertical_band_mismatch_splits() {
    // Token on the next visual row: group midline not inside its span.
    let merged = merge_words(vec![
        word("above", 0.0, 0.0, 20.0, 10.0, 10.0),
        word("below", 0.0, 12.0, 20.0, 22.0, 10.0),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn group_font_size_sticks_once_established() {
    let merged = merge_words(vec![
        word("first", 0.0, 0.0, 20.0, 10.0, 10.0),
        word("second", 22.0, 0.0, 40.0, 10.0, 10.005),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].metadata.font_size, 10.0);
}

// ============================================================================
// Bullet exception
// ============================================================================

#[test]
fn bullet_absorbs_distant_text_on_its_line() {
    // Far outside the horizontal window and a different font size; the
    // single-character list marker continues anyway.
    let bullet = word("\u{2022}", 0.0, 2.0, 4.0, 8.0, 8.0);
    let item = word("Item one", 40.0, 0.0, 90.0, 12.0, 12.0);
    let merged = merge_words(vec![bullet, item]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].metadata.font_size, 12.0);
}

#[test]
fn dash_marker_also_triggers_the_exception() {
    let merged = merge_words(vec![
        word("-", 0.0, 2.0, 4.0, 8.0, 8.0),
        word("entry", 40.0, 0.0, 70.0, 12.0, 12.0),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text, "- entry");
}

#[test]
fn multi_character_group_gets_no_exception() {
    let merged = merge_words(vec![
        word("--", 0.0, 2.0, 8.0, 8.0, 8.0),
        word("entry", 40.0, 0.0, 70.0, 12.0, 12.0),
    ]);
    assert_eq!(merged.len(), 2);
}

// ============================================================================
// Skip rules and EOL flushing
// ============================================================================

#[test]
fn zero_font_size_space_tokens_are_skipped() {
    let mut ghost = word(" ", 0.0, 0.0, 5.0, 10.0, 0.0);
    ghost.metadata.font_size = 0.0;
    let merged = merge_words(vec![ghost, word("real", 0.0, 0.0, 20.0, 10.0, 10.0)]);
    assert_eq!(texts(&merged), ["real"]);
}

#[test]
fn eol_terminated_group_rejects_continuation() {
    let mut lead = word("line one", 0.0, 0.0, 40.0, 10.0, 10.0);
    lead.metadata.has_eol = true;
    let next = word("line two", 42.0, 0.0, 80.0, 10.0, 10.0);
    let merged = merge_words(vec![lead, next]);
    assert_eq!(texts(&merged), ["line one", "line two"]);
}

#[test]
fn eol_on_merged_token_flushes_the_run() {
    let mut tail = word("end.", 22.0, 0.0, 40.0, 10.0, 10.0);
    tail.metadata.has_eol = true;
    let merged = merge_words(vec![
        word("The", 0.0, 0.0, 20.0, 10.0, 10.0),
        tail,
        word("Fresh", 0.0, 0.0, 25.0, 10.0, 10.0),
    ]);
    assert_eq!(texts(&merged), ["The end.", "Fresh"]);
}
