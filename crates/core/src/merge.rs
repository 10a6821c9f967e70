//! Word merging: fuses adjacent fragments into coherent runs.
//!
//! A sequential fold over the sorted word sequence with one live
//! accumulator group. Merging builds new `Word` values; the inputs are
//! consumed, never edited in place.

use crate::model::{Dimension, Word, WordMetadata};

/// Single-character markers that open an unordered list item.
const UNORDERED_LIST_MARKERS: [&str; 5] = ["\u{2022}", "-", "\u{25e6}", "\u{25aa}", "\u{25ab}"];

fn is_list_marker(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() == 1 && UNORDERED_LIST_MARKERS.contains(&trimmed)
}

/// Whether the token carries nothing worth grouping.
fn should_skip(word: &Word) -> bool {
    if word.text.is_empty() && (word.dimension.width == 0.0 || word.metadata.has_eol) {
        return true;
    }
    word.text == " " && word.metadata.font_size == 0.0 && !word.metadata.has_eol
}

fn merge_pair(group: &Word, token: &Word, bullet_lead: bool) -> Word {
    // Touching fragments (gap under one pixel) join without a space.
    let separator = if token.bbox.x0 - group.bbox.x1 < 1.0 {
        ""
    } else {
        " "
    };

    let bbox = group.bbox.union(&token.bbox);
    // Font identity sticks with the group once established; a bullet lead
    // instead adopts the font of the text that follows it.
    let (font_name, font_size) = if bullet_lead {
        (token.metadata.font_name.clone(), token.metadata.font_size)
    } else {
        (group.metadata.font_name.clone(), group.metadata.font_size)
    };

    Word {
        id: group.id,
        text: format!("{}{}{}", group.text, separator, token.text),
        bbox,
        dimension: Dimension {
            width: bbox.x1 - bbox.x0,
            height: group.dimension.height.max(token.dimension.height),
        },
        metadata: WordMetadata {
            font_name,
            font_size,
            direction: token.metadata.direction,
            has_eol: token.metadata.has_eol,
            page_num: token.metadata.page_num,
            writing_mode: token.metadata.writing_mode,
        },
    }
}

/// Merges a sorted word sequence into runs.
///
/// A token continues the live group when it stays within one font-size of
/// the group's right edge, its vertical span covers the group's midline,
/// the font sizes match, and the group is not already EOL-terminated. A
/// single-character list marker group absorbs whatever follows on its line
/// regardless of the horizontal and font checks. An EOL token flushes the
/// group immediately.
pub fn merge_words(words: Vec<Word>) -> Vec<Word> {
    let mut result: Vec<Word> = Vec::with_capacity(words.len());
    let mut group: Option<Word> = None;

    for token in words {
        if should_skip(&token) {
            continue;
        }

        let Some(current) = group.take() else {
            group = Some(token);
            continue;
        };

        let mid_y = current.bbox.mid_y();
        let within_x = token.bbox.x0 <= current.bbox.x1 + current.metadata.font_size;
        let within_y = token.bbox.y0 <= mid_y && mid_y <= token.bbox.y1;
        let same_font_size =
            (token.metadata.font_size - current.metadata.font_size).abs() < 0.01;
        let bullet_lead = within_y && is_list_marker(&current.text);

        if bullet_lead
            || (within_x && within_y && same_font_size && !current.metadata.has_eol)
        {
            group = Some(merge_pair(&current, &token, bullet_lead));
        } else {
            result.push(current);
            group = Some(token);
        }

        // An EOL input token terminates the run unconditionally.
        if let Some(flushed) = group.take_if(|g| g.metadata.has_eol) {
            result.push(flushed);
        }
    }

    if let Some(current) = group {
        result.push(current);
    }

    result
}
