//! Header/footer filtering and per-word text cleanup.

use tracing::debug;

use crate::model::Word;
use crate::normalize::normalize;
use crate::params::LayoutOptions;

/// Corner tolerance, in pixels, for treating two tokens as the same glyph
/// run painted twice.
const FAKE_BOLD_TOLERANCE: f64 = 1.0;

/// Drops words in excluded vertical bands and re-assigns dense ids.
///
/// Words with a zero font size are always dropped. Band exclusion keeps
/// only words strictly past the thresholds: `y0 > header` and
/// `y0 < footer`, so a word exactly on a threshold belongs to the excluded
/// region. Unless in raw mode each survivor's text is normalized.
pub fn filter_words(words: Vec<Word>, page_height: f64, options: &LayoutOptions) -> Vec<Word> {
    let header_threshold = page_height * options.header_from_height_percentage;
    let footer_threshold = page_height * options.footer_from_height_percentage;

    let total = words.len();
    let filtered: Vec<Word> = words
        .into_iter()
        .filter(|word| {
            let has_font_size = word.metadata.font_size != 0.0;
            let after_header = word.bbox.y0 > header_threshold;
            let before_footer = word.bbox.y0 < footer_threshold;

            has_font_size
                && (!options.exclude_header || after_header)
                && (!options.exclude_footer || before_footer)
        })
        .enumerate()
        .map(|(id, word)| {
            let text = if options.raw {
                word.text
            } else {
                normalize(&word.text)
            };
            Word { id, text, ..word }
        })
        .collect();

    debug!(
        total,
        survivors = filtered.len(),
        "filtered header/footer bands"
    );
    filtered
}

/// Drops duplicate glyph runs painted for fake-bold emphasis.
///
/// Some generators emulate bold by painting the same string twice at a
/// sub-pixel offset; after sorting, the copies sit adjacent. A token is
/// dropped when its text matches the previous retained token's and every
/// bbox corner is within one pixel of it.
pub fn remove_fake_bold(words: Vec<Word>) -> Vec<Word> {
    let mut result: Vec<Word> = Vec::with_capacity(words.len());

    for word in words {
        let duplicate = result.last().is_some_and(|prev: &Word| {
            prev.text == word.text
                && (prev.bbox.x0 - word.bbox.x0).abs() <= FAKE_BOLD_TOLERANCE
                && (prev.bbox.y0 - word.bbox.y0).abs() <= FAKE_BOLD_TOLERANCE
                && (prev.bbox.x1 - word.bbox.x1).abs() <= FAKE_BOLD_TOLERANCE
                && (prev.bbox.y1 - word.bbox.y1).abs() <= FAKE_BOLD_TOLERANCE
        });

        if !duplicate {
            result.push(word);
        }
    }

    result
}
