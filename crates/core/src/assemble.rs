//! Line assembly: groups words into vertical bands.
//!
//! Words are tested against existing line groups in order; the scan is
//! O(words x lines) per page, which is acceptable at per-page word counts
//! in the hundreds.

use crate::model::{CompactLine, CompactWord, Line, PageText, Word};
use crate::utils::INF_F64;

/// Grouping rule for the compact line assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactLineAlgorithm {
    /// A word joins the first line whose current vertical midpoint falls
    /// inside the word's span. Same rule as the full assembler.
    #[default]
    MiddleY,
    /// Legacy rule: a word joins the first line whose *first* member's y0
    /// is within a fixed tolerance of the word's y0. The anchor never
    /// updates as members are added.
    Y0,
}

/// Fixed y0 tolerance of the legacy compact algorithm, in pixels.
const Y0_TOLERANCE: f64 = 5.0;

/// Vertical span of a group's members so far.
fn group_span<T>(group: &[T], y0: impl Fn(&T) -> f64, y1: impl Fn(&T) -> f64) -> (f64, f64) {
    let mut min_y0 = INF_F64;
    let mut max_y1 = -INF_F64;
    for member in group {
        min_y0 = min_y0.min(y0(member));
        max_y1 = max_y1.max(y1(member));
    }
    (min_y0, max_y1)
}

fn group_by_middle_y<T: Clone>(
    words: &[T],
    y0: impl Fn(&T) -> f64 + Copy,
    y1: impl Fn(&T) -> f64 + Copy,
) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = Vec::new();

    for word in words {
        let mut appended = false;

        for group in &mut groups {
            let (min_y0, max_y1) = group_span(group, y0, y1);
            let mid_y = (min_y0 + max_y1) / 2.0;

            if y0(word) <= mid_y && y1(word) >= mid_y {
                group.push(word.clone());
                appended = true;
                break;
            }
        }

        if !appended {
            groups.push(vec![word.clone()]);
        }
    }

    groups
}

/// Groups a page's words into `Line`s in reading order.
pub fn assemble_lines(words: &[Word]) -> Vec<Line> {
    group_by_middle_y(words, |w| w.bbox.y0, |w| w.bbox.y1)
        .into_iter()
        .map(Line::from_words)
        .collect()
}

/// Groups compact word projections into `CompactLine`s.
pub fn assemble_compact_lines(
    words: &[CompactWord],
    algorithm: CompactLineAlgorithm,
) -> Vec<CompactLine> {
    let groups = match algorithm {
        CompactLineAlgorithm::MiddleY => {
            group_by_middle_y(words, |w| w.bbox.y0, |w| w.bbox.y1)
        }
        CompactLineAlgorithm::Y0 => group_by_first_y0(words),
    };

    groups.into_iter().map(CompactLine::from_words).collect()
}

/// Legacy grouping: anchor to the first member's y0 and never update it.
fn group_by_first_y0(words: &[CompactWord]) -> Vec<Vec<CompactWord>> {
    let mut groups: Vec<Vec<CompactWord>> = Vec::new();

    for word in words {
        let group = groups
            .iter_mut()
            .find(|g| (g[0].bbox.y0 - word.bbox.y0).abs() <= Y0_TOLERANCE);

        match group {
            Some(group) => group.push(word.clone()),
            None => groups.push(vec![word.clone()]),
        }
    }

    groups
}

/// Convenience: lines for one page's finalized words.
pub fn lines_for_page(page: &PageText) -> Vec<Line> {
    assemble_lines(&page.words)
}

/// Convenience: compact lines for one page's finalized words.
pub fn compact_lines_for_page(
    page: &PageText,
    algorithm: CompactLineAlgorithm,
) -> Vec<CompactLine> {
    let compact: Vec<CompactWord> = page.words.iter().map(CompactWord::from).collect();
    assemble_compact_lines(&compact, algorithm)
}
