//! Line types derived from finalized per-page word sets.

use itertools::Itertools;

use super::word::{BoundingBox, Word};
use crate::utils::INF_F64;

/// A horizontally-ordered group of words sharing a vertical band.
///
/// Derived once per page from a finalized word set and never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub text: String,
    pub bbox: BoundingBox,
    pub average_font_size: f64,
    /// Member words, x0-ascending.
    pub words: Vec<Word>,
}

impl Line {
    /// Builds a line from its member words: sorts by x0, takes the covering
    /// bbox, the mean font size, and the space-joined text.
    pub fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));

        let mut x0 = INF_F64;
        let mut y0 = INF_F64;
        let mut x1 = -INF_F64;
        let mut y1 = -INF_F64;
        let mut font_total = 0.0;
        for word in &words {
            x0 = x0.min(word.bbox.x0);
            y0 = y0.min(word.bbox.y0);
            x1 = x1.max(word.bbox.x1);
            y1 = y1.max(word.bbox.y1);
            font_total += word.metadata.font_size;
        }

        if words.is_empty() {
            return Self {
                text: String::new(),
                bbox: BoundingBox::default(),
                average_font_size: 0.0,
                words,
            };
        }

        Self {
            text: words.iter().map(|w| w.text.as_str()).join(" "),
            bbox: BoundingBox::new(x0, y0, x1, y1),
            average_font_size: font_total / words.len() as f64,
            words,
        }
    }
}

/// Reduced word projection carrying only text and geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactWord {
    pub text: String,
    pub bbox: BoundingBox,
}

impl From<&Word> for CompactWord {
    fn from(word: &Word) -> Self {
        Self {
            text: word.text.clone(),
            bbox: word.bbox,
        }
    }
}

/// Reduced line projection carrying only text and geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactLine {
    pub text: String,
    pub bbox: BoundingBox,
    /// Member words, x0-ascending.
    pub words: Vec<CompactWord>,
}

impl CompactLine {
    pub fn from_words(mut words: Vec<CompactWord>) -> Self {
        words.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));

        let mut x0 = INF_F64;
        let mut y0 = INF_F64;
        let mut x1 = -INF_F64;
        let mut y1 = -INF_F64;
        for word in &words {
            x0 = x0.min(word.bbox.x0);
            y0 = y0.min(word.bbox.y0);
            x1 = x1.max(word.bbox.x1);
            y1 = y1.max(word.bbox.y1);
        }

        if words.is_empty() {
            return Self {
                text: String::new(),
                bbox: BoundingBox::default(),
                words,
            };
        }

        Self {
            text: words.iter().map(|w| w.text.as_str()).join(" "),
            bbox: BoundingBox::new(x0, y0, x1, y1),
            words,
        }
    }
}
