//! Word: the normalized unit emitted by token ingestion.

/// Axis-aligned bounding box in page pixel space; y increases downward.
///
/// Construction normalizes inverted extents so `x1 >= x0 && y1 >= y0`
/// always holds downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Vertical midpoint of the box.
    pub fn mid_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    /// Smallest box covering both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Width and height as reported by the source token.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

/// Text direction of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Writing mode of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WritingMode {
    #[default]
    Horizontal,
    Vertical,
}

/// Font and provenance metadata carried by a word.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordMetadata {
    pub font_name: String,
    pub font_size: f64,
    pub direction: Direction,
    pub has_eol: bool,
    pub page_num: usize,
    pub writing_mode: WritingMode,
}

/// A positioned text fragment, possibly a merged run of several tokens.
///
/// Words are immutable values: merging and filtering produce new `Word`s
/// rather than editing in place, so pipeline stages never alias.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// Dense per-page id, re-assigned after filtering.
    pub id: usize,
    pub text: String,
    pub bbox: BoundingBox,
    pub dimension: Dimension,
    pub metadata: WordMetadata,
}

impl Word {
    pub fn font_size(&self) -> f64 {
        self.metadata.font_size
    }

    pub fn mid_y(&self) -> f64 {
        self.bbox.mid_y()
    }
}
