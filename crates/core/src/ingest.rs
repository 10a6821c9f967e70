//! Token ingestion: raw positioned tokens become `Word`s.
//!
//! The `TokenSource` trait is the narrow adapter between the pipeline and
//! whatever produced the tokens (digital extraction, OCR). Backends differ
//! only in token shape and page-numbering base.

use crate::error::{LayoutError, Result};
use crate::model::{BoundingBox, Dimension, Direction, Word, WordMetadata, WritingMode};
use crate::utils::{Matrix, mult_matrix};

/// A positioned text fragment as supplied by an external decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub text: String,
    /// Token-space affine transform; `None` when the backend failed to
    /// resolve geometry for the fragment.
    pub transform: Option<Matrix>,
    /// Glyph-run width in token space.
    pub width: f64,
    /// Glyph-run height in token space; doubles as the font size.
    pub height: f64,
    pub font_name: String,
    pub direction: Direction,
    pub has_eol: bool,
}

/// Pixel bounds and transform of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBounds {
    pub width: f64,
    pub height: f64,
    /// Page-space transform applied to every token on the page.
    pub transform: Matrix,
}

/// Adapter over a backend that can hand out tokens page by page.
///
/// Implementations exist outside this crate; the pipeline only ever sees
/// tokens and page bounds through this trait.
pub trait TokenSource {
    /// Number of pages the source exposes.
    fn page_count(&self) -> usize;

    /// Numbering base of the backend (0 for most, 1 for legacy readers).
    fn start_index(&self) -> usize {
        0
    }

    /// Pixel bounds of the given page.
    fn page_bounds(&self, page_num: usize) -> Result<PageBounds>;

    /// Raw tokens of the given page, in backend emission order.
    fn tokens(&self, page_num: usize) -> Result<Vec<RawToken>>;
}

/// Rounds a font size to 4-decimal precision.
fn round_font_size(size: f64) -> f64 {
    (size * 10_000.0).round() / 10_000.0
}

/// Normalizes one raw token into a `Word`.
///
/// Applies the page transform to obtain the absolute baseline position,
/// derives the scale factor from the ratio of transformed to source
/// x-coordinate, and rounds coordinates to integer pixels for comparison
/// stability.
pub fn ingest_token(
    page_transform: Matrix,
    token: &RawToken,
    id: usize,
    page_num: usize,
) -> Result<Word> {
    let tm = token.transform.ok_or_else(|| {
        LayoutError::InputData(format!("token {id} on page {page_num} has no transform"))
    })?;

    let (_, _, _, _, x, y) = mult_matrix(tm, page_transform);
    if !x.is_finite() || !y.is_finite() {
        return Err(LayoutError::InputData(format!(
            "token {id} on page {page_num} has non-finite position"
        )));
    }

    let scale = if tm.4 != 0.0 && (x / tm.4).is_finite() {
        x / tm.4
    } else {
        1.0
    };

    let bbox = BoundingBox::new(
        x.round(),
        (y - token.height * scale).round(),
        (x + token.width * scale).round(),
        y.round(),
    );

    Ok(Word {
        id,
        text: token.text.clone(),
        bbox,
        dimension: Dimension {
            width: token.width.round(),
            height: token.height.round(),
        },
        metadata: WordMetadata {
            font_name: token.font_name.clone(),
            font_size: round_font_size(token.height),
            direction: token.direction,
            has_eol: token.has_eol,
            page_num,
            writing_mode: WritingMode::Horizontal,
        },
    })
}

/// Normalizes a page's worth of raw tokens.
pub fn ingest_tokens(
    page_transform: Matrix,
    tokens: &[RawToken],
    page_num: usize,
) -> Result<Vec<Word>> {
    tokens
        .iter()
        .enumerate()
        .map(|(id, token)| ingest_token(page_transform, token, id, page_num))
        .collect()
}
