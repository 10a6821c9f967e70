//! Layout reconstruction parameters.
//!
//! Contains LayoutOptions for controlling pipeline behavior.

use crate::assemble::CompactLineAlgorithm;
use crate::error::{LayoutError, Result};
use crate::reorder::SortAlgorithm;

/// Minimum average words per page for a page to count as digitally authored.
pub const WORDS_PER_PAGE_THRESHOLD: usize = 30;

/// Minimum total text length for a document to count as digitally authored.
pub const TEXT_LENGTH_THRESHOLD: usize = 300;

/// Height percentage from the top of the page used to detect headers.
pub const HEADER_FROM_HEIGHT_PERCENTAGE: f64 = 0.02;

/// Height percentage from the top of the page used to detect footers.
pub const FOOTER_FROM_HEIGHT_PERCENTAGE: f64 = 0.95;

/// Word-count and text-length thresholds for scanned classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedThreshold {
    pub words_per_page: usize,
    pub text_length: usize,
}

impl Default for ScannedThreshold {
    fn default() -> Self {
        Self {
            words_per_page: WORDS_PER_PAGE_THRESHOLD,
            text_length: TEXT_LENGTH_THRESHOLD,
        }
    }
}

/// Parameters for layout reconstruction.
///
/// Controls how tokens are ordered, merged, filtered and grouped into lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Drop words inside the header band at the top of the page.
    pub exclude_header: bool,

    /// Drop words inside the footer band at the bottom of the page.
    pub exclude_footer: bool,

    /// Keep extracted text untouched: skips normalization and fake-bold
    /// de-duplication.
    pub raw: bool,

    /// Fraction of the page height, from the top, treated as the header band.
    pub header_from_height_percentage: f64,

    /// Fraction of the page height, from the top, past which words belong to
    /// the footer band.
    pub footer_from_height_percentage: f64,

    /// Fuse adjacent fragments into coherent runs. When false the merger is
    /// skipped entirely.
    pub merge_close_text_neighbor: bool,

    /// Reading-order comparator.
    pub sort_algorithm: SortAlgorithm,

    /// Grouping rule for the compact line assembler.
    pub compact_line_algorithm: CompactLineAlgorithm,

    /// Thresholds for the scanned-document classifier.
    pub scanned_threshold: ScannedThreshold,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            exclude_header: true,
            exclude_footer: true,
            raw: false,
            header_from_height_percentage: HEADER_FROM_HEIGHT_PERCENTAGE,
            footer_from_height_percentage: FOOTER_FROM_HEIGHT_PERCENTAGE,
            merge_close_text_neighbor: true,
            sort_algorithm: SortAlgorithm::Banded,
            compact_line_algorithm: CompactLineAlgorithm::MiddleY,
            scanned_threshold: ScannedThreshold::default(),
        }
    }
}

impl LayoutOptions {
    /// Checks that band percentages fall inside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.header_from_height_percentage) {
            return Err(LayoutError::InvalidArgument(format!(
                "header_from_height_percentage out of range: {}",
                self.header_from_height_percentage
            )));
        }
        if !(0.0..=1.0).contains(&self.footer_from_height_percentage) {
            return Err(LayoutError::InvalidArgument(format!(
                "footer_from_height_percentage out of range: {}",
                self.footer_from_height_percentage
            )));
        }
        Ok(())
    }
}
