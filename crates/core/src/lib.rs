//! reflow - geometric text layout reconstruction.
//!
//! Takes the unordered positioned text fragments produced by an external
//! document decoder or OCR engine and rebuilds the page: reading order,
//! merged word runs, lines, compact line projections, header/footer
//! filtering, and a scanned-vs-digital classification.
//!
//! The binary parsing, rendering and recognition that produce the fragments
//! live in external collaborators; they feed this crate through the
//! [`ingest::TokenSource`] adapter.

pub mod api;
pub mod assemble;
pub mod classify;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod params;
pub mod reorder;
pub mod utils;

pub use api::{
    LayoutBuilder, compact_lines_for_document, extract_document, is_scanned, lines_for_document,
    process_page, process_recognized_words,
};
pub use assemble::CompactLineAlgorithm;
pub use error::{LayoutError, Result};
pub use ingest::{PageBounds, RawToken, TokenSource};
pub use model::{
    BoundingBox, CompactLine, CompactWord, Dimension, Direction, DocumentText, Line, PageText,
    Word, WordMetadata, WritingMode,
};
pub use params::{LayoutOptions, ScannedThreshold};
pub use reorder::SortAlgorithm;
