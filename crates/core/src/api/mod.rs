//! High-level reconstruction API.
//!
//! This module contains:
//! - `LayoutBuilder` for fluent configuration
//! - Per-page and per-document pipeline entry points

pub mod builder;
pub mod document;

pub use builder::LayoutBuilder;
pub use document::{
    compact_lines_for_document, extract_document, is_scanned, lines_for_document, process_page,
    process_recognized_words,
};
