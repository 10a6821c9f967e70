//! Canonical data model for reconstructed text layout.
//!
//! One `Word`/`Line` model serves every token provenance; backend
//! differences stay behind the ingestion adapter.

pub mod line;
pub mod page;
pub mod word;

pub use line::{CompactLine, CompactWord, Line};
pub use page::{DocumentText, PageText};
pub use word::{BoundingBox, Dimension, Direction, Word, WordMetadata, WritingMode};
