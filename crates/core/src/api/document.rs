//! Per-page pipeline and per-document fan-out.
//!
//! The per-page pipeline is fully sequential; pages are mutually
//! independent and processed on a rayon pool. Each page owns its entry in
//! the result map, so aggregation is race-free without locks.

use std::collections::BTreeMap;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::assemble::{CompactLineAlgorithm, compact_lines_for_page, lines_for_page};
use crate::classify;
use crate::error::{LayoutError, Result};
use crate::filter::{filter_words, remove_fake_bold};
use crate::ingest::{RawToken, TokenSource, ingest_tokens};
use crate::merge::merge_words;
use crate::model::{CompactLine, DocumentText, Line, PageText, Word};
use crate::params::LayoutOptions;
use crate::reorder::sort_words;
use crate::utils::Matrix;

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Runs the full per-page pipeline over one page's raw tokens.
///
/// Ingests, sorts into reading order, de-duplicates fake-bold runs (unless
/// raw), merges close neighbors (unless disabled) and filters excluded
/// bands.
pub fn process_page(
    tokens: &[RawToken],
    page_transform: Matrix,
    page_height: f64,
    page_num: usize,
    options: &LayoutOptions,
) -> Result<PageText> {
    let mut words = ingest_tokens(page_transform, tokens, page_num)?;
    sort_words(&mut words, options.sort_algorithm);

    if !options.raw {
        words = remove_fake_bold(words);
    }

    let words = if options.merge_close_text_neighbor {
        merge_words(words)
    } else {
        words
    };

    let words = filter_words(words, page_height, options);
    Ok(PageText::from_words(words))
}

/// Re-enters the pipeline with already-positioned words, e.g. lines
/// recognized by an OCR engine.
///
/// The merge, filter, line and classification stages are agnostic to token
/// provenance; only ingestion and ordering are skipped.
pub fn process_recognized_words(
    words: Vec<Word>,
    page_height: f64,
    options: &LayoutOptions,
) -> PageText {
    let words = if options.merge_close_text_neighbor {
        merge_words(words)
    } else {
        words
    };

    let words = filter_words(words, page_height, options);
    PageText::from_words(words)
}

fn process_source_page<S: TokenSource>(
    source: &S,
    page_num: usize,
    options: &LayoutOptions,
) -> Result<PageText> {
    let bounds = source.page_bounds(page_num)?;
    let tokens = source.tokens(page_num)?;
    debug!(page = page_num, tokens = tokens.len(), "processing page");
    process_page(&tokens, bounds.transform, bounds.height, page_num, options)
}

/// Reconstructs every page of a token source.
///
/// Pages fan out one task each onto a rayon pool. A failing page is
/// isolated: it contributes an empty `PageText` and a warning, leaving the
/// other pages untouched. Page keys honor the source's numbering base.
pub fn extract_document<S: TokenSource + Sync>(
    source: &S,
    options: &LayoutOptions,
) -> Result<DocumentText> {
    options.validate()?;

    let start = source.start_index();
    let page_count = source.page_count();

    let pool = ThreadPoolBuilder::new()
        .num_threads(default_thread_count())
        .build()
        .map_err(|e| LayoutError::ThreadPool(e.to_string()))?;

    let mut results: Vec<(usize, PageText)> = pool.install(|| {
        (start..start + page_count)
            .into_par_iter()
            .map(|page_num| {
                let page = match process_source_page(source, page_num, options) {
                    Ok(page) => page,
                    Err(err) => {
                        warn!(page = page_num, error = %err, "page failed; substituting empty result");
                        PageText::default()
                    }
                };
                (page_num, page)
            })
            .collect()
    });

    results.sort_by_key(|(page_num, _)| *page_num);
    Ok(DocumentText {
        pages: results.into_iter().collect(),
    })
}

/// Groups each page's words into lines.
pub fn lines_for_document(doc: &DocumentText) -> BTreeMap<usize, Vec<Line>> {
    doc.pages
        .iter()
        .map(|(&page_num, page)| (page_num, lines_for_page(page)))
        .collect()
}

/// Groups each page's words into compact lines using the given algorithm.
pub fn compact_lines_for_document(
    doc: &DocumentText,
    algorithm: CompactLineAlgorithm,
) -> BTreeMap<usize, Vec<CompactLine>> {
    doc.pages
        .iter()
        .map(|(&page_num, page)| (page_num, compact_lines_for_page(page, algorithm)))
        .collect()
}

/// Classifies the document as scanned vs digitally authored using the
/// thresholds configured in `options`.
pub fn is_scanned(doc: &DocumentText, options: &LayoutOptions) -> bool {
    classify::is_scanned(doc, options.scanned_threshold)
}
