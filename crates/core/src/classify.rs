//! Scanned-document classification.
//!
//! A page or document whose extractable text is sparse relative to the
//! configured thresholds is treated as scanned (image-only). Both checks
//! are total: zero-page and zero-word inputs classify as scanned rather
//! than faulting.

use crate::model::DocumentText;
use crate::params::ScannedThreshold;

fn count_words(text: &str) -> usize {
    text.split_whitespace().filter(|w| !w.is_empty()).count()
}

/// Classifies a whole document as scanned vs digitally authored.
pub fn is_scanned(doc: &DocumentText, threshold: ScannedThreshold) -> bool {
    let mut total_words = 0usize;
    let mut full_text_len = 0usize;

    for page in doc.pages.values() {
        total_words += count_words(&page.full_text);
        // One separator per page, matching the concatenated-text accounting.
        full_text_len += page.full_text.chars().count() + 1;
    }

    let page_count = doc.page_count();
    let average_words_per_page = if page_count == 0 {
        0.0
    } else {
        total_words as f64 / page_count as f64
    };

    average_words_per_page < threshold.words_per_page as f64
        || full_text_len < threshold.text_length
}

/// Classifies a single page's text as scanned vs digitally authored.
pub fn is_page_scanned(page_text: &str, threshold: ScannedThreshold) -> bool {
    let words = count_words(page_text);
    let text_len = page_text.chars().count();

    (words as f64) < threshold.words_per_page as f64 || text_len < threshold.text_length
}
