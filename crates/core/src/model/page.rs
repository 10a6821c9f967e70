//! Per-page and per-document result containers.

use std::collections::BTreeMap;

use itertools::Itertools;

use super::word::Word;

/// Finalized word set for one page plus its derived full text.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    pub words: Vec<Word>,
    pub full_text: String,
}

impl PageText {
    pub fn from_words(words: Vec<Word>) -> Self {
        let full_text = words.iter().map(|w| w.text.as_str()).join(" ");
        Self { words, full_text }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Page-keyed extraction results for a whole document.
///
/// Keys follow the source's numbering base; each page owns its entry, so
/// aggregation needs no locking.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentText {
    pub pages: BTreeMap<usize, PageText>,
}

impl DocumentText {
    pub fn page(&self, page_num: usize) -> Option<&PageText> {
        self.pages.get(&page_num)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &PageText)> {
        self.pages.iter()
    }
}
