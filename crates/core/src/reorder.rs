//! Reading-order sorting of per-page words.

use std::cmp::Ordering;

use crate::model::Word;

/// Reading-order comparator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    /// Height-banded comparator tolerant of baseline jitter: words whose y0
    /// difference stays within half their average height count as the same
    /// visual row and order by x0.
    #[default]
    Banded,
    /// Plain lexicographic (y0, x0) ordering. Faster, less tolerant of
    /// baseline jitter.
    Simple,
}

fn banded_cmp(a: &Word, b: &Word) -> Ordering {
    let height_a = (a.bbox.y1 - a.bbox.y0).abs();
    let height_b = (b.bbox.y1 - b.bbox.y0).abs();

    let avg_height = (height_a + height_b) / 2.0;
    let threshold = avg_height * 0.5;

    let vertical_diff = (a.bbox.y0 - b.bbox.y0).abs();

    if vertical_diff <= threshold {
        a.bbox.x0.total_cmp(&b.bbox.x0)
    } else {
        a.bbox.y0.total_cmp(&b.bbox.y0)
    }
}

fn simple_cmp(a: &Word, b: &Word) -> Ordering {
    a.bbox
        .y0
        .total_cmp(&b.bbox.y0)
        .then_with(|| a.bbox.x0.total_cmp(&b.bbox.x0))
}

/// Stable insertion sort for comparators that are not total orders.
///
/// `slice::sort_by` asserts comparator consistency and panics when chained
/// comparisons contradict each other, which the banded comparator does on
/// pages mixing word heights. Insertion sort accepts any comparator;
/// per-page word counts keep the quadratic worst case acceptable.
fn insertion_sort_by(words: &mut [Word], cmp: impl Fn(&Word, &Word) -> Ordering) {
    for i in 1..words.len() {
        let mut j = i;
        while j > 0 && cmp(&words[j - 1], &words[j]) == Ordering::Greater {
            words.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts a page's words into reading order.
///
/// The banded comparator is not transitive across chained pairs, so it is
/// applied through a stable sort that tolerates inconsistent orderings
/// rather than `slice::sort_by`.
pub fn sort_words(words: &mut [Word], algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Banded => insertion_sort_by(words, banded_cmp),
        SortAlgorithm::Simple => words.sort_by(simple_cmp),
    }
}
