//! In-place insertion sort over a dataset
//!
//! Quadratic, stable, no allocation. Inputs here are small hand-made files.

use crate::config::SortOrder;
use crate::dataset::Dataset;
use std::cmp::Ordering;

/// Compare two items, flipping the result for descending order
#[inline]
fn compare<T: Ord>(a: &T, b: &T, order: SortOrder) -> Ordering {
    let cmp = a.cmp(b);
    match order {
        SortOrder::Ascending => cmp,
        SortOrder::Descending => cmp.reverse(),
    }
}

/// Sort `items` in place. Each element is shifted left past every
/// predecessor that belongs after it; equal elements keep their order.
pub fn insertion_sort<T: Ord>(items: &mut [T], order: SortOrder) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1], order) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sort a dataset with the comparator of its item kind
pub fn sort_dataset(dataset: &mut Dataset, order: SortOrder) {
    match dataset {
        Dataset::Integers(items) => insertion_sort(items, order),
        // str ordering is byte-wise UTF-8, i.e. code point order
        Dataset::Texts(items) => insertion_sort(items, order),
    }
}
