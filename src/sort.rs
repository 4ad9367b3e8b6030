//! In-place heapsort
//!
//! Sorting uses the two-region layout of [`IndexedHeap`] directly: the first
//! half of the slice is turned into a heap, the second half is adopted one
//! element at a time with `push`, and then every `pop` parks the current
//! highest-priority element right behind the shrinking heap. When the heap is
//! empty the slice is sorted with the highest-priority element last.
//!
//! No allocation happens and only [`slice::swap`] moves elements.
//!
//! # Time Complexity
//!
//! O(n log n) comparisons and swaps, O(1) extra space. The sort is not stable.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::sort::{heapsort, heapsort_by_key};
//!
//! let mut values = [5, 9, 12, 0, 3, 7, 4];
//! heapsort(&mut values);
//! assert_eq!(values, [0, 3, 4, 5, 7, 9, 12]);
//!
//! let mut words = ["ccc", "a", "bb"];
//! heapsort_by_key(&mut words, |word| word.len());
//! assert_eq!(words, ["a", "bb", "ccc"]);
//! ```

use crate::indexed::IndexedHeap;
use crate::storage::{MaxFirst, Prioritize, SliceStorage};

/// Sorts `data` in ascending order
pub fn heapsort<T: Ord>(data: &mut [T]) {
    heapsort_by(data, MaxFirst);
}

/// Sorts `data` so that priority under `order` ascends from the front
///
/// The element that `order` ranks highest ends up last.
pub fn heapsort_by<T, P: Prioritize<T>>(data: &mut [T], order: P) {
    let staged = data.len() / 2;
    let mut heap = IndexedHeap::new(SliceStorage::new(data, order), staged);
    while heap.push() {}
    debug_assert!(heap.is_full());
    while heap.pop() {}
}

/// Sorts `data` in ascending order of `key`
pub fn heapsort_by_key<T, K, F>(data: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heapsort_by(data, |a: &T, b: &T| key(a) > key(b));
}
