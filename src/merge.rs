//! K-way merge of sorted batches
//!
//! Each input batch is already sorted with its highest-priority element first.
//! The merge keeps one [`BatchCursor`] per batch in a heap ordered by the
//! cursors' current heads, so the global best head is always at position 0.
//! Emitting an element advances that cursor and re-settles it with
//! [`IndexedHeap::fix`]. An exhausted cursor ranks below every live one, so it
//! sinks out of the way; once the root cursor is exhausted, all of them are.
//!
//! # Time Complexity
//!
//! With `k` batches and `n` elements in total: O(k) to set up, O(log k) per
//! emitted element.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::merge::merge_sorted_by;
//! use indexed_heap::storage::MaxFirst;
//!
//! let a = [9, 6, 5];
//! let b = [8, 7];
//! let c = [10, 1];
//! let merged: Vec<i32> = merge_sorted_by([&a[..], &b[..], &c[..]], MaxFirst)
//!     .copied()
//!     .collect();
//! assert_eq!(merged, vec![10, 9, 8, 7, 6, 5, 1]);
//! ```

use std::iter::FusedIterator;

use crate::indexed::IndexedHeap;
use crate::storage::{Prioritize, SliceStorage};

/// Read position within one sorted batch
#[derive(Debug, Clone)]
pub struct BatchCursor<'a, T> {
    batch: &'a [T],
    position: usize,
}

impl<'a, T> BatchCursor<'a, T> {
    /// Creates a cursor at the start of `batch`
    pub fn new(batch: &'a [T]) -> Self {
        Self { batch, position: 0 }
    }

    /// Returns the element under the cursor
    pub fn head(&self) -> Option<&'a T> {
        self.batch.get(self.position)
    }

    /// Moves past the current element
    pub fn advance(&mut self) {
        if self.position < self.batch.len() {
            self.position += 1;
        }
    }

    /// Returns true if every element has been read
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.batch.len()
    }

    /// Returns the number of unread elements
    pub fn remaining(&self) -> usize {
        self.batch.len() - self.position
    }
}

/// Ranks cursors by their heads; exhausted cursors rank last
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadOrder<P>(P);

impl<'a, T, P: Prioritize<T>> Prioritize<BatchCursor<'a, T>> for HeadOrder<P> {
    fn precedes(&self, a: &BatchCursor<'a, T>, b: &BatchCursor<'a, T>) -> bool {
        match (a.head(), b.head()) {
            (Some(a), Some(b)) => self.0.precedes(a, b),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

/// Iterator over the elements of several sorted batches in priority order
///
/// Created by [`merge_sorted_by`] or [`KWayMerge::new`].
#[derive(Debug)]
pub struct KWayMerge<'a, T, P> {
    heap: IndexedHeap<SliceStorage<Vec<BatchCursor<'a, T>>, HeadOrder<P>>>,
    remaining: usize,
}

impl<'a, T, P: Prioritize<T>> KWayMerge<'a, T, P> {
    /// Merges `batches`, each sorted with its highest-priority element first
    /// under `order`
    ///
    /// Batches that are not sorted still yield every element exactly once, but
    /// in no particular order.
    pub fn new<I>(batches: I, order: P) -> Self
    where
        I: IntoIterator<Item = &'a [T]>,
    {
        let cursors: Vec<_> = batches.into_iter().map(BatchCursor::new).collect();
        let remaining = cursors.iter().map(BatchCursor::remaining).sum();
        let length = cursors.len();
        Self {
            heap: IndexedHeap::new(SliceStorage::new(cursors, HeadOrder(order)), length),
            remaining,
        }
    }

    /// Returns the number of batches being merged
    pub fn batches(&self) -> usize {
        self.heap.len()
    }

    /// Returns the next element without consuming it
    pub fn peek(&self) -> Option<&'a T> {
        self.heap
            .top()
            .and_then(|index| self.heap.storage()[index].head())
    }
}

impl<'a, T, P: Prioritize<T>> Iterator for KWayMerge<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.heap.top()?;
        let cursor = &mut self.heap.storage_mut()[index];
        let Some(head) = cursor.head() else {
            #[cfg(feature = "tracing")]
            tracing::trace!(batches = self.heap.len(), "all batches exhausted");
            return None;
        };
        cursor.advance();
        self.heap.fix(index);
        self.remaining -= 1;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, P: Prioritize<T>> ExactSizeIterator for KWayMerge<'a, T, P> {}

impl<'a, T, P: Prioritize<T>> FusedIterator for KWayMerge<'a, T, P> {}

/// Merges batches sorted with their highest-priority element first
pub fn merge_sorted_by<'a, T, P, I>(batches: I, order: P) -> KWayMerge<'a, T, P>
where
    P: Prioritize<T>,
    I: IntoIterator<Item = &'a [T]>,
{
    KWayMerge::new(batches, order)
}
