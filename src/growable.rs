//! Growable priority queue
//!
//! An owning wrapper that pairs a `Vec` with an [`IndexedHeap`] view over it.
//! The view has a fixed capacity; when it is full the wrapper reallocates the
//! buffer to `2 * len + 1` slots and rebuilds the view over the new buffer.
//! Rebuilding is O(n) but happens once per doubling, so pushes stay O(log n)
//! amortized.
//!
//! Unlike [`std::collections::BinaryHeap`], popped elements are not moved out:
//! they stay in the buffer right behind the heap region, and `pop` returns a
//! reference to the slot.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::GrowableHeap;
//!
//! let mut heap = GrowableHeap::max(vec![5, 9, 12]);
//! for value in [0, 3, 7, 4] {
//!     heap.push(value);
//! }
//! assert_eq!(heap.as_slice(), &[12, 9, 7, 0, 3, 5, 4]);
//!
//! let drained: Vec<i32> = heap.drain_sorted().collect();
//! assert_eq!(drained, vec![12, 9, 7, 5, 4, 3, 0]);
//! ```

use std::iter::FusedIterator;

use crate::indexed::IndexedHeap;
use crate::storage::{MaxFirst, MinFirst, Prioritize, SliceStorage};
use crate::traits::HeapError;

/// A priority queue over an owned buffer that grows by rebuilding
pub struct GrowableHeap<T, P> {
    heap: IndexedHeap<SliceStorage<Vec<T>, P>>,
}

impl<T: Clone + Ord> GrowableHeap<T, MaxFirst> {
    /// Creates a max-heap over `values`
    pub fn max(values: Vec<T>) -> Self {
        Self::new(values, MaxFirst)
    }
}

impl<T: Clone + Ord> GrowableHeap<T, MinFirst> {
    /// Creates a min-heap over `values`
    pub fn min(values: Vec<T>) -> Self {
        Self::new(values, MinFirst)
    }
}

impl<T: Clone, P: Prioritize<T>> GrowableHeap<T, P> {
    /// Creates a heap over all of `values`, ranked by `order`
    ///
    /// The initial capacity is `values.len()`.
    pub fn new(values: Vec<T>, order: P) -> Self {
        let length = values.len();
        Self {
            heap: IndexedHeap::new(SliceStorage::new(values, order), length),
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of slots in the current buffer
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the whole buffer: the heap region followed by the free slots
    pub fn as_slice(&self) -> &[T] {
        self.heap.storage()
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.top().map(|index| &self.heap.storage()[index])
    }

    /// Inserts `value`, growing the buffer if every slot is in use
    pub fn push(&mut self, value: T) {
        let length = self.heap.len();
        if self.heap.is_full() {
            let capacity = 2 * length + 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                from = self.heap.capacity(),
                to = capacity,
                "growing heap storage"
            );
            // The new slots all start as copies of `value`, so slot `length`
            // already holds it when the view is rebuilt.
            self.heap.storage_mut().get_mut().resize(capacity, value);
            self.heap.rebuild(length + 1);
            return;
        }
        self.heap.storage_mut()[length] = value;
        self.heap.push();
    }

    /// Removes the highest-priority element
    ///
    /// The element stays in the buffer at slot `len()`; the returned reference
    /// points there. Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<&T> {
        if self.heap.pop() {
            Some(&self.heap.storage()[self.heap.len()])
        } else {
            None
        }
    }

    /// Replaces the element at `index` and restores the heap order
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index` is not in `[0, len())`.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), HeapError> {
        let len = self.heap.len();
        if index >= len {
            return Err(HeapError::IndexOutOfRange { index, len });
        }
        self.heap.storage_mut()[index] = value;
        self.heap.fix(index);
        Ok(())
    }

    /// Pops every element, yielding clones in priority order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        DrainSorted { heap: self }
    }

    /// Releases the buffer
    ///
    /// Slots `[0, len())` hold the heap; popped elements follow in ascending
    /// priority order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_inner().into_inner()
    }
}

impl<T, P> std::fmt::Debug for GrowableHeap<T, P>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableHeap")
            .field("len", &self.heap.len())
            .field("capacity", &self.heap.capacity())
            .field("storage", &self.heap.storage().get_ref())
            .finish()
    }
}

/// Iterator returned by [`GrowableHeap::drain_sorted`]
pub struct DrainSorted<'a, T, P> {
    heap: &'a mut GrowableHeap<T, P>,
}

impl<T: Clone, P: Prioritize<T>> Iterator for DrainSorted<'_, T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Clone, P: Prioritize<T>> ExactSizeIterator for DrainSorted<'_, T, P> {}

impl<T: Clone, P: Prioritize<T>> FusedIterator for DrainSorted<'_, T, P> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = GrowableHeap::max(vec![5, 9, 12]);
        assert_eq!(heap.as_slice(), &[12, 9, 5]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.peek(), Some(&12));

        heap.push(0);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.capacity(), 7);

        for value in [3, 7, 4] {
            heap.push(value);
        }
        assert_eq!(heap.as_slice(), &[12, 9, 7, 0, 3, 5, 4]);

        let mut popped = Vec::new();
        while let Some(&value) = heap.pop() {
            popped.push(value);
        }
        assert_eq!(popped, vec![12, 9, 7, 5, 4, 3, 0]);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.into_vec(), vec![0, 3, 4, 5, 7, 9, 12]);
    }

    #[test]
    fn test_grow_from_empty() {
        let mut heap = GrowableHeap::min(Vec::new());
        assert_eq!(heap.capacity(), 0);
        heap.push(4);
        assert_eq!(heap.capacity(), 1);
        heap.push(2);
        assert_eq!(heap.capacity(), 3);
        heap.push(3);
        heap.push(1);
        assert_eq!(heap.capacity(), 7);
        let drained: Vec<_> = heap.drain_sorted().collect();
        assert_eq!(drained, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_push_reuses_popped_slots() {
        let mut heap = GrowableHeap::max(vec![1, 2, 3]);
        heap.pop();
        heap.pop();
        heap.push(10);
        heap.push(0);
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.peek(), Some(&10));
    }

    #[test]
    fn test_update() {
        let mut heap = GrowableHeap::max(vec![12, 9, 7, 0, 3, 5, 4]);
        assert_eq!(heap.update(0, 1), Ok(()));
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.update(6, 20), Ok(()));
        assert_eq!(heap.peek(), Some(&20));
        assert_eq!(
            heap.update(7, 1),
            Err(HeapError::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_update_outside_heap_region() {
        let mut heap = GrowableHeap::max(vec![3, 2, 1]);
        heap.pop();
        assert_eq!(
            heap.update(2, 9),
            Err(HeapError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(heap.as_slice()[2], 3);
    }

    #[test]
    fn test_drain_sorted_size_hint() {
        let mut heap = GrowableHeap::new(vec!["bb", "a", "ccc"], |a: &&str, b: &&str| {
            a.len() > b.len()
        });
        let drain = heap.drain_sorted();
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.collect::<Vec<_>>(), vec!["ccc", "bb", "a"]);
    }
}
