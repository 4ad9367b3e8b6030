//! Indexed Binary Heap
//!
//! A binary max-heap (by the storage's priority predicate) maintained in place
//! over caller-owned, fixed-capacity storage.
//!
//! The storage is split into two regions that share one buffer:
//!
//! - `[0, len)` is the heap proper and always satisfies the heap invariant
//!   between calls
//! - `[len, capacity)` holds free slots: staging room for the next `push`, or
//!   elements already removed by `pop`, in removal order from the high end
//!
//! Because `pop` parks the removed root right behind the shrinking heap region,
//! popping until empty leaves the whole region sorted by ascending priority.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `new`     | O(n)       |
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `fix`     | O(log n)   |
//! | `top`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedHeap;
//! use indexed_heap::storage::SliceStorage;
//!
//! let mut values = [5, 9, 12, 0, 3, 7, 4];
//! let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), 3);
//! assert_eq!(heap.storage()[0], 12);
//!
//! // Slots [3, 7) are already filled, so each push just adopts the next one.
//! while heap.push() {}
//! assert_eq!(heap.len(), 7);
//!
//! while heap.pop() {}
//! assert_eq!(values, [0, 3, 4, 5, 7, 9, 12]);
//! ```

use crate::traits::HeapStorage;

/// A binary heap over the first `len` slots of a [`HeapStorage`]
///
/// The heap holds the storage `S` (which may itself be a `&mut` borrow of the
/// caller's storage) plus the logical length. It never allocates, clones or
/// constructs elements; all restructuring goes through [`HeapStorage::swap`].
///
/// Between operations the caller may write to the storage through
/// [`storage_mut`](Self::storage_mut):
///
/// - write the free slot at `len()` and then call [`push`](Self::push)
/// - overwrite a slot in `[0, len())` and then call [`fix`](Self::fix)
#[derive(Debug)]
pub struct IndexedHeap<S> {
    storage: S,
    length: usize,
    capacity: usize,
}

impl<S> IndexedHeap<S> {
    /// Returns true if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns true if every slot of the storage belongs to the heap
    #[inline]
    pub fn is_full(&self) -> bool {
        self.length == self.capacity
    }

    /// Returns the number of slots in the heap region
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the fixed number of slots in the storage
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the position of the highest-priority element, if any
    ///
    /// This is always `Some(0)` for a non-empty heap.
    #[inline]
    pub fn top(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Returns a shared reference to the storage
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a mutable reference to the storage
    ///
    /// Writes must follow the `push`/`fix` protocol to keep the heap valid.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Releases the storage
    #[inline]
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: HeapStorage> IndexedHeap<S> {
    /// Creates a heap over the first `length` slots of `storage`
    ///
    /// The capacity is the storage's current size. A `length` larger than the
    /// capacity is clamped to it. The heap invariant is established bottom-up
    /// over `[0, length)`, which costs O(n).
    pub fn new(storage: S, length: usize) -> Self {
        let mut heap = Self {
            storage,
            length: 0,
            capacity: 0,
        };
        heap.rebuild(length);
        heap
    }

    /// Re-derives the capacity from the storage and rebuilds the heap over the
    /// first `length` slots
    ///
    /// Used after the storage was reallocated through
    /// [`storage_mut`](Self::storage_mut). `length` is clamped to the new
    /// capacity.
    pub fn rebuild(&mut self, length: usize) {
        self.capacity = self.storage.len();
        self.length = length.min(self.capacity);
        for index in (0..self.length / 2).rev() {
            self.down(index);
        }
    }

    /// Adopts the element staged at slot `len()` into the heap
    ///
    /// Returns `false` without doing anything if the heap is full.
    pub fn push(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.length += 1;
        self.up(self.length - 1);
        true
    }

    /// Moves the highest-priority element to slot `len() - 1` and shrinks the
    /// heap region by one
    ///
    /// After a successful pop the removed element sits at slot `len()`.
    /// Returns `false` without doing anything if the heap is empty.
    pub fn pop(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.length -= 1;
        self.storage.swap(0, self.length);
        self.down(0);
        true
    }

    /// Restores the heap invariant after the element at `index` was changed
    ///
    /// `index` must be in `[0, len())` and every other slot of the heap region
    /// must be unchanged since the last operation.
    pub fn fix(&mut self, index: usize) {
        if !self.down(index) {
            self.up(index);
        }
    }

    /// Checks the heap invariant over `[0, len())`
    ///
    /// This is O(n) and meant for tests and debug assertions.
    pub fn is_heap(&self) -> bool {
        (1..self.length).all(|index| !self.storage.less(index, (index - 1) / 2))
    }

    /// Move the element at `begin` down until no child outranks it
    ///
    /// Returns true if the element moved.
    fn down(&mut self, begin: usize) -> bool {
        let mut index = begin;
        loop {
            let left = match index.checked_mul(2) {
                Some(double) if double + 1 < self.length => double + 1,
                _ => break,
            };
            let mut child = left;
            let right = left + 1;
            // Ties between children go left.
            if right < self.length && self.storage.less(right, left) {
                child = right;
            }
            if !self.storage.less(child, index) {
                break;
            }
            self.storage.swap(child, index);
            index = child;
        }
        index > begin
    }

    /// Move the element at `index` up while it outranks its parent
    fn up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.storage.less(index, parent) {
                break;
            }
            self.storage.swap(parent, index);
            index = parent;
        }
    }
}
