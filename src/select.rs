//! Top-k selection
//!
//! Keeps the `k` highest-priority elements of a stream in O(k) space. The
//! heap is ordered by the *reversed* rule, so its root is the weakest element
//! still in the top `k`; a candidate only has to beat that root to get in.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity       |
//! |-------------------|------------------|
//! | `offer`           | O(log k)         |
//! | `weakest`         | O(1)             |
//! | `select_top_k_by` | O(n log k)       |
//! | `into_sorted_vec` | O(k log k)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::select::{select_top_k_by, TopK};
//! use indexed_heap::storage::MaxFirst;
//!
//! // Streaming: the 3rd largest value seen so far sits at the root.
//! let mut top = TopK::new(3, MaxFirst).unwrap();
//! for value in [5, 9, 12, 0, 3, 7, 4] {
//!     top.offer(value);
//! }
//! assert_eq!(top.weakest(), Some(&7));
//! assert_eq!(top.into_sorted_vec(), vec![12, 9, 7]);
//!
//! // In place: the top 3 are moved to the front of the slice.
//! let mut values = [5, 9, 12, 0, 3, 7, 4];
//! let k = select_top_k_by(&mut values, 3, MaxFirst);
//! assert_eq!(k, 3);
//! assert_eq!(values[0], 7);
//! ```

use crate::indexed::IndexedHeap;
use crate::storage::{Prioritize, Reversed, SliceStorage};
use crate::traits::HeapError;

/// Tracks the `k` highest-priority values offered so far
#[derive(Debug)]
pub struct TopK<T, P> {
    heap: IndexedHeap<SliceStorage<Vec<T>, Reversed<P>>>,
    k: usize,
}

impl<T: Clone, P: Prioritize<T>> TopK<T, P> {
    /// Creates a tracker for the `k` best values under `order`
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] if `k` is zero.
    pub fn new(k: usize, order: P) -> Result<Self, HeapError> {
        if k == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        let storage = SliceStorage::new(Vec::new(), Reversed(order));
        Ok(Self {
            heap: IndexedHeap::new(storage, 0),
            k,
        })
    }

    /// Returns the number of values kept
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing has been kept yet
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the maximum number of values kept
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the weakest kept value
    ///
    /// Once `k` values have been offered this is the k-th best value so far.
    pub fn weakest(&self) -> Option<&T> {
        self.heap.top().map(|index| &self.heap.storage()[index])
    }

    /// Offers a candidate
    ///
    /// Returns true if the candidate is now among the kept values. A candidate
    /// that only ties the weakest kept value is rejected.
    pub fn offer(&mut self, value: T) -> bool {
        let length = self.heap.len();
        if length < self.k {
            if self.heap.is_full() {
                // Grow like `GrowableHeap::push`, but never past `k` slots.
                let capacity = length.saturating_mul(2).saturating_add(1).min(self.k);
                self.heap.storage_mut().get_mut().resize(capacity, value);
                self.heap.rebuild(length + 1);
                return true;
            }
            self.heap.storage_mut()[length] = value;
            return self.heap.push();
        }
        let storage = self.heap.storage();
        // Reversed rule: the candidate is better if the root "precedes" it.
        if !storage.order().precedes(&storage[0], &value) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(k = self.k, "replacing weakest top-k value");
        self.heap.storage_mut()[0] = value;
        self.heap.fix(0);
        true
    }

    /// Releases the kept values, best first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let kept = self.heap.len();
        while self.heap.pop() {}
        // Popping under the reversed rule leaves the weakest value last.
        let mut values = self.heap.into_inner().into_inner();
        values.truncate(kept);
        values
    }
}

impl<T: Clone, P: Prioritize<T>> Extend<T> for TopK<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

/// Moves the `k` highest-priority elements of `data` to its front
///
/// After the call `data[..k]` holds the top `k` elements as a heap under the
/// reversed rule, so `data[0]` is the k-th best element. The remaining
/// elements are left in `data[k..]` in unspecified order; nothing is cloned
/// or dropped. Returns the effective `k`, which is clamped to `data.len()`.
pub fn select_top_k_by<T, P: Prioritize<T>>(data: &mut [T], k: usize, order: P) -> usize {
    let k = k.min(data.len());
    if k == 0 {
        return 0;
    }
    let mut heap = IndexedHeap::new(SliceStorage::new(&mut *data, Reversed(order)), k);
    for candidate in k..heap.capacity() {
        let storage = heap.storage();
        if storage.order().precedes(&storage[0], &storage[candidate]) {
            heap.storage_mut().swap(0, candidate);
            heap.fix(0);
        }
    }
    k
}
