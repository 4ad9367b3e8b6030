//! In-place Binary Heaps over Caller-owned Storage
//!
//! This crate provides a binary heap engine that does not own its elements.
//! It maintains the heap invariant over the first `len` slots of any storage
//! that can compare and swap two positions, and leaves everything else (where
//! the elements live, how they are written, whether the buffer ever grows) to
//! the caller.
//!
//! # Features
//!
//! - **IndexedHeap**: the engine. O(n) construction, O(log n) `push`, `pop`
//!   and `fix`, zero allocation
//! - **SliceStorage**: ready-made storage over `&mut [T]`, `Vec<T>` or
//!   `Box<[T]>` with an element-level priority rule
//! - **GrowableHeap**: owning priority queue that grows by rebuilding
//! - **TopK** / **select_top_k_by**: bounded top-k selection
//! - **KWayMerge**: merge of several sorted batches
//! - **heapsort**: in-place sort built from `push` and `pop`
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedHeap;
//! use indexed_heap::storage::SliceStorage;
//!
//! let mut slots = [0u32; 4];
//! let mut heap = IndexedHeap::new(SliceStorage::max(&mut slots[..]), 0);
//!
//! for value in [7, 42, 19] {
//!     let free = heap.len();
//!     heap.storage_mut()[free] = value;
//!     assert!(heap.push());
//! }
//! assert_eq!(heap.storage()[0], 42);
//!
//! // Raise a priority in place, then let the heap catch up.
//! heap.storage_mut()[2] = 99;
//! heap.fix(2);
//! assert_eq!(heap.storage()[0], 99);
//! ```

pub mod growable;
pub mod indexed;
pub mod merge;
pub mod select;
pub mod sort;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use growable::GrowableHeap;
pub use indexed::IndexedHeap;
pub use traits::{HeapError, HeapStorage};
