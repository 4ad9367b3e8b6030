//! Common traits for position-addressed heap storage
//!
//! This module provides the capability interface the heap engine is driven by:
//!
//! - [`HeapStorage`]: a fixed-size, position-addressed sequence that can compare
//!   and swap the elements at two positions
//!
//! The heap never reads, copies or constructs elements. Everything it knows
//! about them comes through [`HeapStorage::less`], and everything it does to
//! them goes through [`HeapStorage::swap`]. This keeps the engine independent
//! of the element representation while keeping full static typing.

use std::fmt;

/// Error type for the owning heap wrappers built on top of [`IndexedHeap`]
///
/// The core engine itself never fails: `push` and `pop` report a full or empty
/// heap with a `bool`, and other misuse is the caller's responsibility.
///
/// [`IndexedHeap`]: crate::indexed::IndexedHeap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The position is not part of the heap region `[0, len)`
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The heap length at the time of the request
        len: usize,
    },
    /// A bounded structure was asked to hold zero elements
    ZeroCapacity,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is outside the heap region of length {len}")
            }
            HeapError::ZeroCapacity => {
                write!(f, "capacity must be at least one element")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Position-addressed storage a heap can be maintained over
///
/// Implementors expose a fixed number of slots and two operations on them:
/// a strict priority predicate and an exchange. Positions passed in are always
/// in `[0, len())`.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{HeapStorage, IndexedHeap};
///
/// /// Jobs ranked by their deadline, earliest first.
/// struct Deadlines(Vec<(u64, &'static str)>);
///
/// impl HeapStorage for Deadlines {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.0[i].0 < self.0[j].0
///     }
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
/// }
///
/// let jobs = Deadlines(vec![(30, "report"), (10, "deploy"), (20, "review")]);
/// let heap = IndexedHeap::new(jobs, 3);
/// assert_eq!(heap.storage().0[0], (10, "deploy"));
/// ```
pub trait HeapStorage {
    /// Returns the number of addressable slots
    ///
    /// This is the heap's capacity; it must not change while a heap is
    /// maintained over the storage unless the heap is rebuilt.
    fn len(&self) -> usize;

    /// Returns true if the storage has no slots
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the element at `i` has strictly higher priority than
    /// the element at `j`
    ///
    /// Must be a strict, transitive ordering over the current arrangement.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);
}

impl<S: HeapStorage + ?Sized> HeapStorage for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}
