//! Slice-backed storage with element-level priority rules
//!
//! Most callers keep their elements in a slice, a `Vec` or a boxed slice and
//! rank them by comparing two elements. This module provides that adapter so
//! the position-level [`HeapStorage`] operations don't have to be written by
//! hand:
//!
//! - [`Prioritize`]: element-level strict priority ("`a` comes before `b`")
//! - [`MaxFirst`], [`MinFirst`]: priority by `Ord`
//! - [`Reversed`]: flips any rule, e.g. to keep the *weakest* element on top
//! - [`SliceStorage`]: any `DerefMut<Target = [T]>` buffer plus a rule
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedHeap;
//! use indexed_heap::storage::SliceStorage;
//!
//! // Borrowed storage: the caller keeps ownership of the array.
//! let mut scores = [0.4, 2.5, 1.0];
//! let by_score = |a: &f64, b: &f64| a > b;
//! let heap = IndexedHeap::new(SliceStorage::new(&mut scores[..], by_score), 3);
//! assert_eq!(heap.storage()[0], 2.5);
//!
//! // Owned storage: the heap carries the vector around.
//! let heap = IndexedHeap::new(SliceStorage::min(vec![3, 1, 2]), 3);
//! assert_eq!(heap.storage()[0], 1);
//! ```

use std::ops::{Deref, DerefMut};

use crate::traits::HeapStorage;

/// Element-level priority rule
///
/// `precedes(a, b)` returns true if `a` has strictly higher priority than `b`.
/// The rule must be a strict weak ordering: irreflexive and transitive.
///
/// Any `Fn(&T, &T) -> bool` closure is a rule.
pub trait Prioritize<T: ?Sized> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Prioritize<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Larger values first (a max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Prioritize<T> for MaxFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smaller values first (a min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Prioritize<T> for MinFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The opposite of the wrapped rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<P>(pub P);

impl<T: ?Sized, P: Prioritize<T>> Prioritize<T> for Reversed<P> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}

/// A contiguous buffer ranked by an element-level rule
///
/// `B` is anything that dereferences to a mutable slice: `&mut [T]` to borrow
/// the caller's storage, `Vec<T>` or `Box<[T]>` to own it. The storage derefs
/// to `[T]`, which is how callers stage elements before
/// [`push`](crate::IndexedHeap::push) or change them before
/// [`fix`](crate::IndexedHeap::fix).
#[derive(Debug, Clone)]
pub struct SliceStorage<B, P> {
    data: B,
    order: P,
}

impl<B, P> SliceStorage<B, P> {
    /// Wraps `data`, ranking its elements with `order`
    pub fn new(data: B, order: P) -> Self {
        Self { data, order }
    }

    /// Returns the underlying buffer
    #[inline]
    pub fn get_ref(&self) -> &B {
        &self.data
    }

    /// Returns the underlying buffer mutably
    ///
    /// Resizing the buffer changes the number of slots. A heap over this
    /// storage must then be rebuilt with
    /// [`IndexedHeap::rebuild`](crate::IndexedHeap::rebuild).
    #[inline]
    pub fn get_mut(&mut self) -> &mut B {
        &mut self.data
    }

    /// Returns the priority rule
    #[inline]
    pub fn order(&self) -> &P {
        &self.order
    }

    /// Releases the buffer
    pub fn into_inner(self) -> B {
        self.data
    }

    /// Releases the buffer and the rule
    pub fn into_parts(self) -> (B, P) {
        (self.data, self.order)
    }
}

impl<B> SliceStorage<B, MaxFirst> {
    /// Wraps `data` with larger values first
    pub fn max(data: B) -> Self {
        Self::new(data, MaxFirst)
    }
}

impl<B> SliceStorage<B, MinFirst> {
    /// Wraps `data` with smaller values first
    pub fn min(data: B) -> Self {
        Self::new(data, MinFirst)
    }
}

impl<T, B, P> HeapStorage for SliceStorage<B, P>
where
    B: DerefMut<Target = [T]>,
    P: Prioritize<T>,
{
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.order.precedes(&self.data[i], &self.data[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}

impl<T, B, P> Deref for SliceStorage<B, P>
where
    B: Deref<Target = [T]>,
{
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, B, P> DerefMut for SliceStorage<B, P>
where
    B: DerefMut<Target = [T]>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
