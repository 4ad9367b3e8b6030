//! Edge case proofs for bug finding
//!
//! These proofs target the boundaries of the two-region layout:
//! - Empty storage
//! - Full storage
//! - Single slot

#[cfg(kani)]
use indexed_heap::storage::SliceStorage;
#[cfg(kani)]
use indexed_heap::IndexedHeap;

/// Proof: empty storage rejects push and pop without touching anything
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(3)]
fn verify_empty_storage() {
    let mut values: [u32; 0] = [];
    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), kani::any());
    assert!(heap.is_empty());
    assert!(heap.is_full());
    assert!(!heap.push());
    assert!(!heap.pop());
    assert!(heap.top().is_none());
}

/// Proof: a full heap rejects push and keeps its arrangement
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_full_heap_rejects_push() {
    let mut values: [u32; 3] = kani::any();
    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), 3);
    let before = [heap.storage()[0], heap.storage()[1], heap.storage()[2]];
    assert!(!heap.push());
    assert!(heap.len() == 3);
    assert!(before == [heap.storage()[0], heap.storage()[1], heap.storage()[2]]);
}

/// Proof: a single-slot heap cycles between empty and full
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_single_slot_cycle() {
    let mut values: [u32; 1] = kani::any();
    let staged = values[0];
    let mut heap = IndexedHeap::new(SliceStorage::min(&mut values[..]), 0);
    assert!(heap.push());
    assert!(heap.is_full());
    assert!(heap.top() == Some(0));
    assert!(heap.pop());
    assert!(heap.is_empty());
    assert!(heap.storage()[0] == staged);
}
