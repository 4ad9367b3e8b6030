//! Invariant proofs for the heap engine
//!
//! Every proof runs over a small symbolic buffer, so Kani checks all possible
//! element values for that size.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use indexed_heap::storage::SliceStorage;
#[cfg(kani)]
use indexed_heap::IndexedHeap;

#[cfg(kani)]
const N: usize = 5;

/// Proof: construction establishes the heap invariant for any length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_construction_establishes_invariant() {
    let mut values: [u8; N] = kani::any();
    let length: usize = kani::any();
    kani::assume(length <= N + 2);

    let heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), length);
    assert!(heap.len() == length.min(N));
    assert!(heap.capacity() == N);
    assert!(heap.is_heap());
}

/// Proof: push keeps the invariant and grows the length by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_push_keeps_invariant() {
    let mut values: [u8; N] = kani::any();
    let length: usize = kani::any();
    kani::assume(length < N);

    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), length);
    assert!(heap.push());
    assert!(heap.len() == length + 1);
    assert!(heap.is_heap());
}

/// Proof: pop parks the maximum right behind the heap region
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_parks_maximum() {
    let mut values: [u8; N] = kani::any();
    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), N);
    let top = heap.storage()[0];

    assert!(heap.pop());
    assert!(heap.len() == N - 1);
    assert!(heap.is_heap());
    assert!(heap.storage()[N - 1] == top);
    for index in 0..N - 1 {
        assert!(heap.storage()[index] <= top);
    }
}

/// Proof: fix restores the invariant after any single overwrite
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_fix_restores_invariant() {
    let mut values: [u8; N] = kani::any();
    let index: usize = kani::any();
    kani::assume(index < N);

    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), N);
    heap.storage_mut()[index] = kani::any();
    heap.fix(index);
    assert!(heap.is_heap());
}

/// Proof: popping until empty sorts the buffer
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_drain_sorts() {
    let mut values: [u8; N] = kani::any();
    let mut heap = IndexedHeap::new(SliceStorage::max(&mut values[..]), N);
    while heap.pop() {}
    for index in 1..N {
        assert!(values[index - 1] <= values[index]);
    }
}
