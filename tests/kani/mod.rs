//! Kani proof harnesses
//!
//! The files are organized by category:
//!
//! - `engine_proofs.rs`: invariant proofs for `IndexedHeap` operations
//! - `edge_case_proofs.rs`: empty, full and single-slot storage

#[cfg(kani)]
#[path = "edge_case_proofs.rs"]
mod edge_case_proofs;
#[cfg(kani)]
#[path = "engine_proofs.rs"]
mod engine_proofs;
