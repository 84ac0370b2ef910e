//! Mergeable Priority-Queue Engines
//!
//! This crate provides four interchangeable implementations of one
//! mergeable priority-queue contract (insert, find-minimum,
//! delete-minimum, merge), each choosing a different structural invariant
//! to bound the cost of `merge`:
//!
//! - **Array Binary Heap**: complete tree in a flat vector; the baseline,
//!   with O(n + m) merge by concatenate-and-heapify; min- or max-ordered
//! - **Leftist Heap**: pointer tree balanced by null path length;
//!   O(log n) worst-case merge
//! - **Skew Heap**: pointer tree balanced by an unconditional child swap;
//!   amortized O(log n) merge with no balance field
//! - **Binomial Heap**: forest of binomial trees, one per rank; merge is
//!   binary addition with carry propagation, O(log n)
//!
//! All four implement [`MergeableHeap`] with identical observable
//! semantics over a totally-ordered key, so the same test harness runs
//! against every engine. The leftist and skew heaps additionally offer a
//! non-destructive [`PersistentMerge`].
//!
//! Empty-heap access and mismatched-direction merges surface as typed
//! [`HeapError`] values rather than aborting, so callers can branch.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::MergeableHeap;
//! use mergeable_heaps::binomial::BinomialHeap;
//!
//! let mut a = BinomialHeap::new();
//! let mut b = BinomialHeap::new();
//! a.push(3);
//! a.push(1);
//! b.push(2);
//!
//! a.merge(b).unwrap();
//! assert_eq!(a.delete_min(), Ok(1));
//! assert_eq!(a.delete_min(), Ok(2));
//! assert_eq!(a.delete_min(), Ok(3));
//! ```

pub mod binary;
pub mod binomial;
pub mod leftist;
pub mod skew;
pub mod traits;

// Re-export the main surface for convenience
pub use traits::{HeapError, MergeableHeap, PersistentMerge};
