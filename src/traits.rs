//! Common traits for the mergeable heap engines
//!
//! This module defines the contract that all four engines implement:
//!
//! - [`MergeableHeap`]: the core priority-queue surface (push, find-min,
//!   delete-min, destructive merge)
//! - [`PersistentMerge`]: an optional non-destructive merge for engines that
//!   can deep-copy their trees cheaply enough to be worth it
//!
//! The engines store a bare totally-ordered key (`K: Ord`) rather than
//! (priority, item) pairs; a heap is a multiset of keys.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on an empty heap
    #[error("operation requires a non-empty heap")]
    EmptyHeap,
    /// Attempted to merge an array min-heap with an array max-heap
    #[error("cannot merge heaps with different order directions")]
    TypeMismatch,
}

/// Core trait for mergeable heap/priority-queue data structures
///
/// All four engines in this crate implement this trait with identical
/// observable semantics, so a test harness can run the same checks against
/// any of them by substituting the engine type.
///
/// Heaps order by minimum unless the engine is explicitly configured
/// otherwise (only [`ArrayHeap`](crate::binary::ArrayHeap) supports a
/// max-heap mode; its `find_min`/`delete_min` then return the key that is
/// first by the configured direction).
///
/// # Merge is destructive
///
/// `merge` takes the other heap by value and relinks its nodes into `self`.
/// Ownership makes the "do not touch the inputs afterwards" contract
/// statically enforced: the moved-from handle no longer exists. For a merge
/// that preserves both inputs, see [`PersistentMerge`].
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::{HeapError, MergeableHeap};
/// use mergeable_heaps::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.delete_min(), Ok(2));
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert_eq!(heap.delete_min(), Err(HeapError::EmptyHeap));
/// ```
pub trait MergeableHeap<K: Ord> {
    /// Creates a new empty heap
    ///
    /// # Time Complexity
    /// O(1)
    fn new() -> Self;

    /// Returns true if the heap contains no keys
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts one occurrence of `key`
    ///
    /// Duplicate keys are permitted and tracked as distinct entries.
    ///
    /// # Time Complexity
    /// O(log n) for all engines (amortized for the skew heap).
    fn push(&mut self, key: K);

    /// Returns a reference to the minimum key without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1) for all engines.
    fn find_min(&self) -> Result<&K, HeapError>;

    /// Removes and returns one occurrence of the current minimum
    ///
    /// Ties between equal minimum keys are broken arbitrarily, but exactly
    /// one entry is removed.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) for all engines (amortized for the skew heap).
    fn delete_min(&mut self) -> Result<K, HeapError>;

    /// Merges `other` into this heap, consuming it
    ///
    /// Afterwards `self` contains the multiset union of both heaps' keys.
    /// The other heap's nodes are relinked in place where the engine's
    /// structure allows it.
    ///
    /// # Errors
    /// [`HeapError::TypeMismatch`] if the order directions differ; only the
    /// array engine can fail this way, pointer engines are statically
    /// single-directional and always succeed. On failure `self` is
    /// unchanged, but `other` has already been consumed.
    ///
    /// # Time Complexity
    /// O(log n) for leftist and binomial, amortized O(log n) for skew,
    /// O(n + m) for the array engine (concatenate and re-heapify).
    fn merge(&mut self, other: Self) -> Result<(), HeapError>;

    /// Releases every node, leaving an empty, reusable heap
    ///
    /// Idempotent: clearing an already-empty heap is a no-op.
    fn clear(&mut self);
}

/// Non-destructive merge for engines that support it
///
/// `merge_persistent` deep-copies both inputs before merging the copies, so
/// both originals remain valid and independently usable. The copy dominates
/// the cost: O(n + m) regardless of the underlying merge bound.
///
/// Implemented by the leftist and skew engines.
pub trait PersistentMerge<K: Ord + Clone>: MergeableHeap<K> {
    /// Returns a new heap with the multiset union of both inputs' keys,
    /// leaving both inputs untouched
    fn merge_persistent(&self, other: &Self) -> Self;
}
