//! Array-backed binary heap implementation
//!
//! The baseline engine: a complete binary tree encoded in a flat vector,
//! with no structural sharing. This is the only engine that can be
//! configured as either a min-heap or a max-heap at construction time.
//!
//! # Index arithmetic
//!
//! For a 0-based index `i`:
//! - parent: `(i - 1) / 2`
//! - left child: `2 * i + 1`
//! - right child: `2 * i + 2`
//!
//! The vector never contains gaps; every index below `len` is live.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `delete_min`      | O(log n)   |
//! | `find_min`        | O(1)       |
//! | `from_unordered`  | O(n)       |
//! | `merge`           | O(n + m)   |
//!
//! `merge` concatenates the two backing vectors and re-heapifies with
//! Floyd's algorithm, so it costs O(n + m) rather than the O(m log(n + m))
//! of pushing one side's keys into the other.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::MergeableHeap;
//! use mergeable_heaps::binary::{ArrayHeap, HeapKind};
//!
//! let mut heap = ArrayHeap::from_unordered(vec![5, 3, 8, 1], HeapKind::Max);
//! assert_eq!(heap.delete_min(), Ok(8)); // "min" means top of the configured order
//! assert_eq!(heap.delete_min(), Ok(5));
//! ```

use crate::traits::{HeapError, MergeableHeap};

/// Order direction of an [`ArrayHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// The smallest key is at the root
    Min,
    /// The largest key is at the root
    Max,
}

/// An array-backed binary heap, min- or max-ordered
///
/// The [`MergeableHeap`] methods are named for the min-heap case; on a
/// [`HeapKind::Max`] heap, `find_min`/`delete_min` operate on the key that
/// comes first by the configured direction, i.e. the maximum.
///
/// Only heaps of matching kind can be merged; a mismatched merge fails with
/// [`HeapError::TypeMismatch`].
#[derive(Debug, Clone)]
pub struct ArrayHeap<K: Ord> {
    data: Vec<K>,
    kind: HeapKind,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

impl<K: Ord> MergeableHeap<K> for ArrayHeap<K> {
    /// Creates an empty min-heap; use [`ArrayHeap::with_kind`] for a max-heap
    fn new() -> Self {
        Self::with_kind(HeapKind::Min)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    fn find_min(&self) -> Result<&K, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    fn delete_min(&mut self) -> Result<K, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    fn merge(&mut self, mut other: Self) -> Result<(), HeapError> {
        if self.kind != other.kind {
            return Err(HeapError::TypeMismatch);
        }
        self.data.append(&mut other.data);
        self.heapify();
        Ok(())
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<K: Ord> ArrayHeap<K> {
    /// Creates an empty heap with the given order direction
    pub fn with_kind(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    /// Creates an empty heap with a preallocated backing vector
    pub fn with_capacity(capacity: usize, kind: HeapKind) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            kind,
        }
    }

    /// Builds a heap from unordered keys in O(n)
    ///
    /// Runs Floyd's heapify: sift-down from the last internal node
    /// (`parent(len - 1)`) back to the root. This is the linear-time
    /// construction, not n pushes.
    pub fn from_unordered(keys: Vec<K>, kind: HeapKind) -> Self {
        let mut heap = Self { data: keys, kind };
        heap.heapify();
        heap
    }

    /// Returns the order direction of this heap
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the capacity of the backing vector
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drains the heap into a vector ordered by the configured direction
    /// (ascending for a min-heap, descending for a max-heap)
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(key) = self.delete_min() {
            out.push(key);
        }
        out
    }

    /// True if `a` comes before `b` in the configured order
    #[inline]
    fn outranks(&self, a: &K, b: &K) -> bool {
        match self.kind {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }

    /// Restores the heap property over the whole vector in O(n)
    fn heapify(&mut self) {
        let n = self.data.len();
        if n > 1 {
            for i in (0..=parent(n - 1)).rev() {
                self.sift_down(i);
            }
        }
    }

    /// Moves the key at `idx` up until its parent outranks it
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let p = parent(idx);
            if self.outranks(&self.data[idx], &self.data[p]) {
                self.data.swap(idx, p);
                idx = p;
            } else {
                break;
            }
        }
    }

    /// Moves the key at `idx` down, always swapping with the
    /// higher-priority child, until neither child outranks it
    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let l = left(idx);
            let r = right(idx);
            let mut best = idx;
            if l < n && self.outranks(&self.data[l], &self.data[best]) {
                best = l;
            }
            if r < n && self.outranks(&self.data[r], &self.data[best]) {
                best = r;
            }
            if best != idx {
                self.data.swap(idx, best);
                idx = best;
            } else {
                break;
            }
        }
    }

    /// Verifies the heap-order invariant over the whole vector
    ///
    /// Intended for tests; O(n).
    pub fn check_invariants(&self) -> bool {
        (1..self.data.len()).all(|i| !self.outranks(&self.data[i], &self.data[parent(i)]))
    }
}

impl<K: Ord> Default for ArrayHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
