//! Skew heap implementation
//!
//! A skew heap is the self-adjusting cousin of the leftist heap: same
//! heap-ordered binary tree, same merge-driven design, but no balance
//! field at all. After every step down the right spine the merge swaps the
//! node's children **unconditionally**, with no comparison and no stored npl.
//! That swap is the entire balancing mechanism: a potential-function
//! argument over right-spine lengths gives amortized O(log n) merges,
//! although any single merge can degenerate to O(n).
//!
//! `push` and `delete_min` are defined in terms of merge exactly as for
//! the leftist heap.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::MergeableHeap;
//! use mergeable_heaps::skew::SkewHeap;
//!
//! let mut heap = SkewHeap::new();
//! for k in [5, 3, 9, 1, 7, 2] {
//!     heap.push(k);
//! }
//! assert_eq!(heap.find_min(), Ok(&1));
//! ```

use crate::traits::{HeapError, MergeableHeap, PersistentMerge};
use std::mem;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn singleton(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Destructive merge of two owned trees
///
/// Same root-selection rule as the leftist merge, but after the recursive
/// step the children are always swapped: the freshly merged subtree goes
/// left, the old left subtree goes right. Amortized O(log(n + m)); a
/// single call can be linear.
fn merge_nodes<K: Ord>(a: Link<K>, b: Link<K>) -> Link<K> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(mut a), Some(mut b)) => {
            if b.key < a.key {
                mem::swap(&mut a, &mut b);
            }
            let merged = merge_nodes(a.right.take(), Some(b));
            a.right = a.left.take();
            a.left = merged;
            Some(a)
        }
    }
}

/// Deep-copies a tree without recursing, so arbitrarily deep spines
/// cannot overflow the stack (the same hazard `drop_all` avoids)
fn clone_tree<K: Clone>(link: &Link<K>) -> Link<K> {
    let mut result: Link<K> = None;
    let mut worklist: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
    if let Some(src) = link.as_deref() {
        worklist.push((src, &mut result));
    }
    while let Some((src, slot)) = worklist.pop() {
        let node = slot.insert(Box::new(Node {
            key: src.key.clone(),
            left: None,
            right: None,
        }));
        if let Some(l) = src.left.as_deref() {
            worklist.push((l, &mut node.left));
        }
        if let Some(r) = src.right.as_deref() {
            worklist.push((r, &mut node.right));
        }
    }
    result
}

/// Skew heap: a min-heap with amortized O(log n) merge and no balance data
pub struct SkewHeap<K: Ord> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord> MergeableHeap<K> for SkewHeap<K> {
    fn new() -> Self {
        Self { root: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, key: K) {
        self.root = merge_nodes(self.root.take(), Some(Node::singleton(key)));
        self.len += 1;
    }

    fn find_min(&self) -> Result<&K, HeapError> {
        self.root
            .as_deref()
            .map(|n| &n.key)
            .ok_or(HeapError::EmptyHeap)
    }

    fn delete_min(&mut self) -> Result<K, HeapError> {
        let root = self.root.take().ok_or(HeapError::EmptyHeap)?;
        let root = *root;
        self.root = merge_nodes(root.left, root.right);
        self.len -= 1;
        Ok(root.key)
    }

    fn merge(&mut self, mut other: Self) -> Result<(), HeapError> {
        self.root = merge_nodes(self.root.take(), other.root.take());
        self.len += other.len;
        other.len = 0;
        Ok(())
    }

    fn clear(&mut self) {
        self.drop_all();
        self.len = 0;
    }
}

impl<K: Ord + Clone> PersistentMerge<K> for SkewHeap<K> {
    fn merge_persistent(&self, other: &Self) -> Self {
        Self {
            root: merge_nodes(clone_tree(&self.root), clone_tree(&other.root)),
            len: self.len + other.len,
        }
    }
}

impl<K: Ord> SkewHeap<K> {
    /// Releases every node without recursing
    fn drop_all(&mut self) {
        let mut worklist = Vec::new();
        if let Some(root) = self.root.take() {
            worklist.push(root);
        }
        while let Some(mut node) = worklist.pop() {
            if let Some(l) = node.left.take() {
                worklist.push(l);
            }
            if let Some(r) = node.right.take() {
                worklist.push(r);
            }
        }
    }

    /// Verifies heap order and that the node count matches `len()`
    ///
    /// There is no per-node balance invariant to check: skew balance is an
    /// amortized property of the unconditional swap, not a stored field.
    /// Walks with an explicit worklist so deep spines cannot overflow the
    /// stack. Intended for tests; O(n).
    pub fn check_invariants(&self) -> bool {
        let mut count = 0;
        let mut worklist: Vec<&Node<K>> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            worklist.push(root);
        }
        while let Some(node) = worklist.pop() {
            count += 1;
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                if child.key < node.key {
                    return false;
                }
                worklist.push(child);
            }
        }
        count == self.len
    }
}

impl<K: Ord> Drop for SkewHeap<K> {
    fn drop(&mut self) {
        self.drop_all();
    }
}

impl<K: Ord> Default for SkewHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
