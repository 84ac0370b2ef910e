//! Leftist heap implementation
//!
//! A leftist heap is a heap-ordered binary tree balanced by null path
//! length (NPL): the shortest distance from a node to a missing child.
//! Every node keeps `npl(left) >= npl(right)`, which forces the right
//! spine to be short, at most log2(n + 1) nodes, so the structural merge
//! that walks only right spines runs in O(log n) worst case.
//!
//! Merge is the sole primitive. Insert merges a singleton into the heap;
//! delete-min removes the root and merges its two subtrees.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `delete_min`        | O(log n)   |
//! | `find_min`          | O(1)       |
//! | `merge`             | O(log n)   |
//! | `merge_persistent`  | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::{MergeableHeap, PersistentMerge};
//! use mergeable_heaps::leftist::LeftistHeap;
//!
//! let mut a = LeftistHeap::new();
//! a.push(1);
//! a.push(4);
//! let mut b = LeftistHeap::new();
//! b.push(2);
//! b.push(3);
//!
//! a.merge(b).unwrap();
//! assert_eq!(a.delete_min(), Ok(1));
//! assert_eq!(a.delete_min(), Ok(2));
//! ```

use crate::traits::{HeapError, MergeableHeap, PersistentMerge};
use std::mem;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    /// Null path length: 1 + npl of the right child, with npl(None) = -1
    npl: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn singleton(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            npl: 0,
            left: None,
            right: None,
        })
    }
}

#[inline]
fn npl<K>(link: &Link<K>) -> i32 {
    link.as_deref().map_or(-1, |n| n.npl)
}

/// Destructive merge of two owned trees
///
/// Takes ownership of both inputs and returns ownership of the result; no
/// aliasing survives the call. Picks the smaller root, recurses down its
/// right spine, then swaps children wherever the leftist property would be
/// violated and recomputes the npl. Recursion depth is the combined right
/// spine length, O(log(n + m)).
fn merge_nodes<K: Ord>(a: Link<K>, b: Link<K>) -> Link<K> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(mut a), Some(mut b)) => {
            if b.key < a.key {
                mem::swap(&mut a, &mut b);
            }
            a.right = merge_nodes(a.right.take(), Some(b));
            if npl(&a.left) < npl(&a.right) {
                mem::swap(&mut a.left, &mut a.right);
            }
            a.npl = 1 + npl(&a.right);
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
            npl: src.npl,
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

/// Leftist heap: a min-heap with O(log n) worst-case merge
pub struct LeftistHeap<K: Ord> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord> MergeableHeap<K> for LeftistHeap<K> {
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

impl<K: Ord + Clone> PersistentMerge<K> for LeftistHeap<K> {
    fn merge_persistent(&self, other: &Self) -> Self {
        Self {
            root: merge_nodes(clone_tree(&self.root), clone_tree(&other.root)),
            len: self.len + other.len,
        }
    }
}

impl<K: Ord> LeftistHeap<K> {
    /// Releases every node without recursing, so arbitrarily deep left
    /// spines cannot overflow the stack during teardown
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

    /// Verifies heap order, the leftist property `npl(left) >= npl(right)`,
    /// stored-npl consistency, and that the node count matches `len()`
    ///
    /// Every check is local to a node and its children's stored npl
    /// values, which pins the npl of the whole tree inductively from the
    /// leaves up, so an explicit worklist suffices and no recursion depth
    /// is needed. Intended for tests; O(n).
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
            if npl(&node.left) < npl(&node.right) {
                return false;
            }
            if node.npl != 1 + npl(&node.right) {
                return false;
            }
        }
        count == self.len
    }
}

impl<K: Ord> Drop for LeftistHeap<K> {
    fn drop(&mut self) {
        self.drop_all();
    }
}

impl<K: Ord> Default for LeftistHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
