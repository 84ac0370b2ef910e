//! Binomial heap implementation
//!
//! A binomial heap is a forest of binomial trees kept as a singly-linked
//! root list in strictly increasing rank order, with at most one tree per
//! rank. A tree of rank k has exactly 2^k nodes, height k, and a root with
//! exactly k children of ranks k-1, k-2, ..., 0. The forest shape is
//! the binary representation of the element count, and `merge` is binary
//! addition: merge the two rank-sorted root lists, then run a single
//! left-to-right pass linking adjacent equal-rank trees with carry
//! propagation.
//!
//! # Memory model
//!
//! Strong references flow from roots downward (`child`, `sibling`); the
//! `parent` back-reference is a [`Weak`] that is never used to free memory
//! and is cleared whenever a node becomes a root. A cached weak pointer to
//! the minimum root gives O(1) `find_min`; it is rebuilt by an O(log n)
//! root scan after any operation that can move the minimum.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push`       | O(log n)   |
//! | `delete_min` | O(log n)   |
//! | `find_min`   | O(1)       |
//! | `merge`      | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::MergeableHeap;
//! use mergeable_heaps::binomial::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! for k in [5, 2, 8, 1, 4, 7, 9] {
//!     heap.push(k);
//! }
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert_eq!(heap.delete_min(), Ok(1));
//! assert_eq!(heap.find_min(), Ok(&2));
//! ```

use crate::traits::{HeapError, MergeableHeap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Type alias for a strong node reference
type NodeRef<K> = Rc<RefCell<Node<K>>>;
/// Type alias for an optional strong node reference
type NodePtr<K> = Option<NodeRef<K>>;
/// Type alias for a weak node reference (parent backlinks and the min cache)
type WeakNodeRef<K> = Weak<RefCell<Node<K>>>;

struct Node<K> {
    key: K,
    /// Number of children; a rank-k root heads a tree of exactly 2^k nodes
    rank: usize,
    /// Weak back-reference, None while the node is a root
    parent: Option<WeakNodeRef<K>>,
    /// First child; children are linked highest rank first
    child: NodePtr<K>,
    /// Next root in the root list, or next child in a child list
    sibling: NodePtr<K>,
}

/// Binomial heap: a min-heap with O(log n) worst-case merge
pub struct BinomialHeap<K: Ord> {
    /// Root list in strictly increasing rank order
    head: NodePtr<K>,
    /// Cached minimum root for O(1) find_min
    min: Option<WeakNodeRef<K>>,
    len: usize,
}

/// Links two trees of equal rank into one tree of rank + 1
///
/// The larger-or-equal-keyed root becomes the new first child of the
/// other, which preserves heap order and the descending-rank child list.
fn link<K: Ord>(a: NodeRef<K>, b: NodeRef<K>) -> NodeRef<K> {
    let a_wins = a.borrow().key <= b.borrow().key;
    let (parent, child) = if a_wins { (a, b) } else { (b, a) };
    {
        let mut c = child.borrow_mut();
        let mut p = parent.borrow_mut();
        c.parent = Some(Rc::downgrade(&parent));
        c.sibling = p.child.take();
        p.child = Some(Rc::clone(&child));
        p.rank += 1;
    }
    parent
}

/// Detaches a sibling-linked list into a vector of standalone roots
fn take_roots<K>(head: NodePtr<K>) -> Vec<NodeRef<K>> {
    let mut roots = Vec::new();
    let mut current = head;
    while let Some(node) = current {
        current = node.borrow_mut().sibling.take();
        roots.push(node);
    }
    roots
}

/// Stable ascending merge of two rank-sorted root vectors
fn merge_by_rank<K>(a: Vec<NodeRef<K>>, b: Vec<NodeRef<K>>) -> Vec<NodeRef<K>> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();
    loop {
        match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => {
                if x.borrow().rank <= y.borrow().rank {
                    out.extend(a.next());
                } else {
                    out.extend(b.next());
                }
            }
            (Some(_), None) => out.extend(a.next()),
            (None, Some(_)) => out.extend(b.next()),
            (None, None) => break,
        }
    }
    out
}

/// Single left-to-right carry-propagation pass over a rank-sorted root
/// vector, leaving at most one tree of each rank
///
/// Adjacent equal-rank trees are linked unless the tree after them shares
/// the same rank: in that case the first is left in place so the latter
/// two link on the next iteration, exactly as in binary addition.
fn coalesce<K: Ord>(mut roots: Vec<NodeRef<K>>) -> Vec<NodeRef<K>> {
    let mut i = 0;
    while i + 1 < roots.len() {
        let r0 = roots[i].borrow().rank;
        let r1 = roots[i + 1].borrow().rank;
        let r2 = roots.get(i + 2).map(|n| n.borrow().rank);
        if r0 != r1 || r2 == Some(r0) {
            i += 1;
        } else {
            let b = roots.remove(i + 1);
            let a = roots.remove(i);
            roots.insert(i, link(a, b));
            // Stay at i: the linked tree may need to carry again.
        }
    }
    roots
}

/// Rebuilds the sibling links of a rank-sorted root vector, clearing
/// parent backlinks, and returns the new list head
fn relink<K>(roots: Vec<NodeRef<K>>) -> NodePtr<K> {
    let mut head: NodePtr<K> = None;
    for node in roots.into_iter().rev() {
        {
            let mut n = node.borrow_mut();
            n.parent = None;
            n.sibling = head.take();
        }
        head = Some(node);
    }
    head
}

impl<K: Ord> MergeableHeap<K> for BinomialHeap<K> {
    fn new() -> Self {
        Self {
            head: None,
            min: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts by merging a singleton rank-0 tree into the forest, like
    /// adding 1 to a binary number
    fn push(&mut self, key: K) {
        let node = Rc::new(RefCell::new(Node {
            key,
            rank: 0,
            parent: None,
            child: None,
            sibling: None,
        }));
        self.merge_forest(Some(node));
        self.len += 1;
        self.refresh_min();
    }

    fn find_min(&self) -> Result<&K, HeapError> {
        let min_rc = self
            .min
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(HeapError::EmptyHeap)?;
        // SAFETY: the returned reference is tied to &self. The node is kept
        // alive by a strong reference from the root list, which cannot
        // change while self is borrowed, and RefCell contents do not move.
        let node_ptr = min_rc.as_ptr();
        unsafe { Ok(&(*node_ptr).key) }
    }

    /// Unlinks the minimum root, reverses its child list (highest rank
    /// first) into a new ascending root list with cleared parent links,
    /// and merges that list back into the remaining forest
    fn delete_min(&mut self) -> Result<K, HeapError> {
        if self.head.is_none() {
            return Err(HeapError::EmptyHeap);
        }

        let mut roots = take_roots(self.head.take());
        let mut min_idx = 0;
        for i in 1..roots.len() {
            if roots[i].borrow().key < roots[min_idx].borrow().key {
                min_idx = i;
            }
        }
        let min_node = roots.remove(min_idx);
        self.head = relink(roots);

        let first_child = min_node.borrow_mut().child.take();
        let mut children = take_roots(first_child);
        children.reverse();
        let child_head = relink(children);
        self.merge_forest(child_head);

        self.refresh_min();
        self.len -= 1;

        // The unlinked root holds the only remaining strong reference: it
        // is out of the root list and its children have been detached.
        let node = Rc::try_unwrap(min_node)
            .ok()
            .expect("minimum root should have no other strong references")
            .into_inner();
        Ok(node.key)
    }

    fn merge(&mut self, mut other: Self) -> Result<(), HeapError> {
        self.merge_forest(other.head.take());
        self.len += other.len;
        other.len = 0;
        other.min = None;
        self.refresh_min();
        Ok(())
    }

    fn clear(&mut self) {
        self.head = None;
        self.min = None;
        self.len = 0;
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Merges another root list into this forest: sorted merge by rank,
    /// then one carry-propagation pass
    fn merge_forest(&mut self, other_head: NodePtr<K>) {
        let a = take_roots(self.head.take());
        let b = take_roots(other_head);
        let merged = merge_by_rank(a, b);
        self.head = relink(coalesce(merged));
    }

    /// Rebuilds the cached min pointer by scanning the root list
    fn refresh_min(&mut self) {
        let mut best: NodePtr<K> = None;
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            let better = match &best {
                Some(b) => node.borrow().key < b.borrow().key,
                None => true,
            };
            if better {
                best = Some(Rc::clone(&node));
            }
            cur = node.borrow().sibling.clone();
        }
        self.min = best.map(|n| Rc::downgrade(&n));
    }

    /// Verifies the full set of binomial invariants: strictly increasing
    /// root ranks, heap order within every tree, per-node rank structure
    /// (a rank-k node has children of ranks k-1 down to 0, in order, each
    /// back-referencing it), subtree sizes of exactly 2^k, root parent
    /// links cleared, and a total node count matching `len()`
    ///
    /// Intended for tests; O(n).
    pub fn check_invariants(&self) -> bool {
        // Returns the subtree node count, or None on any violation.
        fn subtree_ok<K: Ord>(node: &NodeRef<K>) -> Option<usize> {
            let rank = node.borrow().rank;
            let mut expected = rank;
            let mut count = 1usize;
            let mut cur = node.borrow().child.clone();
            while let Some(c) = cur {
                if expected == 0 {
                    return None;
                }
                expected -= 1;
                {
                    let cb = c.borrow();
                    let nb = node.borrow();
                    if cb.rank != expected {
                        return None;
                    }
                    if cb.key < nb.key {
                        return None;
                    }
                    match cb.parent.as_ref().and_then(Weak::upgrade) {
                        Some(p) if Rc::ptr_eq(&p, node) => {}
                        _ => return None,
                    }
                }
                count += subtree_ok(&c)?;
                cur = c.borrow().sibling.clone();
            }
            if expected != 0 {
                return None;
            }
            if count != 1usize << rank {
                return None;
            }
            Some(count)
        }

        let mut total = 0;
        let mut last_rank: Option<usize> = None;
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            {
                let n = node.borrow();
                if n.parent.is_some() {
                    return false;
                }
                if let Some(prev) = last_rank {
                    if n.rank <= prev {
                        return false;
                    }
                }
                last_rank = Some(n.rank);
            }
            total += match subtree_ok(&node) {
                Some(c) => c,
                None => return false,
            };
            cur = node.borrow().sibling.clone();
        }
        total == self.len
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
