//! Property-based tests using proptest
//!
//! These tests generate random key sequences and operation mixes and
//! verify that every engine maintains its invariants and the shared
//! multiset semantics.

use proptest::prelude::*;

use mergeable_heaps::binary::{ArrayHeap, HeapKind};
use mergeable_heaps::binomial::BinomialHeap;
use mergeable_heaps::leftist::LeftistHeap;
use mergeable_heaps::skew::SkewHeap;
use mergeable_heaps::{MergeableHeap, PersistentMerge};

/// Test that the reported minimum always matches a reference model under
/// a random mix of pushes and deletes
fn test_push_delete_invariant<H: MergeableHeap<i32>>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut model: Vec<i32> = Vec::new();

    for (should_delete, key) in ops {
        if should_delete && !heap.is_empty() {
            let deleted = heap.delete_min().unwrap();
            let pos = model.iter().position(|&k| k == deleted);
            prop_assert!(pos.is_some(), "deleted key {} was never inserted", deleted);
            model.remove(pos.unwrap());
        } else {
            heap.push(key);
            model.push(key);
        }

        prop_assert_eq!(heap.len(), model.len());
        match model.iter().min() {
            Some(expected) => prop_assert_eq!(heap.find_min().unwrap(), expected),
            None => prop_assert!(heap.is_empty()),
        }
    }

    Ok(())
}

/// Test that full extraction is sorted and loses or duplicates nothing
fn test_extraction_multiset<H: MergeableHeap<i32>>(keys: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    for &k in &keys {
        heap.push(k);
    }

    let mut extracted = Vec::new();
    while let Ok(k) = heap.delete_min() {
        extracted.push(k);
    }

    let mut expected = keys;
    expected.sort();
    prop_assert_eq!(extracted, expected);
    Ok(())
}

/// Test that merging two disjoint-built heaps yields the multiset union
fn test_merge_multiset<H: MergeableHeap<i32>>(
    keys1: Vec<i32>,
    keys2: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut h1 = H::new();
    for &k in &keys1 {
        h1.push(k);
    }
    let mut h2 = H::new();
    for &k in &keys2 {
        h2.push(k);
    }

    h1.merge(h2).unwrap();
    prop_assert_eq!(h1.len(), keys1.len() + keys2.len());

    let mut extracted = Vec::new();
    while let Ok(k) = h1.delete_min() {
        extracted.push(k);
    }

    let mut expected = keys1;
    expected.extend(keys2);
    expected.sort();
    prop_assert_eq!(extracted, expected);
    Ok(())
}

/// Test that persistent merge leaves both inputs fully intact
fn test_persistent_merge_non_mutation<H>(
    keys1: Vec<i32>,
    keys2: Vec<i32>,
) -> Result<(), TestCaseError>
where
    H: PersistentMerge<i32>,
{
    let mut h1 = H::new();
    for &k in &keys1 {
        h1.push(k);
    }
    let mut h2 = H::new();
    for &k in &keys2 {
        h2.push(k);
    }

    let mut merged = h1.merge_persistent(&h2);

    let mut union = Vec::new();
    while let Ok(k) = merged.delete_min() {
        union.push(k);
    }
    let mut expected_union = keys1.clone();
    expected_union.extend(keys2.iter().copied());
    expected_union.sort();
    prop_assert_eq!(union, expected_union);

    // Both originals still extract their own key sets.
    for (heap, keys) in [(&mut h1, keys1), (&mut h2, keys2)] {
        let mut extracted = Vec::new();
        while let Ok(k) = heap.delete_min() {
            extracted.push(k);
        }
        let mut expected = keys;
        expected.sort();
        prop_assert_eq!(extracted, expected);
    }
    Ok(())
}

proptest! {
    // Array binary heap

    #[test]
    fn array_push_delete_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_delete_invariant::<ArrayHeap<i32>>(ops)?;
    }

    #[test]
    fn array_extraction_multiset(keys in prop::collection::vec(-100i32..100, 0..100)) {
        test_extraction_multiset::<ArrayHeap<i32>>(keys)?;
    }

    #[test]
    fn array_merge_multiset(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_merge_multiset::<ArrayHeap<i32>>(keys1, keys2)?;
    }

    #[test]
    fn array_build_from_unordered_matches_pushes(keys in prop::collection::vec(-100i32..100, 0..100)) {
        let built = ArrayHeap::from_unordered(keys.clone(), HeapKind::Min);
        prop_assert!(built.check_invariants());

        let mut pushed = ArrayHeap::new();
        for &k in &keys {
            pushed.push(k);
        }
        prop_assert_eq!(built.into_sorted_vec(), pushed.into_sorted_vec());
    }

    #[test]
    fn array_max_heap_extracts_descending(keys in prop::collection::vec(-100i32..100, 0..100)) {
        let heap = ArrayHeap::from_unordered(keys.clone(), HeapKind::Max);
        prop_assert!(heap.check_invariants());

        let extracted = heap.into_sorted_vec();
        let mut expected = keys;
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(extracted, expected);
    }

    // Leftist heap

    #[test]
    fn leftist_push_delete_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_delete_invariant::<LeftistHeap<i32>>(ops)?;
    }

    #[test]
    fn leftist_extraction_multiset(keys in prop::collection::vec(-100i32..100, 0..100)) {
        test_extraction_multiset::<LeftistHeap<i32>>(keys)?;
    }

    #[test]
    fn leftist_merge_multiset(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_merge_multiset::<LeftistHeap<i32>>(keys1, keys2)?;
    }

    #[test]
    fn leftist_persistent_merge_non_mutation(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_persistent_merge_non_mutation::<LeftistHeap<i32>>(keys1, keys2)?;
    }

    #[test]
    fn leftist_invariants_hold_after_merge(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        let mut h1 = LeftistHeap::new();
        for k in keys1 {
            h1.push(k);
            prop_assert!(h1.check_invariants());
        }
        let mut h2 = LeftistHeap::new();
        for k in keys2 {
            h2.push(k);
        }
        h1.merge(h2).unwrap();
        prop_assert!(h1.check_invariants());
    }

    // Skew heap

    #[test]
    fn skew_push_delete_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_delete_invariant::<SkewHeap<i32>>(ops)?;
    }

    #[test]
    fn skew_extraction_multiset(keys in prop::collection::vec(-100i32..100, 0..100)) {
        test_extraction_multiset::<SkewHeap<i32>>(keys)?;
    }

    #[test]
    fn skew_merge_multiset(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_merge_multiset::<SkewHeap<i32>>(keys1, keys2)?;
    }

    #[test]
    fn skew_persistent_merge_non_mutation(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_persistent_merge_non_mutation::<SkewHeap<i32>>(keys1, keys2)?;
    }

    // Binomial heap

    #[test]
    fn binomial_push_delete_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_delete_invariant::<BinomialHeap<i32>>(ops)?;
    }

    #[test]
    fn binomial_extraction_multiset(keys in prop::collection::vec(-100i32..100, 0..100)) {
        test_extraction_multiset::<BinomialHeap<i32>>(keys)?;
    }

    #[test]
    fn binomial_merge_multiset(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_merge_multiset::<BinomialHeap<i32>>(keys1, keys2)?;
    }

    #[test]
    fn binomial_invariants_hold_after_merge(
        keys1 in prop::collection::vec(-100i32..100, 0..50),
        keys2 in prop::collection::vec(-100i32..100, 0..50)
    ) {
        let mut h1 = BinomialHeap::new();
        for k in keys1 {
            h1.push(k);
            prop_assert!(h1.check_invariants());
        }
        let mut h2 = BinomialHeap::new();
        for k in keys2 {
            h2.push(k);
        }
        h1.merge(h2).unwrap();
        prop_assert!(h1.check_invariants());
    }
}
