#![cfg(feature = "dev")]
//! Tests for the merge/reorder family.
//!
//! These tests verify recombination, permutation, and materialization:
//! - Pairwise and N-way merges, concatenating and interleaving
//! - Split/merge round-trip laws
//! - Reverse and rotate as group actions
//! - Align preconditions, idempotence, and aliasing severance
//!
//! ## Test Organization
//!
//! 1. **Pairwise Merge**
//! 2. **N-way Merge**
//! 3. **Reverse / Rotate**
//! 4. **Align**
//! 5. **Randomized Round-trips**

use flatview::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A root view holding `0..len`.
fn seq_view(len: usize) -> ArrayView<i32> {
    let mut v = ArrayView::new(len);
    for i in 0..len {
        v.set(i, i as i32).unwrap();
    }
    v
}

fn values(v: &ArrayView<i32>) -> Vec<i32> {
    v.to_vec().into_iter().map(|o| o.unwrap()).collect()
}

// ============================================================================
// Pairwise Merge Tests
// ============================================================================

/// Test concatenation-merge restores a split_at partition.
#[test]
fn test_split_at_then_merge_restores() {
    let mut v = seq_view(8);
    let (left, right) = v.split_at(3).unwrap();
    let merged = left.merge(&right, MergeMode::Concatenate).unwrap();

    assert_eq!(merged, v);
    assert_eq!(merged.kind(), Some(ViewKind::Consecutive));
}

/// Test pairwise interleaving alternates and appends the longer tail.
#[test]
fn test_pairwise_interleave_with_tail() {
    let mut v = seq_view(8);
    let (left, right) = v.split_at(3).unwrap();
    let merged = left.merge(&right, MergeMode::Interleave).unwrap();

    assert_eq!(values(&merged), vec![0, 3, 1, 4, 2, 5, 6, 7]);
    assert_eq!(merged.kind(), Some(ViewKind::Dealt));
}

/// Test merging views over distinct buffers fails in every mode.
#[test]
fn test_merge_distinct_storages() {
    let a = seq_view(4);
    let b = seq_view(4);

    assert_eq!(
        a.merge(&b, MergeMode::Concatenate).unwrap_err(),
        ViewError::StorageMismatch
    );
    assert_eq!(
        a.merge(&b, MergeMode::Interleave).unwrap_err(),
        ViewError::StorageMismatch
    );
}

/// Test root operands contribute their implicit identity translation.
#[test]
fn test_merge_root_with_derived() {
    let v = seq_view(3);
    let reversed = v.reversed();
    let merged = v.merge(&reversed, MergeMode::Concatenate).unwrap();

    assert_eq!(values(&merged), vec![0, 1, 2, 2, 1, 0]);
}

// ============================================================================
// N-way Merge Tests
// ============================================================================

/// Test block split then N-way concatenation reconstructs the original
/// for every bucket count.
#[test]
fn test_block_split_merge_many_law() {
    for n in 1..=6 {
        let mut v = seq_view(10);
        let siblings = v.split(n, SplitMode::Block).unwrap();
        let merged = ArrayView::merge_many(&siblings, MergeMode::Concatenate).unwrap();

        assert_eq!(merged, v, "Round-trip failed for n={n}");
    }
}

/// Test dealt split then N-way interleave reconstructs the original.
#[test]
fn test_dealt_split_interleave_many_law() {
    let mut v = seq_view(10);
    let siblings = v.split(2, SplitMode::Dealt).unwrap();
    let merged = ArrayView::merge_many(&siblings, MergeMode::Interleave).unwrap();

    assert_eq!(merged, v);
}

/// Test the N-way interleave rejects unequal lengths with context.
#[test]
fn test_merge_many_interleave_unequal_lengths() {
    let mut v = seq_view(10);
    let siblings = v.split(3, SplitMode::Dealt).unwrap();

    assert_eq!(
        ArrayView::merge_many(&siblings, MergeMode::Interleave).unwrap_err(),
        ViewError::MergeLengthMismatch { expected: 4, got: 3 }
    );
}

/// Test an empty operand set is rejected.
#[test]
fn test_merge_many_empty() {
    let views: Vec<ArrayView<i32>> = Vec::new();

    assert_eq!(
        ArrayView::merge_many(&views, MergeMode::Concatenate).unwrap_err(),
        ViewError::EmptyMerge
    );
}

/// Test N-way concatenation equals the pairwise left fold.
#[test]
fn test_merge_many_concat_equals_pairwise_fold() {
    let mut v = seq_view(9);
    let siblings = v.split(3, SplitMode::Block).unwrap();

    let many = ArrayView::merge_many(&siblings, MergeMode::Concatenate).unwrap();
    let folded = siblings[0]
        .merge(&siblings[1], MergeMode::Concatenate)
        .unwrap()
        .merge(&siblings[2], MergeMode::Concatenate)
        .unwrap();

    assert_eq!(many, folded);
}

/// Test N-way merge across distinct buffers fails even when one operand
/// matches the first.
#[test]
fn test_merge_many_distinct_storages() {
    let mut a = seq_view(4);
    let (left, right) = a.split_at(2).unwrap();
    let stranger = seq_view(2);

    assert_eq!(
        ArrayView::merge_many(&[left, right, stranger], MergeMode::Concatenate).unwrap_err(),
        ViewError::StorageMismatch
    );
}

// ============================================================================
// Reverse / Rotate Tests
// ============================================================================

/// Test reversal is self-inverse, both in place and derived.
#[test]
fn test_reverse_self_inverse() {
    let original = seq_view(6);

    let double = original.reversed().reversed();
    assert_eq!(double, original);

    let mut v = seq_view(6);
    v.reverse();
    assert_eq!(v.kind(), Some(ViewKind::Reversed));
    v.reverse();
    assert_eq!(v, original);
}

/// Test rotation is a group action modulo the length.
#[test]
fn test_rotation_group_action() {
    let v = seq_view(8);

    let r2 = v.rotated(2);
    assert_eq!(values(&r2), vec![2, 3, 4, 5, 6, 7, 0, 1]);
    assert_eq!(r2.kind(), Some(ViewKind::Rotated));

    let back = r2.rotated(6);
    assert_eq!(back, v, "rotated(rotated(v, 2), 6) should restore v");
}

/// Test oversized offsets reduce modulo the length.
#[test]
fn test_rotate_modulo_length() {
    let v = seq_view(8);

    assert_eq!(v.rotated(10), v.rotated(2));
    assert_eq!(v.rotated(8), v);
}

/// Test in-place rotation permutes the view itself.
#[test]
fn test_rotate_in_place() {
    let mut v = seq_view(4);
    v.rotate(1);

    assert_eq!(values(&v), vec![1, 2, 3, 0]);
    assert_eq!(v.kind(), Some(ViewKind::Rotated));
}

/// Test rotating an empty view does not panic.
#[test]
fn test_rotate_empty_view() {
    let v: ArrayView<i32> = ArrayView::new(0);
    let r = v.rotated(3);

    assert!(r.is_empty());
}

// ============================================================================
// Align Tests
// ============================================================================

/// Test aligning a full-coverage view materializes the logical order and
/// drops the translation.
#[test]
fn test_align_full_coverage() {
    let v = seq_view(5);
    let mut r = v.reversed();

    r.align().unwrap();
    assert!(r.is_root(), "Aligned view should hold an identity mapping");
    assert_eq!(r.kind(), None);
    assert_eq!(values(&r), vec![4, 3, 2, 1, 0]);
}

/// Test the coverage precondition: a partial view cannot align.
#[test]
fn test_align_partial_view_fails() {
    let mut v = seq_view(8);
    let (mut left, _right) = v.split_at(3).unwrap();

    assert_eq!(
        left.align().unwrap_err(),
        ViewError::IncompleteAlignment { covered: 3, storage_len: 8 }
    );
    assert_eq!(values(&left), vec![0, 1, 2], "Failed align must not mutate");
    assert!(left.shares_storage(&v), "Failed align must not replace storage");
}

/// Test align severs sharing: siblings keep the old buffer and diverge.
#[test]
fn test_align_severs_aliasing() {
    let v = seq_view(4);
    let mut reversed = v.reversed();
    let sibling = v.rotated(1);

    reversed.align().unwrap();

    assert!(!reversed.shares_storage(&v), "Align must produce a private buffer");
    assert!(!reversed.shares_storage(&sibling));
    assert_eq!(
        reversed.merge(&sibling, MergeMode::Concatenate).unwrap_err(),
        ViewError::StorageMismatch,
        "Aligned views can no longer merge with prior siblings"
    );

    // Writes through the aligned view stay private.
    reversed.set(0, 99).unwrap();
    assert_eq!(v.get(3).unwrap(), Some(3), "Siblings see the original buffer");
}

/// Test align is idempotent for the invoking view.
#[test]
fn test_align_idempotent() {
    let v = seq_view(4);
    let mut r = v.reversed();

    r.align().unwrap();
    let after_first = values(&r);
    r.align().unwrap();

    assert_eq!(values(&r), after_first);
    assert_eq!(r.len(), 4);
}

/// Test a root view aligns trivially, still severing future sharing.
#[test]
fn test_align_root_view() {
    let mut v = seq_view(3);
    let child = v.rotated(1);

    v.align().unwrap();

    assert_eq!(values(&v), vec![0, 1, 2]);
    assert!(!v.shares_storage(&child), "Align always replaces the buffer");
}

// ============================================================================
// Randomized Round-trip Tests
// ============================================================================

/// Test block-split/concatenate and dealt-split/interleave round-trips on
/// random data for every bucket count that divides the length.
#[test]
fn test_randomized_roundtrips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let len = 24;

    let mut v: ArrayView<i64> = ArrayView::new(len);
    for i in 0..len {
        v.set(i, rng.gen_range(-1000..1000)).unwrap();
    }

    for n in [1, 2, 3, 4, 6, 8] {
        let blocks = v.split(n, SplitMode::Block).unwrap();
        let merged = ArrayView::merge_many(&blocks, MergeMode::Concatenate).unwrap();
        assert_eq!(merged, v, "Block round-trip failed for n={n}");

        let dealt = v.split(n, SplitMode::Dealt).unwrap();
        let merged = ArrayView::merge_many(&dealt, MergeMode::Interleave).unwrap();
        assert_eq!(merged, v, "Dealt round-trip failed for n={n}");
    }
}
