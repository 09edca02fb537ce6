//! Merge and reorder operations.
//!
//! ## Purpose
//!
//! Merging recombines views that reference the identical storage buffer.
//! Reversal and rotation derive permuted views (or permute in place).
//! Alignment materializes a view's logical order into a fresh private
//! buffer; it is the one storage-replacing operation in the algebra.
//!
//! ## Design notes
//!
//! * **Validate before mutate**: Merge and align check every precondition
//!   before constructing or replacing anything; a failed call leaves all
//!   operands unchanged.
//! * **Two interleaves**: The pairwise merge alternates two translations
//!   and appends the longer tail; the N-way merge requires equal lengths
//!   and takes one index from each operand in turn. They are distinct
//!   operations with distinct semantics.
//! * **Align severs sharing**: After `align`, the invoking view holds a
//!   private buffer and an identity mapping. Siblings still reference the
//!   old buffer; they are unaffected but can no longer be merged with the
//!   aligned view. This hazard is documented, not patched.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algebra::combine;
use crate::primitives::errors::ViewError;
use crate::primitives::storage::Storage;
use crate::primitives::translation::Translation;
use crate::view::core::{ArrayView, ViewKind};

// ============================================================================
// Merge Mode
// ============================================================================

/// Combination scheme for [`ArrayView::merge`] and
/// [`ArrayView::merge_many`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// `translation(a) ++ translation(b)`, preserving operand order.
    Concatenate,
    /// Alternate indices across the operands.
    Interleave,
}

// ============================================================================
// Merge Operations
// ============================================================================

impl<T> ArrayView<T> {
    /// Merge two views over the identical storage buffer into one.
    ///
    /// In [`MergeMode::Interleave`], indices alternate pairwise up to the
    /// shorter operand, then the longer operand's tail is appended. Root
    /// operands contribute their implicit identity translation.
    pub fn merge(&self, other: &ArrayView<T>, mode: MergeMode) -> Result<ArrayView<T>, ViewError> {
        if !self.shares_storage(other) {
            return Err(ViewError::StorageMismatch);
        }

        let a = self.current_indices();
        let b = other.current_indices();
        let (combined, kind) = match mode {
            MergeMode::Concatenate => (combine::concat(&a, &b), ViewKind::Consecutive),
            MergeMode::Interleave => (combine::interleave(&a, &b), ViewKind::Dealt),
        };
        Ok(ArrayView::derived(
            self.storage.clone(),
            Translation::from_indices(combined),
            kind,
        ))
    }

    /// Merge N views over the identical storage buffer into one.
    ///
    /// [`MergeMode::Concatenate`] folds pairwise concatenation left to
    /// right, equivalent to the two-way case. [`MergeMode::Interleave`]
    /// additionally requires all operands to have equal length and takes
    /// one index from each view in turn, round-robin, which is not the
    /// same as repeated pairwise interleaving.
    pub fn merge_many(
        views: &[ArrayView<T>],
        mode: MergeMode,
    ) -> Result<ArrayView<T>, ViewError> {
        let first = views.first().ok_or(ViewError::EmptyMerge)?;
        if views.iter().any(|v| !v.shares_storage(first)) {
            return Err(ViewError::StorageMismatch);
        }

        match mode {
            MergeMode::Concatenate => {
                let mut merged = first.clone();
                for view in &views[1..] {
                    merged = merged.merge(view, MergeMode::Concatenate)?;
                }
                Ok(merged)
            }
            MergeMode::Interleave => {
                let expected = first.len();
                for view in views {
                    if view.len() != expected {
                        return Err(ViewError::MergeLengthMismatch {
                            expected,
                            got: view.len(),
                        });
                    }
                }

                let seqs: Vec<Vec<usize>> = views.iter().map(|v| v.current_indices()).collect();
                let slices: Vec<&[usize]> = seqs.iter().map(|s| s.as_slice()).collect();
                Ok(ArrayView::derived(
                    first.storage.clone(),
                    Translation::from_indices(combine::interleave_all(&slices)),
                    ViewKind::Dealt,
                ))
            }
        }
    }
}

// ============================================================================
// Reverse and Rotate
// ============================================================================

impl<T> ArrayView<T> {
    /// Reverse the logical order in place. Self-inverse.
    pub fn reverse(&mut self) {
        let mut translation = self.take_or_identity();
        translation.reverse();
        self.translation = Some(translation);
        self.kind = Some(ViewKind::Reversed);
    }

    /// A new view with the logical order reversed.
    pub fn reversed(&self) -> ArrayView<T> {
        let mut translation = Translation::from_indices(self.current_indices());
        translation.reverse();
        ArrayView::derived(self.storage.clone(), translation, ViewKind::Reversed)
    }

    /// Left-rotate the logical order in place by `offset` positions,
    /// reduced modulo the length. A no-op offset still tags the view as
    /// rotated.
    pub fn rotate(&mut self, offset: usize) {
        let mut translation = self.take_or_identity();
        translation.rotate_left(offset);
        self.translation = Some(translation);
        self.kind = Some(ViewKind::Rotated);
    }

    /// A new view with the logical order left-rotated by `offset`
    /// positions, reduced modulo the length.
    pub fn rotated(&self, offset: usize) -> ArrayView<T> {
        let mut translation = Translation::from_indices(self.current_indices());
        translation.rotate_left(offset);
        ArrayView::derived(self.storage.clone(), translation, ViewKind::Rotated)
    }

    /// Take the current translation, materializing the identity for a
    /// root view.
    fn take_or_identity(&mut self) -> Translation {
        self.translation
            .take()
            .unwrap_or_else(|| Translation::identity(self.length))
    }
}

// ============================================================================
// Align
// ============================================================================

impl<T: Clone> ArrayView<T> {
    /// Materialize the logical order into a brand-new private buffer.
    ///
    /// Requires the view to denote every slot of its storage (its length
    /// must equal the storage length); fails with
    /// [`ViewError::IncompleteAlignment`] otherwise. On success the view's
    /// storage handle is replaced with the fresh buffer and its
    /// translation is dropped, so the view becomes root-like. Idempotent for
    /// the invoking view; permanently severs sharing with prior siblings.
    pub fn align(&mut self) -> Result<(), ViewError> {
        if self.length != self.storage.len() {
            return Err(ViewError::IncompleteAlignment {
                covered: self.length,
                storage_len: self.storage.len(),
            });
        }

        let cells: Vec<Option<T>> = (0..self.length)
            .map(|i| self.storage.read(self.physical(i)))
            .collect();

        self.storage = Storage::from_cells(cells);
        self.translation = None;
        self.kind = None;
        Ok(())
    }
}
