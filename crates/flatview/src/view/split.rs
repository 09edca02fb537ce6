//! Split operations.
//!
//! ## Purpose
//!
//! Splitting partitions a view into sibling views over the same storage.
//! No elements are copied: each sibling receives its own slice of the
//! parent's index sequence (the translation, or the implicit identity for
//! a root view).
//!
//! ## Design notes
//!
//! * **Validate first**: Positions and bucket parameters are checked
//!   before any sibling is constructed; a failed split leaves the parent
//!   untouched.
//! * **Lineage**: Every produced sibling is recorded on the parent, which
//!   is why splits take `&mut self`. The records are bookkeeping only.
//!
//! ## Key concepts
//!
//! * **Block split**: balanced contiguous runs; concatenating the siblings
//!   in order reproduces the parent.
//! * **Dealt split**: round-robin, one element at a time, like dealing
//!   cards.
//! * **Chunked split**: round-robin in fixed-size chunks, with the final
//!   partial chunk landing at the current cyclic position.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algebra::partition;
use crate::primitives::errors::ViewError;
use crate::primitives::translation::Translation;
use crate::view::core::{ArrayView, ViewKind};

// ============================================================================
// Split Mode
// ============================================================================

/// Partitioning scheme for [`ArrayView::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Contiguous, near-equal runs.
    Block,
    /// Round-robin, one element at a time.
    Dealt,
}

// ============================================================================
// Split Operations
// ============================================================================

impl<T> ArrayView<T> {
    /// Split into two siblings covering `[0, pos)` and `[pos, len)`.
    ///
    /// Rejects `pos > len` explicitly rather than producing a malformed
    /// translation.
    pub fn split_at(&mut self, pos: usize) -> Result<(ArrayView<T>, ArrayView<T>), ViewError> {
        if pos > self.length {
            return Err(ViewError::SplitOutOfRange {
                pos,
                length: self.length,
            });
        }

        let indices = self.current_indices();
        let (head, tail) = indices.split_at(pos);

        let first = ArrayView::derived(
            self.storage.clone(),
            Translation::from_indices(head.to_vec()),
            ViewKind::Consecutive,
        );
        let second = ArrayView::derived(
            self.storage.clone(),
            Translation::from_indices(tail.to_vec()),
            ViewKind::Consecutive,
        );

        self.record_child(ViewKind::Consecutive, first.len());
        self.record_child(ViewKind::Consecutive, second.len());
        Ok((first, second))
    }

    /// Partition into `buckets` siblings.
    ///
    /// [`SplitMode::Block`] produces balanced contiguous runs: with
    /// `k = len / buckets` and `m = len % buckets`, the first `m` siblings
    /// get `k + 1` elements and the rest get `k`. More buckets than
    /// elements yields empty siblings.
    ///
    /// [`SplitMode::Dealt`] deals elements round-robin across the buckets
    /// in cyclic order, preserving original order within each bucket.
    pub fn split(
        &mut self,
        buckets: usize,
        mode: SplitMode,
    ) -> Result<Vec<ArrayView<T>>, ViewError> {
        let indices = self.current_indices();
        let (parts, kind) = match mode {
            SplitMode::Block => (partition::block(&indices, buckets)?, ViewKind::Consecutive),
            SplitMode::Dealt => (partition::deal(&indices, buckets)?, ViewKind::Dealt),
        };
        Ok(self.adopt_siblings(parts, kind))
    }

    /// Partition into consecutive `chunk_len`-sized chunks dealt
    /// round-robin across `buckets` siblings; a final partial chunk is
    /// appended to the bucket the cyclic counter points at. All siblings
    /// are tagged [`ViewKind::ChunkDealt`].
    pub fn split_by(
        &mut self,
        buckets: usize,
        chunk_len: usize,
    ) -> Result<Vec<ArrayView<T>>, ViewError> {
        let indices = self.current_indices();
        let parts = partition::deal_chunks(&indices, buckets, chunk_len)?;
        Ok(self.adopt_siblings(parts, ViewKind::ChunkDealt))
    }

    /// Turn partitioned index sequences into sibling views and record them
    /// in the lineage.
    fn adopt_siblings(&mut self, parts: Vec<Vec<usize>>, kind: ViewKind) -> Vec<ArrayView<T>> {
        let siblings: Vec<ArrayView<T>> = parts
            .into_iter()
            .map(|part| {
                ArrayView::derived(self.storage.clone(), Translation::from_indices(part), kind)
            })
            .collect();
        for sibling in &siblings {
            self.record_child(kind, sibling.len());
        }
        siblings
    }
}
