//! Logical-to-physical index translations.
//!
//! ## Purpose
//!
//! A translation is the ordered sequence of physical storage indices a
//! derived view uses to map logical position → physical position. Every
//! derived view owns its own translation; translations are never aliased
//! between views.
//!
//! ## Design notes
//!
//! * **Owned**: Reordering one view can never corrupt a sibling.
//! * **Dense**: A plain `Vec<usize>`; entry `i` is the physical index of
//!   logical element `i`.
//! * **Permutation-friendly**: Reversal and rotation operate in place;
//!   rotation offsets are reduced modulo the length.
//!
//! ## Invariants
//!
//! * Entries are valid physical indices at construction time; validity is
//!   the constructing view's responsibility.
//!
//! ## Non-goals
//!
//! * No partitioning or interleaving logic; that lives in the algebra
//!   layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Translation
// ============================================================================

/// An owned, ordered sequence of physical storage indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation(Vec<usize>);

impl Translation {
    /// The identity translation over `len` slots: logical == physical.
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Wrap an explicit index sequence.
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Number of logical positions this translation maps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the translation maps no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The physical index of logical position `i`, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<usize> {
        self.0.get(i).copied()
    }

    /// The raw index sequence.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Unwrap into the raw index sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Reverse the logical order in place.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    /// Left-rotate the logical order by `offset` positions, reduced modulo
    /// the length. A no-op on an empty translation.
    pub fn rotate_left(&mut self, offset: usize) {
        if self.0.is_empty() {
            return;
        }
        let mid = offset % self.0.len();
        self.0.rotate_left(mid);
    }
}
