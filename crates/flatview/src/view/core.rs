//! The `ArrayView` entity.
//!
//! ## Purpose
//!
//! An `ArrayView` is a logical window over a [`Storage`] buffer: a length,
//! a handle to the buffer, and, for derived views, an owned
//! [`Translation`] mapping logical positions to physical slots. A root
//! view has no translation and indexes the buffer directly.
//!
//! ## Design notes
//!
//! * **Weak kind tag**: The [`ViewKind`] tag records how a translation was
//!   produced but never changes read/write behavior. Behavior keys solely
//!   on translation presence; the tag is descriptive metadata for
//!   diagnostics. This is deliberate and must stay that way.
//! * **Bounds contract**: Indices are `usize`, so negative indices are
//!   unrepresentable; the upper bound is checked explicitly against the
//!   view length and violations yield [`ViewError::IndexOutOfBounds`].
//! * **Lineage**: Splits record a `(kind, length)` entry per produced
//!   sibling. No operation consults these records; they exist for
//!   bookkeeping and diagnostics only.
//!
//! ## Invariants
//!
//! * `translation` and `kind` are either both present (derived view) or
//!   both absent (root view).
//! * For a derived view, `translation.len() == length` and every entry is
//!   a valid physical index at construction time.
//!
//! ## Non-goals
//!
//! * No thread-safe sharing; see the storage primitive.
//! * No multi-level translation composition: a derived view's translation
//!   maps straight to physical slots, never through another view.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::primitives::errors::ViewError;
use crate::primitives::storage::Storage;
use crate::primitives::translation::Translation;

// ============================================================================
// View Kind
// ============================================================================

/// How a derived view's translation was produced.
///
/// Purely descriptive: no operation dispatches on the variant. Read/write
/// behavior depends only on whether a translation is present at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A contiguous run of the parent's order (split_at, block split,
    /// concatenating merge).
    Consecutive,
    /// Round-robin dealt, one element at a time (strided split,
    /// interleaving merge).
    Dealt,
    /// Round-robin dealt in fixed-size chunks.
    ChunkDealt,
    /// Left-rotated.
    Rotated,
    /// Reversed.
    Reversed,
}

/// A lineage record: one per sibling produced by a split on this view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineageEntry {
    /// Kind of the produced sibling.
    pub kind: ViewKind,
    /// Length of the produced sibling.
    pub length: usize,
}

// ============================================================================
// ArrayView
// ============================================================================

/// A logical window over a flat, shared, mutable buffer.
#[derive(Debug)]
pub struct ArrayView<T> {
    pub(crate) length: usize,
    pub(crate) storage: Storage<T>,
    pub(crate) translation: Option<Translation>,
    pub(crate) kind: Option<ViewKind>,
    pub(crate) lineage: Vec<LineageEntry>,
}

impl<T> ArrayView<T> {
    /// Create a root view owning a fresh buffer of `length` sentinel
    /// (`None`) slots. Logical index equals physical index.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            storage: Storage::with_len(length),
            translation: None,
            kind: None,
            lineage: Vec::new(),
        }
    }

    /// Create a derived view over shared storage.
    ///
    /// Every translation entry must be a valid physical index.
    pub(crate) fn derived(storage: Storage<T>, translation: Translation, kind: ViewKind) -> Self {
        debug_assert!(
            translation.as_slice().iter().all(|&p| p < storage.len()),
            "derived: translation entry out of storage bounds"
        );
        Self {
            length: translation.len(),
            storage,
            translation: Some(translation),
            kind: Some(kind),
            lineage: Vec::new(),
        }
    }

    /// Number of logical elements visible through this view.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the view has no logical elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this is a root view (no translation; direct indexing).
    pub fn is_root(&self) -> bool {
        self.translation.is_none()
    }

    /// The descriptive kind tag, if this is a derived view.
    pub fn kind(&self) -> Option<ViewKind> {
        self.kind
    }

    /// Lineage records for siblings split off from this view.
    pub fn lineage(&self) -> &[LineageEntry] {
        &self.lineage
    }

    /// Whether `self` and `other` reference the identical storage buffer.
    pub fn shares_storage(&self, other: &ArrayView<T>) -> bool {
        self.storage.shares_buffer(&other.storage)
    }

    /// Map a logical index to its physical slot. Caller guarantees
    /// `index < self.length`.
    #[inline]
    pub(crate) fn physical(&self, index: usize) -> usize {
        match &self.translation {
            Some(t) => t.as_slice()[index],
            None => index,
        }
    }

    /// Bounds-checked logical-to-physical mapping.
    fn physical_checked(&self, index: usize) -> Result<usize, ViewError> {
        if index >= self.length {
            return Err(ViewError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(self.physical(index))
    }

    /// The view's current index sequence: its translation, or the implicit
    /// identity for a root view.
    pub(crate) fn current_indices(&self) -> Vec<usize> {
        match &self.translation {
            Some(t) => t.as_slice().to_vec(),
            None => (0..self.length).collect(),
        }
    }

    /// Record one lineage entry for a produced sibling.
    pub(crate) fn record_child(&mut self, kind: ViewKind, length: usize) {
        self.lineage.push(LineageEntry { kind, length });
    }
}

// ============================================================================
// Element Access
// ============================================================================

impl<T: Clone> ArrayView<T> {
    /// Read the element at logical `index`. `None` means the slot is
    /// unset (sentinel).
    pub fn get(&self, index: usize) -> Result<Option<T>, ViewError> {
        let phys = self.physical_checked(index)?;
        Ok(self.storage.read(phys))
    }

    /// The element at logical index 0, or `None` if the view is empty or
    /// the slot is unset.
    pub fn first(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.storage.read(self.physical(0))
    }

    /// The element at the last logical index, or `None` if the view is
    /// empty or the slot is unset.
    pub fn last(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.storage.read(self.physical(self.length - 1))
    }

    /// Snapshot the logical sequence, sentinel slots included.
    pub fn to_vec(&self) -> Vec<Option<T>> {
        (0..self.length)
            .map(|i| self.storage.read(self.physical(i)))
            .collect()
    }
}

impl<T> ArrayView<T> {
    /// Write `value` at logical `index`. The write goes through the
    /// translation to the shared buffer and is immediately visible to
    /// every aliasing view.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ViewError> {
        let phys = self.physical_checked(index)?;
        self.storage.write(phys, Some(value));
        Ok(())
    }

    /// Reset the slot at logical `index` to the sentinel.
    pub fn clear(&mut self, index: usize) -> Result<(), ViewError> {
        let phys = self.physical_checked(index)?;
        self.storage.write(phys, None);
        Ok(())
    }
}

// ============================================================================
// Equality and Rendering
// ============================================================================

impl<T: PartialEq> PartialEq for ArrayView<T> {
    /// Structural equality: same length and identical logical element
    /// sequence, sentinel slots included. Storage identity is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        (0..self.length).all(|i| {
            let pa = self.physical(i);
            let pb = other.physical(i);
            self.storage
                .with_slots(|a| other.storage.with_slots(|b| a[pa] == b[pb]))
        })
    }
}

impl<T: Display> Display for ArrayView<T> {
    /// Canonical rendering: `"[e0, e1, ..., en-1]"` in logical order,
    /// `None` for sentinel slots.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.length {
            if i > 0 {
                f.write_str(", ")?;
            }
            let phys = self.physical(i);
            self.storage.with_slots(|slots| match &slots[phys] {
                Some(value) => write!(f, "{value}"),
                None => f.write_str("None"),
            })?;
        }
        f.write_str("]")
    }
}

impl<T> Clone for ArrayView<T> {
    /// Clones the view, sharing the storage buffer. Element types need not
    /// be `Clone`; only the translation and lineage records are copied.
    fn clone(&self) -> Self {
        Self {
            length: self.length,
            storage: self.storage.clone(),
            translation: self.translation.clone(),
            kind: self.kind,
            lineage: self.lineage.clone(),
        }
    }
}
