//! Scoped borrowing with restore-on-exit.
//!
//! ## Purpose
//!
//! [`ArrayView::scoped`] hands out a guard that snapshots the view's shape
//! (storage handle, translation, kind, length) on entry and restores it
//! when the guard is dropped, on every exit path, including panics.
//!
//! ## Design notes
//!
//! * **Restore contract**: Restore undoes *shape* changes: `rotate`,
//!   `reverse`, and `align`'s storage replacement. Element writes through
//!   `set`/`clear` go to the shared buffer and are deliberately not rolled
//!   back. Lineage records are likewise kept.
//! * **The borrow is the mark**: The guard holds an exclusive `&mut`
//!   borrow of the view, so "borrowed" is enforced at compile time rather
//!   than tracked as a runtime flag.
//! * The guard dereferences to the view, so all view operations are
//!   available through it.

// Internal dependencies
use crate::primitives::storage::Storage;
use crate::primitives::translation::Translation;
use crate::view::core::{ArrayView, ViewKind};

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// ScopedView
// ============================================================================

/// RAII guard over a borrowed view; restores the view's shape on drop.
#[derive(Debug)]
pub struct ScopedView<'a, T> {
    saved_storage: Storage<T>,
    saved_translation: Option<Translation>,
    saved_kind: Option<ViewKind>,
    saved_length: usize,
    view: &'a mut ArrayView<T>,
}

impl<T> ArrayView<T> {
    /// Enter a borrowing scope. The returned guard restores the view's
    /// shape (translation, kind, length, storage handle) when it goes out
    /// of scope; see the module documentation for the exact contract.
    pub fn scoped(&mut self) -> ScopedView<'_, T> {
        ScopedView {
            saved_storage: self.storage.clone(),
            saved_translation: self.translation.clone(),
            saved_kind: self.kind,
            saved_length: self.length,
            view: self,
        }
    }
}

impl<T> Deref for ScopedView<'_, T> {
    type Target = ArrayView<T>;

    fn deref(&self) -> &ArrayView<T> {
        self.view
    }
}

impl<T> DerefMut for ScopedView<'_, T> {
    fn deref_mut(&mut self) -> &mut ArrayView<T> {
        self.view
    }
}

impl<T> Drop for ScopedView<'_, T> {
    fn drop(&mut self) {
        self.view.storage = self.saved_storage.clone();
        self.view.translation = self.saved_translation.take();
        self.view.kind = self.saved_kind;
        self.view.length = self.saved_length;
    }
}
