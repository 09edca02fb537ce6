//! Shared mutable element storage.
//!
//! ## Purpose
//!
//! This module provides the physical buffer behind every view: a
//! fixed-length sequence of `Option<T>` slots, `None` being the
//! absent/uninitialized sentinel. A root view and all views derived from it
//! hold handles to the same buffer until one of them aligns.
//!
//! ## Design notes
//!
//! * **Reference-counted**: Cloning a `Storage` clones the handle, never
//!   the buffer. Sharing is deliberate and observable.
//! * **Interior-mutable**: Writes go through `RefCell`, so aliasing views
//!   can mutate the buffer through a shared handle. This also makes the
//!   type `!Send`/`!Sync`, which encodes the single-threaded usage
//!   precondition in the type system.
//! * **Identity, not equality**: Two handles share a buffer iff they point
//!   at the identical allocation. Content equality is never consulted.
//!
//! ## Invariants
//!
//! * The buffer length is fixed at construction; no operation grows or
//!   shrinks it.
//! * Physical indices passed to `read`/`write` are validated by the caller
//!   against `len()`; they are checked here only by debug assertion.
//!
//! ## Non-goals
//!
//! * No locking, atomicity, or cross-thread sharing.
//! * No tracking of which views hold handles to a buffer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cell::RefCell;
use core::fmt;

// ============================================================================
// Storage
// ============================================================================

/// A shared, fixed-length buffer of optional elements.
pub struct Storage<T> {
    cells: Rc<RefCell<Vec<Option<T>>>>,
}

impl<T> Storage<T> {
    /// Allocate a fresh buffer of `len` sentinel (`None`) slots.
    pub fn with_len(len: usize) -> Self {
        Self::from_cells((0..len).map(|_| None).collect())
    }

    /// Wrap an already-populated buffer.
    pub fn from_cells(cells: Vec<Option<T>>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(cells)),
        }
    }

    /// Number of slots in the buffer.
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    /// Whether the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` and `other` are handles to the identical buffer.
    #[inline]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    /// Read the slot at physical index `phys`.
    pub fn read(&self, phys: usize) -> Option<T>
    where
        T: Clone,
    {
        debug_assert!(phys < self.len(), "read: physical index out of bounds");
        self.cells.borrow()[phys].clone()
    }

    /// Overwrite the slot at physical index `phys`.
    pub fn write(&self, phys: usize, value: Option<T>) {
        debug_assert!(phys < self.len(), "write: physical index out of bounds");
        self.cells.borrow_mut()[phys] = value;
    }

    /// Run `f` against the raw slots without cloning them.
    pub fn with_slots<R>(&self, f: impl FnOnce(&[Option<T>]) -> R) -> R {
        f(&self.cells.borrow())
    }
}

impl<T> Clone for Storage<T> {
    /// Clones the handle; the buffer itself is shared, not copied.
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len())
            .field("handles", &Rc::strong_count(&self.cells))
            .finish()
    }
}
