//! # flatview — non-copying views over a flat mutable buffer
//!
//! A view presents a possibly reordered, strided, or partitioned subsequence
//! of an underlying storage buffer without copying elements. Views form a
//! small algebra: they can be **split** into sibling views (balanced blocks,
//! round-robin "deal", or fixed-size chunk deal), **merged** back together
//! (concatenated or interleaved), **reversed**, **rotated**, and finally
//! **aligned**, i.e. materialized into a fresh, compacted buffer in
//! logical order.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatview::prelude::*;
//!
//! let mut v: ArrayView<i32> = ArrayView::new(8);
//! for i in 0..v.len() {
//!     v.set(i, i as i32)?;
//! }
//!
//! // Deal the elements round-robin across two siblings.
//! let siblings = v.split(2, SplitMode::Dealt)?;
//! assert_eq!(siblings[0].to_string(), "[0, 2, 4, 6]");
//! assert_eq!(siblings[1].to_string(), "[1, 3, 5, 7]");
//!
//! // Interleaving the siblings restores the original order.
//! let merged = ArrayView::merge_many(&siblings, MergeMode::Interleave)?;
//! assert_eq!(merged, v);
//! # Result::<(), ViewError>::Ok(())
//! ```
//!
//! ## Shared Storage and Aliasing
//!
//! Splitting never copies elements: every sibling holds a handle to the same
//! buffer as its parent, plus its own *translation* (an owned sequence of
//! physical indices). A write through any view is immediately visible
//! through every other view of the same buffer:
//!
//! ```rust
//! use flatview::prelude::*;
//!
//! let mut v: ArrayView<u8> = ArrayView::new(4);
//! for i in 0..v.len() {
//!     v.set(i, i as u8)?;
//! }
//!
//! let (mut left, _right) = v.split_at(2)?;
//! left.set(0, 99)?;
//! assert_eq!(v.get(0)?, Some(99));
//! # Result::<(), ViewError>::Ok(())
//! ```
//!
//! ### The `align` hazard
//!
//! [`align`](prelude::ArrayView::align) is the only storage-replacing
//! operation: the invoking view copies its elements into logical order into
//! a brand-new private buffer and drops its translation. Sibling views keep
//! the *old* buffer, untouched. After an `align` the aliasing relationship
//! is permanently severed: the aligned view no longer observes sibling
//! writes and can no longer be merged with them
//! ([`StorageMismatch`](prelude::ViewError::StorageMismatch)). There is no
//! invalidation or notification mechanism; callers must not rely on
//! cross-view consistency across an `align`.
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, ViewError>` and validates
//! before mutating, so a failed call leaves the view unchanged and usable.
//! Error variants are contextual and branchable:
//!
//! ```rust
//! use flatview::prelude::*;
//!
//! let a: ArrayView<i32> = ArrayView::new(3);
//! let b: ArrayView<i32> = ArrayView::new(3);
//!
//! // Merging views over distinct buffers is illegal, whatever the mode.
//! assert!(matches!(
//!     a.merge(&b, MergeMode::Concatenate),
//!     Err(ViewError::StorageMismatch)
//! ));
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded by construction: storage is reference-counted and
//! interior-mutable (`Rc<RefCell<..>>`), so views are deliberately neither
//! `Send` nor `Sync`. A single owner is expected to drive all operations on
//! the views of a given buffer; there is no locking and no atomicity.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! flatview = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, storage, and index translations.
mod primitives;

// Layer 2: Algebra - pure index-sequence partitioning and combination.
mod algebra;

// Layer 3: View - the ArrayView entity and its operation surface.
mod view;

// Standard flatview prelude.
pub mod prelude {
    pub use crate::primitives::errors::ViewError;
    pub use crate::view::core::{ArrayView, LineageEntry, ViewKind};
    pub use crate::view::merge::MergeMode;
    pub use crate::view::scope::ScopedView;
    pub use crate::view::split::SplitMode;
}

// Internal module surface, exposed for white-box testing.
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algebra {
        pub use crate::algebra::*;
    }
    pub mod view {
        pub use crate::view::*;
    }
}
