//! Layer 3: View
//!
//! # Purpose
//!
//! This layer defines the `ArrayView` entity and its full operation
//! surface: construction, indexed access, equality, rendering, lineage,
//! the split family, the merge/reorder family, alignment, and scoped
//! borrowing.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: View ← You are here
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// The ArrayView entity: construction, access, equality, rendering.
pub mod core;

/// Split operations: split_at, block/dealt split, chunked split.
pub mod split;

/// Merge, reverse, rotate, and align operations.
pub mod merge;

/// Scoped borrowing with restore-on-exit.
pub mod scope;
