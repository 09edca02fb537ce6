//! Layer 2: Algebra
//!
//! # Purpose
//!
//! This layer implements the pure index-sequence algebra behind splitting
//! and merging: partitioning a sequence of physical indices into buckets,
//! and combining sequences by concatenation or interleaving. Nothing here
//! touches storage; the functions transform `usize` sequences and the view
//! layer turns the results into sibling views.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: View
//!   ↓
//! Layer 2: Algebra ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Block, deal, and chunk-deal partitioning.
pub mod partition;

/// Concatenation and interleaving.
pub mod combine;
