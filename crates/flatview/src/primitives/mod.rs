//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the
//! crate: the shared storage buffer, the owned index translation, and the
//! shared error types. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: View
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Reference-counted, interior-mutable element buffer.
pub mod storage;

/// Owned logical-to-physical index translations.
pub mod translation;
