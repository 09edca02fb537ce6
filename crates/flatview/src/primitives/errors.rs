//! Error types for view operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while indexing,
//! splitting, merging, or aligning views.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs.
//!   expected lengths) so callers can diagnose without re-deriving state.
//! * **Branchable**: Variants fall into three categories (index errors,
//!   merge errors, and alignment errors) so calling code can branch on
//!   cause rather than on a single opaque failure.
//! * **No-std**: Implements `Display` from `core`; the `std::error::Error`
//!   implementation is gated on the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant provides sufficient context for diagnosis.
//! * Operations that return these errors do not mutate before validating,
//!   so the offending view is always left usable.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for view operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Logical index is at or beyond the view length.
    ///
    /// Negative indices are unrepresentable (`usize`), which is strictly
    /// stronger than a runtime negativity check.
    IndexOutOfBounds {
        /// The logical index requested.
        index: usize,
        /// The view length.
        length: usize,
    },

    /// Split position lies outside `[0, length]`.
    SplitOutOfRange {
        /// The split position requested.
        pos: usize,
        /// The view length.
        length: usize,
    },

    /// Partitioning requires at least one bucket.
    InvalidBucketCount(usize),

    /// Chunked partitioning requires a chunk length of at least 1.
    InvalidChunkLength(usize),

    /// Merging requires both operands to reference the identical storage
    /// buffer (pointer identity, not structural equality).
    StorageMismatch,

    /// N-way interleaving requires all operands to have equal length.
    MergeLengthMismatch {
        /// Length of the first operand.
        expected: usize,
        /// Length of the offending operand.
        got: usize,
    },

    /// An N-way merge was invoked with no operands.
    EmptyMerge,

    /// Aligning requires the view to denote every storage slot.
    IncompleteAlignment {
        /// Number of storage slots the view denotes.
        covered: usize,
        /// Total number of storage slots.
        storage_len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "Index out of bounds: {index} (view length is {length})")
            }
            Self::SplitOutOfRange { pos, length } => {
                write!(f, "Split position out of range: {pos} (must be in [0, {length}])")
            }
            Self::InvalidBucketCount(buckets) => {
                write!(f, "Invalid bucket count: {buckets} (must be at least 1)")
            }
            Self::InvalidChunkLength(chunk_len) => {
                write!(f, "Invalid chunk length: {chunk_len} (must be at least 1)")
            }
            Self::StorageMismatch => {
                write!(f, "Cannot merge views that reference different storage buffers")
            }
            Self::MergeLengthMismatch { expected, got } => {
                write!(
                    f,
                    "Interleaving merge requires equal lengths: expected {expected}, got {got}"
                )
            }
            Self::EmptyMerge => write!(f, "Cannot merge an empty set of views"),
            Self::IncompleteAlignment {
                covered,
                storage_len,
            } => {
                write!(
                    f,
                    "Cannot align: view denotes {covered} of {storage_len} storage slots"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ViewError {}
