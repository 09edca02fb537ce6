//! Index-sequence combination.
//!
//! ## Purpose
//!
//! This module recombines index sequences for merging: plain concatenation,
//! pairwise interleaving, and N-way round-robin interleaving.
//!
//! ## Design notes
//!
//! * **Two interleaves, two semantics**: Pairwise interleaving alternates
//!   two sequences up to the shorter length, then appends the longer tail.
//!   N-way interleaving takes one index from each sequence in turn and
//!   requires equal lengths (enforced by the caller). It is *not* repeated
//!   pairwise interleaving, and the two must stay distinguishable.
//!
//! ## Non-goals
//!
//! * No length validation; the view layer validates before combining.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use itertools::interleave as interleave_iters;

// ============================================================================
// Combination Schemes
// ============================================================================

/// Concatenate two index sequences, preserving each operand's order.
pub fn concat(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Pairwise-interleave two index sequences: one from `a`, one from `b`,
/// alternating up to the shorter length, then the remaining tail of the
/// longer operand.
pub fn interleave(a: &[usize], b: &[usize]) -> Vec<usize> {
    interleave_iters(a.iter().copied(), b.iter().copied()).collect()
}

/// Round-robin-interleave N equal-length index sequences: one index from
/// each sequence in turn, sequence by sequence.
pub fn interleave_all(seqs: &[&[usize]]) -> Vec<usize> {
    let per_seq = seqs.first().map_or(0, |s| s.len());
    debug_assert!(
        seqs.iter().all(|s| s.len() == per_seq),
        "interleave_all: sequences must have equal lengths"
    );

    let mut out = Vec::with_capacity(per_seq * seqs.len());
    for i in 0..per_seq {
        for seq in seqs {
            out.push(seq[i]);
        }
    }
    out
}
