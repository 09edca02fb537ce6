//! Index-sequence partitioning.
//!
//! ## Purpose
//!
//! This module partitions an ordered sequence of physical indices into
//! `buckets` disjoint sub-sequences, preserving relative order within each
//! bucket. Three schemes are provided: balanced contiguous blocks,
//! element-wise round-robin dealing, and chunk-wise round-robin dealing.
//!
//! ## Design notes
//!
//! * **Deterministic remainders**: Block partitioning gives the first
//!   `len % buckets` buckets one extra element; chunk dealing appends a
//!   final partial chunk to whichever bucket the cyclic counter points at.
//! * **Fail-fast**: Bucket and chunk-length parameters are validated before
//!   any allocation.
//!
//! ## Invariants
//!
//! * Every input index appears in exactly one output bucket.
//! * Concatenating the block-partition buckets in order reproduces the
//!   input sequence.
//!
//! ## Non-goals
//!
//! * No view construction or storage access.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ViewError;

// ============================================================================
// Partitioning Schemes
// ============================================================================

/// Partition `indices` into `buckets` contiguous, near-equal runs.
///
/// With `k = len / buckets` and `m = len % buckets`, the first `m` buckets
/// receive `k + 1` indices and the rest receive `k`. Buckets beyond the
/// input length come out empty.
pub fn block(indices: &[usize], buckets: usize) -> Result<Vec<Vec<usize>>, ViewError> {
    if buckets == 0 {
        return Err(ViewError::InvalidBucketCount(buckets));
    }

    let k = indices.len() / buckets;
    let m = indices.len() % buckets;

    let mut out = Vec::with_capacity(buckets);
    for i in 0..buckets {
        let start = i * k + i.min(m);
        let end = (i + 1) * k + (i + 1).min(m);
        out.push(indices[start..end].to_vec());
    }
    Ok(out)
}

/// Deal `indices` round-robin, one at a time, across `buckets` buckets in
/// cyclic order. Relative order within each bucket is preserved.
pub fn deal(indices: &[usize], buckets: usize) -> Result<Vec<Vec<usize>>, ViewError> {
    if buckets == 0 {
        return Err(ViewError::InvalidBucketCount(buckets));
    }

    let mut out: Vec<Vec<usize>> = (0..buckets).map(|_| Vec::new()).collect();
    for (i, &idx) in indices.iter().enumerate() {
        out[i % buckets].push(idx);
    }
    Ok(out)
}

/// Deal consecutive `chunk_len`-sized chunks of `indices` round-robin
/// across `buckets` buckets. A final partial chunk (shorter than
/// `chunk_len`) is appended to the bucket the cyclic counter currently
/// points at.
pub fn deal_chunks(
    indices: &[usize],
    buckets: usize,
    chunk_len: usize,
) -> Result<Vec<Vec<usize>>, ViewError> {
    if buckets == 0 {
        return Err(ViewError::InvalidBucketCount(buckets));
    }
    if chunk_len == 0 {
        return Err(ViewError::InvalidChunkLength(chunk_len));
    }

    let mut out: Vec<Vec<usize>> = (0..buckets).map(|_| Vec::new()).collect();
    let mut bucket = 0;
    let mut i = 0;

    while i + chunk_len <= indices.len() {
        out[bucket].extend_from_slice(&indices[i..i + chunk_len]);
        i += chunk_len;
        bucket = (bucket + 1) % buckets;
    }

    // Partial trailing chunk lands at the current counter position.
    if i < indices.len() {
        out[bucket].extend_from_slice(&indices[i..]);
    }

    Ok(out)
}
