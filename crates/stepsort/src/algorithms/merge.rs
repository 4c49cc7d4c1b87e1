//! Merge sort.
//!
//! ## Purpose
//!
//! Top-down merge sort. The combine step merges two sorted halves through a
//! scratch buffer and writes the result back slot by slot; the writeback is
//! the externally visible mutation, so that is where windows open.
//!
//! ## Design notes
//!
//! * Scratch allocation is fallible (`try_reserve_exact`) and surfaces as
//!   [`SortError::AllocationFailed`]. On that path the slice still holds a
//!   permutation of its original contents.
//! * The merge is stable: ties prefer the left half.
//! * `merge_halves` is exposed because the parallel driver reuses it as the
//!   combine step after joining its forked descents.
//!
//! ## Invariants
//!
//! * `merge_halves` requires both `a[..mid]` and `a[mid..]` to be sorted.

// External dependencies
use std::mem::size_of;

// Internal dependencies
use crate::algorithms::SortItem;
use crate::engine::context::SortContext;
use crate::primitives::errors::SortError;
use crate::primitives::highlight::Role;

/// Sort `a` ascending in place.
pub fn sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    sort_range(a, 0, ctx)
}

/// Sort a sub-slice whose first element sits at absolute index `base`.
pub fn sort_range<T: SortItem>(
    a: &mut [T],
    base: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    if a.len() <= 1 {
        return Ok(());
    }
    let mid = a.len() / 2;
    {
        let (left, right) = a.split_at_mut(mid);
        sort_range(left, base, ctx)?;
        sort_range(right, base + mid, ctx)?;
    }
    merge_halves(a, mid, base, ctx)
}

/// Merge the sorted halves `a[..mid]` and `a[mid..]` in place.
///
/// Opens a window per writeback slot.
pub fn merge_halves<T: SortItem>(
    a: &mut [T],
    mid: usize,
    base: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    let mut merged = reserve_scratch::<T>(a.len())?;
    {
        let (left, right) = a.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            ctx.record_comparison();
            if left[i] <= right[j] {
                merged.push(left[i]);
                i += 1;
            } else {
                merged.push(right[j]);
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    for (k, value) in merged.into_iter().enumerate() {
        a[k] = value;
        ctx.record_write();
        ctx.observe(&[(base + k, Role::Primary)]);
    }
    Ok(())
}

/// Reserve an empty scratch vector for `len` elements, failing softly.
pub fn reserve_scratch<T>(len: usize) -> Result<Vec<T>, SortError> {
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| SortError::AllocationFailed {
            bytes: len.saturating_mul(size_of::<T>()),
        })?;
    Ok(scratch)
}
