//! Bitonic sort.
//!
//! ## Purpose
//!
//! Recursive bitonic sorting network: sort the first half ascending and the
//! second half descending, then merge the resulting bitonic sequence with
//! half-stride compare-swap stages. The comparison pattern is oblivious
//! (fixed by the length, independent of the data), which is what makes the
//! stages embarrassingly parallel in the companion crate.
//!
//! ## Design notes
//!
//! * A window opens only when a compare-swap actually swaps.
//! * `compare_swap` and `merge_range` are exposed for the parallel driver,
//!   which runs the same stages with the pair loop parallelized.
//! * For length 8 the full network evaluates exactly 24 compare-swaps
//!   (merge stages of widths 8, 4, 2), observable on the comparison counter.
//!
//! ## Invariants
//!
//! * Callers guarantee a power-of-two length; the engine's validator
//!   rejects anything else before the kernel runs. Lengths <= 1 return
//!   trivially.

// External dependencies
use std::mem;

// Internal dependencies
use crate::algorithms::SortItem;
use crate::engine::context::SortContext;
use crate::primitives::errors::SortError;
use crate::primitives::highlight::Role;

// ============================================================================
// Direction
// ============================================================================

/// Ordering direction of a network stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

// ============================================================================
// Kernel
// ============================================================================

/// Sort `a` ascending in place.
pub fn sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    sort_range(a, Direction::Ascending, 0, ctx)
}

/// Sort a sub-slice into `dir` order; `base` is its absolute offset.
pub fn sort_range<T: SortItem>(
    a: &mut [T],
    dir: Direction,
    base: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    if a.len() <= 1 {
        return Ok(());
    }
    let k = a.len() / 2;
    {
        let (lo, hi) = a.split_at_mut(k);
        sort_range(lo, Direction::Ascending, base, ctx)?;
        sort_range(hi, Direction::Descending, base + k, ctx)?;
    }
    merge_range(a, dir, base, ctx)
}

/// Merge a bitonic sub-slice into `dir` order with half-stride stages.
pub fn merge_range<T: SortItem>(
    a: &mut [T],
    dir: Direction,
    base: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    if a.len() <= 1 {
        return Ok(());
    }
    let k = a.len() / 2;
    {
        let (lo, hi) = a.split_at_mut(k);
        for (i, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            compare_swap(x, y, dir, base + i, base + k + i, ctx);
        }
    }
    let (lo, hi) = a.split_at_mut(k);
    merge_range(lo, dir, base, ctx)?;
    merge_range(hi, dir, base + k, ctx)
}

/// Order the pair (`x`, `y`) per `dir`; returns whether a swap happened.
///
/// `xi` and `yi` are the absolute indices, used for the highlight window.
pub fn compare_swap<T: SortItem>(
    x: &mut T,
    y: &mut T,
    dir: Direction,
    xi: usize,
    yi: usize,
    ctx: &SortContext,
) -> bool {
    ctx.record_comparison();
    let out_of_order = match dir {
        Direction::Ascending => *x > *y,
        Direction::Descending => *x < *y,
    };
    if out_of_order {
        mem::swap(x, y);
        ctx.record_swap();
        ctx.observe(&[(xi, Role::Primary), (yi, Role::Secondary)]);
    }
    out_of_order
}
