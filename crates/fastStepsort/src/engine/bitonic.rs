//! Bitonic network with data-parallel stages.
//!
//! ## Purpose
//!
//! This module provides the parallel bitonic driver. The network's
//! comparison pattern is oblivious, so both the recursive descents and the
//! half-stride compare-swap pairs of a merge stage are independent: descents
//! fork with `rayon::join`, stages run as a parallel zip over the two
//! halves.
//!
//! ## Design notes
//!
//! * The pair loop reuses the kernel's `compare_swap`, so windows still open
//!   only on actual swaps and the counters match the sequential network.
//! * One threshold gates both descent forking and stage parallelism.
//! * The power-of-two precondition is enforced upstream by the validator.
//!
//! ## Invariants
//!
//! * The network evaluates exactly the same compare-swap set as the
//!   sequential kernel for any given length.

// External dependencies
use rayon::prelude::*;

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;
use stepsort::algorithms::bitonic as kernel;
use stepsort::algorithms::bitonic::Direction;
use stepsort::engine::context::SortContext;
use stepsort::primitives::errors::SortError;

/// Sort `a` ascending with fork-join descent and parallel stages.
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
    if a.len() <= ctx.plan().bitonic_threshold {
        return kernel::sort_range(a, dir, base, ctx);
    }
    let k = a.len() / 2;
    {
        let (lo, hi) = a.split_at_mut(k);
        let (first, second) = rayon::join(
            || sort_range(lo, Direction::Ascending, base, ctx),
            || sort_range(hi, Direction::Descending, base + k, ctx),
        );
        first?;
        second?;
    }
    merge_range(a, dir, base, ctx)
}

/// Merge a bitonic sub-slice into `dir` order with parallel stages.
pub fn merge_range<T: SortItem>(
    a: &mut [T],
    dir: Direction,
    base: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    if a.len() <= 1 {
        return Ok(());
    }
    if a.len() <= ctx.plan().bitonic_threshold {
        return kernel::merge_range(a, dir, base, ctx);
    }
    let k = a.len() / 2;
    {
        // The half-stride pairs are index-disjoint; run the stage as one
        // parallel zip.
        let (lo, hi) = a.split_at_mut(k);
        lo.par_iter_mut()
            .zip(hi.par_iter_mut())
            .enumerate()
            .for_each(|(i, (x, y))| {
                kernel::compare_swap(x, y, dir, base + i, base + k + i, ctx);
            });
    }
    let (lo, hi) = a.split_at_mut(k);
    let (first, second) = rayon::join(
        || merge_range(lo, dir, base, ctx),
        || merge_range(hi, dir, base + k, ctx),
    );
    first?;
    second
}
