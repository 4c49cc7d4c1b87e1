//! Fork-join merge sort.
//!
//! ## Purpose
//!
//! This module provides the parallel merge sort driver. It forks the two
//! recursive descents as rayon tasks while the sub-slice is longer than the
//! configured threshold, then reuses the sequential kernel's combine step,
//! so the writeback windows and counters match the baseline.
//!
//! ## Design notes
//!
//! * `split_at_mut` makes the forked halves index-disjoint by construction.
//! * `rayon::join` returns only after both descents finish; the combine
//!   never overlaps descent into the same range.
//! * At or below the threshold the sequential kernel runs inline, scratch
//!   allocation failures included.
//!
//! ## Invariants
//!
//! * Output is element-for-element identical to the sequential baseline.

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;
use stepsort::algorithms::merge as kernel;
use stepsort::engine::context::SortContext;
use stepsort::primitives::errors::SortError;

/// Sort `a` ascending with fork-join descent.
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
    if a.len() <= ctx.plan().merge_threshold {
        return kernel::sort_range(a, base, ctx);
    }
    let mid = a.len() / 2;
    {
        let (left, right) = a.split_at_mut(mid);
        let (first, second) = rayon::join(
            || sort_range(left, base, ctx),
            || sort_range(right, base + mid, ctx),
        );
        first?;
        second?;
    }
    kernel::merge_halves(a, mid, base, ctx)
}
