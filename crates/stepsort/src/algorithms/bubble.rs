//! Bubble sort.
//!
//! ## Purpose
//!
//! Repeated adjacent compare-swap passes with a shrinking tail; the largest
//! remaining element bubbles to the end of each pass. Kept for its animation
//! value and as the sequential oracle for the odd-even transposition variant
//! in the parallel engine.
//!
//! ## Design notes
//!
//! * A window opens per swap on the swapped pair.
//! * A pass without swaps proves the slice sorted and ends the run early,
//!   so a sorted input costs one pass and zero swaps.

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
    let n = a.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..(n - 1 - pass) {
            ctx.record_comparison();
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                ctx.record_swap();
                swapped = true;
                ctx.observe(&[(base + j + 1, Role::Primary), (base + j, Role::Secondary)]);
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
