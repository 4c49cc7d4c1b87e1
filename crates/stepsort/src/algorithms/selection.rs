//! Selection sort.
//!
//! ## Purpose
//!
//! For each prefix position, scan the unsorted tail for its minimum and swap
//! it into place. At most one swap per outer iteration, which makes the
//! animation read as "the next smallest element flies home".
//!
//! ## Design notes
//!
//! * A window opens every time the running minimum improves, highlighting
//!   the prefix slot against the new candidate, and once more on the final
//!   swap. Already-placed minima (candidate == slot) skip the swap, so a
//!   sorted input performs zero swaps.

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
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..n {
            ctx.record_comparison();
            if a[j] < a[min] {
                min = j;
                ctx.observe(&[(base + i, Role::Primary), (base + min, Role::Secondary)]);
            }
        }
        if min != i {
            a.swap(i, min);
            ctx.record_swap();
            ctx.observe(&[(base + i, Role::Primary), (base + min, Role::Secondary)]);
        }
    }
    Ok(())
}
