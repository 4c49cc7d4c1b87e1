//! Insertion sort.
//!
//! ## Purpose
//!
//! Grow a sorted prefix one element at a time, shifting greater elements
//! right to open the insertion slot. All mutation is single-slot writes,
//! never swaps, so the swap counter stays at zero for this kernel.
//!
//! ## Design notes
//!
//! * A window opens per shift (written slot primary, vacated slot
//!   secondary) and once for the key's final placement when it moved.
//! * A sorted input breaks out of the shift loop immediately and performs
//!   zero writes.

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
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 {
            ctx.record_comparison();
            if a[j - 1] <= key {
                break;
            }
            a[j] = a[j - 1];
            ctx.record_write();
            ctx.observe(&[(base + j, Role::Primary), (base + j - 1, Role::Secondary)]);
            j -= 1;
        }
        if j != i {
            a[j] = key;
            ctx.record_write();
            ctx.observe(&[(base + j, Role::Primary)]);
        }
    }
    Ok(())
}
