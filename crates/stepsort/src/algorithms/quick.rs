//! Quick sort.
//!
//! ## Purpose
//!
//! Quick sort with a count-based partition: the pivot is the first element
//! of the range, its final position is found by counting elements at most
//! equal to it, and a two-pointer pass then repairs the strays on either
//! side. The count phase is what the parallel variant turns into a
//! reduction, so the sequential kernel keeps the same three-phase shape.
//!
//! ## Design notes
//!
//! * Partitioning `[5,3,4,1,2]` counts 4 elements <= 5, settles the pivot
//!   at index 4 leaving `[2,3,4,1,5]`, and recurses into `[0,3]`.
//! * The pivot settle and every stray swap open a window; a self-settle
//!   (count 0) skips both the swap and the window.
//! * Duplicates terminate: every level settles at least the pivot slot.
//!
//! ## Invariants
//!
//! * After `partition` returns `c`, `a[..c]` holds only elements <= pivot,
//!   `a[c]` is the pivot, and `a[c + 1..]` holds only elements > pivot.

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
    let c = partition(a, base, ctx);
    let (left, rest) = a.split_at_mut(c);
    let right = &mut rest[1..];
    sort_range(left, base, ctx)?;
    sort_range(right, base + c + 1, ctx)
}

/// Partition around the first element; returns the pivot's settled index.
pub fn partition<T: SortItem>(a: &mut [T], base: usize, ctx: &SortContext) -> usize {
    let pivot = a[0];

    // Phase 1: the pivot's rank is the number of elements <= it.
    let mut count = 0;
    for j in 1..a.len() {
        ctx.record_comparison();
        if a[j] <= pivot {
            count += 1;
        }
    }

    // Phase 2: settle the pivot.
    let c = count;
    if c != 0 {
        a.swap(0, c);
        ctx.record_swap();
        ctx.observe(&[(base + c, Role::Primary), (base, Role::Secondary)]);
    }

    // Phase 3: repair strays. Elements > pivot left of c pair up one-for-one
    // with elements <= pivot right of c.
    let (mut i, mut j) = (0, a.len() - 1);
    while i < c && j > c {
        while i < c {
            ctx.record_comparison();
            if a[i] <= pivot {
                i += 1;
            } else {
                break;
            }
        }
        while j > c {
            ctx.record_comparison();
            if a[j] > pivot {
                j -= 1;
            } else {
                break;
            }
        }
        if i < c && j > c {
            a.swap(i, j);
            ctx.record_swap();
            ctx.observe(&[(base + i, Role::Primary), (base + j, Role::Secondary)]);
            i += 1;
            j -= 1;
        }
    }
    c
}
