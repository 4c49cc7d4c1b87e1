//! Fork-join quick sort.
//!
//! ## Purpose
//!
//! This module provides the parallel quick sort driver. The partition keeps
//! the sequential kernel's three-phase shape, but phase 1 (counting the
//! elements at most equal to the pivot) becomes a parallel reduction; the
//! pivot settle and the two-pointer stray repair stay strictly sequential,
//! so the swap sequence matches the baseline exactly.
//!
//! ## Design notes
//!
//! * Descent splits around the settled pivot slot; the pivot element is
//!   final before either side forks.
//! * The reduction's comparisons are recorded as one bulk add, keeping the
//!   counter equal to the sequential kernel's.
//! * At or below the threshold the sequential kernel runs inline.
//!
//! ## Invariants
//!
//! * After `partition` returns `c`, the same postcondition as the sequential
//!   kernel holds: `a[..c]` at most the pivot, `a[c]` the pivot, `a[c + 1..]`
//!   above it.

// External dependencies
use rayon::prelude::*;

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;
use stepsort::algorithms::quick as kernel;
use stepsort::engine::context::SortContext;
use stepsort::primitives::errors::SortError;
use stepsort::primitives::highlight::Role;

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
    if a.len() <= ctx.plan().quick_threshold {
        return kernel::sort_range(a, base, ctx);
    }
    let c = partition(a, base, ctx);
    let (left, rest) = a.split_at_mut(c);
    let right = &mut rest[1..];
    let (first, second) = rayon::join(
        || sort_range(left, base, ctx),
        || sort_range(right, base + c + 1, ctx),
    );
    first?;
    second
}

/// Partition around the first element; returns the pivot's settled index.
///
/// Phase 1 runs as a parallel count; phases 2 and 3 mirror the sequential
/// kernel swap for swap.
pub fn partition<T: SortItem>(a: &mut [T], base: usize, ctx: &SortContext) -> usize {
    let pivot = a[0];

    // Phase 1: the pivot's rank, as a parallel reduction over the tail.
    let count = a[1..].par_iter().filter(|&&x| x <= pivot).count();
    ctx.record_comparisons((a.len() - 1) as u64);

    // Phase 2: settle the pivot.
    let c = count;
    if c != 0 {
        a.swap(0, c);
        ctx.record_swap();
        ctx.observe(&[(base + c, Role::Primary), (base, Role::Secondary)]);
    }

    // Phase 3: repair strays, exactly as the sequential kernel does.
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
