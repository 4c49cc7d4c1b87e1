//! Parallel exchange sorts.
//!
//! ## Purpose
//!
//! This module provides the parallel variants of the two exchange-based
//! algorithms that decompose:
//!
//! * **Selection**: the inner minimum scan becomes a parallel `min` over
//!   `(value, index)` pairs, so ties break deterministically toward the
//!   lowest index. The one swap per outer iteration stays sequential.
//! * **Bubble**: odd-even transposition. Phase `p` compare-swaps the
//!   disjoint adjacent pairs starting at parity `p % 2` as a parallel
//!   iteration over exact chunks of two; phases run in sequence. Two
//!   consecutive clean phases cover both parities on an unchanged array
//!   and prove it sorted.
//!
//! ## Design notes
//!
//! * The reduction cannot watch the running minimum improve the way the
//!   sequential scan does, so selection opens a window only on the swap.
//! * The phase flag is a relaxed atomic; the parallel iterator's completion
//!   orders its writes before the read.
//! * Insertion has no profitable decomposition; the dispatcher runs the
//!   sequential kernel for it.
//!
//! ## Invariants
//!
//! * Already-sorted input performs zero swaps under both variants.

// External dependencies
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;
use stepsort::engine::context::SortContext;
use stepsort::primitives::errors::SortError;
use stepsort::primitives::highlight::Role;

/// Selection sort with a parallel minimum reduction per prefix position.
pub fn selection_sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let candidate = a[i..]
            .par_iter()
            .enumerate()
            .map(|(offset, &value)| (value, i + offset))
            .min();
        ctx.record_comparisons((n - i - 1) as u64);
        if let Some((_, min)) = candidate {
            if min != i {
                a.swap(i, min);
                ctx.record_swap();
                ctx.observe(&[(i, Role::Primary), (min, Role::Secondary)]);
            }
        }
    }
    Ok(())
}

/// Bubble sort as odd-even transposition with parallel phases.
pub fn odd_even_sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    let n = a.len();
    if n <= 1 {
        return Ok(());
    }
    let mut clean_streak = 0;
    for phase in 0..n {
        let offset = phase % 2;
        let swapped = AtomicBool::new(false);
        a[offset..]
            .par_chunks_exact_mut(2)
            .enumerate()
            .for_each(|(pair_idx, pair)| {
                ctx.record_comparison();
                if pair[0] > pair[1] {
                    pair.swap(0, 1);
                    ctx.record_swap();
                    swapped.store(true, Ordering::Relaxed);
                    let left = offset + 2 * pair_idx;
                    ctx.observe(&[(left + 1, Role::Primary), (left, Role::Secondary)]);
                }
            });
        if swapped.load(Ordering::Relaxed) {
            clean_streak = 0;
        } else {
            clean_streak += 1;
            if clean_streak == 2 {
                break;
            }
        }
    }
    Ok(())
}
