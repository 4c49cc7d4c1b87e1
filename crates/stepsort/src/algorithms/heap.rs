//! Heap sort.
//!
//! ## Purpose
//!
//! In-place max-heap sort: build the heap by sifting each element up through
//! growing prefixes, then repeatedly swap the root to the shrinking tail and
//! sift the new root down. Both phases animate well because every step is a
//! parent/child swap.
//!
//! ## Design notes
//!
//! * `sift_down` is exposed for the parallel engine, which reuses it for
//!   the sequential extraction phase after its parallel heapify.
//! * The heap invariant is `parent >= child` over `a[..heap_len]`.

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
    build_max_heap(a, base, ctx);
    for end in (1..a.len()).rev() {
        a.swap(0, end);
        ctx.record_swap();
        ctx.observe(&[(base, Role::Primary), (base + end, Role::Secondary)]);
        sift_down(&mut a[..end], 0, base, ctx);
    }
    Ok(())
}

/// Establish the max-heap property by sift-up over growing prefixes.
pub fn build_max_heap<T: SortItem>(a: &mut [T], base: usize, ctx: &SortContext) {
    for i in 1..a.len() {
        sift_up(a, i, base, ctx);
    }
}

fn sift_up<T: SortItem>(a: &mut [T], mut child: usize, base: usize, ctx: &SortContext) {
    while child > 0 {
        let parent = (child - 1) / 2;
        ctx.record_comparison();
        if a[child] <= a[parent] {
            break;
        }
        a.swap(child, parent);
        ctx.record_swap();
        ctx.observe(&[(base + parent, Role::Primary), (base + child, Role::Secondary)]);
        child = parent;
    }
}

/// Restore the heap property below `node`, treating `a` as the live heap.
pub fn sift_down<T: SortItem>(a: &mut [T], mut node: usize, base: usize, ctx: &SortContext) {
    loop {
        let mut largest = node;
        let left = 2 * node + 1;
        let right = left + 1;
        if left < a.len() {
            ctx.record_comparison();
            if a[left] > a[largest] {
                largest = left;
            }
        }
        if right < a.len() {
            ctx.record_comparison();
            if a[right] > a[largest] {
                largest = right;
            }
        }
        if largest == node {
            break;
        }
        a.swap(node, largest);
        ctx.record_swap();
        ctx.observe(&[(base + node, Role::Primary), (base + largest, Role::Secondary)]);
        node = largest;
    }
}
