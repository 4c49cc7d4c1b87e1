//! Parallel heap sort strategies.
//!
//! ## Purpose
//!
//! This module provides the two decompositions for parallel heap sort:
//!
//! * **Subtree heapify** (default): build the max-heap level stripe by
//!   level stripe, from the deepest parents upward. Nodes in one stripe
//!   root disjoint subtrees, so their sift-downs run concurrently; the
//!   parallel iterator's completion is the barrier between stripes.
//!   Extraction then runs sequentially with the kernel's `sift_down`.
//! * **Chunked k-way merge**: split the sequence into k contiguous chunks,
//!   heap-sort each chunk concurrently with the sequential kernel, then
//!   merge the sorted chunks through a min-priority queue keyed
//!   `(value, chunk, position)` and write back through a scratch buffer.
//!
//! ## Design notes
//!
//! * Same-stripe subtrees are index-disjoint but interleaved in memory, so
//!   `split_at_mut` cannot express the partition; the stripe loop goes
//!   through a raw-pointer cell instead (see `RawHeap`).
//! * The queue key makes equal values pop in ascending chunk order, so the
//!   merge is deterministic. Queue-internal comparisons stay off the
//!   counters; the writeback is the observed phase, one window per slot.
//! * A chunk count of 1, or fewer elements than chunks, degenerates to the
//!   sequential kernel over the whole slice.
//!
//! ## Invariants
//!
//! * After heapify, `parent >= child` holds over the whole slice.
//! * Scratch allocation failure leaves the slice a permutation of its
//!   input (chunks sorted in place, nothing moved across chunks).

// External dependencies
use log::trace;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ptr;

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;
use stepsort::algorithms::heap as kernel;
use stepsort::algorithms::merge::reserve_scratch;
use stepsort::engine::context::SortContext;
use stepsort::engine::executor::HeapStrategy;
use stepsort::primitives::errors::SortError;
use stepsort::primitives::highlight::Role;

/// Sort `a` ascending with the strategy selected in the plan.
pub fn sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    match ctx.plan().heap_strategy {
        HeapStrategy::SubtreeHeapify => subtree_sort(a, ctx),
        HeapStrategy::ChunkedMerge => chunked_sort(a, ctx),
    }
}

// ============================================================================
// Strategy 1: Subtree Heapify
// ============================================================================

/// Parallel heapify, then sequential extraction.
pub fn subtree_sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    parallel_heapify(a, ctx);
    for end in (1..a.len()).rev() {
        a.swap(0, end);
        ctx.record_swap();
        ctx.observe(&[(0, Role::Primary), (end, Role::Secondary)]);
        kernel::sift_down(&mut a[..end], 0, 0, ctx);
    }
    Ok(())
}

/// Establish the max-heap property, one level stripe at a time.
fn parallel_heapify<T: SortItem>(a: &mut [T], ctx: &SortContext) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let last_parent = n / 2 - 1;
    let heap = RawHeap {
        ptr: a.as_mut_ptr(),
        len: n,
    };
    let max_depth = (last_parent + 1).ilog2();
    for depth in (0..=max_depth).rev() {
        let first = (1usize << depth) - 1;
        let last = ((1usize << (depth + 1)) - 2).min(last_parent);
        (first..=last).into_par_iter().for_each(|node| {
            // SAFETY: nodes of one stripe root disjoint subtrees, so the
            // concurrent sift-downs touch disjoint indices; stripes are
            // sequenced by the iterator completing before the next loop
            // iteration.
            unsafe { heap.sift_down(node, ctx) };
        });
    }
}

/// Raw view of the heap array for stripe-parallel sift-downs.
///
/// `split_at_mut` cannot carve out a subtree (its indices are interleaved
/// with its siblings'), so the stripe loop shares this cell and every task
/// confines itself to the subtree under its node.
struct RawHeap<T> {
    ptr: *mut T,
    len: usize,
}

// SAFETY: shared only across tasks whose subtrees are index-disjoint; no
// element is reachable from two concurrent tasks.
unsafe impl<T: Send> Sync for RawHeap<T> {}

impl<T: SortItem> RawHeap<T> {
    /// Restore the heap property below `node`.
    ///
    /// # Safety
    ///
    /// No concurrent call may touch any index in `node`'s subtree, and
    /// `self.ptr` must stay valid for `self.len` elements for the duration.
    unsafe fn sift_down(&self, mut node: usize, ctx: &SortContext) {
        loop {
            let mut largest = node;
            let left = 2 * node + 1;
            let right = left + 1;
            if left < self.len {
                ctx.record_comparison();
                if unsafe { *self.ptr.add(left) > *self.ptr.add(largest) } {
                    largest = left;
                }
            }
            if right < self.len {
                ctx.record_comparison();
                if unsafe { *self.ptr.add(right) > *self.ptr.add(largest) } {
                    largest = right;
                }
            }
            if largest == node {
                break;
            }
            unsafe { ptr::swap(self.ptr.add(node), self.ptr.add(largest)) };
            ctx.record_swap();
            ctx.observe(&[(node, Role::Primary), (largest, Role::Secondary)]);
            node = largest;
        }
    }
}

// ============================================================================
// Strategy 2: Chunked K-Way Merge
// ============================================================================

/// Heap-sort k contiguous chunks concurrently, then k-way merge them.
pub fn chunked_sort<T: SortItem>(a: &mut [T], ctx: &SortContext) -> Result<(), SortError> {
    let n = a.len();
    let chunks = ctx.plan().chunks;
    if chunks <= 1 || n <= chunks {
        return kernel::sort_range(a, 0, ctx);
    }

    let chunk_len = n.div_ceil(chunks);
    trace!(
        "chunked heap sort: n={}, chunks={}, chunk_len={}",
        n, chunks, chunk_len
    );

    a.par_chunks_mut(chunk_len)
        .enumerate()
        .try_for_each(|(i, chunk)| kernel::sort_range(chunk, i * chunk_len, ctx))?;

    kway_merge(a, chunk_len, ctx)
}

/// Merge sorted contiguous chunks of width `chunk_len` through a scratch
/// buffer, opening a window per writeback slot.
fn kway_merge<T: SortItem>(
    a: &mut [T],
    chunk_len: usize,
    ctx: &SortContext,
) -> Result<(), SortError> {
    let mut merged = reserve_scratch::<T>(a.len())?;

    // Min-queue keyed (value, chunk, position): equal values pop in
    // ascending chunk order.
    let mut queue = BinaryHeap::new();
    for (chunk_idx, chunk) in a.chunks(chunk_len).enumerate() {
        if let Some(&head) = chunk.first() {
            queue.push(Reverse((head, chunk_idx, 0usize)));
        }
    }

    while let Some(Reverse((value, chunk_idx, pos))) = queue.pop() {
        merged.push(value);
        let start = chunk_idx * chunk_len;
        let chunk = &a[start..(start + chunk_len).min(a.len())];
        let next = pos + 1;
        if next < chunk.len() {
            queue.push(Reverse((chunk[next], chunk_idx, next)));
        }
    }

    for (k, value) in merged.into_iter().enumerate() {
        a[k] = value;
        ctx.record_write();
        ctx.observe(&[(k, Role::Primary)]);
    }
    Ok(())
}
