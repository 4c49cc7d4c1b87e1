//! Layer 2: Algorithms
//!
//! This layer implements the seven sequential sorting kernels. Each kernel
//! sorts a slice in place, ascending, and threads the execution context
//! through so every externally visible mutation opens an observation window
//! and bumps the counters. The kernels are the correctness oracles for the
//! parallel variants in the companion crate.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

// Selection sort: min-scan per prefix position.
pub mod selection;

// Insertion sort: sorted prefix with shift-right.
pub mod insertion;

// Bubble sort: adjacent compare-swap passes.
pub mod bubble;

// Merge sort: top-down recursion with scratch merge.
pub mod merge;

// Quick sort: first-element pivot, count-based placement.
pub mod quick;

// Heap sort: sift-up build, sift-down extraction.
pub mod heap;

// Bitonic sort: recursive sorting network.
pub mod bitonic;

// ============================================================================
// Item Bound
// ============================================================================

/// Element bound shared by every kernel.
///
/// Keys need a total order, cheap copying (elements move through scratch
/// buffers and priority queues by value), and thread-safety so the same
/// kernels serve the parallel engine. Blanket-implemented; integers and
/// other plain keys qualify automatically.
pub trait SortItem: Ord + Copy + Debug + Send + Sync {}

impl<T: Ord + Copy + Debug + Send + Sync> SortItem for T {}

// ============================================================================
// Algorithm Selection
// ============================================================================

/// The seven supported comparison sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Bubble sort.
    Bubble,
    /// Merge sort.
    Merge,
    /// Quick sort.
    Quick,
    /// Heap sort.
    Heap,
    /// Bitonic sort (power-of-two lengths only).
    Bitonic,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bitonic,
    ];

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Bitonic => "bitonic",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Whether the slice is in ascending order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
