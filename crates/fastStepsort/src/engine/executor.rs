//! Parallel pass dispatch.
//!
//! ## Purpose
//!
//! This module provides the sort pass that is injected into the `stepsort`
//! executor through its custom-pass hook. It routes each algorithm to its
//! parallel driver; the core executor keeps ownership of validation, the
//! run context, lifecycle, and reporting.
//!
//! ## Design notes
//!
//! * **Implementation**: a drop-in replacement for the sequential pass,
//!   same signature, same observation semantics.
//! * **Parallelism**: the drivers use `rayon` fork-join and data-parallel
//!   stages; which pool they run on is decided by the caller (the api layer
//!   installs the configured pool around the whole run).
//! * **Tuning**: thresholds, heap strategy, and chunk count ride in the
//!   plan inside the context, because a function pointer cannot capture.
//! * **Insertion**: has no parallel decomposition; the sequential kernel
//!   runs unchanged.
//!
//! ## Non-goals
//!
//! * This module does not construct worker pools (api layer).
//! * This module does not validate input (core validator).

// Export dependencies from stepsort crate
use stepsort::algorithms::{Algorithm, SortItem, insertion};
use stepsort::engine::context::SortContext;
use stepsort::primitives::errors::SortError;

// Internal dependencies
use crate::engine::{bitonic, exchange, heap, merge, quick};

// ============================================================================
// Parallel Sort Pass
// ============================================================================

/// Run one full sort of `data` with the parallel driver for `algorithm`.
///
/// Matches the `SortPassFn` hook signature in the core executor.
pub fn sort_pass_parallel<T: SortItem>(
    algorithm: Algorithm,
    data: &mut [T],
    ctx: &SortContext,
) -> Result<(), SortError> {
    match algorithm {
        Algorithm::Selection => exchange::selection_sort(data, ctx),
        Algorithm::Insertion => insertion::sort(data, ctx),
        Algorithm::Bubble => exchange::odd_even_sort(data, ctx),
        Algorithm::Merge => merge::sort(data, ctx),
        Algorithm::Quick => quick::sort(data, ctx),
        Algorithm::Heap => heap::sort(data, ctx),
        Algorithm::Bitonic => bitonic::sort(data, ctx),
    }
}
