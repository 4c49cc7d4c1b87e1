//! # Fast stepsort
//!
//! Parallel observable sorting on top of the [`stepsort`] engine:
//! multi-threaded recursive splits, staged exchanges, and k-way merges,
//! with the same observation windows, counters, and reports as the
//! sequential baselines.
//!
//! ## What is observable sorting?
//!
//! The `stepsort` engine sorts a slice while reporting *observation
//! windows* to an external renderer: around each externally visible
//! mutation it marks the indices involved, hands the renderer a snapshot,
//! stalls for a configurable delay, and unmarks. This crate keeps that
//! contract and replaces the sequential kernels with fork-join drivers, so
//! large inputs sort on all cores and animations show several regions
//! moving at once.
//!
//! The sequential baselines remain the correctness oracles: for any input,
//! a parallel variant produces exactly the sequence its baseline produces.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastStepsort::prelude::*;
//!
//! let mut data = vec![9, 1, 5, 3, 8, 2];
//!
//! // Build the runner with parallel execution (default)
//! let sorter = ParallelSorter::new()
//!     .threads(2)     // Worker pool size
//!     .build()?;
//!
//! let report = sorter.sort(Quick, &mut data)?;
//!
//! assert_eq!(data, [1, 2, 3, 5, 8, 9]);
//! println!("{}", report);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:   quick
//!   Elements:    6
//!   Comparisons: 17
//!   Swaps:       3
//!   Writes:      0
//!   Elapsed:     12.3µs
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use fastStepsort::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let mut data: Vec<i64> = (0..64).rev().collect();
//!
//! let sorter = ParallelSorter::new()
//!     .threads(4)                      // Worker pool size
//!     .delay(Duration::ZERO)           // Positive in a real animation
//!     .pacing(Spin)                    // Hold workers inside windows
//!     .renderer(Arc::new(NullRenderer))
//!     .merge_threshold(16)             // Fork descents above 16 elements
//!     .quick_threshold(16)
//!     .bitonic_threshold(16)
//!     .heap_strategy(ChunkedMerge)     // Chunk, sort, k-way merge
//!     .chunks(4)
//!     .build()?;
//!
//! let report = sorter.sort(Bitonic, &mut data)?;
//! assert_eq!(report.len, 64);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Sequential Escape Hatch
//!
//! `.parallel(false)` builds a runner without a pool or pass hook; every
//! algorithm runs its sequential baseline:
//!
//! ```rust
//! use fastStepsort::prelude::*;
//!
//! let mut data = vec![3, 1, 2];
//! let sorter = ParallelSorter::new().parallel(false).build()?;
//! sorter.sort(Heap, &mut data)?;
//! assert_eq!(data, [1, 2, 3]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `sort` method returns a `Result<SortReport, SortError>`.
//!
//! - **`Ok(SortReport)`**: the counters and wall time of the finished run.
//! - **`Err(SortError)`**: a failure (invalid bitonic length, scratch
//!   allocation failure, pool construction failure, builder hygiene).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use fastStepsort::prelude::*;
//! # let mut data = vec![4, 2, 3, 1];
//!
//! let sorter = ParallelSorter::new().build()?;
//! let report = sorter.sort(Merge, &mut data)?;
//! # let _ = report;
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use fastStepsort::prelude::*;
//! # let mut data = vec![4, 2, 3];
//!
//! let sorter = ParallelSorter::new().build()?;
//!
//! match sorter.sort(Bitonic, &mut data) {
//!     Ok(report) => println!("sorted {} elements", report.len),
//!     Err(e) => eprintln!("sort failed: {}", e),
//! }
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! (The example above fails: bitonic requires a power-of-two length.)

#![allow(non_snake_case)]

// Layer: Engine - parallel drivers and pass dispatch.
mod engine;

// High-level fluent API for parallel sorting.
mod api;

// Standard fastStepsort prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm::{self, Bitonic, Bubble, Heap, Insertion, Merge, Quick, Selection},
        Frame,
        HeapStrategy::{self, ChunkedMerge, SubtreeHeapify},
        NullRenderer,
        PacingStrategy::{self, Sleep, Spin},
        ParallelSortRunner, ParallelSorter, Renderer,
        Role::{self, Primary, Secondary},
        SortError, SortPlan, SortReport,
    };
    pub use stepsort::algorithms::SortItem;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
