//! Observable comparison sorting for animated rendering.
//!
//! ## Overview
//!
//! `stepsort` sorts an in-memory slice with one of seven classic
//! comparison-based algorithms while reporting *observation windows* to an
//! external renderer. Each externally visible mutation (a swap or a
//! writeback) marks the indices involved in a highlight registry, hands the
//! renderer an immutable snapshot, stalls for a configurable pacing delay,
//! and unmarks. Run with a zero delay the engine is an ordinary sorting
//! library; run with a positive delay it is the data source for a sorting
//! animation.
//!
//! The crate renders nothing itself. Drawing, window management, and input
//! belong to the embedding application; the engine only guarantees that the
//! highlight snapshots it publishes are internally consistent and that the
//! completion flag is set exactly once, after the final element settles.
//!
//! ## Algorithms
//!
//! | Algorithm  | Strategy                          | Notes                          |
//! |------------|-----------------------------------|--------------------------------|
//! | Selection  | min-scan per prefix position      | one swap per outer iteration   |
//! | Insertion  | sorted prefix, shift-right        | write-based, no swaps          |
//! | Bubble     | adjacent compare-swap passes      | early exit on a clean pass     |
//! | Merge      | top-down recursion, scratch merge | fallible scratch allocation    |
//! | Quick      | first-element pivot, count-place  | two-pointer stray repair       |
//! | Heap       | sift-up build, sift-down extract  | in-place max-heap              |
//! | Bitonic    | recursive sorting network         | power-of-two lengths only      |
//!
//! All seven are the sequential baselines that the companion `fastStepsort`
//! crate treats as correctness oracles for its parallel variants.
//!
//! ## Quick start
//!
//! ```
//! use stepsort::prelude::*;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! let sorter = Sorter::new().build()?;
//! let report = sorter.sort(Quick, &mut data)?;
//!
//! assert_eq!(data, [1, 2, 3, 4, 5]);
//! assert_eq!(report.len, 5);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! Attaching a renderer and a delay turns the same call into an animation
//! feed:
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use stepsort::prelude::*;
//!
//! let mut data = vec![3, 1, 2];
//! let sorter = Sorter::new()
//!     .delay(Duration::ZERO) // positive in a real animation
//!     .pacing(Sleep)
//!     .renderer(Arc::new(NullRenderer))
//!     .build()?;
//! sorter.sort(Bubble, &mut data)?;
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized in four layers; each depends only on the layers
//! below it:
//!
//! ```text
//! Layer 4: API         (fluent builder, prelude)
//!   ↓
//! Layer 3: Engine      (context, executor, validator, report)
//!   ↓
//! Layer 2: Algorithms  (the seven sequential kernels)
//!   ↓
//! Layer 1: Primitives  (errors, highlights, pacing, renderer seam)
//! ```

// External dependencies are limited to the `log` facade; everything else is
// standard library.

/// Layer 1: shared primitives (errors, highlight registry, pacing, renderer).
pub mod primitives;

/// Layer 2: the sequential sorting kernels.
pub mod algorithms;

/// Layer 3: execution engine (context, executor, validator, output).
pub mod engine;

/// Layer 4: public fluent API.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Common imports for typical usage.
///
/// Re-exports the builder, the error and report types, and the enum variants
/// (`Quick`, `Sleep`, `Primary`, ...) so call sites stay short.
pub mod prelude {
    pub use crate::algorithms::Algorithm::{
        self, Bitonic, Bubble, Heap, Insertion, Merge, Quick, Selection,
    };
    pub use crate::algorithms::SortItem;
    pub use crate::algorithms::bitonic::Direction::{self, Ascending, Descending};
    pub use crate::api::{SortRunner, Sorter};
    pub use crate::engine::executor::HeapStrategy::{self, ChunkedMerge, SubtreeHeapify};
    pub use crate::engine::executor::SortPlan;
    pub use crate::engine::output::SortReport;
    pub use crate::primitives::errors::SortError;
    pub use crate::primitives::highlight::Role::{self, Primary, Secondary};
    pub use crate::primitives::highlight::{HighlightRegistry, HighlightSnapshot};
    pub use crate::primitives::pacing::PacingStrategy::{self, Sleep, Spin};
    pub use crate::primitives::renderer::{Frame, NullRenderer, Renderer};
}

// ============================================================================
// Internals (dev only)
// ============================================================================

/// White-box access for tests and companion crates.
///
/// Not part of the stable API surface.
#[cfg(feature = "dev")]
pub mod internals {
    pub use crate::engine::context::{SortContext, StepCounters};
    pub use crate::engine::executor::{SortExecutor, SortPassFn};
    pub use crate::engine::validator::Validator;
    pub use crate::primitives::pacing::Pacer;
}
