//! High-level API for observable sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring pacing, rendering, and tuning, and a
//! runner whose `sort` method executes one algorithm over one slice.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for everything;
//!   `Sorter::new().build()` is a valid silent sorter.
//! * **Validated**: duplicate setter calls and inconsistent tuning are
//!   rejected at `build()`, never at `sort()` time.
//! * **Reusable**: the runner borrows itself immutably and creates a fresh
//!   context per call, so one runner can serve many sorts, concurrently if
//!   desired.
//!
//! ### Configuration flow
//!
//! 1. Create a [`Sorter`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.delay()`, `.renderer()`, ...).
//! 3. Call `.build()` to validate and obtain a [`SortRunner`].
//! 4. Call `.sort(algorithm, &mut data)` as often as needed.

// External dependencies
use std::sync::Arc;
use std::time::Duration;

// Internal dependencies
use crate::algorithms::SortItem;
use crate::engine::executor::{SortExecutor, SortPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::engine::executor::{HeapStrategy, SortPlan};
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::pacing::PacingStrategy;
pub use crate::primitives::renderer::{Frame, NullRenderer, Renderer};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a [`SortRunner`].
#[derive(Clone)]
pub struct Sorter<T: SortItem> {
    /// Per-window pacing delay
    pub delay: Option<Duration>,

    /// Pacing strategy inside observation windows
    pub pacing: Option<PacingStrategy>,

    /// Renderer receiving observation frames
    pub renderer: Option<Arc<dyn Renderer>>,

    /// Spawn threshold for merge sort descents
    pub merge_threshold: Option<usize>,

    /// Spawn threshold for quick sort descents
    pub quick_threshold: Option<usize>,

    /// Spawn threshold for bitonic descents and stages
    pub bitonic_threshold: Option<usize>,

    /// Decomposition strategy for parallel heap sort
    pub heap_strategy: Option<HeapStrategy>,

    /// Chunk count for the chunked heap strategy
    pub chunks: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sort pass function.
    #[doc(hidden)]
    pub custom_sort_pass: Option<SortPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: SortItem> Default for Sorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortItem> Sorter<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            delay: None,
            pacing: None,
            renderer: None,
            merge_threshold: None,
            quick_threshold: None,
            bitonic_threshold: None,
            heap_strategy: None,
            chunks: None,
            custom_sort_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the per-window pacing delay (default: zero, no pacing).
    pub fn delay(mut self, delay: Duration) -> Self {
        if self.delay.is_some() {
            self.duplicate_param = Some("delay");
        }
        self.delay = Some(delay);
        self
    }

    /// Set the pacing strategy (default: [`PacingStrategy::Sleep`]).
    pub fn pacing(mut self, strategy: PacingStrategy) -> Self {
        if self.pacing.is_some() {
            self.duplicate_param = Some("pacing");
        }
        self.pacing = Some(strategy);
        self
    }

    /// Set the renderer (default: [`NullRenderer`]).
    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        if self.renderer.is_some() {
            self.duplicate_param = Some("renderer");
        }
        self.renderer = Some(renderer);
        self
    }

    /// Set the spawn threshold for merge sort descents.
    pub fn merge_threshold(mut self, threshold: usize) -> Self {
        if self.merge_threshold.is_some() {
            self.duplicate_param = Some("merge_threshold");
        }
        self.merge_threshold = Some(threshold);
        self
    }

    /// Set the spawn threshold for quick sort descents.
    pub fn quick_threshold(mut self, threshold: usize) -> Self {
        if self.quick_threshold.is_some() {
            self.duplicate_param = Some("quick_threshold");
        }
        self.quick_threshold = Some(threshold);
        self
    }

    /// Set the spawn threshold for bitonic descents and stages.
    pub fn bitonic_threshold(mut self, threshold: usize) -> Self {
        if self.bitonic_threshold.is_some() {
            self.duplicate_param = Some("bitonic_threshold");
        }
        self.bitonic_threshold = Some(threshold);
        self
    }

    /// Set the decomposition strategy for parallel heap sort.
    pub fn heap_strategy(mut self, strategy: HeapStrategy) -> Self {
        if self.heap_strategy.is_some() {
            self.duplicate_param = Some("heap_strategy");
        }
        self.heap_strategy = Some(strategy);
        self
    }

    /// Set the chunk count for [`HeapStrategy::ChunkedMerge`].
    pub fn chunks(mut self, chunks: usize) -> Self {
        if self.chunks.is_some() {
            self.duplicate_param = Some("chunks");
        }
        self.chunks = Some(chunks);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom sort pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_sort_pass(mut self, sort_pass_fn: Option<SortPassFn<T>>) -> Self {
        self.custom_sort_pass = sort_pass_fn;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and build a runner.
    pub fn build(self) -> Result<SortRunner<T>, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate chunk count if explicitly configured
        if let Some(chunks) = self.chunks {
            Validator::validate_chunks(chunks)?;
        }

        let defaults = SortPlan::default();
        let plan = SortPlan {
            merge_threshold: self.merge_threshold.unwrap_or(defaults.merge_threshold),
            quick_threshold: self.quick_threshold.unwrap_or(defaults.quick_threshold),
            bitonic_threshold: self.bitonic_threshold.unwrap_or(defaults.bitonic_threshold),
            heap_strategy: self.heap_strategy.unwrap_or(defaults.heap_strategy),
            chunks: self.chunks.unwrap_or(defaults.chunks),
        };

        let mut executor = SortExecutor::new()
            .plan(plan)
            .delay(self.delay.unwrap_or(Duration::ZERO))
            .pacing(self.pacing.unwrap_or_default())
            .custom_sort_pass(self.custom_sort_pass);
        if let Some(renderer) = self.renderer {
            executor = executor.renderer(renderer);
        }

        Ok(SortRunner { executor })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// A validated sorter, ready to run.
pub struct SortRunner<T: SortItem> {
    executor: SortExecutor<T>,
}

impl<T: SortItem> std::fmt::Debug for SortRunner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortRunner").finish_non_exhaustive()
    }
}

impl<T: SortItem> SortRunner<T> {
    /// Sort `data` ascending with `algorithm`, blocking until every
    /// observation window has opened and closed.
    pub fn sort(&self, algorithm: Algorithm, data: &mut [T]) -> Result<SortReport, SortError> {
        self.executor.run(algorithm, data)
    }
}
