//! High-level API for observable sorting with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for sorting
//! with multi-threaded execution. It wraps the `stepsort` builder, injects
//! the parallel pass hook, and owns the worker pool the run executes on.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: re-uses the base `stepsort` builder; every
//!   core setter is delegated.
//! * **Parallel-First**: parallel execution is the default; `.parallel(false)`
//!   is the escape hatch back to the sequential engine.
//! * **Dedicated Pool**: `build()` constructs a rayon pool sized by
//!   `.threads(n)`; `sort` installs it around the whole run so every fork
//!   inside the drivers lands on it.
//! * **Pacing**: parallel runs default to spin pacing inside observation
//!   windows. A sleeping worker's queued tasks get redistributed by the
//!   scheduler and the animation cadence collapses; spinning holds the
//!   worker. Sequential fallback keeps the core's sleep default.
//!
//! ### Configuration flow
//!
//! 1. Create a [`ParallelSorter`] via `ParallelSorter::new()`.
//! 2. Chain configuration methods (`.threads()`, `.delay()`, ...).
//! 3. Call `.build()` to validate, build the pool, and obtain a
//!    [`ParallelSortRunner`].
//! 4. Call `.sort(algorithm, &mut data)` as often as needed.

// External dependencies
use log::debug;
use rayon::ThreadPoolBuilder;
use std::sync::Arc;
use std::time::Duration;

// Export dependencies from stepsort crate
use stepsort::algorithms::SortItem;

// Internal dependencies
use crate::engine::executor::sort_pass_parallel;

// Publicly re-exported types
pub use stepsort::algorithms::Algorithm;
pub use stepsort::api::{SortRunner, Sorter};
pub use stepsort::engine::executor::{HeapStrategy, SortPlan};
pub use stepsort::engine::output::SortReport;
pub use stepsort::primitives::errors::SortError;
pub use stepsort::primitives::highlight::Role;
pub use stepsort::primitives::pacing::PacingStrategy;
pub use stepsort::primitives::renderer::{Frame, NullRenderer, Renderer};

/// Worker pool size matching the original tuning.
const DEFAULT_THREADS: usize = 4;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a [`ParallelSortRunner`].
#[derive(Clone)]
pub struct ParallelSorter<T: SortItem> {
    /// Base builder from the stepsort crate
    pub base: Sorter<T>,

    /// Worker pool size (0 lets the pool pick)
    pub threads: Option<usize>,

    /// Whether to run the parallel drivers at all
    pub parallel: Option<bool>,
}

impl<T: SortItem> Default for ParallelSorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortItem> ParallelSorter<T> {
    /// Create a new builder with default settings.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the stepsort `Sorter`
    /// * threads: 4
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            base: Sorter::new(),
            threads: None,
            parallel: None,
        }
    }

    /// Set the worker pool size. `0` lets the pool pick its own size.
    pub fn threads(mut self, threads: usize) -> Self {
        if self.threads.is_some() {
            self.base.duplicate_param = Some("threads");
        }
        self.threads = Some(threads);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the per-window pacing delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.base = self.base.delay(delay);
        self
    }

    /// Set the pacing strategy.
    pub fn pacing(mut self, strategy: PacingStrategy) -> Self {
        self.base = self.base.pacing(strategy);
        self
    }

    /// Set the renderer.
    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.base = self.base.renderer(renderer);
        self
    }

    /// Set the spawn threshold for merge sort descents.
    pub fn merge_threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.merge_threshold(threshold);
        self
    }

    /// Set the spawn threshold for quick sort descents.
    pub fn quick_threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.quick_threshold(threshold);
        self
    }

    /// Set the spawn threshold for bitonic descents and stages.
    pub fn bitonic_threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.bitonic_threshold(threshold);
        self
    }

    /// Set the decomposition strategy for parallel heap sort.
    pub fn heap_strategy(mut self, strategy: HeapStrategy) -> Self {
        self.base = self.base.heap_strategy(strategy);
        self
    }

    /// Set the chunk count for [`HeapStrategy::ChunkedMerge`].
    pub fn chunks(mut self, chunks: usize) -> Self {
        self.base = self.base.chunks(chunks);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration, build the worker pool, and build a runner.
    pub fn build(self) -> Result<ParallelSortRunner<T>, SortError> {
        let parallel = self.parallel.unwrap_or(true);
        let threads = self.threads.unwrap_or(DEFAULT_THREADS);

        let mut base = self.base;
        if parallel {
            if base.pacing.is_none() {
                base = base.pacing(PacingStrategy::Spin);
            }
            base = base.custom_sort_pass(Some(sort_pass_parallel::<T>));
        }
        let runner = base.build()?;

        let pool = if parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SortError::WorkerPoolUnavailable(e.to_string()))?;
            debug!("worker pool ready: {} threads", pool.current_num_threads());
            Some(pool)
        } else {
            None
        };

        Ok(ParallelSortRunner { runner, pool })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// A validated parallel sorter, ready to run.
pub struct ParallelSortRunner<T: SortItem> {
    runner: SortRunner<T>,
    pool: Option<rayon::ThreadPool>,
}

impl<T: SortItem> std::fmt::Debug for ParallelSortRunner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelSortRunner").finish_non_exhaustive()
    }
}

impl<T: SortItem> ParallelSortRunner<T> {
    /// Sort `data` ascending with `algorithm` on the configured pool,
    /// blocking until every observation window has opened and closed.
    pub fn sort(&self, algorithm: Algorithm, data: &mut [T]) -> Result<SortReport, SortError> {
        match &self.pool {
            Some(pool) => pool.install(|| self.runner.sort(algorithm, data)),
            None => self.runner.sort(algorithm, data),
        }
    }
}
