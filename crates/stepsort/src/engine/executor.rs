//! Run orchestration and pass dispatch.
//!
//! ## Purpose
//!
//! This module provides the executor that turns a configured plan and an
//! algorithm choice into a finished run: validate, build the per-run
//! context, dispatch to the sequential kernel or an injected custom pass,
//! then settle the lifecycle (final frame on success, highlight cleanup on
//! failure) and shape the counters into a report.
//!
//! ## Design notes
//!
//! * The custom pass hook is how the companion crate swaps the sequential
//!   kernels for fork-join drivers without the core knowing about thread
//!   pools. The hook is a plain function pointer; everything it needs at
//!   runtime travels inside the [`SortContext`], including the tuning plan.
//! * Inputs of length <= 1 skip dispatch entirely: validated, reported,
//!   zero windows.
//!
//! ## Invariants
//!
//! * Validation precedes every mutation.
//! * On error the registry is cleared and the completion flag stays false.
//!
//! ## Non-goals
//!
//! * This module does not construct worker pools (companion crate).
//! * This module does not validate builder hygiene (api layer).

// External dependencies
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Internal dependencies
use crate::algorithms::{Algorithm, SortItem, bitonic, bubble, heap, insertion, merge, quick, selection};
use crate::engine::context::SortContext;
use crate::engine::output::SortReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::pacing::{Pacer, PacingStrategy};
use crate::primitives::renderer::{NullRenderer, Renderer};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom sort pass (e.g., for parallelization).
#[doc(hidden)]
pub type SortPassFn<T> = fn(
    Algorithm,        // requested algorithm
    &mut [T],         // sequence to sort
    &SortContext,     // per-run shared state, including the plan
) -> Result<(), SortError>;

// ============================================================================
// Tuning Plan
// ============================================================================

/// How the heap variant decomposes work in the parallel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapStrategy {
    /// Parallel heapify over independent subtrees, sequential extraction.
    #[default]
    SubtreeHeapify,
    /// Sort contiguous chunks concurrently, then k-way merge them.
    ChunkedMerge,
}

/// Tuning knobs consumed by the drivers.
///
/// The thresholds are sub-slice lengths: a fork-join driver spawns its two
/// descents as tasks only while the current sub-slice is longer than the
/// threshold, and runs the sequential kernel below it. Defaults match the
/// constants the algorithms were originally tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPlan {
    /// Spawn threshold for merge sort descents.
    pub merge_threshold: usize,
    /// Spawn threshold for quick sort descents.
    pub quick_threshold: usize,
    /// Spawn threshold for bitonic descents and stages.
    pub bitonic_threshold: usize,
    /// Decomposition strategy for parallel heap sort.
    pub heap_strategy: HeapStrategy,
    /// Chunk count for [`HeapStrategy::ChunkedMerge`].
    pub chunks: usize,
}

impl Default for SortPlan {
    fn default() -> Self {
        Self {
            merge_threshold: 5_000,
            quick_threshold: 10_000,
            bitonic_threshold: 5_000,
            heap_strategy: HeapStrategy::default(),
            chunks: 4,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates sort runs for one configuration.
#[derive(Clone)]
pub struct SortExecutor<T: SortItem> {
    plan: SortPlan,
    pacing: PacingStrategy,
    delay: Duration,
    renderer: Arc<dyn Renderer>,
    custom_sort_pass: Option<SortPassFn<T>>,
}

impl<T: SortItem> Default for SortExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortItem> SortExecutor<T> {
    /// Executor with default tuning, zero delay, and a null renderer.
    pub fn new() -> Self {
        Self {
            plan: SortPlan::default(),
            pacing: PacingStrategy::default(),
            delay: Duration::ZERO,
            renderer: Arc::new(NullRenderer),
            custom_sort_pass: None,
        }
    }

    /// Set the tuning plan.
    pub fn plan(mut self, plan: SortPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Set the pacing strategy.
    pub fn pacing(mut self, pacing: PacingStrategy) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the per-window delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the renderer.
    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom sort pass (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_sort_pass(mut self, sort_pass_fn: Option<SortPassFn<T>>) -> Self {
        self.custom_sort_pass = sort_pass_fn;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run one sort to completion.
    pub fn run(&self, algorithm: Algorithm, data: &mut [T]) -> Result<SortReport, SortError> {
        Validator::validate_plan(algorithm, data.len())?;
        if algorithm == Algorithm::Heap && self.plan.heap_strategy == HeapStrategy::ChunkedMerge {
            Validator::validate_chunks(self.plan.chunks)?;
        }

        let ctx = SortContext::new(
            Pacer::new(self.pacing, self.delay),
            Arc::clone(&self.renderer),
            self.plan,
        );
        debug!(
            "{} sort: n={}, pass={}",
            algorithm,
            data.len(),
            if self.custom_sort_pass.is_some() {
                "custom"
            } else {
                "sequential"
            }
        );

        let started = Instant::now();
        let outcome = if data.len() <= 1 {
            Ok(())
        } else if let Some(pass) = self.custom_sort_pass {
            pass(algorithm, data, &ctx)
        } else {
            Self::sequential_pass(algorithm, data, &ctx)
        };

        match outcome {
            Ok(()) => {
                ctx.finish();
                let report = SortReport {
                    algorithm,
                    len: data.len(),
                    comparisons: ctx.counters().comparisons(),
                    swaps: ctx.counters().swaps(),
                    writes: ctx.counters().writes(),
                    elapsed: started.elapsed(),
                };
                debug!(
                    "{} sort done: {} comparisons, {} swaps, {} writes in {:?}",
                    algorithm, report.comparisons, report.swaps, report.writes, report.elapsed
                );
                Ok(report)
            }
            Err(err) => {
                ctx.abort();
                Err(err)
            }
        }
    }

    // ========================================================================
    // Sequential Dispatch
    // ========================================================================

    /// Dispatch to the sequential kernel for `algorithm`.
    pub fn sequential_pass(
        algorithm: Algorithm,
        data: &mut [T],
        ctx: &SortContext,
    ) -> Result<(), SortError> {
        match algorithm {
            Algorithm::Selection => selection::sort(data, ctx),
            Algorithm::Insertion => insertion::sort(data, ctx),
            Algorithm::Bubble => bubble::sort(data, ctx),
            Algorithm::Merge => merge::sort(data, ctx),
            Algorithm::Quick => quick::sort(data, ctx),
            Algorithm::Heap => heap::sort(data, ctx),
            Algorithm::Bitonic => bitonic::sort(data, ctx),
        }
    }
}
