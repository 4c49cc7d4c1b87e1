//! Per-run execution context.
//!
//! ## Purpose
//!
//! This module bundles everything one sort invocation shares across its
//! kernels and worker tasks: the highlight registry, the window lock, the
//! pacer, the renderer handle, the step counters, the tuning plan, and the
//! completion flag. The context is owned by the top-level `sort` call and
//! dropped when it returns, so independent sorts never share state and can
//! run concurrently in one process.
//!
//! ## Key concepts
//!
//! * **Observation window**: the atomic unit `mark -> snapshot -> draw ->
//!   pace -> unmark` performed by [`SortContext::observe`]. A dedicated
//!   window lock serializes whole windows across threads; the registry's
//!   own lock only guards the mark sets, and is never held while drawing.
//! * **Counters**: relaxed atomics. Comparisons, swaps and single-slot
//!   writes are tallied separately so reports can distinguish exchange
//!   algorithms from write-based ones.
//!
//! ## Invariants
//!
//! * A frame delivered to the renderer contains the marks of at most one
//!   window, never a torn combination of two.
//! * The completion flag is set exactly once, by the invoking thread, after
//!   the last element settles; the final frame carries it with an empty
//!   highlight set.
//!
//! ## Non-goals
//!
//! * No cancellation. A started run goes to completion; the completion flag
//!   is the only lifecycle signal.

// External dependencies
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Internal dependencies
use crate::engine::executor::SortPlan;
use crate::primitives::highlight::{HighlightRegistry, Role};
use crate::primitives::pacing::Pacer;
use crate::primitives::renderer::{Frame, NullRenderer, Renderer};

// ============================================================================
// Counters
// ============================================================================

/// Relaxed tallies of the work a run performed.
#[derive(Debug, Default)]
pub struct StepCounters {
    comparisons: AtomicU64,
    swaps: AtomicU64,
    writes: AtomicU64,
}

impl StepCounters {
    /// Comparisons evaluated so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Two-element exchanges performed so far.
    pub fn swaps(&self) -> u64 {
        self.swaps.load(Ordering::Relaxed)
    }

    /// Single-slot writes performed so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Context
// ============================================================================

/// Shared state of one sort invocation.
pub struct SortContext {
    registry: HighlightRegistry,
    // Serializes whole observation windows, not just registry updates.
    window: Mutex<()>,
    pacer: Pacer,
    renderer: Arc<dyn Renderer>,
    counters: StepCounters,
    plan: SortPlan,
    complete: AtomicBool,
}

impl SortContext {
    /// Create a context for one run.
    pub fn new(pacer: Pacer, renderer: Arc<dyn Renderer>, plan: SortPlan) -> Self {
        Self {
            registry: HighlightRegistry::new(),
            window: Mutex::new(()),
            pacer,
            renderer,
            counters: StepCounters::default(),
            plan,
            complete: AtomicBool::new(false),
        }
    }

    /// A silent context with default tuning, for direct kernel calls.
    pub fn disabled() -> Self {
        Self::new(Pacer::disabled(), Arc::new(NullRenderer), SortPlan::default())
    }

    // ========================================================================
    // Observation Windows
    // ========================================================================

    /// Open one observation window over `marks`.
    ///
    /// The whole unit (mark, snapshot, draw, pace, unmark) holds the window
    /// lock, so concurrent callers' windows are serialized rather than
    /// interleaved. The registry lock is released before drawing; the
    /// renderer only ever sees an owned snapshot.
    pub fn observe(&self, marks: &[(usize, Role)]) {
        let _window = self.window_guard();
        self.registry.mark_all(marks);
        let frame = Frame {
            highlights: self.registry.snapshot(),
            complete: self.is_complete(),
        };
        self.renderer.draw(&frame);
        self.pacer.pace();
        self.registry.unmark_all(marks);
    }

    // ========================================================================
    // Counters
    // ========================================================================

    /// Tally one comparison.
    pub fn record_comparison(&self) {
        self.counters.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    /// Tally `n` comparisons at once (parallel reductions report in bulk).
    pub fn record_comparisons(&self, n: u64) {
        self.counters.comparisons.fetch_add(n, Ordering::Relaxed);
    }

    /// Tally one two-element exchange.
    pub fn record_swap(&self) {
        self.counters.swaps.fetch_add(1, Ordering::Relaxed);
    }

    /// Tally one single-slot write.
    pub fn record_write(&self) {
        self.counters.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Read-only view of the counters.
    pub fn counters(&self) -> &StepCounters {
        &self.counters
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The tuning plan for this run.
    pub fn plan(&self) -> &SortPlan {
        &self.plan
    }

    /// The highlight registry for this run.
    pub fn registry(&self) -> &HighlightRegistry {
        &self.registry
    }

    /// Whether the run has completed.
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    // ========================================================================
    // Lifecycle (driven by the executor)
    // ========================================================================

    /// Mark the run complete and publish the final frame.
    pub(crate) fn finish(&self) {
        self.complete.store(true, Ordering::Release);
        let _window = self.window_guard();
        let frame = Frame {
            highlights: self.registry.snapshot(),
            complete: true,
        };
        self.renderer.draw(&frame);
    }

    /// Failure hygiene: drop any residual highlight before surfacing an
    /// error.
    pub(crate) fn abort(&self) {
        self.registry.clear();
    }

    // A renderer that panics poisons the window lock; the lock guards no
    // data, so recover and keep serializing.
    fn window_guard(&self) -> MutexGuard<'_, ()> {
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
