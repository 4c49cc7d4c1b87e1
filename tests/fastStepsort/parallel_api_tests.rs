#![cfg(feature = "dev")]
//! Tests for the parallel high-level API.
//!
//! These tests exercise the crate as an embedding application would: build
//! a `ParallelSorter`, obtain a runner with its worker pool, and sort. They
//! verify:
//! - Defaults (parallel on, four workers) and the sequential escape hatch
//! - Builder hygiene for the pool knobs and the delegated core knobs
//! - Pool sizing edge cases
//! - Validation errors surfacing through `build` and `sort`
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Minimal builder usage
//! 2. **Pool Configuration** - Thread counts and the escape hatch
//! 3. **Builder Hygiene** - Duplicate and invalid parameters
//! 4. **Delegated Configuration** - Core knobs through the wrapper
//! 5. **Runner Reuse** - Many sorts on one pool

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fastStepsort::prelude::*;
use rand::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

/// Renderer that stores every frame it receives.
struct RecordingRenderer {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingRenderer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            frames: Mutex::new(Vec::new()),
        })
    }

    fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&self, frame: &Frame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}

// ============================================================================
// Default Tests
// ============================================================================

/// Test the minimal builder.
///
/// Verifies `ParallelSorter::new().build()` yields a working parallel
/// sorter with the default pool.
#[test]
fn test_minimal_builder_sorts() {
    let mut data = vec![5i64, 3, 4, 1, 2];
    let report = ParallelSorter::new()
        .build()
        .unwrap()
        .sort(Quick, &mut data)
        .unwrap();

    assert_eq!(data, [1, 2, 3, 4, 5]);
    assert_eq!(report.algorithm, Quick);
    assert_eq!(report.len, 5);
}

/// Test every algorithm through the parallel API.
///
/// Verifies the default runner dispatches all seven algorithms on its
/// pool.
#[test]
fn test_all_algorithms_through_api() {
    let runner = ParallelSorter::new().build().unwrap();
    for algorithm in Algorithm::ALL {
        let mut data = seeded(128, 0xA1);
        let mut expected = data.clone();
        expected.sort();

        let report = runner.sort(algorithm, &mut data).unwrap();
        assert_eq!(data, expected, "{algorithm} failed through the API");
        assert_eq!(report.algorithm, algorithm);
    }
}

/// Test `Default` against `new`.
///
/// Verifies both builder constructors behave identically.
#[test]
fn test_default_builder_matches_new() {
    let mut a = seeded(64, 0xA2);
    let mut b = a.clone();

    ParallelSorter::new().build().unwrap().sort(Merge, &mut a).unwrap();
    ParallelSorter::default().build().unwrap().sort(Merge, &mut b).unwrap();

    assert_eq!(a, b);
}

// ============================================================================
// Pool Configuration Tests
// ============================================================================

/// Test explicit thread counts.
///
/// Verifies pools of one, two, and many workers all sort correctly.
#[test]
fn test_explicit_thread_counts() {
    for threads in [1usize, 2, 8] {
        let mut data = seeded(256, 0xA3);
        let mut expected = data.clone();
        expected.sort();

        ParallelSorter::new()
            .threads(threads)
            .merge_threshold(16)
            .build()
            .unwrap()
            .sort(Merge, &mut data)
            .unwrap();
        assert_eq!(data, expected, "failed with {threads} workers");
    }
}

/// Test the automatic pool size.
///
/// Verifies zero threads lets the pool pick and still builds.
#[test]
fn test_zero_threads_lets_pool_pick() {
    let mut data = seeded(64, 0xA4);
    let mut expected = data.clone();
    expected.sort();

    ParallelSorter::new()
        .threads(0)
        .build()
        .unwrap()
        .sort(Quick, &mut data)
        .unwrap();
    assert_eq!(data, expected);
}

/// Test the sequential escape hatch.
///
/// Verifies `.parallel(false)` skips the pool entirely and still sorts.
#[test]
fn test_parallel_false_escape_hatch() {
    let mut data = seeded(64, 0xA5);
    let mut expected = data.clone();
    expected.sort();

    let report = ParallelSorter::new()
        .parallel(false)
        .threads(8)
        .build()
        .unwrap()
        .sort(Heap, &mut data)
        .unwrap();

    assert_eq!(data, expected);
    assert_eq!(report.algorithm, Heap);
}

// ============================================================================
// Builder Hygiene Tests
// ============================================================================

/// Test duplicate pool parameters.
///
/// Verifies setting `threads` or `parallel` twice fails at `build` with
/// the knob's name.
#[test]
fn test_duplicate_pool_parameters_rejected() {
    let err = ParallelSorter::<i64>::new()
        .threads(2)
        .threads(4)
        .build()
        .unwrap_err();
    assert_eq!(err, SortError::DuplicateParameter("threads"));

    let err = ParallelSorter::<i64>::new()
        .parallel(true)
        .parallel(false)
        .build()
        .unwrap_err();
    assert_eq!(err, SortError::DuplicateParameter("parallel"));
}

/// Test duplicate delegated parameters.
///
/// Verifies duplicates of core knobs surface through the wrapper's
/// `build`.
#[test]
fn test_duplicate_delegated_parameters_rejected() {
    let err = ParallelSorter::<i64>::new()
        .delay(Duration::ZERO)
        .delay(Duration::from_millis(1))
        .build()
        .unwrap_err();
    assert_eq!(err, SortError::DuplicateParameter("delay"));

    let err = ParallelSorter::<i64>::new()
        .heap_strategy(SubtreeHeapify)
        .heap_strategy(ChunkedMerge)
        .build()
        .unwrap_err();
    assert_eq!(err, SortError::DuplicateParameter("heap_strategy"));
}

/// Test zero chunks rejection.
///
/// Verifies the chunk check runs before any pool is built.
#[test]
fn test_zero_chunks_rejected_at_build() {
    let err = ParallelSorter::<i64>::new().chunks(0).build().unwrap_err();
    assert_eq!(err, SortError::InvalidChunkCount { got: 0 });
}

/// Test bitonic length rejection through the parallel API.
///
/// Verifies the error arrives at `sort` time and the slice is untouched.
#[test]
fn test_bitonic_length_rejected_at_sort() {
    let runner = ParallelSorter::new().build().unwrap();
    let mut data = vec![3i64, 1, 2];

    let err = runner.sort(Bitonic, &mut data).unwrap_err();
    assert_eq!(err, SortError::NonPowerOfTwoLength { len: 3 });
    assert_eq!(data, [3, 1, 2]);
}

// ============================================================================
// Delegated Configuration Tests
// ============================================================================

/// Test a fully configured wrapper.
///
/// Verifies every delegated knob chains once and the result still sorts
/// and renders.
#[test]
fn test_full_delegated_configuration() {
    let recorder = RecordingRenderer::new();
    let mut data = seeded(64, 0xA6);
    let mut expected = data.clone();
    expected.sort();

    ParallelSorter::new()
        .threads(2)
        .delay(Duration::ZERO)
        .pacing(Spin)
        .renderer(Arc::clone(&recorder) as Arc<dyn Renderer>)
        .merge_threshold(8)
        .quick_threshold(8)
        .bitonic_threshold(8)
        .heap_strategy(ChunkedMerge)
        .chunks(2)
        .build()
        .unwrap()
        .sort(Heap, &mut data)
        .unwrap();

    assert_eq!(data, expected);
    let frames = recorder.frames();
    assert!(frames.last().is_some_and(|f| f.complete));
}

/// Test an explicit sleep pacing in parallel mode.
///
/// Verifies a user choice overrides the spin default without being
/// rejected as a duplicate.
#[test]
fn test_explicit_pacing_overrides_parallel_default() {
    let mut data = seeded(64, 0xA7);
    let mut expected = data.clone();
    expected.sort();

    ParallelSorter::new()
        .pacing(Sleep)
        .build()
        .unwrap()
        .sort(Merge, &mut data)
        .unwrap();
    assert_eq!(data, expected);
}

// ============================================================================
// Runner Reuse Tests
// ============================================================================

/// Test runner reuse on one pool.
///
/// Verifies many sorts share the pool with fresh counters per run.
#[test]
fn test_runner_reuse_shares_pool() {
    let runner = ParallelSorter::new()
        .threads(2)
        .quick_threshold(16)
        .build()
        .unwrap();

    let mut first = seeded(128, 0xA8);
    let mut second = first.clone();
    let a = runner.sort(Quick, &mut first).unwrap();
    let b = runner.sort(Quick, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(a.comparisons, b.comparisons, "counters must start fresh");
    assert_eq!(a.swaps, b.swaps);
}
