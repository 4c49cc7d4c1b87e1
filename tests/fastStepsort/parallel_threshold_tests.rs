#![cfg(feature = "dev")]
//! Tests for the fork thresholds of the parallel drivers.
//!
//! The divide-and-conquer drivers fork while a sub-slice is longer than its
//! configured threshold and run the sequential kernel inline once at or
//! below it. These tests verify:
//! - Correct results for lengths below, at, and above each threshold
//! - Counter equality with the sequential baseline across the boundary
//! - The oblivious bitonic network keeping its size under forking
//! - Degenerate thresholds (zero and effectively infinite)
//!
//! ## Test Organization
//!
//! 1. **Merge Threshold** - Lengths straddling the merge gate
//! 2. **Quick Threshold** - Lengths straddling the quick gate
//! 3. **Bitonic Threshold** - Power-of-two lengths straddling the gate
//! 4. **Degenerate Thresholds** - Zero and maximum gates

use fastStepsort::prelude::*;
use rand::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

fn sequential(algorithm: Algorithm, data: &mut [i64]) -> SortReport {
    ParallelSorter::new()
        .parallel(false)
        .build()
        .unwrap()
        .sort(algorithm, data)
        .unwrap()
}

/// Run `algorithm` with every fork threshold set to `threshold`.
fn parallel_with_threshold(
    algorithm: Algorithm,
    threshold: usize,
    data: &mut [i64],
) -> SortReport {
    ParallelSorter::new()
        .threads(4)
        .merge_threshold(threshold)
        .quick_threshold(threshold)
        .bitonic_threshold(threshold)
        .build()
        .unwrap()
        .sort(algorithm, data)
        .unwrap()
}

/// Assert `algorithm` matches the sequential baseline, data and counters,
/// for one length at one threshold.
fn assert_matches_baseline(algorithm: Algorithm, threshold: usize, n: usize, seed: u64) {
    let input = seeded(n, seed);

    let mut seq = input.clone();
    let seq_report = sequential(algorithm, &mut seq);

    let mut par = input.clone();
    let par_report = parallel_with_threshold(algorithm, threshold, &mut par);

    assert_eq!(seq, par, "{algorithm} diverged at n={n}, threshold={threshold}");
    assert_eq!(
        seq_report.comparisons, par_report.comparisons,
        "{algorithm} comparison counts diverged at n={n}"
    );
    assert_eq!(seq_report.swaps, par_report.swaps);
    assert_eq!(seq_report.writes, par_report.writes);
}

// ============================================================================
// Merge Threshold Tests
// ============================================================================

/// Test merge across its fork gate.
///
/// Verifies lengths below, at, and above the threshold all match the
/// sequential baseline.
#[test]
fn test_merge_threshold_straddle() {
    for n in [8usize, 31, 32, 33, 64, 100] {
        assert_matches_baseline(Merge, 32, n, 0x91);
    }
}

/// Test merge exactly at the gate.
///
/// Verifies a slice the size of the threshold runs inline without forking
/// and still merges identically.
#[test]
fn test_merge_at_threshold_runs_inline() {
    assert_matches_baseline(Merge, 64, 64, 0x92);
}

// ============================================================================
// Quick Threshold Tests
// ============================================================================

/// Test quick across its fork gate.
///
/// Verifies the counting partition and the stray repair agree with the
/// sequential kernel on both sides of the boundary.
#[test]
fn test_quick_threshold_straddle() {
    for n in [8usize, 31, 32, 33, 64, 100] {
        assert_matches_baseline(Quick, 32, n, 0x93);
    }
}

/// Test quick with recursion depth crossing the gate.
///
/// Verifies sub-ranges created above the threshold hand off to the kernel
/// once they shrink past it.
#[test]
fn test_quick_subranges_cross_threshold() {
    assert_matches_baseline(Quick, 16, 256, 0x94);
}

// ============================================================================
// Bitonic Threshold Tests
// ============================================================================

/// Test bitonic across its fork gate.
///
/// Verifies power-of-two lengths on both sides of the threshold evaluate
/// the same network as the sequential kernel.
#[test]
fn test_bitonic_threshold_straddle() {
    for n in [16usize, 32, 64, 128] {
        assert_matches_baseline(Bitonic, 32, n, 0x95);
    }
}

/// Test the network size under aggressive forking.
///
/// Verifies a length-8 network still evaluates exactly 24 compare-swaps
/// when every level forks and every stage runs as a parallel zip.
#[test]
fn test_bitonic_network_size_invariant_under_forking() {
    let mut data = vec![5i64, 1, 8, 2, 7, 3, 6, 4];
    let report = ParallelSorter::new()
        .threads(2)
        .bitonic_threshold(2)
        .build()
        .unwrap()
        .sort(Bitonic, &mut data)
        .unwrap();

    assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(report.comparisons, 24);
}

// ============================================================================
// Degenerate Threshold Tests
// ============================================================================

/// Test a zero threshold.
///
/// Verifies forking all the way to single elements still sorts and still
/// matches the baseline counters.
#[test]
fn test_zero_threshold_forks_to_leaves() {
    for algorithm in [Merge, Quick, Bitonic] {
        assert_matches_baseline(algorithm, 0, 64, 0x96);
    }
}

/// Test an effectively infinite threshold.
///
/// Verifies the drivers degrade to the sequential kernels when nothing is
/// ever long enough to fork.
#[test]
fn test_max_threshold_never_forks() {
    for algorithm in [Merge, Quick, Bitonic] {
        assert_matches_baseline(algorithm, usize::MAX, 128, 0x97);
    }
}

/// Test result stability across thresholds.
///
/// Verifies the threshold tunes scheduling only; one input sorts to one
/// result whatever the gate.
#[test]
fn test_results_independent_of_threshold() {
    let input = seeded(128, 0x98);
    let mut expected = input.clone();
    expected.sort();

    for algorithm in [Merge, Quick, Bitonic] {
        for threshold in [0usize, 1, 16, 127, 4096] {
            let mut data = input.clone();
            parallel_with_threshold(algorithm, threshold, &mut data);
            assert_eq!(
                data, expected,
                "{algorithm} result changed at threshold {threshold}"
            );
        }
    }
}
