#![cfg(feature = "dev")]
//! Tests for sort plan validation.
//!
//! These tests verify the fail-fast checks that run before any element
//! moves:
//! - Bitonic length constraints
//! - Chunk count constraints for the chunked heap strategy
//! - Duplicate builder parameter rejection
//! - Error display and trait plumbing
//!
//! ## Test Organization
//!
//! 1. **Plan Validation** - Length checks per algorithm
//! 2. **Chunk Validation** - Chunk count checks
//! 3. **Duplicate Validation** - Builder parameter hygiene
//! 4. **Error Type** - Display strings and `std::error::Error`

use std::error::Error;

use stepsort::internals::Validator;
use stepsort::prelude::*;

// ============================================================================
// Plan Validation Tests
// ============================================================================

/// Test bitonic rejecting non-power-of-two lengths.
///
/// Verifies each rejected length is echoed back in the error.
#[test]
fn test_validate_plan_rejects_non_power_of_two_bitonic() {
    for len in [3usize, 5, 6, 7, 12, 1000] {
        let err = Validator::validate_plan(Bitonic, len).unwrap_err();
        assert_eq!(err, SortError::NonPowerOfTwoLength { len });
    }
}

/// Test bitonic accepting workable lengths.
///
/// Verifies powers of two pass, and so do the trivially sorted lengths 0
/// and 1.
#[test]
fn test_validate_plan_accepts_power_of_two_bitonic() {
    for len in [0usize, 1, 2, 4, 8, 1024] {
        assert!(
            Validator::validate_plan(Bitonic, len).is_ok(),
            "length {len} should pass"
        );
    }
}

/// Test that only bitonic constrains the length.
///
/// Verifies every other algorithm accepts arbitrary lengths.
#[test]
fn test_validate_plan_unconstrained_for_other_algorithms() {
    for algorithm in Algorithm::ALL {
        if algorithm == Bitonic {
            continue;
        }
        for len in [0usize, 1, 3, 7, 100, 12345] {
            assert!(
                Validator::validate_plan(algorithm, len).is_ok(),
                "{algorithm} should accept length {len}"
            );
        }
    }
}

// ============================================================================
// Chunk Validation Tests
// ============================================================================

/// Test chunk count rejection.
///
/// Verifies zero chunks is the only invalid count.
#[test]
fn test_validate_chunks() {
    let err = Validator::validate_chunks(0).unwrap_err();
    assert_eq!(err, SortError::InvalidChunkCount { got: 0 });

    for chunks in [1usize, 2, 4, 64] {
        assert!(Validator::validate_chunks(chunks).is_ok());
    }
}

// ============================================================================
// Duplicate Validation Tests
// ============================================================================

/// Test duplicate parameter rejection.
///
/// Verifies the offending parameter name is carried through.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let err = Validator::validate_no_duplicates(Some("delay")).unwrap_err();
    assert_eq!(err, SortError::DuplicateParameter("delay"));
}

// ============================================================================
// Error Type Tests
// ============================================================================

/// Test the error display strings.
///
/// Verifies each variant formats its payload the way callers log it.
#[test]
fn test_error_display_strings() {
    assert_eq!(
        SortError::NonPowerOfTwoLength { len: 6 }.to_string(),
        "bitonic sort requires a power-of-two length, got 6"
    );
    assert_eq!(
        SortError::InvalidChunkCount { got: 0 }.to_string(),
        "chunked merge requires at least 1 chunk, got 0"
    );
    assert_eq!(
        SortError::AllocationFailed { bytes: 4096 }.to_string(),
        "failed to reserve 4096 bytes of scratch space"
    );
    assert_eq!(
        SortError::WorkerPoolUnavailable("no threads".into()).to_string(),
        "worker pool could not be built: no threads"
    );
    assert_eq!(
        SortError::DuplicateParameter("chunks").to_string(),
        "parameter 'chunks' was set more than once"
    );
}

/// Test the `Error` trait implementation.
///
/// Verifies the type plugs into generic error handling with no source.
#[test]
fn test_error_trait_impl() {
    let err: Box<dyn Error> = Box::new(SortError::InvalidChunkCount { got: 0 });
    assert!(err.source().is_none());
    assert!(!err.to_string().is_empty());
}

/// Test error cloning and equality.
///
/// Verifies variants compare by payload.
#[test]
fn test_error_clone_and_equality() {
    let err = SortError::NonPowerOfTwoLength { len: 12 };
    assert_eq!(err.clone(), err);
    assert_ne!(err, SortError::NonPowerOfTwoLength { len: 8 });
    assert_ne!(err, SortError::InvalidChunkCount { got: 12 });
}
