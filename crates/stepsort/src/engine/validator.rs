//! Validation utilities.
//!
//! ## Purpose
//!
//! This module provides static fail-fast checks used by the builder and the
//! executor. Every check runs before any element of the input moves, so a
//! validation error always leaves the caller's data untouched.
//!
//! ## Design notes
//!
//! * Checks are associated functions on a unit struct; they hold no state.
//! * Lengths of 0 and 1 are trivially sorted and accepted for every
//!   algorithm, including bitonic.

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::primitives::errors::SortError;

/// Static validation for sort plans.
pub struct Validator;

impl Validator {
    /// Check that `algorithm` accepts an input of length `len`.
    ///
    /// Only bitonic constrains the length: the network shape requires a
    /// power of two once there is anything to sort.
    pub fn validate_plan(algorithm: Algorithm, len: usize) -> Result<(), SortError> {
        if algorithm == Algorithm::Bitonic && len > 1 && !len.is_power_of_two() {
            return Err(SortError::NonPowerOfTwoLength { len });
        }
        Ok(())
    }

    /// Check a chunk count for the chunked merge strategy.
    pub fn validate_chunks(chunks: usize) -> Result<(), SortError> {
        if chunks == 0 {
            return Err(SortError::InvalidChunkCount { got: chunks });
        }
        Ok(())
    }

    /// Reject builders where a parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortError> {
        match duplicate {
            Some(name) => Err(SortError::DuplicateParameter(name)),
            None => Ok(()),
        }
    }
}
