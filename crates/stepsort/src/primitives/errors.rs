//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the shared error enum used across the crate and its
//! companion crates. Every fallible operation in the engine surfaces one of
//! these variants; none of them panic on user input.
//!
//! ## Design notes
//!
//! * Variants carry structured context (offending length, byte count) so
//!   callers can react programmatically, not just print.
//! * Validation errors are raised before any element of the input moves;
//!   `AllocationFailed` is the one mid-run failure, and the engine clears
//!   residual highlights before returning it.
//!
//! ## Non-goals
//!
//! * No error chaining or backtraces; the failure causes here are terminal
//!   and self-describing.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

// ============================================================================
// Error Type
// ============================================================================

/// Errors surfaced by sort configuration and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Bitonic sort requires a power-of-two input length.
    NonPowerOfTwoLength {
        /// Length of the rejected input.
        len: usize,
    },

    /// Chunked merge requires at least one chunk.
    InvalidChunkCount {
        /// Configured chunk count.
        got: usize,
    },

    /// A scratch buffer could not be reserved.
    AllocationFailed {
        /// Bytes requested from the allocator.
        bytes: usize,
    },

    /// The worker pool could not be constructed.
    WorkerPoolUnavailable(String),

    /// A builder parameter was set more than once.
    DuplicateParameter(&'static str),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SortError::NonPowerOfTwoLength { len } => {
                write!(
                    f,
                    "bitonic sort requires a power-of-two length, got {}",
                    len
                )
            }
            SortError::InvalidChunkCount { got } => {
                write!(f, "chunked merge requires at least 1 chunk, got {}", got)
            }
            SortError::AllocationFailed { bytes } => {
                write!(f, "failed to reserve {} bytes of scratch space", bytes)
            }
            SortError::WorkerPoolUnavailable(reason) => {
                write!(f, "worker pool could not be built: {}", reason)
            }
            SortError::DuplicateParameter(name) => {
                write!(f, "parameter '{}' was set more than once", name)
            }
        }
    }
}

impl Error for SortError {}
