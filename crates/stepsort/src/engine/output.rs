//! Output types for sort runs.
//!
//! ## Purpose
//!
//! This module defines the `SortReport` struct returned by every successful
//! run: which algorithm ran, over how many elements, and how much work it
//! did. Implements `Display` for a human-readable summary block.
//!
//! ## Design notes
//!
//! * Swaps and writes are reported separately: exchange-based algorithms
//!   (selection, bubble, quick, heap, bitonic) move pairs, write-based ones
//!   (insertion shifts, merge writebacks) move single slots.
//! * Elapsed time includes pacing stalls; with a zero delay it is pure
//!   sorting time.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only carries results.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

// Internal dependencies
use crate::algorithms::Algorithm;

// ============================================================================
// Report
// ============================================================================

/// Work summary of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    /// Algorithm that ran.
    pub algorithm: Algorithm,

    /// Number of elements sorted.
    pub len: usize,

    /// Comparisons evaluated.
    pub comparisons: u64,

    /// Two-element exchanges performed.
    pub swaps: u64,

    /// Single-slot writes performed.
    pub writes: u64,

    /// Wall time of the run, pacing included.
    pub elapsed: Duration,
}

impl SortReport {
    /// Total mutations (swaps plus writes).
    pub fn mutations(&self) -> u64 {
        self.swaps + self.writes
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", self.algorithm)?;
        writeln!(f, "  Elements:    {}", self.len)?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps:       {}", self.swaps)?;
        writeln!(f, "  Writes:      {}", self.writes)?;
        write!(f, "  Elapsed:     {:?}", self.elapsed)
    }
}
