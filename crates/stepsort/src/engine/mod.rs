//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sort run: it validates the plan, owns the
//! per-run context (highlights, pacing, counters, completion flag),
//! dispatches to a sequential kernel or an injected parallel pass, and
//! shapes the outcome into a report.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-run execution context.
pub mod context;

/// Run orchestration and pass dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort runs.
pub mod output;
