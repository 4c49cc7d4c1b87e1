//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by the rest of the
//! crate: the error type, the highlight registry, the pacing primitive, and
//! the renderer seam. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Role-tagged highlight registry.
pub mod highlight;

/// Pacing between observation windows.
pub mod pacing;

/// Renderer seam and frame snapshots.
pub mod renderer;
