//! Renderer seam and frame snapshots.
//!
//! ## Purpose
//!
//! This module defines the boundary between the engine and whatever draws
//! the animation. The engine pushes [`Frame`]s; the application decides what
//! a frame looks like on screen. A frame carries highlight state and the
//! completion flag, nothing else: during parallel execution no thread holds
//! a view of the whole sequence, so element values are the renderer's own
//! concern (typically shared storage owned by the embedding application).
//!
//! ## Design notes
//!
//! * `Renderer` implementations are called while an observation window is
//!   held, and from worker threads. They must be `Send + Sync`, must not
//!   mutate the sequence, and should return quickly; a slow renderer slows
//!   the animation, not just one thread.
//! * [`NullRenderer`] is the default and turns the engine into a plain
//!   sorting library.

use crate::primitives::highlight::HighlightSnapshot;

// ============================================================================
// Frame
// ============================================================================

/// One observation delivered to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Highlight state at the moment the window opened.
    pub highlights: HighlightSnapshot,
    /// Whether the sort has fully completed. Set on exactly one final frame
    /// per run; every earlier frame carries `false`.
    pub complete: bool,
}

// ============================================================================
// Renderer Seam
// ============================================================================

/// External collaborator that draws frames.
pub trait Renderer: Send + Sync {
    /// Draw one frame. Must not block on the engine or mutate the sequence.
    fn draw(&self, frame: &Frame);
}

/// Renderer that ignores every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&self, _frame: &Frame) {}
}
