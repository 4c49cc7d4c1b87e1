//! Pacing between observation windows.
//!
//! ## Purpose
//!
//! This module stalls the sorting thread between externally visible
//! mutations so a renderer can keep up. Two strategies are offered because
//! the right way to wait depends on where the wait happens.
//!
//! ## Key concepts
//!
//! * **Sleep**: cooperative OS sleep. The thread yields its core; fine for
//!   sequential runs where nothing else is scheduled on the pool.
//! * **Spin**: busy-wait on a monotonic clock. Burns the core but never
//!   enters the scheduler, which keeps a worker inside a held observation
//!   window from having its queued tasks redistributed and the animation
//!   cadence from collapsing. Parallel runs default to this.
//!
//! ## Invariants
//!
//! * `pace` blocks for at least the configured delay under both strategies.
//! * A zero delay returns promptly without touching the scheduler.

use std::hint;
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// Strategy
// ============================================================================

/// How the engine waits out a pacing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacingStrategy {
    /// Cooperative `thread::sleep`.
    #[default]
    Sleep,
    /// CPU spin-wait polling a monotonic clock.
    Spin,
}

// ============================================================================
// Pacer
// ============================================================================

/// A pacing strategy bound to a fixed per-window delay.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    strategy: PacingStrategy,
    delay: Duration,
}

impl Pacer {
    /// Create a pacer with the given strategy and per-window delay.
    pub fn new(strategy: PacingStrategy, delay: Duration) -> Self {
        Self { strategy, delay }
    }

    /// A pacer that never waits.
    pub fn disabled() -> Self {
        Self::new(PacingStrategy::Sleep, Duration::ZERO)
    }

    /// The configured strategy.
    pub fn strategy(&self) -> PacingStrategy {
        self.strategy
    }

    /// The configured per-window delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Block for the configured delay.
    pub fn pace(&self) {
        self.pace_for(self.delay);
    }

    /// Block for at least `duration` using the configured strategy.
    pub fn pace_for(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        match self.strategy {
            PacingStrategy::Sleep => thread::sleep(duration),
            PacingStrategy::Spin => {
                let deadline = Instant::now() + duration;
                while Instant::now() < deadline {
                    hint::spin_loop();
                }
            }
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::disabled()
    }
}
