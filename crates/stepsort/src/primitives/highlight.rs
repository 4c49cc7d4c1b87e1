//! Role-tagged highlight registry.
//!
//! ## Purpose
//!
//! This module tracks which indices of the sequence are interesting *right
//! now*: the pair under comparison, the slot about to be written, the pivot
//! settling into place. The registry is the only state a renderer ever sees,
//! so its snapshots must be internally consistent even while worker threads
//! mark and unmark concurrently.
//!
//! ## Key concepts
//!
//! * **Role**: `Primary` marks the index being written or settled (drawn
//!   green in the original visualizer), `Secondary` marks the comparison
//!   partner (drawn pink).
//! * **Snapshot**: an owned copy of both role sets, taken under the data
//!   lock and read by the renderer without it.
//!
//! ## Invariants
//!
//! * A snapshot never observes a half-applied mark or unmark.
//! * Roles are independent: one index may hold both, and unmarking one role
//!   leaves the other in place.
//! * After a sort returns, successfully or not, the registry is empty.
//!
//! ## Non-goals
//!
//! * The registry does not serialize whole observation windows; that is the
//!   context's window lock (see the engine layer).

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

// ============================================================================
// Roles
// ============================================================================

/// Highlight role of a marked index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The index being written or settled into place.
    Primary,
    /// The comparison partner.
    Secondary,
}

// ============================================================================
// Snapshot
// ============================================================================

/// Owned copy of the highlight state, safe to read while sorting continues.
///
/// Indices within each role are in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSnapshot {
    primary: Vec<usize>,
    secondary: Vec<usize>,
}

impl HighlightSnapshot {
    /// Indices marked with [`Role::Primary`].
    pub fn primary(&self) -> &[usize] {
        &self.primary
    }

    /// Indices marked with [`Role::Secondary`].
    pub fn secondary(&self) -> &[usize] {
        &self.secondary
    }

    /// Whether the given index holds the given role.
    pub fn contains(&self, index: usize, role: Role) -> bool {
        match role {
            Role::Primary => self.primary.binary_search(&index).is_ok(),
            Role::Secondary => self.secondary.binary_search(&index).is_ok(),
        }
    }

    /// Total number of marks across both roles.
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Whether no index is highlighted.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Both role sets, guarded together so cross-role updates stay atomic.
#[derive(Debug, Default)]
struct MarkSets {
    primary: BTreeSet<usize>,
    secondary: BTreeSet<usize>,
}

impl MarkSets {
    fn set_mut(&mut self, role: Role) -> &mut BTreeSet<usize> {
        match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
        }
    }
}

/// Lock-guarded, role-tagged index set.
#[derive(Debug, Default)]
pub struct HighlightRegistry {
    marks: Mutex<MarkSets>,
}

impl HighlightRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `index` under `role`. Marking an already-marked index is a
    /// no-op.
    pub fn mark(&self, index: usize, role: Role) {
        self.locked().set_mut(role).insert(index);
    }

    /// Remove `index` from `role`. Unmarking an absent index is a no-op.
    pub fn unmark(&self, index: usize, role: Role) {
        self.locked().set_mut(role).remove(&index);
    }

    /// Insert a batch of marks under a single lock acquisition.
    pub fn mark_all(&self, marks: &[(usize, Role)]) {
        let mut sets = self.locked();
        for &(index, role) in marks {
            sets.set_mut(role).insert(index);
        }
    }

    /// Remove a batch of marks under a single lock acquisition.
    pub fn unmark_all(&self, marks: &[(usize, Role)]) {
        let mut sets = self.locked();
        for &(index, role) in marks {
            sets.set_mut(role).remove(&index);
        }
    }

    /// Take an owned copy of the current highlight state.
    pub fn snapshot(&self) -> HighlightSnapshot {
        let sets = self.locked();
        HighlightSnapshot {
            primary: sets.primary.iter().copied().collect(),
            secondary: sets.secondary.iter().copied().collect(),
        }
    }

    /// Drop every mark. Used by the engine on the error path.
    pub fn clear(&self) {
        let mut sets = self.locked();
        sets.primary.clear();
        sets.secondary.clear();
    }

    /// Total number of marks across both roles.
    pub fn len(&self) -> usize {
        let sets = self.locked();
        sets.primary.len() + sets.secondary.len()
    }

    /// Whether no index is highlighted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The critical sections above are pure set operations; a poisoned lock
    // still holds a structurally valid MarkSets, so recover instead of
    // propagating the panic.
    fn locked(&self) -> std::sync::MutexGuard<'_, MarkSets> {
        self.marks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
