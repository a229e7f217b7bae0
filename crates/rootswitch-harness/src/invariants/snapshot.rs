//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the system at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use rootswitch_app::{RootId, RootValue, Store};

use crate::{EventLog, RenderLog};

/// Snapshot of the navigation pipeline.
#[derive(Debug, Clone, Default)]
pub struct NavigationSnapshot {
    /// Root currently held by the store.
    pub state_root: Option<RootValue>,
    /// Committed root changes, in commit order.
    pub root_history: Vec<RootValue>,
    /// Render requests, in order.
    pub renders: Vec<RootId>,
}

impl NavigationSnapshot {
    /// Create an empty snapshot (nothing committed, nothing rendered).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture a snapshot from live state.
    pub fn capture(store: &Store, events: &EventLog, renders: &RenderLog) -> Self {
        Self {
            state_root: store.state().root().cloned(),
            root_history: events.root_history(),
            renders: renders.roots(),
        }
    }

    /// Record a committed root change without a live store.
    #[must_use]
    pub fn with_commit(mut self, root: RootValue) -> Self {
        self.state_root = Some(root.clone());
        self.root_history.push(root);
        self
    }

    /// Record a render request.
    #[must_use]
    pub fn with_render(mut self, root: RootId) -> Self {
        self.renders.push(root);
        self
    }
}
