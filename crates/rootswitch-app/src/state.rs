//! Observable application state.
//!
//! [`ApplicationState`] is an immutable snapshot. The store never edits one in
//! place: the reducer builds a replacement and the store swaps it in.

use crate::{RootId, RootValue};

/// Snapshot of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationState {
    /// Active root. `None` until the first root change is committed.
    root: Option<RootValue>,
}

impl ApplicationState {
    /// Initial state: no root selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this state with `root` replaced.
    #[must_use]
    pub fn replace_root(&self, root: RootValue) -> Self {
        let mut next = self.clone();
        next.root = Some(root);
        next
    }

    /// Active root value. `None` if no root has been selected.
    pub fn root(&self) -> Option<&RootValue> {
        self.root.as_ref()
    }

    /// Active root if it is a recognized one.
    pub fn known_root(&self) -> Option<RootId> {
        self.root.as_ref().and_then(RootValue::known)
    }
}
