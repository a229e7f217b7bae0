//! Store events.
//!
//! This module defines [`Event`], the inputs committed to the
//! [`crate::Store`]. Lifecycle tasks produce them; only the reducer and store
//! listeners consume them.

use std::fmt;

use crate::{RootId, RootValue};

/// Events committed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Store creation. Never changes state.
    Init,

    /// Request to switch the active root.
    RootChanged {
        /// New root. Not validated.
        root: RootValue,
    },

    /// Lifecycle work failed; the root stays where it was.
    LifecycleFailed {
        /// Which lifecycle step failed.
        stage: LifecycleStage,
        /// Human-readable failure reason.
        reason: String,
    },
}

impl Event {
    /// Switch to a recognized root.
    pub fn root_changed(root: RootId) -> Self {
        Event::RootChanged { root: root.into() }
    }

    /// Switch to a root by name. Unknown names are carried through.
    pub fn root_changed_named(name: &str) -> Self {
        Event::RootChanged { root: RootValue::parse(name) }
    }

    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Init => "init",
            Event::RootChanged { .. } => "root-changed",
            Event::LifecycleFailed { .. } => "lifecycle-failed",
        }
    }
}

/// Lifecycle step that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Application startup work.
    Initialization,
    /// Credential check.
    Login,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleStage::Initialization => f.write_str("initialization"),
            LifecycleStage::Login => f.write_str("login"),
        }
    }
}
