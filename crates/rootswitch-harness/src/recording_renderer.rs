//! Renderer that records requests instead of drawing.
//!
//! The controller owns its renderer, so [`RecordingRenderer`] writes into a
//! shared [`RenderLog`] that the test keeps.

use std::{cell::RefCell, fmt, rc::Rc};

use rootswitch_app::{RootId, RootLayout, ScreenRenderer};

/// One render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRecord {
    /// Requested root.
    pub root: RootId,
    /// Layout passed along with it.
    pub layout: RootLayout,
    /// Whether the renderer reported success.
    pub mounted: bool,
}

/// Shared view of everything a [`RecordingRenderer`] was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    records: Rc<RefCell<Vec<RenderRecord>>>,
}

impl RenderLog {
    /// Every request, in order.
    pub fn records(&self) -> Vec<RenderRecord> {
        self.records.borrow().clone()
    }

    /// Requested roots, in order, including refused ones.
    pub fn roots(&self) -> Vec<RootId> {
        self.records.borrow().iter().map(|r| r.root).collect()
    }

    /// Number of requests for `root`.
    pub fn count(&self, root: RootId) -> usize {
        self.records.borrow().iter().filter(|r| r.root == root).count()
    }

    /// Last root that was mounted successfully.
    pub fn displayed(&self) -> Option<RootId> {
        self.records.borrow().iter().rev().find(|r| r.mounted).map(|r| r.root)
    }

    /// Total number of requests.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

/// Error returned for roots configured to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRefused(pub RootId);

impl fmt::Display for RenderRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderRefused: {}", self.0)
    }
}

impl std::error::Error for RenderRefused {}

/// Recording [`ScreenRenderer`].
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    log: RenderLog,
    refuse: Vec<RootId>,
}

impl RecordingRenderer {
    /// Create a renderer and the log it writes to.
    pub fn new() -> (Self, RenderLog) {
        let renderer = Self::default();
        let log = renderer.log.clone();
        (renderer, log)
    }

    /// Fail every request for `root`.
    #[must_use]
    pub fn refusing(mut self, root: RootId) -> Self {
        self.refuse.push(root);
        self
    }
}

impl ScreenRenderer for RecordingRenderer {
    type Error = RenderRefused;

    fn render_root(&mut self, root: RootId, layout: &RootLayout) -> Result<(), Self::Error> {
        let mounted = !self.refuse.contains(&root);
        self.log.records.borrow_mut().push(RenderRecord { root, layout: layout.clone(), mounted });

        if mounted { Ok(()) } else { Err(RenderRefused(root)) }
    }
}
