//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use rootswitch_app::{RootId, RootValue};

use super::{Invariant, InvariantKind, InvariantResult, NavigationSnapshot, Violation};

/// Render requests are exactly the known roots at which the committed root
/// value changed.
///
/// Walks the committed history, keeps each value that differs from the one
/// before it (starting from unset), and drops unrecognized ones. The result
/// must equal the render log: this is both the deduplication and the ordering
/// guarantee.
pub struct RendersMatchTransitions;

impl RendersMatchTransitions {
    fn expected(history: &[RootValue]) -> Vec<RootId> {
        let mut last: Option<&RootValue> = None;
        let mut expected = Vec::new();
        for value in history {
            if last != Some(value) {
                last = Some(value);
                if let Some(root) = value.known() {
                    expected.push(root);
                }
            }
        }
        expected
    }
}

impl Invariant for RendersMatchTransitions {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RendersMatchTransitions
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        let expected = Self::expected(&state.root_history);
        if expected != state.renders {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("expected renders {expected:?}, got {:?}", state.renders),
            });
        }
        Ok(())
    }
}

/// If the store holds a known root, it was the last render request.
///
/// This prevents the displayed stack from lagging behind the store.
pub struct DisplayedMatchesState;

impl Invariant for DisplayedMatchesState {
    fn kind(&self) -> InvariantKind {
        InvariantKind::DisplayedMatchesState
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        let Some(root) = state.state_root.as_ref().and_then(RootValue::known) else {
            return Ok(());
        };

        if state.renders.last() != Some(&root) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "store root {root} but last render was {:?}",
                    state.renders.last()
                ),
            });
        }
        Ok(())
    }
}

/// Every render request needs a committed root change behind it.
pub struct RenderCountBounded;

impl Invariant for RenderCountBounded {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RenderCountBounded
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        if state.renders.len() > state.root_history.len() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "{} renders for {} root changes",
                    state.renders.len(),
                    state.root_history.len()
                ),
            });
        }
        Ok(())
    }
}
