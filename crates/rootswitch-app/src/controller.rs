//! Root-switching controller.
//!
//! This module defines the [`RootController`], the store listener that decides
//! when the renderer has to mount a new navigation stack.
//!
//! # States
//!
//! - `Uninitialized`: nothing observed yet. The first notification always
//!   differs from this state, even when the store root is still unset.
//! - `RootActive(r)`: `r` was the last root acted on.
//!
//! On every notification the controller compares the store's root with the
//! last value it acted on. Only a difference is acted on, so repeated commits
//! of the same root mount the stack once. The new value is recorded before the
//! renderer runs.

use crate::{ApplicationState, Event, Listener, RootId, RootValue, Routes, ScreenRenderer};

/// Outcome of a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Root unchanged since the last observation.
    Unchanged,
    /// Renderer mounted the stack for this root.
    Rendered(RootId),
    /// Root is unset or not a recognized [`RootId`]; nothing rendered.
    Unrecognized,
    /// Renderer failed to mount this root; the previous stack stays.
    RenderFailed(RootId),
}

/// Last value the controller acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Observed {
    /// No notification seen yet.
    Nothing,
    /// Store root at the last change, `None` if unset.
    Root(Option<RootValue>),
}

/// Store listener that drives a [`ScreenRenderer`].
#[derive(Debug)]
pub struct RootController<R> {
    renderer: R,
    routes: Routes,
    /// Never reset.
    last_observed: Observed,
    /// Last root the renderer mounted successfully.
    current: Option<RootId>,
}

impl<R: ScreenRenderer> RootController<R> {
    /// Create a controller that renders layouts from `routes`.
    pub fn new(renderer: R, routes: Routes) -> Self {
        Self { renderer, routes, last_observed: Observed::Nothing, current: None }
    }

    /// Compare `state` with the last observation and render on change.
    pub fn observe(&mut self, state: &ApplicationState) -> Observation {
        let root = state.root();
        if let Observed::Root(last) = &self.last_observed
            && last.as_ref() == root
        {
            return Observation::Unchanged;
        }
        self.last_observed = Observed::Root(root.cloned());

        let Some(RootValue::Known(root)) = root else {
            tracing::warn!(
                root = root.map_or("<unset>", RootValue::name),
                "No root found; keeping current screen"
            );
            return Observation::Unrecognized;
        };

        let layout = self.routes.layout(*root);
        match self.renderer.render_root(*root, &layout) {
            Ok(()) => {
                tracing::info!(%root, "root mounted");
                self.current = Some(*root);
                Observation::Rendered(*root)
            },
            Err(e) => {
                tracing::warn!(%root, error = %e, "failed to mount root");
                Observation::RenderFailed(*root)
            },
        }
    }

    /// Last root the renderer mounted. `None` before the first mount.
    pub fn current_root(&self) -> Option<RootId> {
        self.current
    }

    /// Renderer reference.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ScreenRenderer> Listener for RootController<R> {
    fn on_commit(&mut self, state: &ApplicationState, _event: &Event) {
        let _ = self.observe(state);
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::RootLayout;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    #[derive(Default)]
    struct Recorder {
        calls: Vec<RootId>,
        refuse: Option<RootId>,
    }

    impl ScreenRenderer for Recorder {
        type Error = Refused;

        fn render_root(&mut self, root: RootId, _layout: &RootLayout) -> Result<(), Refused> {
            self.calls.push(root);
            if self.refuse == Some(root) { Err(Refused) } else { Ok(()) }
        }
    }

    fn state(root: &str) -> ApplicationState {
        ApplicationState::new().replace_root(RootValue::parse(root))
    }

    #[test]
    fn first_unset_observation_is_a_diagnostic_once() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        assert_eq!(controller.observe(&ApplicationState::new()), Observation::Unrecognized);
        assert_eq!(controller.observe(&ApplicationState::new()), Observation::Unchanged);
        assert!(controller.renderer().calls.is_empty());
        assert_eq!(controller.current_root(), None);
    }

    #[test]
    fn first_root_always_renders() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        assert_eq!(controller.observe(&state("login")), Observation::Rendered(RootId::Login));
        assert_eq!(controller.current_root(), Some(RootId::Login));
    }

    #[test]
    fn repeated_root_renders_once() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        controller.observe(&state("login"));
        assert_eq!(controller.observe(&state("login")), Observation::Unchanged);
        assert_eq!(controller.renderer().calls, vec![RootId::Login]);
    }

    #[test]
    fn unrecognized_root_skips_renderer() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        controller.observe(&state("login"));

        assert_eq!(controller.observe(&state("bogus")), Observation::Unrecognized);
        assert_eq!(controller.observe(&state("bogus")), Observation::Unchanged);
        assert_eq!(controller.renderer().calls, vec![RootId::Login]);
        assert_eq!(controller.current_root(), Some(RootId::Login));
    }

    #[test]
    fn returning_after_unrecognized_renders_again() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        controller.observe(&state("login"));
        controller.observe(&state("bogus"));
        controller.observe(&state("login"));

        assert_eq!(controller.renderer().calls, vec![RootId::Login, RootId::Login]);
    }

    #[test]
    fn unset_after_root_is_a_diagnostic() {
        let mut controller = RootController::new(Recorder::default(), Routes::new("t"));
        controller.observe(&state("login"));
        assert_eq!(controller.observe(&ApplicationState::new()), Observation::Unrecognized);
    }

    #[test]
    fn render_failure_is_absorbed() {
        let renderer = Recorder { refuse: Some(RootId::AfterLogin), ..Recorder::default() };
        let mut controller = RootController::new(renderer, Routes::new("t"));

        controller.observe(&state("login"));
        assert_eq!(
            controller.observe(&state("after-login")),
            Observation::RenderFailed(RootId::AfterLogin)
        );
        assert_eq!(controller.current_root(), Some(RootId::Login));

        // Same value again is deduplicated even though mounting failed
        assert_eq!(controller.observe(&state("after-login")), Observation::Unchanged);
    }
}
