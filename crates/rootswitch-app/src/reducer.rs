//! Root reducer.

use std::rc::Rc;

use crate::{ApplicationState, Event};

/// Compute the next state.
///
/// `RootChanged` produces a new snapshot with the root replaced. Every other
/// event returns the input snapshot itself, so identity transitions are
/// observable with [`Rc::ptr_eq`].
pub fn reduce(state: &Rc<ApplicationState>, event: &Event) -> Rc<ApplicationState> {
    match event {
        Event::RootChanged { root } => Rc::new(state.replace_root(root.clone())),
        Event::Init | Event::LifecycleFailed { .. } => Rc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LifecycleStage, RootId, RootValue};

    #[test]
    fn root_changed_replaces_root() {
        let state = Rc::new(ApplicationState::new());
        let next = reduce(&state, &Event::root_changed(RootId::Login));

        assert_eq!(next.known_root(), Some(RootId::Login));
        assert_eq!(state.root(), None, "input snapshot is untouched");
    }

    #[test]
    fn unrecognized_root_is_stored_as_is() {
        let state = Rc::new(ApplicationState::new());
        let next = reduce(&state, &Event::root_changed_named("bogus"));

        assert_eq!(next.root(), Some(&RootValue::Unrecognized("bogus".into())));
        assert_eq!(next.known_root(), None);
    }

    #[test]
    fn other_events_are_identity() {
        let state = Rc::new(ApplicationState::new().replace_root(RootId::Login.into()));

        let after_init = reduce(&state, &Event::Init);
        let after_failure = reduce(&state, &Event::LifecycleFailed {
            stage: LifecycleStage::Login,
            reason: "rejected".into(),
        });

        assert!(Rc::ptr_eq(&state, &after_init));
        assert!(Rc::ptr_eq(&state, &after_failure));
    }

    #[test]
    fn same_root_twice_is_structurally_equal() {
        let state = Rc::new(ApplicationState::new());
        let once = reduce(&state, &Event::root_changed(RootId::AfterLogin));
        let twice = reduce(&once, &Event::root_changed(RootId::AfterLogin));

        assert_eq!(once, twice);
    }
}
