//! Property-based tests for the reducer, store and root controller.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use std::rc::Rc;

use proptest::prelude::*;
use rootswitch_app::{
    ApplicationState, Event, LifecycleStage, RootController, RootId, RootValue, Routes, Store,
    reduce,
};
use rootswitch_harness::{
    EventLog, InvariantRegistry, NavigationSnapshot, RecordingRenderer, RenderLog,
};

/// Generate root values, mostly recognized ones.
fn root_strategy() -> impl Strategy<Value = RootValue> {
    prop_oneof![
        4 => prop::sample::select(RootId::ALL.to_vec()).prop_map(RootValue::Known),
        1 => "[a-z]{1,8}".prop_map(|name| RootValue::parse(&name)),
    ]
}

/// Generate events that do not change the root.
fn passive_event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Init),
        (any::<bool>(), "[a-z ]{0,16}").prop_map(|(login, reason)| Event::LifecycleFailed {
            stage: if login { LifecycleStage::Login } else { LifecycleStage::Initialization },
            reason,
        }),
    ]
}

/// Generate random store events.
fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => root_strategy().prop_map(|root| Event::RootChanged { root }),
        1 => passive_event_strategy(),
    ]
}

/// Store with a controller and an event log subscribed.
fn wired_store() -> (Store, RenderLog, EventLog) {
    let (renderer, renders) = RecordingRenderer::new();
    let events = EventLog::new();
    let mut store = Store::new();
    store.subscribe(RootController::new(renderer, Routes::new("prop")));
    store.subscribe(events.clone());
    (store, renders, events)
}

proptest! {
    #[test]
    fn prop_root_is_last_dispatched(roots in prop::collection::vec(root_strategy(), 1..30)) {
        let mut state = Rc::new(ApplicationState::new());
        for root in &roots {
            state = reduce(&state, &Event::RootChanged { root: root.clone() });
        }
        prop_assert_eq!(state.root(), roots.last());
    }

    #[test]
    fn prop_passive_events_are_identity(
        root in prop::option::of(root_strategy()),
        event in passive_event_strategy(),
    ) {
        let state = Rc::new(match root {
            Some(root) => ApplicationState::new().replace_root(root),
            None => ApplicationState::new(),
        });
        let next = reduce(&state, &event);
        prop_assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn prop_reduce_is_deterministic(root in root_strategy(), event in event_strategy()) {
        let state = Rc::new(ApplicationState::new().replace_root(root));
        prop_assert_eq!(reduce(&state, &event), reduce(&state, &event));
    }

    #[test]
    fn prop_navigation_invariants_hold(events in prop::collection::vec(event_strategy(), 0..50)) {
        let (mut store, renders, log) = wired_store();
        let invariants = InvariantRegistry::standard();

        for event in events {
            store.dispatch(event);
            let snapshot = NavigationSnapshot::capture(&store, &log, &renders);
            prop_assert!(invariants.check_all(&snapshot).is_ok());
        }
    }

    #[test]
    fn prop_doubled_dispatch_renders_like_single(
        roots in prop::collection::vec(prop::sample::select(RootId::ALL.to_vec()), 1..20),
    ) {
        let (mut once, once_renders, _) = wired_store();
        let (mut twice, twice_renders, _) = wired_store();

        for root in roots {
            once.dispatch(Event::root_changed(root));
            twice.dispatch(Event::root_changed(root));
            twice.dispatch(Event::root_changed(root));
        }

        prop_assert_eq!(once_renders.roots(), twice_renders.roots());
    }
}

#[test]
fn login_then_after_login_never_reverses() {
    let (mut store, renders, _) = wired_store();

    store.dispatch(Event::root_changed(RootId::Login));
    store.dispatch(Event::root_changed(RootId::AfterLogin));

    assert_eq!(renders.roots(), vec![RootId::Login, RootId::AfterLogin]);
}

#[test]
fn render_carries_routed_layout() {
    let (mut store, renders, _) = wired_store();
    store.dispatch(Event::root_changed(RootId::AfterLogin));

    let records = renders.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].layout, Routes::new("prop").layout(RootId::AfterLogin));
    assert!(records[0].mounted);
}
