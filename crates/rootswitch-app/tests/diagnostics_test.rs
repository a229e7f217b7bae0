//! Diagnostic logging for unrecognized roots.
//!
//! A counting `tracing` layer is installed for the duration of each test to
//! observe the controller's warnings.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use rootswitch_app::{Event, RootController, RootId, Routes, Store};
use rootswitch_harness::RecordingRenderer;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

/// Counts WARN-level events.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a subscriber that counts warnings; return the count.
fn count_warnings(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

#[test]
fn bogus_root_logs_once_and_renders_nothing() {
    let (renderer, renders) = RecordingRenderer::new();
    let mut store = Store::new();
    store.subscribe(RootController::new(renderer, Routes::new("diag")));

    let warnings = count_warnings(|| {
        store.dispatch(Event::root_changed_named("bogus"));
        store.dispatch(Event::root_changed_named("bogus"));
    });

    assert_eq!(warnings, 1);
    assert!(renders.is_empty());
}

#[test]
fn known_roots_log_no_warnings() {
    let (renderer, renders) = RecordingRenderer::new();
    let mut store = Store::new();
    store.subscribe(RootController::new(renderer, Routes::new("diag")));

    let warnings = count_warnings(|| {
        store.dispatch(Event::root_changed(RootId::Login));
        store.dispatch(Event::root_changed(RootId::AfterLogin));
    });

    assert_eq!(warnings, 0);
    assert_eq!(renders.len(), 2);
}

#[test]
fn refused_render_logs_a_warning() {
    let (renderer, renders) = RecordingRenderer::new();
    let mut store = Store::new();
    store.subscribe(RootController::new(renderer.refusing(RootId::Login), Routes::new("diag")));

    let warnings = count_warnings(|| store.dispatch(Event::root_changed(RootId::Login)));

    assert_eq!(warnings, 1);
    assert_eq!(renders.displayed(), None);
}
