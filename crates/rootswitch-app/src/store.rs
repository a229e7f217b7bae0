//! State store.
//!
//! The [`Store`] exclusively owns the current [`ApplicationState`] snapshot.
//! Every [`Store::dispatch`] runs the reducer, swaps in the result and then
//! notifies listeners in subscription order.
//!
//! Listeners receive shared references only and the store is reachable
//! through `&mut` alone, so a listener cannot dispatch while a notification is
//! in progress. Work that needs to dispatch goes through the
//! [`crate::Runtime`] inbox and is committed after the current dispatch.

use std::{fmt, rc::Rc};

use crate::{ApplicationState, Event, reduce};

/// Receives a notification after every committed event.
pub trait Listener {
    /// Called with the new snapshot and the event that produced it.
    fn on_commit(&mut self, state: &ApplicationState, event: &Event);
}

impl<F> Listener for F
where
    F: FnMut(&ApplicationState, &Event),
{
    fn on_commit(&mut self, state: &ApplicationState, event: &Event) {
        self(state, event);
    }
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single-threaded state container.
pub struct Store {
    state: Rc<ApplicationState>,
    listeners: Vec<(Subscription, Box<dyn Listener>)>,
    next_subscription: u64,
    revision: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store in the initial state.
    pub fn new() -> Self {
        let state = reduce(&Rc::new(ApplicationState::new()), &Event::Init);
        Self { state, listeners: Vec::new(), next_subscription: 0, revision: 0 }
    }

    /// Current snapshot.
    pub fn state(&self) -> &Rc<ApplicationState> {
        &self.state
    }

    /// Number of events committed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener. It is notified after every later dispatch.
    pub fn subscribe<L>(&mut self, listener: L) -> Subscription
    where
        L: Listener + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Commit an event and notify every listener.
    pub fn dispatch(&mut self, event: Event) {
        self.state = reduce(&self.state, &event);
        self.revision += 1;

        tracing::trace!(revision = self.revision, kind = event.kind(), "event committed");

        let state = &self.state;
        for (_, listener) in &mut self.listeners {
            listener.on_commit(state, &event);
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}
