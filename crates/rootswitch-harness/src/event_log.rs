//! Store listener that records committed events.

use std::{cell::RefCell, rc::Rc};

use rootswitch_app::{ApplicationState, Event, Listener, RootValue};

/// Shared record of every committed event.
///
/// Clones share the same log: subscribe one clone, keep the other for
/// assertions.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every committed event, in commit order.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Root values of committed `RootChanged` events, in commit order.
    pub fn root_history(&self) -> Vec<RootValue> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::RootChanged { root } => Some(root.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of committed `LifecycleFailed` events.
    pub fn failures(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::LifecycleFailed { .. }))
            .count()
    }
}

impl Listener for EventLog {
    fn on_commit(&mut self, _state: &ApplicationState, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
