//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`Store`]: state, reducer and listeners (including the
//!   [`RootController`])
//! - [`Lifecycle`]: asynchronous startup and login tasks
//! - [`Driver`]: platform-specific input
//!
//! Lifecycle tasks run on tokio and report back through an unbounded channel.
//! Everything that touches the store happens here, one envelope at a time, in
//! the order envelopes arrive.

use tokio::{sync::mpsc, task::JoinSet};

use crate::{
    Authenticator, Credentials, Dispatcher, Driver, Envelope, Event, Intent, Lifecycle, Listener,
    RootController, Routes, RuntimeConfig, ScreenRenderer, StalePolicy, Store, Subscription,
};

/// Generic runtime that orchestrates Store, Lifecycle and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific input driver
/// - `A`: Authenticator used by lifecycle tasks
pub struct Runtime<D, A>
where
    D: Driver,
    A: Authenticator,
{
    driver: D,
    store: Store,
    lifecycle: Lifecycle<A>,
    inbox: mpsc::UnboundedReceiver<Envelope>,
    tasks: JoinSet<()>,
    config: RuntimeConfig,
    /// Highest generation whose root change was committed.
    committed_generation: u64,
}

impl<D, A> Runtime<D, A>
where
    D: Driver,
    A: Authenticator,
{
    /// Create a runtime. The root controller is subscribed to the store with
    /// `renderer` before anything can be dispatched.
    pub fn new<R>(driver: D, renderer: R, authenticator: A, config: RuntimeConfig) -> Self
    where
        R: ScreenRenderer + 'static,
    {
        let (dispatcher, inbox) = Dispatcher::channel();
        let lifecycle = Lifecycle::new(authenticator, dispatcher);

        let mut store = Store::new();
        store.subscribe(RootController::new(renderer, Routes::new(config.namespace.clone())));

        Self {
            driver,
            store,
            lifecycle,
            inbox,
            tasks: JoinSet::new(),
            config,
            committed_generation: 0,
        }
    }

    /// Subscribe an additional store listener.
    pub fn subscribe<L>(&mut self, listener: L) -> Subscription
    where
        L: Listener + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Spawn the application startup task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.tasks.spawn(self.lifecycle.on_application_initialized());
    }

    /// Spawn a login task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit_login(&mut self, credentials: Credentials) {
        tracing::debug!(user = %credentials.username, "login submitted");
        self.tasks.spawn(self.lifecycle.on_login_completed(credentials));
    }

    /// Commit an envelope to the store, applying the stale policy.
    ///
    /// Returns `false` if the envelope was discarded.
    pub fn commit(&mut self, envelope: Envelope) -> bool {
        let Envelope { generation, event } = envelope;

        if let Event::RootChanged { root } = &event {
            if self.config.stale_policy == StalePolicy::DiscardStale
                && generation < self.committed_generation
            {
                tracing::debug!(
                    generation,
                    newest = self.committed_generation,
                    %root,
                    "discarding stale root change"
                );
                return false;
            }
            self.committed_generation = self.committed_generation.max(generation);
        }

        self.store.dispatch(event);
        true
    }

    /// Wait for every in-flight lifecycle task and commit what they sent.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "lifecycle task did not complete");
            }
        }

        while let Ok(envelope) = self.inbox.try_recv() {
            self.commit(envelope);
        }
    }

    /// Run the main event loop until the driver asks to quit.
    ///
    /// Spawns the startup task, then:
    /// 1. Commits lifecycle results as they arrive
    /// 2. Reaps finished lifecycle tasks
    /// 3. Turns driver intents into lifecycle tasks
    ///
    /// In-flight tasks are aborted on quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.start();

        loop {
            tokio::select! {
                biased;

                Some(envelope) = self.inbox.recv() => {
                    self.commit(envelope);
                }

                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Err(e) = joined {
                        tracing::warn!(error = %e, "lifecycle task did not complete");
                    }
                }

                intent = self.driver.poll_intent() => {
                    match intent? {
                        Some(Intent::SubmitLogin(credentials)) => self.submit_login(credentials),
                        Some(Intent::Quit) => break,
                        None => {},
                    }
                }
            }
        }

        self.tasks.abort_all();
        self.driver.stop();
        Ok(())
    }

    /// Store reference.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Lifecycle task factory.
    pub fn lifecycle(&self) -> &Lifecycle<A> {
        &self.lifecycle
    }

    /// Number of lifecycle tasks not yet reaped.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Driver reference.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
