//! Lifecycle tasks.
//!
//! A [`Lifecycle`] turns application milestones into store events. Each task
//! does its asynchronous work through an [`Authenticator`] and then sends
//! exactly one event to the runtime inbox:
//!
//! | task                          | success                    | failure           |
//! |-------------------------------|----------------------------|-------------------|
//! | `on_application_initialized`  | `RootChanged(Login)`       | `LifecycleFailed` |
//! | `on_login_completed`          | `RootChanged(AfterLogin)`  | `LifecycleFailed` |
//!
//! Every task takes a generation number when it is created, so the runtime can
//! tell results of older tasks from newer ones.

use std::{
    fmt,
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::sync::mpsc;

use crate::{AuthError, Event, LifecycleStage, RootId};

/// User-supplied login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    secret: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { username: username.into(), secret: secret.into() }
    }

    /// Secret part of the credentials.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Account that logged in.
    pub username: String,
}

/// Asynchronous startup and credential checks.
pub trait Authenticator: Send + Sync + 'static {
    /// Startup work run before the login screen is shown.
    fn initialize(&self) -> impl Future<Output = Result<(), AuthError>> + Send {
        async { Ok(()) }
    }

    /// Check credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for refused credentials and
    /// [`AuthError::Unavailable`] when the check could not run.
    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;
}

/// An event tagged with the generation of the task that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Generation of the producing task. Starts at 1.
    pub generation: u64,
    /// Event to commit.
    pub event: Event,
}

/// Sending half of the runtime inbox.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Dispatcher {
    /// Create a dispatcher and the inbox it feeds.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue an event. Returns `false` if the runtime is gone.
    pub fn send(&self, generation: u64, event: Event) -> bool {
        match self.tx.send(Envelope { generation, event }) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(kind = e.0.event.kind(), "inbox closed; event dropped");
                false
            },
        }
    }
}

/// Lifecycle task factory.
pub struct Lifecycle<A> {
    authenticator: Arc<A>,
    dispatcher: Dispatcher,
    generations: Arc<AtomicU64>,
}

impl<A> Clone for Lifecycle<A> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            dispatcher: self.dispatcher.clone(),
            generations: Arc::clone(&self.generations),
        }
    }
}

impl<A: Authenticator> Lifecycle<A> {
    /// Create lifecycle tasks that report through `dispatcher`.
    pub fn new(authenticator: A, dispatcher: Dispatcher) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
            dispatcher,
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Generation of the most recently created task. 0 if none.
    pub fn latest_generation(&self) -> u64 {
        self.generations.load(Ordering::SeqCst)
    }

    /// Application startup task. Switches to the login root once startup work
    /// completes.
    ///
    /// The generation is taken when this is called, not when the future is
    /// first polled.
    pub fn on_application_initialized(&self) -> impl Future<Output = ()> + Send + use<A> {
        let generation = self.next_generation();
        let this = self.clone();

        async move {
            match this.authenticator.initialize().await {
                Ok(()) => {
                    tracing::debug!(generation, "application initialized");
                    this.dispatcher.send(generation, Event::root_changed(RootId::Login));
                },
                Err(e) => this.fail(generation, LifecycleStage::Initialization, &e),
            }
        }
    }

    /// Login task. Switches to the after-login root if the credentials are
    /// accepted.
    pub fn on_login_completed(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = ()> + Send + use<A> {
        let generation = self.next_generation();
        let this = self.clone();

        async move {
            match this.authenticator.login(credentials).await {
                Ok(session) => {
                    tracing::info!(generation, user = %session.username, "login completed");
                    this.dispatcher.send(generation, Event::root_changed(RootId::AfterLogin));
                },
                Err(e) => this.fail(generation, LifecycleStage::Login, &e),
            }
        }
    }

    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn fail(&self, generation: u64, stage: LifecycleStage, error: &AuthError) {
        tracing::warn!(generation, %stage, error = %error, "lifecycle task failed");
        self.dispatcher
            .send(generation, Event::LifecycleFailed { stage, reason: error.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<(), AuthError>);

    impl Authenticator for Fixed {
        async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
            self.0.clone().map(|()| Session { username: credentials.username })
        }
    }

    #[tokio::test]
    async fn initialized_dispatches_login_root() {
        let (dispatcher, mut inbox) = Dispatcher::channel();
        let lifecycle = Lifecycle::new(Fixed(Ok(())), dispatcher);

        lifecycle.on_application_initialized().await;

        let envelope = inbox.try_recv().unwrap();
        assert_eq!(envelope, Envelope { generation: 1, event: Event::root_changed(RootId::Login) });
        assert!(inbox.try_recv().is_err());
    }

    #[tokio::test]
    async fn rejected_login_dispatches_failure_only() {
        let (dispatcher, mut inbox) = Dispatcher::channel();
        let rejected = AuthError::Rejected { reason: "bad password".into() };
        let lifecycle = Lifecycle::new(Fixed(Err(rejected.clone())), dispatcher);

        lifecycle.on_login_completed(Credentials::new("ada", "x")).await;

        let envelope = inbox.try_recv().unwrap();
        assert_eq!(envelope.event, Event::LifecycleFailed {
            stage: LifecycleStage::Login,
            reason: rejected.to_string(),
        });
        assert!(inbox.try_recv().is_err());
    }

    #[test]
    fn generation_is_taken_at_creation() {
        let (dispatcher, _inbox) = Dispatcher::channel();
        let lifecycle = Lifecycle::new(Fixed(Ok(())), dispatcher);

        let first = lifecycle.on_application_initialized();
        let _second = lifecycle.on_login_completed(Credentials::new("ada", ""));
        drop(first);

        assert_eq!(lifecycle.latest_generation(), 2);
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let rendered = format!("{:?}", Credentials::new("ada", "hunter2"));
        assert!(rendered.contains("ada"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn send_after_inbox_dropped_reports_false() {
        let (dispatcher, inbox) = Dispatcher::channel();
        drop(inbox);
        assert!(!dispatcher.send(1, Event::Init));
    }
}
