//! Authenticator with scripted delays and outcomes.
//!
//! Delays use `tokio::time::sleep`, so tests running with a paused clock get
//! deterministic interleavings of concurrent lifecycle tasks.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use rootswitch_app::{AuthError, Authenticator, Credentials, Session};

/// Scripted [`Authenticator`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedAuthenticator {
    init_delay: Duration,
    login_delay: Duration,
    init_error: Option<AuthError>,
    login_error: Option<AuthError>,
    logins: Arc<AtomicUsize>,
}

impl ScriptedAuthenticator {
    /// Authenticator that accepts everything immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay startup work.
    #[must_use]
    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = delay;
        self
    }

    /// Delay every credential check.
    #[must_use]
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Fail startup work.
    #[must_use]
    pub fn failing_init(mut self, error: AuthError) -> Self {
        self.init_error = Some(error);
        self
    }

    /// Reject every login with `reason`.
    #[must_use]
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.login_error = Some(AuthError::Rejected { reason: reason.into() });
        self
    }

    /// Counter of login attempts, shared with clones.
    pub fn login_attempts(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.logins)
    }
}

impl Authenticator for ScriptedAuthenticator {
    async fn initialize(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.init_delay).await;
        match &self.init_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.login_delay).await;
        match &self.login_error {
            Some(e) => Err(e.clone()),
            None => Ok(Session { username: credentials.username }),
        }
    }
}
