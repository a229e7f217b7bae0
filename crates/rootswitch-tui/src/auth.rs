//! Demo authenticator.
//!
//! Stands in for a real identity backend: accepts any non-blank username
//! after a configurable delay, optionally requires a shared password, or
//! rejects everything when asked to.

use std::time::Duration;

use rootswitch_app::{AuthError, Authenticator, Credentials, Session};

/// Demo authenticator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAuthConfig {
    /// Simulated latency of a login check.
    pub login_delay: Duration,
    /// Refuse every login attempt.
    pub reject_login: bool,
    /// Password every account must present. Any password is accepted when
    /// unset.
    pub password: Option<String>,
}

impl Default for DemoAuthConfig {
    fn default() -> Self {
        Self { login_delay: Duration::from_millis(300), reject_login: false, password: None }
    }
}

/// [`Authenticator`] for the terminal demo.
#[derive(Debug, Clone, Default)]
pub struct DemoAuthenticator {
    config: DemoAuthConfig,
}

impl DemoAuthenticator {
    /// Create an authenticator.
    pub fn new(config: DemoAuthConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &DemoAuthConfig {
        &self.config
    }
}

impl Authenticator for DemoAuthenticator {
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        if !self.config.login_delay.is_zero() {
            tokio::time::sleep(self.config.login_delay).await;
        }

        if self.config.reject_login {
            return Err(AuthError::Rejected { reason: "logins are disabled".into() });
        }

        let username = credentials.username.trim();
        if username.is_empty() {
            return Err(AuthError::Rejected { reason: "username is required".into() });
        }

        if let Some(expected) = &self.config.password
            && credentials.secret() != expected
        {
            tracing::debug!(user = username, "wrong password");
            return Err(AuthError::Rejected { reason: "wrong password".into() });
        }

        tracing::info!(user = username, "login accepted");
        Ok(Session { username: username.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DemoAuthenticator {
        DemoAuthenticator::new(DemoAuthConfig { login_delay: Duration::ZERO, ..Default::default() })
    }

    #[tokio::test]
    async fn accepts_named_user() {
        let session = instant().login(Credentials::new(" ada ", "")).await.unwrap();
        assert_eq!(session.username, "ada");
    }

    #[tokio::test]
    async fn rejects_blank_username() {
        let err = instant().login(Credentials::new("  ", "")).await.unwrap_err();
        assert_eq!(err, AuthError::Rejected { reason: "username is required".into() });
    }

    #[tokio::test]
    async fn reject_login_refuses_everyone() {
        let auth = DemoAuthenticator::new(DemoAuthConfig {
            login_delay: Duration::ZERO,
            reject_login: true,
            ..Default::default()
        });
        assert!(auth.login(Credentials::new("ada", "")).await.is_err());
    }

    #[tokio::test]
    async fn configured_password_is_checked() {
        let auth = DemoAuthenticator::new(DemoAuthConfig {
            login_delay: Duration::ZERO,
            password: Some("hunter2".into()),
            ..Default::default()
        });
        assert!(auth.config().password.is_some());

        let err = auth.login(Credentials::new("ada", "guess")).await.unwrap_err();
        assert_eq!(err, AuthError::Rejected { reason: "wrong password".into() });

        let session = auth.login(Credentials::new("ada", "hunter2")).await.unwrap();
        assert_eq!(session.username, "ada");
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_delay() {
        let auth = DemoAuthenticator::default();
        let start = tokio::time::Instant::now();

        auth.login(Credentials::new("ada", "")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
