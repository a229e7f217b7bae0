//! Driver trait for abstracting front-end input.
//!
//! The [`Driver`] trait decouples the [`crate::Runtime`] from a specific
//! front end. Each front end turns its own input (keys, taps, scripted steps)
//! into [`Intent`]s; navigation output goes through a
//! [`crate::ScreenRenderer`] instead.

use std::future::Future;

use crate::Credentials;

/// What the user asked the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Run the login task with these credentials.
    SubmitLogin(Credentials),
    /// Leave the event loop.
    Quit,
}

/// Abstracts front-end input for the application runtime.
///
/// # Implementations
///
/// - **TUI**: crossterm key events, also redraws the terminal
/// - **Simulation**: scripted intents and virtual-time pauses
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next intent.
    ///
    /// Returns `None` when input was handled locally (or a tick elapsed) and
    /// there is nothing for the runtime to do. Must be cancel-safe: the
    /// runtime drops the future whenever a lifecycle result arrives first.
    fn poll_intent(&mut self) -> impl Future<Output = Result<Option<Intent>, Self::Error>>;

    /// Release front-end resources.
    fn stop(&mut self);
}
