//! Error types for the application layer.
//!
//! None of these are fatal to the runtime: authentication failures become
//! [`crate::Event::LifecycleFailed`], navigation failures are logged by the
//! controller, and unknown roots are carried as
//! [`crate::RootValue::Unrecognized`].

use thiserror::Error;

use crate::ScreenId;

/// A root name that matches no [`crate::RootId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown root: {0:?}")]
pub struct UnknownRoot(pub String);

/// Failures reported by an [`crate::Authenticator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were checked and refused.
    #[error("login rejected: {reason}")]
    Rejected {
        /// Why the credentials were refused.
        reason: String,
    },

    /// The credential check could not be performed.
    #[error("authentication unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the navigation registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A screen with this ID is already registered.
    #[error("screen already registered: {0}")]
    DuplicateScreen(ScreenId),

    /// No factory is registered under this ID.
    #[error("unknown screen: {0}")]
    UnknownScreen(ScreenId),
}
