//! Deterministic simulation harness for rootswitch testing.
//!
//! Scripted implementations of the [`rootswitch_app::Driver`],
//! [`rootswitch_app::ScreenRenderer`] and [`rootswitch_app::Authenticator`]
//! traits, so the production [`rootswitch_app::Runtime`] can be driven under
//! tokio's paused clock.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks behavioral properties of the navigation
//! pipeline. Use [`InvariantRegistry::standard()`] after each step of a
//! scenario.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod event_log;
pub mod invariants;
pub mod recording_renderer;
pub mod scripted_auth;
pub mod sim_driver;

pub use event_log::EventLog;
pub use invariants::{
    DisplayedMatchesState, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    NavigationSnapshot, RenderCountBounded, RendersMatchTransitions, Violation,
};
pub use recording_renderer::{RecordingRenderer, RenderLog, RenderRecord, RenderRefused};
pub use scripted_auth::ScriptedAuthenticator;
pub use sim_driver::{SimDriver, SimDriverError, Step};
