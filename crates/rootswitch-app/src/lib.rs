//! Application layer for rootswitch
//!
//! A unidirectional state container wired to navigation root switching. The
//! store holds which top-level navigation stack is active, lifecycle tasks
//! request changes, and the root controller mounts the matching layout through
//! a platform renderer.
//!
//! # Components
//!
//! - [`Store`]: owns [`ApplicationState`], runs [`reduce`], notifies listeners
//! - [`RootController`]: deduplicating store listener that drives a renderer
//! - [`Routes`]: exhaustive root-to-layout table
//! - [`NavigationRegistry`]: named screen factories
//! - [`Lifecycle`]: async lifecycle tasks (startup, login)
//! - [`Runtime`]: single-threaded orchestration loop over a [`Driver`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod controller;
mod driver;
mod error;
mod event;
mod lifecycle;
mod reducer;
mod registry;
mod renderer;
mod root;
mod routes;
mod runtime;
mod state;
mod store;

pub use config::{DEFAULT_NAMESPACE, RuntimeConfig, StalePolicy};
pub use controller::{Observation, RootController};
pub use driver::{Driver, Intent};
pub use error::{AuthError, NavigationError, UnknownRoot};
pub use event::{Event, LifecycleStage};
pub use lifecycle::{Authenticator, Credentials, Dispatcher, Envelope, Lifecycle, Session};
pub use reducer::reduce;
pub use registry::{Mounted, MountedTab, NavigationRegistry, ScreenFactory};
pub use renderer::ScreenRenderer;
pub use root::{RootId, RootValue};
pub use routes::{RootLayout, Routes, ScreenId, ScreenSpec, TabSpec};
pub use runtime::Runtime;
pub use state::ApplicationState;
pub use store::{Listener, Store, Subscription};
