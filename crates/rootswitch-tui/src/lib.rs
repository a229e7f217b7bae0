//! Terminal UI for rootswitch
//!
//! A thin shell over [`rootswitch_app::Driver`] and
//! [`rootswitch_app::ScreenRenderer`]. All orchestration logic lives in the
//! generic [`rootswitch_app::Runtime`].
//!
//! This crate only handles terminal input, screen instances and drawing. The
//! [`Navigator`] is the state both halves share: the renderer mounts stacks
//! into it, the driver draws it and feeds it keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod auth;
pub mod input;
pub mod navigator;
pub mod renderer;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use auth::{DemoAuthConfig, DemoAuthenticator};
pub use input::{KeyInput, LoginField, LoginForm, TextField};
pub use navigator::{BannerListener, Navigator, SharedNavigator};
pub use renderer::TerminalRenderer;
pub use rootswitch_app::{Driver, Intent, Runtime, RuntimeConfig};
pub use screens::Screen;
pub use terminal::{TerminalDriver, TerminalError};
