//! Screen renderer trait.
//!
//! The [`ScreenRenderer`] is the presentation side of navigation. The
//! [`crate::RootController`] tells it which root to show and never looks at
//! what it draws.
//!
//! # Implementations
//!
//! - **TUI**: mounts screens from a [`crate::NavigationRegistry`] into the
//!   terminal navigator
//! - **Simulation**: records every request for assertions

use crate::{RootId, RootLayout};

/// Mounts navigation roots.
pub trait ScreenRenderer {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Replace whatever is on display with the stack for `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be mounted. The previous root
    /// stays on display.
    fn render_root(&mut self, root: RootId, layout: &RootLayout) -> Result<(), Self::Error>;
}
