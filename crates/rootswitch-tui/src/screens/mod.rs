//! Terminal screens
//!
//! One type per registered screen. Screens are created by the navigation
//! registry when their root is mounted and draw only the body area; the
//! navigation bar, tab bar and status line are drawn by [`crate::ui`].

mod home;
mod login;
mod search;

use std::fmt;

pub use home::HomeScreen;
pub use login::LoginScreen;
use ratatui::{Frame, layout::Rect};
use rootswitch_app::{NavigationError, NavigationRegistry, Routes};
pub use search::SearchScreen;

use crate::Navigator;

/// A screen that can be mounted into a navigation stack.
pub trait Screen: fmt::Debug {
    /// Draw the screen body.
    fn render(&self, frame: &mut Frame, area: Rect, navigator: &Navigator);
}

/// Register every screen the routes can mount.
///
/// # Errors
///
/// Returns [`NavigationError::DuplicateScreen`] if `registry` already holds
/// one of them.
pub fn register_all(
    registry: &mut NavigationRegistry<Box<dyn Screen>>,
    routes: &Routes,
) -> Result<(), NavigationError> {
    registry.register_screen(routes.screen_id(Routes::LOGIN), || {
        Box::new(LoginScreen) as Box<dyn Screen>
    })?;
    registry.register_screen(routes.screen_id(Routes::HOME_TAB), || {
        Box::new(HomeScreen) as Box<dyn Screen>
    })?;
    registry.register_screen(routes.screen_id(Routes::SEARCH_TAB), || {
        Box::new(SearchScreen) as Box<dyn Screen>
    })?;
    Ok(())
}
