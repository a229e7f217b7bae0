//! Terminal screen renderer.
//!
//! Implements [`ScreenRenderer`] by instantiating the layout's screens from a
//! [`NavigationRegistry`] and handing the mounted stack to the shared
//! [`crate::Navigator`]. Drawing happens later, in the driver.

use rootswitch_app::{
    NavigationError, NavigationRegistry, RootId, RootLayout, Routes, ScreenRenderer,
};

use crate::{Screen, SharedNavigator, screens};

/// [`ScreenRenderer`] backed by the terminal screens.
#[derive(Debug)]
pub struct TerminalRenderer {
    registry: NavigationRegistry<Box<dyn Screen>>,
    navigator: SharedNavigator,
}

impl TerminalRenderer {
    /// Register every screen for `routes` and check that each root can be
    /// mounted.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if registration fails or a route names
    /// a screen that was not registered.
    pub fn new(routes: &Routes, navigator: SharedNavigator) -> Result<Self, NavigationError> {
        let mut registry = NavigationRegistry::new();
        screens::register_all(&mut registry, routes)?;
        registry.ensure_routes(routes)?;
        tracing::debug!(
            namespace = routes.namespace(),
            screens = registry.len(),
            "screens registered"
        );
        Ok(Self { registry, navigator })
    }

    /// Screen registry.
    pub fn registry(&self) -> &NavigationRegistry<Box<dyn Screen>> {
        &self.registry
    }
}

impl ScreenRenderer for TerminalRenderer {
    type Error = NavigationError;

    fn render_root(&mut self, root: RootId, layout: &RootLayout) -> Result<(), Self::Error> {
        let mounted = self.registry.mount(layout)?;
        self.navigator.borrow_mut().mount(root, mounted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rootswitch_app::{Mounted, ScreenId};

    use super::*;
    use crate::Navigator;

    #[test]
    fn new_registers_every_routed_screen() {
        let routes = Routes::new("test");
        let renderer = TerminalRenderer::new(&routes, Navigator::shared()).unwrap();

        assert_eq!(renderer.registry().len(), 3);
        assert!(renderer.registry().contains(&routes.screen_id(Routes::LOGIN)));
    }

    #[test]
    fn render_root_mounts_into_navigator() {
        let routes = Routes::new("test");
        let navigator = Navigator::shared();
        let mut renderer = TerminalRenderer::new(&routes, navigator.clone()).unwrap();

        renderer.render_root(RootId::AfterLogin, &routes.layout(RootId::AfterLogin)).unwrap();

        let navigator = navigator.borrow();
        assert_eq!(navigator.root(), Some(RootId::AfterLogin));
        assert!(matches!(navigator.mounted(), Some(Mounted::Tabs { selected: 0, .. })));
    }

    #[test]
    fn foreign_layout_is_refused() {
        let navigator = Navigator::shared();
        let mut renderer = TerminalRenderer::new(&Routes::new("test"), navigator.clone()).unwrap();

        let foreign = Routes::new("other").layout(RootId::Login);
        let err = renderer.render_root(RootId::Login, &foreign).unwrap_err();

        assert_eq!(err, NavigationError::UnknownScreen(ScreenId::new("other.Login")));
        assert!(navigator.borrow().mounted().is_none());
    }
}
