//! Navigation registry.
//!
//! Screens are registered by name before the controller starts. A renderer
//! then turns a [`RootLayout`] into a [`Mounted`] stack by instantiating each
//! named screen.
//!
//! The registry is generic over the screen type so that each front end keeps
//! its own widget representation.

use std::{collections::BTreeMap, fmt};

use crate::{NavigationError, RootLayout, Routes, ScreenId, ScreenSpec, TabSpec};

/// Builds a fresh screen instance.
pub type ScreenFactory<S> = Box<dyn Fn() -> S>;

/// Named screen factories.
pub struct NavigationRegistry<S> {
    factories: BTreeMap<ScreenId, ScreenFactory<S>>,
}

impl<S> Default for NavigationRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NavigationRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Register a screen factory under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::DuplicateScreen`] if `id` is taken.
    pub fn register_screen<F>(&mut self, id: ScreenId, factory: F) -> Result<(), NavigationError>
    where
        F: Fn() -> S + 'static,
    {
        if self.factories.contains_key(&id) {
            return Err(NavigationError::DuplicateScreen(id));
        }
        tracing::debug!(screen = %id, "screen registered");
        self.factories.insert(id, Box::new(factory));
        Ok(())
    }

    /// Whether a factory is registered under `id`.
    pub fn contains(&self, id: &ScreenId) -> bool {
        self.factories.contains_key(id)
    }

    /// Number of registered screens.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no screens are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiate the screen registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownScreen`] if nothing is registered.
    pub fn create(&self, id: &ScreenId) -> Result<S, NavigationError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| NavigationError::UnknownScreen(id.clone()))
    }

    /// Instantiate every screen of `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownScreen`] for the first screen that is
    /// not registered. Nothing is instantiated in that case.
    pub fn mount(&self, layout: &RootLayout) -> Result<Mounted<S>, NavigationError> {
        for spec in layout.screens() {
            if !self.contains(&spec.screen) {
                return Err(NavigationError::UnknownScreen(spec.screen.clone()));
            }
        }

        match layout {
            RootLayout::Single(spec) => {
                Ok(Mounted::Single { spec: spec.clone(), screen: self.create(&spec.screen)? })
            },
            RootLayout::Tabs(tabs) => {
                let tabs = tabs
                    .iter()
                    .map(|tab| {
                        let screen = self.create(&tab.screen.screen)?;
                        Ok(MountedTab { spec: tab.clone(), screen })
                    })
                    .collect::<Result<Vec<_>, NavigationError>>()?;
                Ok(Mounted::Tabs { tabs, selected: 0 })
            },
        }
    }

    /// Check that every screen reachable from `routes` is registered.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownScreen`] for the first missing screen.
    pub fn ensure_routes(&self, routes: &Routes) -> Result<(), NavigationError> {
        match routes.screens().into_iter().find(|id| !self.contains(id)) {
            Some(missing) => Err(NavigationError::UnknownScreen(missing)),
            None => Ok(()),
        }
    }
}

impl<S> fmt::Debug for NavigationRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationRegistry")
            .field("screens", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A tab with its instantiated screen.
#[derive(Debug)]
pub struct MountedTab<S> {
    /// Tab description.
    pub spec: TabSpec,
    /// Screen instance.
    pub screen: S,
}

/// An instantiated navigation stack.
#[derive(Debug)]
pub enum Mounted<S> {
    /// One screen.
    Single {
        /// Screen description.
        spec: ScreenSpec,
        /// Screen instance.
        screen: S,
    },
    /// Tabs with the selected index.
    Tabs {
        /// Tabs in display order.
        tabs: Vec<MountedTab<S>>,
        /// Index into `tabs`. Always in range.
        selected: usize,
    },
}

impl<S> Mounted<S> {
    /// Screen currently on display with its description.
    pub fn active(&self) -> Option<(&ScreenSpec, &S)> {
        match self {
            Mounted::Single { spec, screen } => Some((spec, screen)),
            Mounted::Tabs { tabs, selected } => {
                tabs.get(*selected).map(|tab| (&tab.spec.screen, &tab.screen))
            },
        }
    }

    /// Select the tab at `index`. Ignored for single screens or out-of-range
    /// indices.
    pub fn select_tab(&mut self, index: usize) {
        if let Mounted::Tabs { tabs, selected } = self
            && index < tabs.len()
        {
            *selected = index;
        }
    }

    /// Move the tab selection by `offset`, wrapping around.
    pub fn cycle_tab(&mut self, offset: isize) {
        if let Mounted::Tabs { tabs, selected } = self
            && !tabs.is_empty()
        {
            let len = tabs.len() as isize;
            *selected = (*selected as isize + offset).rem_euclid(len) as usize;
        }
    }

    /// Selected tab index, `None` for single screens.
    pub fn selected_tab(&self) -> Option<usize> {
        match self {
            Mounted::Single { .. } => None,
            Mounted::Tabs { selected, .. } => Some(*selected),
        }
    }
}
