//! Root-to-layout table.
//!
//! [`Routes::layout`] is the single place that knows what each
//! [`RootId`] looks like. It is an exhaustive match, so adding a root fails to
//! compile until its layout is added here.

use std::fmt;

use crate::RootId;

/// Name under which a screen factory is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(String);

impl ScreenId {
    /// Create a screen ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A screen placed in a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSpec {
    /// Registered screen to instantiate.
    pub screen: ScreenId,
    /// Title shown in the navigation bar.
    pub title: String,
}

/// A tab in a tabbed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    /// Label on the tab bar.
    pub label: String,
    /// Screen shown when the tab is selected.
    pub screen: ScreenSpec,
}

/// Navigation stack mounted for a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootLayout {
    /// One screen with a navigation bar.
    Single(ScreenSpec),
    /// Tab bar, first tab selected.
    Tabs(Vec<TabSpec>),
}

impl RootLayout {
    /// Every screen in the layout, in display order.
    pub fn screens(&self) -> Vec<&ScreenSpec> {
        match self {
            RootLayout::Single(spec) => vec![spec],
            RootLayout::Tabs(tabs) => tabs.iter().map(|tab| &tab.screen).collect(),
        }
    }
}

/// Layouts for every root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    namespace: String,
}

impl Routes {
    /// Login screen name.
    pub const LOGIN: &'static str = "Login";
    /// Home tab screen name.
    pub const HOME_TAB: &'static str = "HomeTab";
    /// Search tab screen name.
    pub const SEARCH_TAB: &'static str = "SearchTab";

    /// Routes whose screen IDs are prefixed with `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self { namespace: namespace.into() }
    }

    /// Screen ID prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully qualified ID for a screen name.
    pub fn screen_id(&self, name: &str) -> ScreenId {
        ScreenId::new(format!("{}.{name}", self.namespace))
    }

    /// Layout to mount for `root`.
    pub fn layout(&self, root: RootId) -> RootLayout {
        match root {
            RootId::Login => RootLayout::Single(self.spec(Self::LOGIN, "Welcome")),
            RootId::AfterLogin => RootLayout::Tabs(vec![
                TabSpec { label: "Home".into(), screen: self.spec(Self::HOME_TAB, "Hey") },
                TabSpec { label: "Search".into(), screen: self.spec(Self::SEARCH_TAB, "Hey") },
            ]),
        }
    }

    /// Every screen any root can mount, without duplicates.
    pub fn screens(&self) -> Vec<ScreenId> {
        let mut ids = Vec::new();
        for root in RootId::ALL {
            let layout = self.layout(root);
            ids.extend(layout.screens().into_iter().map(|spec| spec.screen.clone()));
        }
        ids.sort();
        ids.dedup();
        ids
    }

    fn spec(&self, name: &str, title: &str) -> ScreenSpec {
        ScreenSpec { screen: self.screen_id(name), title: title.into() }
    }
}
