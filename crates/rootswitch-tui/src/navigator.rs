//! Navigation state shared by the renderer and the terminal driver.
//!
//! The [`crate::TerminalRenderer`] mounts a new stack whenever the root
//! controller asks for one; the [`crate::TerminalDriver`] draws whatever is
//! mounted and routes keys through [`Navigator::handle_key`]. Both hold the
//! same [`SharedNavigator`]. Borrows never outlive a single call.

use std::{cell::RefCell, rc::Rc};

use rootswitch_app::{ApplicationState, Credentials, Event, Intent, Listener, Mounted, RootId};

use crate::{KeyInput, LoginForm, Screen};

/// Mounted stack of terminal screens.
pub type MountedScreens = Mounted<Box<dyn Screen>>;

/// Handle shared by the renderer, the driver and store listeners.
pub type SharedNavigator = Rc<RefCell<Navigator>>;

/// What is on screen and what the user is typing.
#[derive(Debug, Default)]
pub struct Navigator {
    root: Option<RootId>,
    mounted: Option<MountedScreens>,
    form: LoginForm,
    banner: Option<String>,
    pending_login: bool,
    user: Option<String>,
}

impl Navigator {
    /// Create a navigator with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator behind a shared handle.
    pub fn shared() -> SharedNavigator {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Replace the displayed stack.
    pub fn mount(&mut self, root: RootId, mounted: MountedScreens) {
        self.root = Some(root);
        self.mounted = Some(mounted);
    }

    /// Root of the displayed stack.
    pub fn root(&self) -> Option<RootId> {
        self.root
    }

    /// Displayed stack.
    pub fn mounted(&self) -> Option<&MountedScreens> {
        self.mounted.as_ref()
    }

    /// Username field.
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Error banner, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Whether a login was submitted and has not resolved yet.
    pub fn is_login_pending(&self) -> bool {
        self.pending_login
    }

    /// Name of the last submitted user.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Show an error banner and unlock the login form.
    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
        self.pending_login = false;
    }

    /// Clear the banner and unlock the login form.
    pub fn clear_banner(&mut self) {
        self.banner = None;
        self.pending_login = false;
    }

    /// Handle a key.
    ///
    /// Returns an intent for the runtime, or `None` if the key was handled
    /// locally (form edits, tab switches) or ignored.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<Intent> {
        if key == KeyInput::Esc {
            return Some(Intent::Quit);
        }

        match self.root? {
            RootId::Login => self.handle_login_key(key),
            RootId::AfterLogin => self.handle_tabs_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyInput) -> Option<Intent> {
        if self.pending_login {
            return None;
        }
        if key != KeyInput::Enter {
            self.form.edit(key);
            return None;
        }

        let (username, password) = self.form.take();
        self.user = Some(username.trim().to_owned());
        self.pending_login = true;
        self.banner = None;
        Some(Intent::SubmitLogin(Credentials::new(username, password)))
    }

    fn handle_tabs_key(&mut self, key: KeyInput) -> Option<Intent> {
        let mounted = self.mounted.as_mut()?;
        match key {
            KeyInput::Tab | KeyInput::Right => mounted.cycle_tab(1),
            KeyInput::BackTab | KeyInput::Left => mounted.cycle_tab(-1),
            KeyInput::Char('q') => return Some(Intent::Quit),
            KeyInput::Char(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| d.checked_sub(1)) {
                    mounted.select_tab(index as usize);
                }
            },
            _ => {},
        }
        None
    }
}

/// Store listener that mirrors lifecycle outcomes into the banner.
#[derive(Debug, Clone)]
pub struct BannerListener {
    navigator: SharedNavigator,
}

impl BannerListener {
    /// Create a listener for `navigator`.
    pub fn new(navigator: SharedNavigator) -> Self {
        Self { navigator }
    }
}

impl Listener for BannerListener {
    fn on_commit(&mut self, _state: &ApplicationState, event: &Event) {
        match event {
            Event::LifecycleFailed { stage, reason } => {
                self.navigator.borrow_mut().show_failure(format!("{stage} failed: {reason}"));
            },
            Event::RootChanged { .. } => self.navigator.borrow_mut().clear_banner(),
            Event::Init => {},
        }
    }
}
