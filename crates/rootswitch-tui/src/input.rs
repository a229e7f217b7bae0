//! Key input and the login form.
//!
//! [`LoginForm`] owns the username and password fields on the login screen
//! and handles character-level editing. Everything else a key can do is
//! decided by the [`crate::Navigator`].

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Single-line text field. The cursor counts characters, not bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Apply an editing key. Returns `false` for keys that are not edits.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset();
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset();
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_offset();
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.len(),
            KeyInput::Enter | KeyInput::Tab | KeyInput::BackTab | KeyInput::Esc => return false,
        }
        true
    }

    /// Take the text out, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn byte_offset(&self) -> usize {
        self.buffer.char_indices().nth(self.cursor).map_or(self.buffer.len(), |(i, _)| i)
    }
}

/// Field of the login form that receives typed characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// Account name.
    #[default]
    Username,
    /// Password, drawn masked.
    Password,
}

/// Username and password fields of the login screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    username: TextField,
    password: TextField,
    focus: LoginField,
}

impl LoginForm {
    /// Create an empty form focused on the username.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current username text.
    pub fn username(&self) -> &str {
        self.username.text()
    }

    /// Password field. Only its length should be shown.
    pub fn password(&self) -> &TextField {
        &self.password
    }

    /// Field receiving input.
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    /// Cursor position in the focused field.
    pub fn cursor(&self) -> usize {
        self.focused().cursor()
    }

    /// Apply an editing key to the focused field. Tab and Shift+Tab move the
    /// focus. Returns `false` for keys the form does not handle.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Tab | KeyInput::BackTab => {
                self.focus = match self.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
                true
            },
            _ => self.focused_mut().edit(key),
        }
    }

    /// Take username and password out, leaving the form empty and focused on
    /// the username.
    pub fn take(&mut self) -> (String, String) {
        self.focus = LoginField::Username;
        (self.username.take(), self.password.take())
    }

    fn focused(&self) -> &TextField {
        match self.focus {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}
