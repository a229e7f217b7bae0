//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The screen is redrawn before
//! every poll, so whatever the runtime committed in between shows up on the
//! next frame.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use rootswitch_app::{Driver, Intent};
use thiserror::Error;

use crate::{KeyInput, SharedNavigator, ui};

/// How long a poll waits for input before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal input stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal (raw mode, alternate screen) and restores it on
/// [`Driver::stop`] or drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    navigator: SharedNavigator,
    restored: bool,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new(navigator: SharedNavigator) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, navigator, restored: false })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::BackTab => Some(KeyInput::BackTab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    fn draw(&mut self) -> Result<(), TerminalError> {
        let navigator = self.navigator.borrow();
        self.terminal.draw(|frame| ui::render(frame, &navigator))?;
        Ok(())
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        self.draw()?;

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event.code)
                            .and_then(|key| self.navigator.borrow_mut().handle_key(key)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Err(TerminalError::InputClosed),
                    // Resize and everything else: redraw on the next poll
                    Some(Ok(_)) => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK) => Ok(None),
        }
    }

    fn stop(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_key_maps_editing_keys() {
        assert_eq!(TerminalDriver::convert_key(KeyCode::Char('a')), Some(KeyInput::Char('a')));
        assert_eq!(TerminalDriver::convert_key(KeyCode::BackTab), Some(KeyInput::BackTab));
        assert_eq!(TerminalDriver::convert_key(KeyCode::Esc), Some(KeyInput::Esc));
    }

    #[test]
    fn convert_key_drops_unmapped_keys() {
        assert_eq!(TerminalDriver::convert_key(KeyCode::F(1)), None);
        assert_eq!(TerminalDriver::convert_key(KeyCode::Up), None);
    }
}
