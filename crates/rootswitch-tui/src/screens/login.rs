//! Login screen
//!
//! Username and password fields, a Continue button and the failure banner.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;
use crate::{LoginField, Navigator};

const FIELD_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 1;
const BANNER_HEIGHT: u16 = 1;
const PROMPT_WIDTH: u16 = 1; // inside left border
const PASSWORD_MASK: char = '*';

/// Screen mounted for the login root.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginScreen;

impl Screen for LoginScreen {
    fn render(&self, frame: &mut Frame, area: Rect, navigator: &Navigator) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BANNER_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let [username_area, password_area, button_area, banner_area, _] = chunks.as_ref() else {
            return;
        };

        let form = navigator.form();
        let username = Paragraph::new(form.username())
            .block(Block::default().borders(Borders::ALL).title(" Username "));
        frame.render_widget(username, *username_area);

        let masked: String = std::iter::repeat_n(PASSWORD_MASK, form.password().len()).collect();
        let password = Paragraph::new(masked)
            .block(Block::default().borders(Borders::ALL).title(" Password "));
        frame.render_widget(password, *password_area);

        let button = if navigator.is_login_pending() {
            Span::styled("[ Logging in... ]", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "[ Continue ]",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(button)), *button_area);

        if let Some(banner) = navigator.banner() {
            let banner = Paragraph::new(banner).style(Style::default().fg(Color::Red));
            frame.render_widget(banner, *banner_area);
        }

        if !navigator.is_login_pending() {
            let field_area = match form.focus() {
                LoginField::Username => username_area,
                LoginField::Password => password_area,
            };
            let max_x = field_area.right().saturating_sub(2);
            let cursor_x = field_area
                .x
                .saturating_add(PROMPT_WIDTH)
                .saturating_add(form.cursor() as u16)
                .min(max_x);
            frame.set_cursor_position((cursor_x, field_area.y.saturating_add(1)));
        }
    }
}
