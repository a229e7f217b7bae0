//! Home tab

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Screen;
use crate::Navigator;

/// Screen behind the Home tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, frame: &mut Frame, area: Rect, navigator: &Navigator) {
        let greeting = match navigator.user() {
            Some(user) if !user.is_empty() => format!("Signed in as {user}"),
            _ => String::from("Signed in"),
        };

        let body = Paragraph::new(vec![
            Line::styled("HOME", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::raw(greeting),
        ])
        .alignment(Alignment::Center);

        frame.render_widget(body, area);
    }
}
