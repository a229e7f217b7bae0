//! Search tab

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Screen;
use crate::Navigator;

/// Screen behind the Search tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchScreen;

impl Screen for SearchScreen {
    fn render(&self, frame: &mut Frame, area: Rect, _navigator: &Navigator) {
        let title = Line::styled("SEARCH", Style::default().add_modifier(Modifier::BOLD));
        let body = Paragraph::new(title).alignment(Alignment::Center);
        frame.render_widget(body, area);
    }
}
