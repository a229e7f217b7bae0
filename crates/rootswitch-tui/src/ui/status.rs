//! Status bar
//!
//! Displays the active root and the keys that do something on it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rootswitch_app::RootId;

use crate::Navigator;

/// Render the status bar.
pub fn render(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let (root, hints) = match navigator.root() {
        None => (Span::styled("starting", Style::default().fg(Color::Yellow)), "Esc quit"),
        Some(root @ RootId::Login) => (
            Span::styled(root.name(), Style::default().fg(Color::Cyan)),
            "Enter continue | Esc quit",
        ),
        Some(root @ RootId::AfterLogin) => (
            Span::styled(root.name(), Style::default().fg(Color::Green)),
            "Tab/arrows switch | q quit",
        ),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        root,
        Span::styled(format!(" | {hints}"), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
