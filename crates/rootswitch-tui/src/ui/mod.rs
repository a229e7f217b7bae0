//! UI rendering
//!
//! Rendering functions that convert [`Navigator`] state into terminal output
//! using ratatui widgets. All functions are pure (no I/O).
//!
//! Layout, top to bottom: navigation bar with the active screen's title, the
//! screen body, the tab bar (tabbed roots only), and the status line.

mod status;
mod tabs;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rootswitch_app::Mounted;

use crate::Navigator;

const NAV_BAR_HEIGHT: u16 = 3;
const BODY_MIN_HEIGHT: u16 = 3;
const TAB_BAR_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Render the entire UI.
pub fn render(frame: &mut Frame, navigator: &Navigator) {
    let tab_bar_height = match navigator.mounted() {
        Some(Mounted::Tabs { .. }) => TAB_BAR_HEIGHT,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(tab_bar_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [nav_area, body_area, tabs_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_stack(frame, navigator, *nav_area, *body_area);
    if tab_bar_height > 0 {
        tabs::render(frame, navigator, *tabs_area);
    }
    status::render(frame, navigator, *status_area);
}

/// Render the navigation bar and the active screen, or a placeholder while
/// nothing is mounted.
fn render_stack(frame: &mut Frame, navigator: &Navigator, nav_area: Rect, body_area: Rect) {
    let Some((spec, screen)) = navigator.mounted().and_then(Mounted::active) else {
        let waiting = Paragraph::new("Starting...").alignment(Alignment::Center);
        frame.render_widget(waiting, body_area);
        return;
    };

    let title = Paragraph::new(spec.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, nav_area);

    screen.render(frame, body_area, navigator);
}
