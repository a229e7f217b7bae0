//! Tab bar
//!
//! Displays the tab labels of a tabbed root with the selected tab
//! highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};
use rootswitch_app::Mounted;

use crate::Navigator;

/// Render the tab bar. Draws nothing for single-screen roots.
pub fn render(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let Some(Mounted::Tabs { tabs, selected }) = navigator.mounted() else {
        return;
    };

    let titles: Vec<Line> = tabs.iter().map(|tab| Line::from(tab.spec.label.as_str())).collect();

    let bar = Tabs::new(titles)
        .select(*selected)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(bar, area);
}
