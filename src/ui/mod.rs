//! UI rendering module
//!
//! Contains all view rendering logic for the TUI.

mod header;
mod help;
mod logs;
mod overlay;
mod stats;
mod timeline;

pub use header::render_header;
pub use help::render_help;
pub use logs::render_logs;
pub use overlay::render_page_overlay;
pub use stats::render_stats_view;
pub use timeline::render_timeline_view;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Create a centered rect for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render an error popup
pub fn render_error_popup(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect(60, 20, frame.area());

    let block = Block::default()
        .title(" Error ")
        .title_style(theme.error())
        .title_bottom(Line::from(" Enter/Esc to dismiss ").right_aligned())
        .borders(Borders::ALL)
        .border_style(theme.error());

    let paragraph = Paragraph::new(message)
        .style(theme.text())
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Split the frame into header, content, and footer
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Render the key hint footer
pub fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(theme.key_desc())
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
