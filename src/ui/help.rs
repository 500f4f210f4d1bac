//! Help popup rendering

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;
use crate::ui::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / Shift+Tab", "Switch between views"),
            ("r", "Reload gallery and remount the page"),
            ("l", "View application logs"),
            ("?", "Toggle help"),
            ("q / Ctrl+C", "Quit (works while loading)"),
            ("Esc", "Close popup"),
        ],
    ),
    (
        "Timeline",
        &[
            ("j / ↓", "Next entry"),
            ("k / ↑", "Previous entry"),
            ("g / Home", "First entry"),
            ("G / End", "Last entry"),
            ("PgUp / PgDn", "Jump ten rows"),
            ("m", "Cycle medium filter"),
            ("y", "Cycle year filter"),
            ("/", "Search titles and descriptions"),
            ("c", "Clear filters"),
        ],
    ),
    (
        "Search",
        &[
            ("Enter", "Apply the search"),
            ("Esc", "Cancel editing"),
            ("Backspace", "Delete a character"),
        ],
    ),
    (
        "Loading overlay",
        &[
            ("", "Covers the page until enough images have loaded,"),
            ("", "or the maximum wait has passed, then fades out."),
            ("", "Changing a filter remounts the page."),
        ],
    ),
];

/// Render the help popup
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .title(" Help - Keyboard Shortcuts ")
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    for (section_title, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {} ", section_title),
            theme.title(),
        )));
        lines.push(Line::from(Span::styled(" ─".repeat(24), theme.text_muted())));

        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:16}", key), theme.key_hint()),
                Span::styled(*desc, theme.text_secondary()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press ? or Esc to close ",
        theme.text_muted(),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
