//! Header rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::Tab;
use crate::spinner::{Phase, SpinnerSnapshot};
use crate::theme::{symbols, Theme};

const VERSION: &str = match option_env!("APP_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

const COMMIT: Option<&str> = option_env!("APP_COMMIT");

fn app_title() -> String {
    match COMMIT {
        Some(commit) => format!(" artwall v{} ({}) ", VERSION, commit),
        None => format!(" artwall v{} ", VERSION),
    }
}

/// Render the application header with tabs and the page status
pub fn render_header(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    active_tab: Tab,
    gallery_label: &str,
    snapshot: Option<SpinnerSnapshot>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(area);

    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == active_tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::from(Span::styled(t.title(), style))
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(app_title())
                .title_style(theme.title()),
        )
        .select(active_tab.index())
        .style(theme.text())
        .highlight_style(theme.tab_active())
        .divider(Span::styled(" │ ", theme.text_muted()));

    frame.render_widget(tabs, chunks[0]);

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", gallery_label))
        .title_style(theme.subtitle());

    let status = Paragraph::new(status_line(theme, snapshot))
        .block(status_block)
        .alignment(Alignment::Center);

    frame.render_widget(status, chunks[1]);
}

fn status_line(theme: &Theme, snapshot: Option<SpinnerSnapshot>) -> Line<'static> {
    let Some(snapshot) = snapshot else {
        return Line::from(Span::styled("not mounted", theme.text_muted()));
    };

    let (mark, style) = match snapshot.phase {
        Phase::Visible => (symbols::DIAMOND, theme.warning()),
        Phase::Fading => (symbols::ARROW_RIGHT, theme.info()),
        Phase::Hidden => (symbols::CHECK, theme.success()),
    };

    Line::from(vec![
        Span::styled(format!("{} {}", mark, snapshot.phase), style),
        Span::styled(
            format!(
                "  {}/{} of {} images",
                snapshot.loaded_count, snapshot.effective_threshold, snapshot.image_count
            ),
            theme.text_secondary(),
        ),
    ])
}
