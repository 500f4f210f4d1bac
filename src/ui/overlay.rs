//! Full-page loading overlay
//!
//! Drawn over the whole frame while the page spinner is visible, drawn
//! dimmed while it fades, and not drawn at all once hidden.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Clear, Gauge, Paragraph},
};

use crate::spinner::SpinnerSnapshot;
use crate::theme::Theme;

const TITLE: &str = "A R T W A L L";

/// Render the page overlay for the given spinner snapshot
pub fn render_page_overlay(
    frame: &mut Frame,
    theme: &Theme,
    snapshot: SpinnerSnapshot,
    spinner_char: &str,
    message: &str,
) {
    if !snapshot.phase.is_rendered() {
        return;
    }

    let fading = snapshot.data_fading();
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme.overlay(fading)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2), // Title
            Constraint::Length(2), // Glyph + message
            Constraint::Length(1), // Progress
            Constraint::Min(0),
        ])
        .split(area);

    let title_style = if fading {
        theme.faded()
    } else {
        theme.title()
    };
    let title = Paragraph::new(Line::from(Span::styled(TITLE, title_style)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let status_line = if fading {
        Line::from(Span::styled(message, theme.faded()))
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", spinner_char), theme.accent()),
            Span::styled(message, theme.text_secondary()),
        ])
    };
    frame.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Center),
        chunks[2],
    );

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(chunks[3])[1];

    let gauge = Gauge::default()
        .ratio(progress_ratio(&snapshot))
        .label(progress_label(&snapshot))
        .gauge_style(if fading {
            theme.faded()
        } else {
            theme.gauge_filled()
        })
        .use_unicode(true);
    frame.render_widget(gauge, gauge_area);
}

/// Loaded images relative to the effective threshold, capped at 1
pub fn progress_ratio(snapshot: &SpinnerSnapshot) -> f64 {
    if snapshot.effective_threshold == 0 {
        return 1.0;
    }
    (snapshot.loaded_count as f64 / snapshot.effective_threshold as f64).min(1.0)
}

pub fn progress_label(snapshot: &SpinnerSnapshot) -> String {
    if snapshot.image_count == 0 {
        "no images".to_string()
    } else {
        format!(
            "{}/{} images",
            snapshot.loaded_count.min(snapshot.effective_threshold),
            snapshot.effective_threshold
        )
    }
}
