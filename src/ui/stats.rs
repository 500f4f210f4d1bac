//! Stats view rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::app::LoadStats;
use crate::gallery::Gallery;
use crate::theme::{symbols, Theme};

/// Render gallery totals, image load counters, and the two breakdown charts
pub fn render_stats_view(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    gallery: &Gallery,
    load_stats: LoadStats,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Min(8),    // Charts
        ])
        .split(area);

    render_stat_cards(frame, theme, chunks[0], gallery, load_stats);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_category_chart(frame, theme, charts[0], gallery);
    render_year_chart(frame, theme, charts[1], gallery);
}

fn render_stat_cards(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    gallery: &Gallery,
    load_stats: LoadStats,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let visible = gallery.visible_artworks().count();
    let with_images = gallery.visible_artworks().filter(|a| a.has_image()).count();

    render_stat_card(frame, theme, chunks[0], "Artworks", visible, symbols::DIAMOND, theme.primary);
    render_stat_card(frame, theme, chunks[1], "With images", with_images, symbols::IMAGE, theme.secondary);
    render_stat_card(frame, theme, chunks[2], "Loaded", load_stats.loaded, symbols::CHECK, theme.success);
    render_stat_card(frame, theme, chunks[3], "Failed", load_stats.failed, symbols::CROSS_MARK, theme.error);
}

fn render_stat_card(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    value: usize,
    icon: &str,
    accent_color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", title))
        .title_style(theme.subtitle());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(accent_color)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1)])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(value_line).alignment(Alignment::Center),
        content[0],
    );
}

fn render_category_chart(frame: &mut Frame, theme: &Theme, area: Rect, gallery: &Gallery) {
    let bars: Vec<Bar> = gallery
        .counts_by_category()
        .into_iter()
        .map(|(category, count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(category.label()))
                .style(theme.category(category))
                .value_style(theme.text().add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(theme, " By category "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_year_chart(frame: &mut Frame, theme: &Theme, area: Rect, gallery: &Gallery) {
    let counts = gallery.counts_by_year();

    // Keep the most recent years that fit at five columns per bar
    let fit = (area.width.saturating_sub(2) / 5).max(1) as usize;
    let skip = counts.len().saturating_sub(fit);

    let bars: Vec<Bar> = counts
        .into_iter()
        .skip(skip)
        .map(|(year, count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(year.to_string()))
                .style(theme.primary())
                .value_style(theme.selected())
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(theme, " By year "))
        .bar_width(4)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn chart_block<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.subtitle())
}
