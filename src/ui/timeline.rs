//! Timeline view rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::components::StatefulList;
use crate::gallery::{Artwork, TimelineFilter, TimelineItem};
use crate::theme::{symbols, Theme};

/// Render the filter bar, the timeline list and a detail pane for the
/// selection
pub fn render_timeline_view(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    timeline: &mut StatefulList<TimelineItem>,
    filter: &TimelineFilter,
    search_input: Option<&str>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, theme, rows[0], filter, search_input);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_timeline_list(frame, theme, chunks[0], timeline, filter.is_active());
    render_artwork_details(frame, theme, chunks[1], timeline.selected());
}

fn render_filter_bar(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    filter: &TimelineFilter,
    search_input: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if search_input.is_some() {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(" Filter ")
        .title_style(theme.subtitle());

    frame.render_widget(
        Paragraph::new(filter_line(theme, filter, search_input)).block(block),
        area,
    );
}

fn filter_line<'a>(theme: &Theme, filter: &'a TimelineFilter, search_input: Option<&'a str>) -> Line<'a> {
    let value = |v: Option<String>| match v {
        Some(v) => Span::styled(v, theme.highlight()),
        None => Span::styled("all", theme.text_muted()),
    };

    let search = match search_input {
        Some(text) => Span::styled(format!("{}_", text), theme.accent()),
        None if filter.search.is_empty() => Span::styled("none", theme.text_muted()),
        None => Span::styled(format!("\"{}\"", filter.search), theme.highlight()),
    };

    Line::from(vec![
        Span::styled(" Medium: ", theme.text_secondary()),
        value(filter.medium.clone()),
        Span::styled("  Year: ", theme.text_secondary()),
        value(filter.year.map(|y| y.to_string())),
        Span::styled("  Search: ", theme.text_secondary()),
        search,
    ])
}

fn render_timeline_list(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    timeline: &mut StatefulList<TimelineItem>,
    filtered: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if timeline.is_empty() {
            theme.border()
        } else {
            theme.border_focused()
        })
        .title(" Timeline ")
        .title_style(theme.title());

    if timeline.is_empty() {
        let message = if filtered {
            "No artworks match the filter. Press c to clear it."
        } else {
            "Nothing to show yet. Press r to reload."
        };
        let empty = Paragraph::new(message)
            .style(theme.text_muted())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Owned lines so the list state can be borrowed mutably below
    let lines: Vec<Line<'static>> = timeline
        .items()
        .iter()
        .map(|item| timeline_line(theme, item))
        .collect();
    let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol(" ");

    frame.render_stateful_widget(list, area, &mut timeline.state);
}

fn timeline_line(theme: &Theme, item: &TimelineItem) -> Line<'static> {
    match item {
        TimelineItem::YearMarker(year) => Line::from(vec![
            Span::styled(format!("{} ", symbols::DIAMOND), theme.year_marker()),
            Span::styled(year.to_string(), theme.year_marker()),
        ]),
        TimelineItem::Artwork(artwork) => {
            let (mark, mark_style) = if artwork.has_image() {
                (symbols::IMAGE, theme.primary())
            } else {
                (symbols::NO_IMAGE, theme.text_muted())
            };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{} ", mark), mark_style),
                Span::styled(artwork.title.clone(), theme.text()),
                Span::styled(
                    format!("  {}", artwork.category),
                    theme.category(artwork.category),
                ),
                Span::styled(format!("  {}", artwork.date_formatted()), theme.text_muted()),
            ])
        }
    }
}

fn render_artwork_details(frame: &mut Frame, theme: &Theme, area: Rect, selected: Option<&TimelineItem>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(" Details ")
        .title_style(theme.subtitle());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match selected {
        Some(TimelineItem::Artwork(artwork)) => artwork_lines(theme, artwork),
        Some(TimelineItem::YearMarker(year)) => vec![Line::from(Span::styled(
            format!("Works from {}", year),
            theme.year_marker(),
        ))],
        None => vec![Line::from(Span::styled(
            "Select an entry to view details",
            theme.text_muted(),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn artwork_lines<'a>(theme: &Theme, artwork: &'a Artwork) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(artwork.title.as_str(), theme.title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date:     ", theme.text_secondary()),
            Span::styled(artwork.date_formatted(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("Category: ", theme.text_secondary()),
            Span::styled(artwork.category.label(), theme.category(artwork.category)),
        ]),
    ];

    if let Some(medium) = artwork.medium.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("Medium:   ", theme.text_secondary()),
            Span::styled(medium, theme.text()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Image:    ", theme.text_secondary()),
        match artwork.image_ref() {
            Some(image) => Span::styled(image, theme.info()),
            None => Span::styled("none", theme.text_muted()),
        },
    ]));

    if !artwork.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags:     ", theme.text_secondary()),
            Span::styled(artwork.tags.join(", "), theme.highlight()),
        ]));
    }

    if !artwork.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            artwork.description.as_str(),
            theme.text(),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn filter_line_shows_each_field() {
        let theme = Theme::new();
        let filter = TimelineFilter::default();
        assert_eq!(
            text(&filter_line(&theme, &filter, None)),
            " Medium: all  Year: all  Search: none"
        );

        let filter = TimelineFilter {
            medium: Some("drawings".to_string()),
            year: Some(2021),
            search: "line".to_string(),
        };
        assert_eq!(
            text(&filter_line(&theme, &filter, None)),
            " Medium: drawings  Year: 2021  Search: \"line\""
        );
        assert_eq!(
            text(&filter_line(&theme, &filter, Some("lin"))),
            " Medium: drawings  Year: 2021  Search: lin_"
        );
    }
}
