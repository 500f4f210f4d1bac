//! Theme and styling for the artwall TUI
//!
//! A muted gallery palette: ink on charcoal with ochre and rust accents.

use ratatui::style::{Color, Modifier, Style};

use crate::gallery::ArtworkCategory;

/// Named palette colors
pub mod palette {
    use ratatui::style::Color;

    /// Ochre - #d9a441
    pub const OCHRE: Color = Color::Rgb(217, 164, 65);

    /// Rust - #c0583a
    pub const RUST: Color = Color::Rgb(192, 88, 58);

    /// Sage - #8fae8b
    pub const SAGE: Color = Color::Rgb(143, 174, 139);

    /// Slate blue - #6d8fbf
    pub const SLATE: Color = Color::Rgb(109, 143, 191);

    /// Plum - #9a6fa8
    pub const PLUM: Color = Color::Rgb(154, 111, 168);

    /// Paper - #ece6da
    pub const PAPER: Color = Color::Rgb(236, 230, 218);
}

pub struct Theme {
    // Primary colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Background colors
    pub bg_dark: Color,
    pub bg_medium: Color,
    pub bg_light: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Special colors
    pub highlight: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: palette::OCHRE,
            secondary: palette::SLATE,
            accent: palette::RUST,

            bg_dark: Color::Rgb(20, 19, 18),
            bg_medium: Color::Rgb(31, 29, 27),
            bg_light: Color::Rgb(46, 43, 40),

            text_primary: palette::PAPER,
            text_secondary: Color::Rgb(190, 182, 168),
            text_muted: Color::Rgb(128, 121, 110),

            success: palette::SAGE,
            warning: palette::OCHRE,
            error: palette::RUST,
            info: palette::SLATE,

            highlight: palette::PLUM,
            border: Color::Rgb(64, 60, 55),
            border_focused: palette::OCHRE,
        }
    }
}

impl Theme {
    /// Create a new theme
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    // Style builders
    // ─────────────────────────────────────────────────────────────

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary accent style
    pub fn primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Accent/highlight style
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Subtitle style
    pub fn subtitle(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    /// Block border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Block border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Selected item in a list
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.bg_light)
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted text
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Success status
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Warning status
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error status
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Info status
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Key description style
    pub fn key_desc(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Year marker rows in the timeline
    pub fn year_marker(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Gauge filled style
    pub fn gauge_filled(&self) -> Style {
        Style::default().fg(self.primary).bg(self.bg_light)
    }

    /// Overlay content while it fades out
    pub fn faded(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Overlay backdrop
    pub fn overlay(&self, fading: bool) -> Style {
        if fading {
            Style::default().bg(self.bg_medium)
        } else {
            Style::default().bg(self.bg_dark)
        }
    }

    /// Color used for a category in lists and charts
    pub fn category(&self, category: ArtworkCategory) -> Style {
        let color = match category {
            ArtworkCategory::Drawing | ArtworkCategory::Image => palette::OCHRE,
            ArtworkCategory::Sculpture => palette::RUST,
            ArtworkCategory::Poetry | ArtworkCategory::Prosepoetry => palette::PLUM,
            ArtworkCategory::Prose => palette::PAPER,
            ArtworkCategory::Music => palette::SAGE,
            ArtworkCategory::Video => palette::SLATE,
            ArtworkCategory::Other => self.text_secondary,
        };
        Style::default().fg(color)
    }
}

/// Glyphs used across the UI
pub mod symbols {
    pub const ARROW_RIGHT: &str = "→";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
    pub const DIAMOND: &str = "◆";
    pub const IMAGE: &str = "▣";
    pub const NO_IMAGE: &str = "□";

    pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}
