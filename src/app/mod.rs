//! Application state and main event loop
//!
//! This module contains the core application logic, state management,
//! and the main run loop. It follows the Elm Architecture (TEA) pattern:
//! - Model: App struct fields and the current `PageMount`
//! - Update: handlers.rs
//! - View: render() method

mod handlers;
mod page;
mod types;

pub use types::{LoadStats, Tab};

use color_eyre::Result;
use std::path::Path;
use std::time::Duration;
use tui_logger::TuiWidgetState;

use crate::components::{Spinner, StatefulList};
use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::gallery::{self, Gallery, TimelineFilter, TimelineItem};
use crate::theme::Theme;
use crate::tui::{self, Tui};
use crate::ui;

use page::PageMount;

/// Main application
pub struct App {
    /// Terminal instance
    terminal: Tui,

    /// Event handler
    events: EventHandler,

    /// Theme
    theme: Theme,

    /// User configuration
    pub(super) config: Config,

    /// Loaded gallery
    pub(super) gallery: Gallery,

    /// Where the gallery came from, for the header
    pub(super) gallery_label: String,

    /// Current tab
    pub(super) tab: Tab,

    /// Timeline rows with selection
    pub(super) timeline: StatefulList<TimelineItem>,

    /// Active timeline filter
    pub(super) filter: TimelineFilter,

    /// Search text being typed, committed on Enter
    pub(super) search_input: Option<String>,

    /// Current page mount (spinner + image loads)
    pub(super) page: Option<PageMount>,

    /// Overlay glyph animation
    pub(super) spinner: Spinner,

    /// Show help popup
    pub(super) show_help: bool,

    /// Show logs popup
    pub(super) show_logs: bool,

    /// tui-logger widget state
    pub(super) logger_state: TuiWidgetState,

    /// Error message
    pub(super) error: Option<String>,

    /// Should quit
    pub(super) should_quit: bool,
}

impl App {
    /// Create a new application
    pub async fn new(config: Config) -> Result<Self> {
        let terminal = tui::init()?;
        let events = EventHandler::new(Duration::from_millis(50));

        let mut app = Self {
            terminal,
            events,
            theme: Theme::new(),
            config,
            gallery: Gallery::default(),
            gallery_label: String::new(),
            tab: Tab::Timeline,
            timeline: StatefulList::new(),
            filter: TimelineFilter::default(),
            search_input: None,
            page: None,
            spinner: Spinner::with_message("Loading artworks..."),
            show_help: false,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            error: None,
            should_quit: false,
        };

        app.load_gallery().await;
        app.mount_page();

        Ok(app)
    }

    /// Read the configured gallery, falling back to an empty one on error
    pub(super) async fn load_gallery(&mut self) {
        let loaded = match self.config.gallery_path.clone() {
            Some(path) => {
                let base_dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                self.gallery_label = path.display().to_string();
                gallery::load_from_path(&path)
                    .await
                    .map(|artworks| Gallery::new(artworks, base_dir))
            }
            None => {
                self.gallery_label = "demo gallery".to_string();
                Gallery::demo()
            }
        };

        match loaded {
            Ok(gallery) => {
                log::info!(
                    "Loaded {} artworks from {}",
                    gallery.artworks().len(),
                    self.gallery_label
                );
                self.gallery = gallery;
            }
            Err(e) => {
                log::error!("Failed to load gallery: {}", e);
                self.error = Some(e.to_string());
                self.gallery = Gallery::default();
            }
        }
    }

    /// Unmount the current page (cancelling its timers and loads) and mount
    /// a fresh one for the current gallery and filter
    pub(super) fn mount_page(&mut self) {
        self.page = None;

        let timeline = self.gallery.timeline(&self.filter);
        let page = PageMount::mount(&self.gallery, &timeline, &self.config);
        self.timeline.set_items(timeline);
        self.timeline.select_first();
        self.page = Some(page);
    }

    /// Whether the page overlay still covers the view
    pub(super) fn overlay_active(&self) -> bool {
        self.page
            .as_ref()
            .is_some_and(|page| page.spinner().phase.is_rendered())
    }

    /// Main run loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            // Render
            self.render()?;

            // Wait for terminal input, or for the page to change: an image
            // load is forwarded to the spinner as soon as it finishes
            let event = match self.page.as_mut() {
                Some(page) => tokio::select! {
                    event = self.events.next() => Some(event?),
                    _ = page.next_update() => None,
                },
                None => Some(self.events.next().await?),
            };

            match event {
                Some(Event::Tick) => {
                    self.spinner.tick();
                }
                Some(Event::Key(key)) => {
                    self.handle_key(key).await;
                }
                Some(Event::Resize) | None => {
                    // Redrawn on the next turn
                }
                Some(Event::Error(e)) => {
                    self.error = Some(e);
                }
            }
        }

        // Cleanup
        self.page = None;
        tui::restore()?;

        Ok(())
    }

    /// Render the UI
    pub(super) fn render(&mut self) -> Result<()> {
        // Extract values before the closure to avoid borrow issues
        let theme = &self.theme;
        let tab = self.tab;
        let show_help = self.show_help;
        let show_logs = self.show_logs;
        let logger_state = &self.logger_state;
        let spinner_char = self.spinner.char();
        let spinner_message = self.spinner.message();
        let error_msg = self.error.clone();
        let gallery = &self.gallery;
        let gallery_label = self.gallery_label.as_str();
        let filter = &self.filter;
        let search_input = self.search_input.as_deref();
        let timeline = &mut self.timeline;
        let (snapshot, load_stats) = match self.page.as_ref() {
            Some(page) => (Some(page.spinner()), page.load_stats()),
            None => (None, LoadStats::default()),
        };

        let hint = Self::footer_hint(
            snapshot.is_some_and(|s| s.phase.is_rendered()),
            search_input.is_some(),
        );

        self.terminal.draw(|frame| {
            let (header_area, content_area, footer_area) = ui::main_layout(frame.area());

            ui::render_header(frame, theme, header_area, tab, gallery_label, snapshot);

            match tab {
                Tab::Timeline => {
                    ui::render_timeline_view(
                        frame,
                        theme,
                        content_area,
                        timeline,
                        filter,
                        search_input,
                    );
                }
                Tab::Stats => {
                    ui::render_stats_view(frame, theme, content_area, gallery, load_stats);
                }
            }

            ui::render_footer(frame, theme, footer_area, hint);

            // Page overlay covers the view until it is hidden
            if let Some(snapshot) = snapshot {
                ui::render_page_overlay(frame, theme, snapshot, spinner_char, spinner_message);
            }

            if show_help {
                ui::render_help(frame, theme);
            }

            if show_logs {
                ui::render_logs(frame, theme, logger_state);
            }

            if let Some(ref msg) = error_msg {
                ui::render_error_popup(frame, theme, msg);
            }
        })?;

        Ok(())
    }

    fn footer_hint(overlay_active: bool, searching: bool) -> &'static str {
        if overlay_active {
            " Loading... | q: Quit "
        } else if searching {
            " Type to search | Enter: Apply | Esc: Cancel "
        } else {
            " Tab: View | j/k: Navigate | m/y: Medium/Year | /: Search | c: Clear | r: Reload | ?: Help | q: Quit "
        }
    }
}
