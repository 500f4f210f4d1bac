//! Key event handlers
//!
//! Keyboard handling organised by context: the page overlay, popups, then
//! the active view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_logger::TuiWidgetEvent;

use crate::event::keys;

use super::types::Tab;
use super::App;

/// Rows moved by page up/down in the timeline
const PAGE_SIZE: usize = 10;

impl App {
    /// Handle key events
    pub(super) async fn handle_key(&mut self, key: KeyEvent) {
        // Search text takes every key except Ctrl+C
        if let Some(buffer) = self.search_input.as_mut() {
            if keys::is_ctrl_c(&key) {
                self.should_quit = true;
                return;
            }
            match edit_search(buffer, &key) {
                SearchEdit::Editing => {}
                SearchEdit::Cancel => self.search_input = None,
                SearchEdit::Commit(text) => {
                    self.search_input = None;
                    self.filter.set_search(&text);
                    self.apply_filter();
                }
            }
            return;
        }

        // Quit always works, even behind the overlay
        if keys::is_quit(&key) {
            self.should_quit = true;
            return;
        }

        // The overlay is interactive-blocking until hidden
        if self.overlay_active() {
            return;
        }

        // Handle error dismissal first
        if self.error.is_some() {
            if keys::is_escape(&key) || keys::is_enter(&key) {
                self.error = None;
            }
            return;
        }

        // Handle help popup
        if self.show_help {
            if keys::is_escape(&key) || keys::is_char(&key, '?') {
                self.show_help = false;
            }
            return;
        }

        // Handle logs popup
        if self.show_logs {
            self.handle_logs_key(key);
            return;
        }

        // Global keys
        if keys::is_char(&key, '?') {
            self.show_help = true;
            return;
        }

        if keys::is_char(&key, 'l') {
            self.show_logs = true;
            return;
        }

        if keys::is_tab(&key) {
            self.tab = self.tab.next();
            return;
        }

        if keys::is_char(&key, 'r') {
            log::info!("Reloading gallery");
            self.load_gallery().await;
            self.mount_page();
            return;
        }

        if self.tab == Tab::Timeline {
            self.handle_timeline_key(key);
        }
    }

    /// Remount the page for the current filter, so the spinner tracks the
    /// images of the filtered window
    fn apply_filter(&mut self) {
        log::info!(
            "Timeline filter: medium={:?} year={:?} search={:?}",
            self.filter.medium,
            self.filter.year,
            self.filter.search
        );
        self.mount_page();
    }

    /// Timeline navigation and filters
    fn handle_timeline_key(&mut self, key: KeyEvent) {
        if keys::is_char(&key, 'm') {
            self.filter.cycle_medium(&self.gallery.available_mediums());
            self.apply_filter();
        } else if keys::is_char(&key, 'y') {
            self.filter.cycle_year(&self.gallery.available_years());
            self.apply_filter();
        } else if keys::is_char(&key, '/') {
            self.search_input = Some(self.filter.search.clone());
        } else if keys::is_char(&key, 'c') {
            if self.filter.is_active() {
                self.filter.clear();
                self.apply_filter();
            }
        } else if keys::is_down(&key) {
            self.timeline.next();
        } else if keys::is_up(&key) {
            self.timeline.previous();
        } else if keys::is_home(&key) {
            self.timeline.select_first();
        } else if keys::is_end(&key) {
            self.timeline.select_last();
        } else if keys::is_page_down(&key) {
            self.timeline.page(1, PAGE_SIZE);
        } else if keys::is_page_up(&key) {
            self.timeline.page(-1, PAGE_SIZE);
        }
    }

    /// Handle logs popup keys
    fn handle_logs_key(&mut self, key: KeyEvent) {
        // Close popup
        if keys::is_escape(&key) || keys::is_char(&key, 'l') {
            self.show_logs = false;
            return;
        }

        let event = match key.code {
            KeyCode::Char('h') => Some(TuiWidgetEvent::HideKey),
            KeyCode::Char('f') => Some(TuiWidgetEvent::FocusKey),
            KeyCode::Up => Some(TuiWidgetEvent::UpKey),
            KeyCode::Down => Some(TuiWidgetEvent::DownKey),
            KeyCode::Left | KeyCode::Char('<') => Some(TuiWidgetEvent::LeftKey),
            KeyCode::Right | KeyCode::Char('>') => Some(TuiWidgetEvent::RightKey),
            KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(TuiWidgetEvent::PlusKey),
            KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
            KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
            _ => None,
        };

        if let Some(evt) = event {
            self.logger_state.transition(evt);
        }
    }
}

/// Result of one key press while typing a search
#[derive(Debug, PartialEq, Eq)]
enum SearchEdit {
    Editing,
    Cancel,
    Commit(String),
}

fn edit_search(buffer: &mut String, key: &KeyEvent) -> SearchEdit {
    match key.code {
        KeyCode::Esc => SearchEdit::Cancel,
        KeyCode::Enter => SearchEdit::Commit(std::mem::take(buffer)),
        KeyCode::Backspace => {
            buffer.pop();
            SearchEdit::Editing
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buffer.push(c);
            SearchEdit::Editing
        }
        _ => SearchEdit::Editing,
    }
}
