//! Event handling for the TUI
//!
//! Terminal input and a steady tick arrive over one async channel. The tick
//! drives glyph animation and redraws while the page overlay fades.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the application
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal tick (for animations and updates)
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize,
    /// Error occurred
    Error(String),
}

/// Event handler that manages terminal events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
    /// Stop signal sender
    _stop_tx: mpsc::Sender<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            loop {
                if stop_rx.try_recv().is_ok() {
                    break;
                }

                let polled = tokio::task::block_in_place(|| event::poll(tick_rate));
                let event = if polled.unwrap_or(false) {
                    match tokio::task::block_in_place(event::read) {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                        Ok(_) => None,
                        Err(e) => {
                            let _ = tx.send(Event::Error(e.to_string()));
                            break;
                        }
                    }
                } else {
                    Some(Event::Tick)
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self {
            rx,
            _stop_tx: stop_tx,
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| color_eyre::eyre::eyre!("Event channel closed"))
    }
}

/// Key bindings configuration
pub mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Check if key is quit (q or Ctrl+C)
    pub fn is_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Check if key is Ctrl+C, which quits even while typing
    pub fn is_ctrl_c(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if key is escape
    pub fn is_escape(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                ..
            }
        )
    }

    /// Check if key is enter
    pub fn is_enter(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Check if key switches views forward or back
    pub fn is_tab(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Tab | KeyCode::BackTab,
                ..
            }
        )
    }

    /// Check if key is up arrow or k
    pub fn is_up(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Up | KeyCode::Char('k'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Check if key is down arrow or j
    pub fn is_down(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Down | KeyCode::Char('j'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Check if key is home or g
    pub fn is_home(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Home,
                ..
            } | KeyEvent {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Check if key is end or G
    pub fn is_end(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::End,
                ..
            } | KeyEvent {
                code: KeyCode::Char('G'),
                ..
            }
        )
    }

    /// Check if key is page up
    pub fn is_page_up(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::PageUp,
                ..
            }
        )
    }

    /// Check if key is page down
    pub fn is_page_down(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::PageDown,
                ..
            }
        )
    }

    /// Check for specific character (handles both with and without shift for case-sensitive matching)
    pub fn is_char(key: &KeyEvent, c: char) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char(ch),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } if *ch == c
        )
    }

}
