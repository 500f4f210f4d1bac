//! Loading glyph for the page overlay

use crate::theme::symbols::SPINNER;

/// An animated loading glyph with a caption
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Current frame index
    frame: usize,
    /// Caption shown next to the glyph
    message: String,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frame: 0,
            message: "Loading...".to_string(),
        }
    }
}

impl Spinner {
    /// Create with a custom message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            frame: 0,
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
    }

    /// Get the current glyph
    pub fn char(&self) -> &'static str {
        SPINNER[self.frame]
    }
}
