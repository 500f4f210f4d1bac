//! Stateful list component with selection

use ratatui::widgets::ListState;

/// A list with selection state
#[derive(Debug, Default)]
pub struct StatefulList<T> {
    /// The list state for ratatui
    pub state: ListState,
    /// The items in the list
    items: Vec<T>,
}

impl<T> StatefulList<T> {
    /// Create a new stateful list
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            items: Vec::new(),
        }
    }

    /// Get the items
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the items, keeping the selection in range
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let selected = match (self.items.len(), self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Select the next item, wrapping to the top
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Select the previous item, wrapping to the bottom
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Get the selected item
    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    /// Select first item
    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(0));
        }
    }

    /// Select last item
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(self.items.len() - 1));
        }
    }

    /// Move selection by a page (positive = down, negative = up)
    pub fn page(&mut self, direction: i32, page_size: usize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        let new_index = if direction > 0 {
            (current + page_size).min(self.items.len() - 1)
        } else {
            current.saturating_sub(page_size)
        };
        self.state.select(Some(new_index));
    }
}
