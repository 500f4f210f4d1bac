//! Application types and state definitions

/// Application tabs/views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Timeline,
    Stats,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Timeline, Tab::Stats]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timeline => " Timeline ",
            Tab::Stats => " Stats ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Timeline => 0,
            Tab::Stats => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Tab::Stats,
            _ => Tab::Timeline,
        }
    }

    pub fn next(&self) -> Self {
        Tab::from_index((self.index() + 1) % Tab::all().len())
    }
}

/// Image load bookkeeping for the current page mount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Loads that completed
    pub loaded: usize,
    /// Loads that failed
    pub failed: usize,
}
