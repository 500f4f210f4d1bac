//! Timeline filters: medium, year and a free-text search over title and
//! description. An empty filter lets every visible artwork through.

use super::types::Artwork;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineFilter {
    pub medium: Option<String>,
    pub year: Option<i32>,
    /// Trimmed search text; empty means no search
    pub search: String,
}

impl TimelineFilter {
    pub fn matches(&self, artwork: &Artwork) -> bool {
        if let Some(medium) = self.medium.as_deref() {
            if artwork.medium.as_deref() != Some(medium) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if artwork.year != year {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        artwork.title.to_lowercase().contains(&query)
            || artwork.description.to_lowercase().contains(&query)
    }

    pub fn is_active(&self) -> bool {
        self.medium.is_some() || self.year.is_some() || !self.search.is_empty()
    }

    /// Step to the next medium in `available`, wrapping back to all mediums
    pub fn cycle_medium(&mut self, available: &[String]) {
        self.medium = cycle(self.medium.as_ref(), available);
    }

    /// Step to the next year in `available`, wrapping back to all years
    pub fn cycle_year(&mut self, available: &[i32]) {
        self.year = cycle(self.year.as_ref(), available);
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn cycle<T: PartialEq + Clone>(current: Option<&T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|option| option == value)
            .and_then(|i| options.get(i + 1))
            .cloned(),
    }
}
