//! Artwork records as stored in the data store export

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::spinner::ItemDescriptor;

/// File extensions treated as displayable images
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Artwork category
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkCategory {
    Poetry,
    Prose,
    Sculpture,
    Drawing,
    Music,
    Video,
    Prosepoetry,
    Image,
    #[default]
    #[serde(other)]
    Other,
}

impl ArtworkCategory {
    pub fn all() -> &'static [ArtworkCategory] {
        &[
            ArtworkCategory::Poetry,
            ArtworkCategory::Prose,
            ArtworkCategory::Prosepoetry,
            ArtworkCategory::Drawing,
            ArtworkCategory::Sculpture,
            ArtworkCategory::Image,
            ArtworkCategory::Music,
            ArtworkCategory::Video,
            ArtworkCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtworkCategory::Poetry => "Poetry",
            ArtworkCategory::Prose => "Prose",
            ArtworkCategory::Sculpture => "Sculpture",
            ArtworkCategory::Drawing => "Drawing",
            ArtworkCategory::Music => "Music",
            ArtworkCategory::Video => "Video",
            ArtworkCategory::Prosepoetry => "Prose poetry",
            ArtworkCategory::Image => "Image",
            ArtworkCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single gallery entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ArtworkCategory,
    /// Free-form medium label used by the export's grouping
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

impl Artwork {
    /// Creation date of the artwork itself, when the parts form a valid date
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Chronological sort key; missing parts sort first within their year
    pub fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
    }

    pub fn date_formatted(&self) -> String {
        match (self.month, self.day, self.date()) {
            (Some(_), Some(_), Some(date)) => date.format("%Y-%m-%d").to_string(),
            (Some(_), None, Some(date)) => date.format("%Y-%m").to_string(),
            _ => self.year.to_string(),
        }
    }

    /// The image this entry renders, if any: the cover first, then the
    /// first media URL that points at an image file.
    pub fn image_ref(&self) -> Option<&str> {
        if let Some(cover) = self.cover_image_url.as_deref() {
            if !cover.trim().is_empty() {
                return Some(cover);
            }
        }
        self.media_url
            .iter()
            .chain(self.media_urls.iter())
            .map(String::as_str)
            .find(|url| is_image_url(url))
    }

    pub fn has_image(&self) -> bool {
        self.image_ref().is_some()
    }

    pub fn descriptor(&self) -> ItemDescriptor {
        ItemDescriptor::new(self.id.clone(), self.has_image())
    }
}

/// Whether a URL or path ends in a known image extension
pub fn is_image_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    // Query strings and fragments do not count towards the extension
    let path = lower
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// One row of the timeline
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineItem {
    YearMarker(i32),
    Artwork(Artwork),
}

impl TimelineItem {
    pub fn artwork(&self) -> Option<&Artwork> {
        match self {
            TimelineItem::Artwork(artwork) => Some(artwork),
            TimelineItem::YearMarker(_) => None,
        }
    }
}
