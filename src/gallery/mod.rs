//! Gallery data: artworks, the timeline built from them, and the image
//! loads that feed the page spinner.

mod filter;
mod loader;
mod source;
mod types;

pub use filter::TimelineFilter;
pub use loader::{spawn_image_loads, ImageLoad, ImageRoot};
pub use source::load_from_path;
pub use types::{Artwork, ArtworkCategory, TimelineItem};

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::spinner::ItemDescriptor;

use source::GalleryError;

/// Number of leading timeline entries that count towards the page spinner
pub const INITIAL_WINDOW: usize = 60;

/// A loaded gallery
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    artworks: Vec<Artwork>,
    /// What relative image references resolve against
    images: ImageRoot,
}

impl Gallery {
    /// A gallery whose relative image paths resolve against `base_dir`
    pub fn new(artworks: Vec<Artwork>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            artworks,
            images: ImageRoot::Directory(base_dir.into()),
        }
    }

    /// The bundled demo gallery, images included
    pub fn demo() -> Result<Self, GalleryError> {
        Ok(Self {
            artworks: source::demo()?,
            images: ImageRoot::Bundled,
        })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn image_root(&self) -> &ImageRoot {
        &self.images
    }

    pub fn visible_artworks(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter().filter(|a| !a.is_hidden)
    }

    /// Media groups present among visible artworks, sorted
    pub fn available_mediums(&self) -> Vec<String> {
        self.visible_artworks()
            .filter_map(|a| a.medium.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Years present among visible artworks, newest first
    pub fn available_years(&self) -> Vec<i32> {
        self.visible_artworks()
            .map(|a| a.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }

    /// Visible artworks passing `filter`, newest first, with a year marker
    /// whenever the year changes
    pub fn timeline(&self, filter: &TimelineFilter) -> Vec<TimelineItem> {
        let mut sorted: Vec<&Artwork> = self
            .visible_artworks()
            .filter(|a| filter.matches(a))
            .collect();
        // Stable sort keeps export order for identical dates
        sorted.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        let mut items = Vec::with_capacity(sorted.len() + 8);
        let mut last_year = None;
        for artwork in sorted {
            if last_year != Some(artwork.year) {
                items.push(TimelineItem::YearMarker(artwork.year));
                last_year = Some(artwork.year);
            }
            items.push(TimelineItem::Artwork(artwork.clone()));
        }
        items
    }

    /// Descriptors for the artworks in the initial viewport window
    pub fn initial_descriptors(timeline: &[TimelineItem]) -> Vec<ItemDescriptor> {
        timeline
            .iter()
            .take(INITIAL_WINDOW)
            .filter_map(TimelineItem::artwork)
            .map(Artwork::descriptor)
            .collect()
    }

    /// Count of visible artworks per category, in display order
    pub fn counts_by_category(&self) -> Vec<(ArtworkCategory, usize)> {
        let mut counts: BTreeMap<ArtworkCategory, usize> = BTreeMap::new();
        for artwork in self.visible_artworks() {
            *counts.entry(artwork.category).or_default() += 1;
        }
        ArtworkCategory::all()
            .iter()
            .filter_map(|c| counts.get(c).map(|n| (*c, *n)))
            .collect()
    }

    /// Count of visible artworks per year, oldest first
    pub fn counts_by_year(&self) -> Vec<(i32, usize)> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for artwork in self.visible_artworks() {
            *counts.entry(artwork.year).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: &str, year: i32, month: Option<u32>, image: bool) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: id.to_uppercase(),
            year,
            month,
            cover_image_url: image.then(|| format!("images/{}.png", id)),
            ..Default::default()
        }
    }

    #[test]
    fn timeline_is_newest_first_with_year_markers() {
        let gallery = Gallery::new(
            vec![
                artwork("old", 2019, Some(5), false),
                artwork("new", 2024, Some(1), true),
                artwork("newer", 2024, Some(7), false),
            ],
            ".",
        );
        let timeline = gallery.timeline(&TimelineFilter::default());
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[0], TimelineItem::YearMarker(2024));
        assert_eq!(timeline[1].artwork().unwrap().id, "newer");
        assert_eq!(timeline[2].artwork().unwrap().id, "new");
        assert_eq!(timeline[3], TimelineItem::YearMarker(2019));
    }

    #[test]
    fn hidden_artworks_are_skipped() {
        let mut hidden = artwork("secret", 2024, None, true);
        hidden.is_hidden = true;
        let gallery = Gallery::new(vec![hidden, artwork("shown", 2024, None, false)], ".");
        let ids: Vec<_> = gallery
            .timeline(&TimelineFilter::default())
            .iter()
            .filter_map(|i| i.artwork().map(|a| a.id.clone()))
            .collect();
        assert_eq!(ids, vec!["shown".to_string()]);
    }

    #[test]
    fn descriptors_cover_only_the_initial_window() {
        let artworks: Vec<Artwork> = (0..100)
            .map(|i| artwork(&format!("a{}", i), 2020, Some(1), i % 2 == 0))
            .collect();
        let gallery = Gallery::new(artworks, ".");
        let timeline = gallery.timeline(&TimelineFilter::default());

        let descriptors = Gallery::initial_descriptors(&timeline);
        // One year marker takes a slot in the window
        assert_eq!(descriptors.len(), INITIAL_WINDOW - 1);
        assert!(descriptors.iter().any(|d| d.has_image));
        assert!(descriptors.iter().any(|d| !d.has_image));
    }

    fn grouped(id: &str, medium: &str, year: i32, image: bool) -> Artwork {
        Artwork {
            medium: Some(medium.to_string()),
            ..artwork(id, year, Some(1), image)
        }
    }

    #[test]
    fn filtered_timeline_keeps_year_markers_for_matches_only() {
        let gallery = Gallery::new(
            vec![
                grouped("d1", "drawings", 2024, true),
                grouped("m1", "music", 2023, false),
                grouped("d2", "drawings", 2021, true),
            ],
            ".",
        );
        let filter = TimelineFilter {
            medium: Some("drawings".to_string()),
            ..Default::default()
        };

        let timeline = gallery.timeline(&filter);
        assert_eq!(
            timeline
                .iter()
                .map(|item| match item {
                    TimelineItem::YearMarker(year) => year.to_string(),
                    TimelineItem::Artwork(a) => a.id.clone(),
                })
                .collect::<Vec<_>>(),
            vec!["2024", "d1", "2021", "d2"]
        );
        assert_eq!(gallery.available_mediums(), vec!["drawings", "music"]);
        assert_eq!(gallery.available_years(), vec![2024, 2023, 2021]);
    }

    #[test]
    fn descriptors_follow_the_filtered_window() {
        // 80 text pieces in 2024 push every image out of the unfiltered window
        let mut artworks: Vec<Artwork> = (0..80)
            .map(|i| grouped(&format!("poem{}", i), "poems", 2024, false))
            .collect();
        artworks.extend((0..5).map(|i| grouped(&format!("ink{}", i), "drawings", 2019, true)));
        let gallery = Gallery::new(artworks, ".");

        let all = Gallery::initial_descriptors(&gallery.timeline(&TimelineFilter::default()));
        assert!(all.iter().all(|d| !d.has_image));

        let filter = TimelineFilter {
            medium: Some("drawings".to_string()),
            ..Default::default()
        };
        let drawings = Gallery::initial_descriptors(&gallery.timeline(&filter));
        assert_eq!(drawings.len(), 5);
        assert!(drawings.iter().all(|d| d.has_image));
    }

    #[test]
    fn demo_gallery_uses_bundled_images() {
        let gallery = Gallery::demo().unwrap();
        assert_eq!(gallery.image_root(), &ImageRoot::Bundled);
        assert!(!gallery.available_mediums().is_empty());
    }

    #[test]
    fn stats_count_visible_artworks() {
        let mut music = artwork("m", 2021, None, false);
        music.category = ArtworkCategory::Music;
        let mut hidden = artwork("h", 2021, None, false);
        hidden.is_hidden = true;
        let gallery = Gallery::new(
            vec![music, hidden, artwork("o1", 2020, None, true), artwork("o2", 2021, None, true)],
            ".",
        );

        assert_eq!(
            gallery.counts_by_category(),
            vec![(ArtworkCategory::Music, 1), (ArtworkCategory::Other, 2)]
        );
        assert_eq!(gallery.counts_by_year(), vec![(2020, 1), (2021, 2)]);
    }
}
