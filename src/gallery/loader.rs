//! Background image loads for the initial viewport
//!
//! Each image-bearing artwork gets one task. Local files are read from disk
//! and reported once; remote references are never fetched, so they never
//! report and the spinner's maximum wait covers them.

use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::source::demo_image;
use super::types::Artwork;

/// What relative image references resolve against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRoot {
    /// Directory of the gallery file
    Directory(PathBuf),
    /// Images compiled into the binary with the demo gallery
    Bundled,
}

impl Default for ImageRoot {
    fn default() -> Self {
        ImageRoot::Directory(PathBuf::new())
    }
}

/// Outcome of a single image load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoad {
    Loaded { id: String },
    Failed { id: String, reason: String },
}

/// Where an image reference points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Local(PathBuf),
    Bundled(&'static [u8]),
    Remote(String),
    /// Relative reference with no bundled image behind it
    Missing(String),
}

impl ImageLocation {
    /// Resolve a reference from the export against the gallery's image root
    pub fn resolve(reference: &str, root: &ImageRoot) -> Self {
        let reference = reference.trim();
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageLocation::Remote(reference.to_string());
        }

        let path = Path::new(reference.strip_prefix("file://").unwrap_or(reference));
        if path.is_absolute() {
            return ImageLocation::Local(path.to_path_buf());
        }

        match root {
            ImageRoot::Directory(dir) => ImageLocation::Local(dir.join(path)),
            ImageRoot::Bundled => demo_image(reference)
                .map(ImageLocation::Bundled)
                .unwrap_or_else(|| ImageLocation::Missing(reference.to_string())),
        }
    }
}

/// Spawn one load task per image-bearing artwork. Results arrive on `tx`;
/// the returned handles let the caller abort loads that are still running.
pub fn spawn_image_loads<'a>(
    artworks: impl IntoIterator<Item = &'a Artwork>,
    root: &ImageRoot,
    tx: mpsc::UnboundedSender<ImageLoad>,
) -> Vec<JoinHandle<()>> {
    artworks
        .into_iter()
        .filter_map(|artwork| {
            let reference = artwork.image_ref()?;
            let location = ImageLocation::resolve(reference, root);
            let id = artwork.id.clone();
            let tx = tx.clone();
            Some(tokio::spawn(async move {
                if let Some(result) = load_image(id, location).await {
                    // Receiver is gone once the page unmounts
                    let _ = tx.send(result);
                }
            }))
        })
        .collect()
}

async fn load_image(id: String, location: ImageLocation) -> Option<ImageLoad> {
    match location {
        ImageLocation::Remote(url) => {
            log::debug!("Image {} is remote ({}), not fetched", id, url);
            None
        }
        ImageLocation::Bundled(bytes) if !bytes.is_empty() => Some(ImageLoad::Loaded { id }),
        ImageLocation::Bundled(_) => Some(ImageLoad::Failed {
            id,
            reason: "empty bundled image".to_string(),
        }),
        ImageLocation::Missing(reference) => {
            log::warn!("Image {} has no bundled file for {}", id, reference);
            Some(ImageLoad::Failed {
                id,
                reason: format!("{} is not bundled", reference),
            })
        }
        ImageLocation::Local(path) => match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => {
                log::trace!("Image {} read from {} ({} bytes)", id, path.display(), bytes.len());
                Some(ImageLoad::Loaded { id })
            }
            Ok(_) => {
                log::warn!("Image {} at {} is empty", id, path.display());
                Some(ImageLoad::Failed {
                    id,
                    reason: "empty file".to_string(),
                })
            }
            Err(e) => {
                log::warn!("Image {} failed to load from {}: {}", id, path.display(), e);
                Some(ImageLoad::Failed {
                    id,
                    reason: e.to_string(),
                })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: &str, cover: Option<&str>) -> Artwork {
        Artwork {
            id: id.to_string(),
            cover_image_url: cover.map(str::to_string),
            ..Default::default()
        }
    }

    async fn collect(
        artworks: &[Artwork],
        root: &ImageRoot,
    ) -> (usize, Vec<ImageLoad>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handles = spawn_image_loads(artworks, root, tx);
        let spawned = handles.len();
        for handle in handles {
            handle.await.unwrap();
        }

        let mut results = Vec::new();
        while let Ok(result) = rx.try_recv() {
            results.push(result);
        }
        (spawned, results)
    }

    #[test]
    fn resolves_references() {
        let root = ImageRoot::Directory(PathBuf::from("/gallery"));
        assert_eq!(
            ImageLocation::resolve("images/a.png", &root),
            ImageLocation::Local(PathBuf::from("/gallery/images/a.png"))
        );
        assert_eq!(
            ImageLocation::resolve("file:///srv/b.jpg", &root),
            ImageLocation::Local(PathBuf::from("/srv/b.jpg"))
        );
        assert_eq!(
            ImageLocation::resolve("HTTPS://cdn/c.jpg", &root),
            ImageLocation::Remote("HTTPS://cdn/c.jpg".to_string())
        );
    }

    #[test]
    fn bundled_root_never_touches_the_filesystem() {
        assert!(matches!(
            ImageLocation::resolve("images/paper-birds.png", &ImageRoot::Bundled),
            ImageLocation::Bundled(bytes) if !bytes.is_empty()
        ));
        assert_eq!(
            ImageLocation::resolve("images/lost-sketchbook.png", &ImageRoot::Bundled),
            ImageLocation::Missing("images/lost-sketchbook.png".to_string())
        );
    }

    #[tokio::test]
    async fn bundled_images_load_from_any_working_directory() {
        let artworks = vec![
            artwork("birds", Some("images/paper-birds.png")),
            artwork("window", Some("images/studio-window.png")),
            artwork("lost", Some("images/lost-sketchbook.png")),
        ];

        let (spawned, results) = collect(&artworks, &ImageRoot::Bundled).await;
        assert_eq!(spawned, 3);
        assert!(results.contains(&ImageLoad::Loaded { id: "birds".to_string() }));
        assert!(results.contains(&ImageLoad::Loaded { id: "window".to_string() }));
        assert!(results
            .iter()
            .any(|r| matches!(r, ImageLoad::Failed { id, .. } if id == "lost")));
    }

    #[tokio::test]
    async fn reports_loaded_and_failed_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.png"), [0x89, b'P', b'N', b'G']).unwrap();
        std::fs::write(dir.path().join("empty.png"), b"").unwrap();

        let artworks = vec![
            artwork("ok", Some("ok.png")),
            artwork("empty", Some("empty.png")),
            artwork("missing", Some("missing.png")),
            artwork("remote", Some("https://example.org/r.jpg")),
            artwork("text", None),
        ];

        let root = ImageRoot::Directory(dir.path().to_path_buf());
        let (spawned, results) = collect(&artworks, &root).await;
        assert_eq!(spawned, 4);
        assert_eq!(results.len(), 3);
        assert!(results.contains(&ImageLoad::Loaded { id: "ok".to_string() }));
        assert!(results
            .iter()
            .any(|r| matches!(r, ImageLoad::Failed { id, .. } if id == "empty")));
        assert!(results
            .iter()
            .any(|r| matches!(r, ImageLoad::Failed { id, .. } if id == "missing")));
    }
}
