//! Reading gallery exports from disk
//!
//! Three shapes are accepted: a plain JSON array of artworks, an object
//! keyed by artwork id, and the data store's nested `medium -> id -> artwork`
//! layout (optionally wrapped in a top-level `artwall` key).

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::Artwork;

/// Embedded demo export, used when no gallery path is configured
const DEMO_GALLERY: &str = include_str!("../../assets/demo/gallery.json");

/// Demo images, keyed by the reference used in the demo export
const DEMO_IMAGES: [(&str, &[u8]); 4] = [
    (
        "images/harbour-at-dusk.png",
        include_bytes!("../../assets/demo/images/harbour-at-dusk.png"),
    ),
    (
        "images/still-life-with-pears.png",
        include_bytes!("../../assets/demo/images/still-life-with-pears.png"),
    ),
    (
        "images/studio-window.png",
        include_bytes!("../../assets/demo/images/studio-window.png"),
    ),
    (
        "images/paper-birds.png",
        include_bytes!("../../assets/demo/images/paper-birds.png"),
    ),
];

/// Gallery loading errors
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to read gallery file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gallery JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported gallery layout: {0}")]
    Layout(String),
}

/// Load artworks from a JSON export on disk
pub async fn load_from_path(path: &Path) -> Result<Vec<Artwork>, GalleryError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_export(&contents)
}

/// The bundled demo gallery
pub fn demo() -> Result<Vec<Artwork>, GalleryError> {
    parse_export(DEMO_GALLERY)
}

/// Bytes of a demo image compiled into the binary
pub fn demo_image(reference: &str) -> Option<&'static [u8]> {
    DEMO_IMAGES
        .iter()
        .find(|(name, _)| *name == reference)
        .map(|(_, bytes)| *bytes)
}

/// Parse any of the supported export layouts
pub fn parse_export(contents: &str) -> Result<Vec<Artwork>, GalleryError> {
    let value: Value = serde_json::from_str(contents)?;
    let mut artworks = Vec::new();

    match value {
        Value::Array(items) => {
            for item in items {
                artworks.push(serde_json::from_value(item)?);
            }
        }
        Value::Object(mut map) => {
            // Realtime database exports wrap everything under the root key
            if let Some(Value::Object(inner)) = map.remove("artwall") {
                map = inner;
            }
            collect_keyed(map, None, &mut artworks)?;
        }
        other => {
            return Err(GalleryError::Layout(format!(
                "expected an array or object, found {}",
                json_kind(&other)
            )))
        }
    }

    Ok(artworks)
}

fn collect_keyed(
    map: Map<String, Value>,
    medium: Option<&str>,
    out: &mut Vec<Artwork>,
) -> Result<(), GalleryError> {
    for (key, value) in map {
        let Value::Object(fields) = value else {
            log::debug!("Skipping non-object gallery entry {}", key);
            continue;
        };

        if looks_like_artwork(&fields) {
            let mut artwork: Artwork = serde_json::from_value(Value::Object(fields))?;
            if artwork.id.is_empty() {
                artwork.id = key;
            }
            if artwork.medium.is_none() {
                artwork.medium = medium.map(str::to_string);
            }
            out.push(artwork);
        } else if medium.is_none() {
            collect_keyed(fields, Some(&key), out)?;
        } else {
            log::debug!("Skipping nested gallery group {} below {:?}", key, medium);
        }
    }
    Ok(())
}

fn looks_like_artwork(fields: &Map<String, Value>) -> bool {
    ["title", "year", "category"]
        .iter()
        .any(|key| fields.contains_key(*key))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_plain_array() {
        let artworks = parse_export(
            r#"[{ "id": "a", "title": "One", "year": 2020 }, { "id": "b", "title": "Two", "year": 2021 }]"#,
        )
        .unwrap();
        assert_eq!(artworks.len(), 2);
        assert_eq!(artworks[1].id, "b");
    }

    #[test]
    fn keyed_object_fills_missing_ids() {
        let artworks =
            parse_export(r#"{ "k1": { "title": "One", "year": 2020 }, "k2": { "id": "own", "year": 2001 } }"#)
                .unwrap();
        let ids: Vec<&str> = artworks.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"k1"));
        assert!(ids.contains(&"own"));
    }

    #[test]
    fn nested_medium_groups_set_medium() {
        let artworks = parse_export(
            r#"{ "artwall": {
                "drawings": { "d1": { "title": "Line", "year": 2018 } },
                "music": { "m1": { "title": "Song", "year": 2019, "category": "music" } }
            } }"#,
        )
        .unwrap();
        assert_eq!(artworks.len(), 2);
        let drawing = artworks.iter().find(|a| a.id == "d1").unwrap();
        assert_eq!(drawing.medium.as_deref(), Some("drawings"));
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = parse_export("42").unwrap_err();
        assert!(matches!(err, GalleryError::Layout(_)));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_export("{"), Err(GalleryError::Json(_))));
    }

    #[test]
    fn demo_gallery_parses() {
        let artworks = demo().unwrap();
        assert!(!artworks.is_empty());
        assert!(artworks.iter().any(|a| a.has_image()));
        assert!(artworks.iter().any(|a| !a.has_image()));
    }

    #[test]
    fn demo_images_are_compiled_in() {
        let artworks = demo().unwrap();
        let local: Vec<&str> = artworks
            .iter()
            .filter_map(Artwork::image_ref)
            .filter(|r| !r.starts_with("http"))
            .collect();

        let bundled = local.iter().filter(|r| demo_image(r).is_some()).count();
        assert_eq!(bundled, DEMO_IMAGES.len());
        assert!(DEMO_IMAGES.iter().all(|(_, bytes)| !bytes.is_empty()));
        assert_eq!(demo_image("images/lost-sketchbook.png"), None);
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "a", "title": "One", "year": 2020 }}]"#).unwrap();

        let artworks = load_from_path(file.path()).await.unwrap();
        assert_eq!(artworks[0].title, "One");
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = load_from_path(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
