//! Configuration management
//!
//! Handles the persisted user configuration: the page spinner timing, the
//! gallery export to show, and how failed image loads are counted.
//! Environment variables override the file for quick experiments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::spinner::SpinnerConfig;

/// Environment variable naming the gallery export
pub const ENV_GALLERY: &str = "ARTWALL_GALLERY";
pub const ENV_MIN_MS: &str = "ARTWALL_MIN_MS";
pub const ENV_MAX_MS: &str = "ARTWALL_MAX_MS";
pub const ENV_IMAGE_THRESHOLD: &str = "ARTWALL_IMAGE_THRESHOLD";
pub const ENV_FADE_MS: &str = "ARTWALL_FADE_MS";

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Page spinner timing
    #[serde(default)]
    pub spinner: SpinnerConfig,

    /// Gallery export to load; the bundled demo is used when unset
    #[serde(default)]
    pub gallery_path: Option<PathBuf>,

    /// Treat a failed image load as loaded for spinner progress
    #[serde(default)]
    pub count_failed_loads: bool,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| {
                let config_dir = dirs.config_dir().join("artwall");
                fs::create_dir_all(&config_dir).ok();
                config_dir.join("config.json")
            })
            .unwrap_or_else(|| std::env::temp_dir().join("artwall-config.json"))
    }

    /// Load configuration from the default location, then apply the
    /// environment overrides
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config = Self::load_from(&path);

        // Write a template on first run so the knobs are discoverable
        if !path.exists() {
            config.save_to(&path);
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(contents) => {
                if let Err(e) = fs::write(path, contents) {
                    log::warn!("Failed to save config: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize config: {}", e);
            }
        }
    }

    /// Apply overrides looked up through `lookup` (the process environment
    /// in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_GALLERY).filter(|p| !p.trim().is_empty()) {
            self.gallery_path = Some(PathBuf::from(path));
        }

        let signed = |key: &str| -> Option<i64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<i64>() {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring {}={:?}: {}", key, raw, e);
                    None
                }
            }
        };

        if let Some(ms) = signed(ENV_MIN_MS) {
            self.spinner = self.spinner.with_min_ms(ms);
        }
        if let Some(ms) = signed(ENV_MAX_MS) {
            self.spinner = self.spinner.with_max_ms(ms);
        }
        if let Some(threshold) = signed(ENV_IMAGE_THRESHOLD) {
            self.spinner = self.spinner.with_image_threshold(threshold);
        }
        if let Some(ms) = signed(ENV_FADE_MS) {
            self.spinner = self.spinner.with_fade_ms(ms);
        }
    }
}
