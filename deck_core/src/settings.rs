//! # Deck Settings
//!
//! Optional JSON settings for the front-ends. Every field has a default, so
//! an empty object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "transition": { "fade_out_ms": 200, "fade_in_ms": 50 },
//!   "start_slide": 0,
//!   "window_width": 1100.0,
//!   "window_height": 760.0
//! }
//! ```
//!
//! The file is located through the `STRATAFORGE_DECK_SETTINGS` environment
//! variable. The regression model itself is not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::navigator::TransitionTiming;
use crate::slides::SLIDE_COUNT;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV_VAR: &str = "STRATAFORGE_DECK_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Fade timings for slide changes
    pub transition: TransitionTiming,
    /// Zero-based slide shown at launch
    pub start_slide: usize,
    /// Initial window width (logical px)
    pub window_width: f32,
    /// Initial window height (logical px)
    pub window_height: f32,
}

impl Default for DeckSettings {
    fn default() -> Self {
        DeckSettings {
            transition: TransitionTiming::default(),
            start_slide: 0,
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl DeckSettings {
    pub fn validate(&self) -> DeckResult<()> {
        if self.start_slide >= SLIDE_COUNT {
            return Err(DeckError::slide_out_of_range(self.start_slide, SLIDE_COUNT));
        }
        if !(self.window_width > 0.0) {
            return Err(DeckError::invalid_input(
                "window_width",
                self.window_width.to_string(),
                "Window width must be positive",
            ));
        }
        if !(self.window_height > 0.0) {
            return Err(DeckError::invalid_input(
                "window_height",
                self.window_height.to_string(),
                "Window height must be positive",
            ));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let settings: DeckSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> DeckResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| DeckError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    /// Settings for this launch.
    ///
    /// Reads the file named by [`SETTINGS_ENV_VAR`] if set. A file that
    /// cannot be loaded is reported and replaced by defaults.
    pub fn from_env_or_default() -> Self {
        match std::env::var_os(SETTINGS_ENV_VAR) {
            Some(path) => Self::load_or_default(&PathBuf::from(path)),
            None => DeckSettings::default(),
        }
    }

    /// Load `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded deck settings");
                settings
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default deck settings");
                DeckSettings::default()
            }
        }
    }
}
