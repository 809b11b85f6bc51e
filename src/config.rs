//! Carousel settings: built-in presets, TOML file loading and validation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::CarouselError;

/// How slides change places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// Outgoing slide moves out while the new one moves in.
    Slide,
    /// New slide replaces the old one in place.
    Cut,
}

/// Where arrow keys are listened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardScope {
    /// Arrow keys navigate wherever the pointer is.
    Global,
    /// Arrow keys only navigate while the pointer is over the carousel.
    Hover,
}

/// Starting points matching the two carousels of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Video showcase: 6 s per slide, sliding transitions.
    Showcase,
    /// Hero banner: 8 s per slide, hard cuts.
    Hero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub auto_advance_ms: u64,
    pub swipe_threshold_px: f32,
    pub transition_ms: u64,
    pub transition: TransitionStyle,
    pub keyboard_scope: KeyboardScope,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Showcase)
    }
}

impl CarouselConfig {
    pub fn from_preset(preset: Preset) -> Self {
        let (auto_advance_ms, transition) = match preset {
            Preset::Showcase => (SHOWCASE_AUTO_ADVANCE_MS, TransitionStyle::Slide),
            Preset::Hero => (HERO_AUTO_ADVANCE_MS, TransitionStyle::Cut),
        };
        Self {
            auto_advance_ms,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            transition_ms: TRANSITION_MS,
            transition,
            keyboard_scope: KeyboardScope::Global,
        }
    }

    /// Read a TOML file. Keys that are absent keep their showcase defaults.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|source| CarouselError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.auto_advance_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "auto_advance_ms must be greater than zero".to_string(),
            ));
        }
        // Cuts have no motion, so their length doesn't matter
        if self.transition == TransitionStyle::Slide && self.transition_ms > self.auto_advance_ms {
            return Err(CarouselError::InvalidConfig(format!(
                "transition_ms ({}) must not exceed auto_advance_ms ({})",
                self.transition_ms, self.auto_advance_ms
            )));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe_threshold_px must be a non-negative number, got {}",
                self.swipe_threshold_px
            )));
        }
        Ok(())
    }

    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn presets_disagree_on_delay() {
        assert_eq!(CarouselConfig::from_preset(Preset::Showcase).auto_advance_ms, 6000);
        assert_eq!(CarouselConfig::from_preset(Preset::Hero).auto_advance_ms, 8000);
        assert_eq!(CarouselConfig::from_preset(Preset::Hero).transition, TransitionStyle::Cut);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("auto_advance_ms = 8000\nkeyboard_scope = \"hover\"\n");
        let config = CarouselConfig::load(file.path()).unwrap();

        assert_eq!(config.auto_advance_ms, 8000);
        assert_eq!(config.keyboard_scope, KeyboardScope::Hover);
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.transition, TransitionStyle::Slide);
    }

    #[test]
    fn zero_delay_is_rejected() {
        let file = write_config("auto_advance_ms = 0\ntransition_ms = 0\n");
        let err = CarouselConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
    }

    #[test]
    fn transition_longer_than_delay_is_rejected() {
        let config = CarouselConfig {
            auto_advance_ms: 300,
            ..CarouselConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn short_delay_is_fine_with_cuts() {
        let config = CarouselConfig {
            auto_advance_ms: 300,
            transition: TransitionStyle::Cut,
            ..CarouselConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_file_reports_path() {
        let file = write_config("transition = \"wipe\"\n");
        match CarouselConfig::load(file.path()) {
            Err(CarouselError::ConfigParse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CarouselConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Io(_)));
    }
}
