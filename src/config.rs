use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Tunables for the carousel and its window. Every field has a default, so an
/// empty TOML file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    pub breakpoint: f32,
    pub transition_ms: u64,
    pub swipe_divisor: f32,
    pub card_gap: f32,
    pub side_padding: f32,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            breakpoint: BREAKPOINT,
            transition_ms: TRANSITION_MS,
            swipe_divisor: SWIPE_DIVISOR,
            card_gap: CARD_GAP,
            side_padding: SIDE_PADDING,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            fps: FPS,
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::InvalidConfig("autoplay_interval_ms must be positive".into()));
        }
        if self.fps == 0 {
            return Err(CarouselError::InvalidConfig("fps must be positive".into()));
        }
        if !(self.swipe_divisor > 0.0) {
            return Err(CarouselError::InvalidConfig("swipe_divisor must be positive".into()));
        }
        if self.card_gap < 0.0 || self.side_padding < 0.0 {
            return Err(CarouselError::InvalidConfig("card_gap and side_padding cannot be negative".into()));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(CarouselError::InvalidConfig("window size must be positive".into()));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CarouselConfig::from_toml_str("").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(config.breakpoint, 768.0);
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let config = CarouselConfig::from_toml_str("autoplay_interval_ms = 2000\nbreakpoint = 600.0").unwrap();
        assert_eq!(config.autoplay_interval_ms, 2000);
        assert_eq!(config.breakpoint, 600.0);
        assert_eq!(config.transition_ms, TRANSITION_MS);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = CarouselConfig::from_toml_str("autoplay_interval_ms = 0");
        assert!(matches!(result, Err(CarouselError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(CarouselConfig::from_toml_str("speed = 3"), Err(CarouselError::Toml(_))));
    }

    #[test]
    fn loads_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "swipe_divisor = 4.0\n").unwrap();
        let config = CarouselConfig::load(file.path()).unwrap();
        assert_eq!(config.swipe_divisor, 4.0);
    }
}
