//! Game settings
//!
//! Chosen before a run starts and never written back by the game. Native
//! builds can read them from a JSON file; missing fields take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    LANE_COUNT, PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_WIDTH, ROAD_HEIGHT, ROAD_WIDTH,
};

/// Largest road edge accepted from settings, in pixels
pub const MAX_ROAD_EXTENT: f32 = 4096.0;
/// Most lanes accepted from settings
pub const MAX_LANE_COUNT: u32 = 16;
use crate::sim::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used by `start`
    pub difficulty: Difficulty,

    // === Audio ===
    /// Global sound toggle
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,

    // === Road ===
    /// Road width in pixels (the canvas width)
    pub road_width: f32,
    pub road_height: f32,
    pub lane_count: u32,

    /// Fixed RNG seed for reproducible runs; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            volume: 1.0,
            road_width: ROAD_WIDTH,
            road_height: ROAD_HEIGHT,
            lane_count: LANE_COUNT,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Read settings from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Self::from_json(&json).map_err(|e| e.to_string()));

        match parsed {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range road dimensions with defaults, clamp volume.
    ///
    /// The road must fit the player car (plus its bottom margin) and stay
    /// within `MAX_ROAD_EXTENT` on both axes.
    pub fn validated(mut self) -> Self {
        let min_height = PLAYER_HEIGHT + PLAYER_BOTTOM_MARGIN;
        if !(PLAYER_WIDTH..=MAX_ROAD_EXTENT).contains(&self.road_width) {
            log::warn!("Road width {} out of range, using {}", self.road_width, ROAD_WIDTH);
            self.road_width = ROAD_WIDTH;
        }
        if !(min_height..=MAX_ROAD_EXTENT).contains(&self.road_height) {
            log::warn!("Road height {} out of range, using {}", self.road_height, ROAD_HEIGHT);
            self.road_height = ROAD_HEIGHT;
        }
        if !(1..=MAX_LANE_COUNT).contains(&self.lane_count) {
            log::warn!("Lane count {} out of range, using {}", self.lane_count, LANE_COUNT);
            self.lane_count = LANE_COUNT;
        }
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }

    /// Volume after the sound toggle
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled { self.volume } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"difficulty": "hard", "seed": 7}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.lane_count, LANE_COUNT);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Settings::from_json(r#"{"difficulty": "nightmare"}"#).is_err());
    }

    #[test]
    fn test_validated_repairs_road() {
        let settings = Settings::from_json(
            r#"{"road_width": -1.0, "road_height": 0.0, "lane_count": 0, "volume": 3.0}"#,
        )
        .unwrap();
        assert_eq!(settings.road_width, ROAD_WIDTH);
        assert_eq!(settings.road_height, ROAD_HEIGHT);
        assert_eq!(settings.lane_count, LANE_COUNT);
        assert_eq!(settings.volume, 1.0);
    }

    #[test]
    fn test_huge_road_falls_back() {
        let settings =
            Settings::from_json(r#"{"road_height": 1e13, "road_width": 1e9, "lane_count": 100000}"#)
                .unwrap();
        assert_eq!(settings.road_height, ROAD_HEIGHT);
        assert_eq!(settings.road_width, ROAD_WIDTH);
        assert_eq!(settings.lane_count, LANE_COUNT);
    }

    #[test]
    fn test_road_narrower_than_car_falls_back() {
        let settings = Settings::from_json(r#"{"road_width": 10.0, "road_height": 50.0}"#).unwrap();
        assert_eq!(settings.road_width, ROAD_WIDTH);
        assert_eq!(settings.road_height, ROAD_HEIGHT);

        // Exact fits are kept
        let settings = Settings::from_json(r#"{"road_width": 40.0, "road_height": 4096.0}"#).unwrap();
        assert_eq!(settings.road_width, PLAYER_WIDTH);
        assert_eq!(settings.road_height, MAX_ROAD_EXTENT);
    }

    #[test]
    fn test_effective_volume_respects_toggle() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_volume(), 1.0);
        settings.sound_enabled = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }
}
