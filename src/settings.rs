use crate::tiles::{
    COIN_CHANCE, DEFAULT_LIVES, HIGHLIGHT_TILE, MAX_COINS, PLAYER_FIRST_FRAME, PLAYER_FRAME_SECONDS,
    PLAYER_LAST_FRAME, PLAYER_SHEET_FRAMES, SCREEN_MARGIN,
};
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub const SETTINGS_PATH: &str = "assets/config/settings.ron";

/// Error type for settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game configuration, every field optional in the settings file
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Map config file, read from disk
    pub map_config: PathBuf,
    /// Tile properties file, read from disk
    pub tile_properties: PathBuf,
    /// Player sprite sheet, relative to the asset folder
    pub player_sheet: String,
    /// Pixel size of one frame of the player sheet
    pub player_frame_size: [u32; 2],
    /// Number of frames in the player sheet (single row)
    pub player_frames: usize,
    /// Animated frame range (inclusive)
    pub player_first_frame: usize,
    pub player_last_frame: usize,
    /// Seconds each animation frame is shown
    pub frame_seconds: f32,
    /// Coin image, relative to the asset folder
    pub coin_image: String,
    pub lives: u32,
    pub coin_chance: f32,
    pub max_coins: usize,
    /// Tileset index drawn under the player, None to disable
    pub highlight_tile: Option<usize>,
    /// Empty border around the map, in pixels
    pub margin: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            map_config: PathBuf::from("assets/config/tileMap.txt"),
            tile_properties: PathBuf::from("assets/config/tileProps.txt"),
            player_sheet: "sprites/Jump.png".to_string(),
            player_frame_size: [64, 64],
            player_frames: PLAYER_SHEET_FRAMES,
            player_first_frame: PLAYER_FIRST_FRAME,
            player_last_frame: PLAYER_LAST_FRAME,
            frame_seconds: PLAYER_FRAME_SECONDS,
            coin_image: "sprites/coin.png".to_string(),
            lives: DEFAULT_LIVES,
            coin_chance: COIN_CHANCE,
            max_coins: MAX_COINS,
            highlight_tile: Some(HIGHLIGHT_TILE),
            margin: SCREEN_MARGIN,
        }
    }
}

impl GameSettings {
    /// Load settings from a RON file, falling back to defaults when the file
    /// does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason: String| Err(SettingsError::Invalid { field, reason });

        if self.lives == 0 {
            return invalid("lives", "must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.coin_chance) {
            return invalid("coin_chance", format!("{} is outside [0, 1]", self.coin_chance));
        }
        if self.player_frames == 0 || self.player_frame_size.contains(&0) {
            return invalid("player_frames", "sprite sheet must have non-empty frames".to_string());
        }
        if self.player_first_frame > self.player_last_frame || self.player_last_frame >= self.player_frames {
            return invalid(
                "player_last_frame",
                format!(
                    "range {}..={} does not fit a sheet of {} frames",
                    self.player_first_frame, self.player_last_frame, self.player_frames
                ),
            );
        }
        if !(self.frame_seconds.is_finite() && self.frame_seconds > 0.0) {
            return invalid("frame_seconds", "must be a positive number".to_string());
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return invalid("margin", "must be a non-negative number".to_string());
        }
        Ok(())
    }
}
