use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::game::GameConfig;

/// Where display names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameSource {
    /// Synthesized locally from syllable fragments.
    #[default]
    Syllables,
    /// First and last name of the fetched person record.
    Person,
}

/// How answers are collected during recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// One shared field, Enter advances to the next face.
    #[default]
    Sequential,
    /// One field per face, submitted together.
    Parallel,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Game settings, loaded from JSON at startup. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Faces per round.
    pub face_count: usize,
    /// Seconds the names stay visible.
    pub show_seconds: u32,
    /// Seconds the result stays on screen before the game resets.
    pub result_delay_seconds: u32,
    /// People-data endpoint, one record per request.
    pub api_url: String,
    pub name_source: NameSource,
    /// Only accept names made of ASCII letters and spaces.
    pub validate_names: bool,
    /// Fetch attempts per face before the load is abandoned.
    pub max_attempts: u32,
    pub input_mode: InputMode,
    /// Label drawn in the top-left corner.
    pub title: String,
    pub world_width: f32,
    pub world_height: f32,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            face_count: 5,
            show_seconds: 30,
            result_delay_seconds: 5,
            api_url: "https://randomuser.me/api/".to_string(),
            name_source: NameSource::Syllables,
            validate_names: false,
            max_attempts: 10,
            input_mode: InputMode::Sequential,
            title: "Face Quiz".to_string(),
            world_width: 800.0,
            world_height: 600.0,
            log_level: "info".to_string(),
        }
    }
}

impl QuizConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.face_count == 0 {
            return Err(ConfigError::Invalid("face_count must be at least 1"));
        }
        if self.show_seconds == 0 {
            return Err(ConfigError::Invalid("show_seconds must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1"));
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::Invalid("world size must be positive"));
        }
        Ok(())
    }

    /// Parsed log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Frame loop settings derived from this config.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            world_width: self.world_width,
            world_height: self.world_height,
            ..GameConfig::default()
        }
    }
}
