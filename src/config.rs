//! Game configuration, loaded from an optional JSON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SNAKE_CONFIG";

/// Config file used when `SNAKE_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "snake.json";

const MAX_GRID_SIZE: i16 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cells per side of the square board
    pub grid_size: i16,
    /// Pixels per cell side
    pub cell_size: u16,
    /// Tick interval at the start of a run
    pub initial_interval_ms: u64,
    /// How much the interval shrinks per speed-up
    pub speed_step_ms: u64,
    /// The interval never drops below this
    pub min_interval_ms: u64,
    /// Every this many foods eaten triggers one speed-up
    pub foods_per_speed_up: u32,
    /// Play eat / game over sounds when the resources exist
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: 20,
            cell_size: 18,
            initial_interval_ms: 150,
            speed_step_ms: 10,
            min_interval_ms: 50,
            foods_per_speed_up: 5,
            sound: true,
        }
    }
}

impl Config {
    /// Loads the file named by `SNAKE_CONFIG`, falling back to `snake.json`.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(path)
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(contents) => {
                info!("Loading config from {}", path.display());
                Self::from_json(&contents)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 || self.grid_size > MAX_GRID_SIZE {
            return Err(Error::InvalidConfig(format!(
                "grid_size must be between 2 and {}, got {}",
                MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.cell_size == 0 {
            return Err(Error::InvalidConfig("cell_size must be positive".into()));
        }
        if self.foods_per_speed_up == 0 {
            return Err(Error::InvalidConfig(
                "foods_per_speed_up must be positive".into(),
            ));
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.initial_interval_ms {
            return Err(Error::InvalidConfig(format!(
                "min_interval_ms must be in 1..={}, got {}",
                self.initial_interval_ms, self.min_interval_ms
            )));
        }
        Ok(())
    }

    /// Side length of the square canvas in pixels.
    pub fn screen_size(&self) -> f32 {
        self.grid_size as f32 * self.cell_size as f32
    }

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.screen_size(), 360.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "grid_size": 12, "sound": false }"#).unwrap();
        assert_eq!(config.grid_size, 12);
        assert!(!config.sound);
        assert_eq!(config.initial_interval_ms, 150);
        assert_eq!(config.min_interval_ms, 50);
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json("{ grid_size: ").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let tiny = Config { grid_size: 1, ..Config::default() };
        assert!(matches!(tiny.validate(), Err(Error::InvalidConfig(_))));

        let floor_above_start = Config {
            min_interval_ms: 200,
            ..Config::default()
        };
        assert!(floor_above_start.validate().is_err());

        let no_step = Config {
            foods_per_speed_up: 0,
            ..Config::default()
        };
        assert!(no_step.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from("definitely/not/here/snake.json").unwrap();
        assert_eq!(config, Config::default());
    }
}
