//! Game configuration
//!
//! Every tunable constant lives here and is handed to the systems at
//! construction. Can be loaded from a JSON file; missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parse but would break the simulation
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// HUD strip height; the playfield starts below it
    pub interface_height: f32,
    pub fps_limit: u32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_default_speed: f32,
    pub ball_max_speed: f32,
    pub ball_speed_step: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    // === Rules ===
    pub win_score: u32,

    // === Power-ups ===
    pub power_up_size: f32,
    pub power_up_spawn_min: f32,
    pub power_up_spawn_max: f32,
    pub power_up_blink_window: f32,
    pub freeze_duration: f32,
    pub slow_speed: f32,
    pub slow_duration: f32,
    pub extra_width: f32,
    pub extra_width_duration: f32,
    pub cannon_duration: f32,

    // === Wave effect ===
    pub wave_duration: f32,
    pub wave_frequency: f32,
    pub wave_base_speed: f32,
    pub wave_max_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            interface_height: INTERFACE_HEIGHT,
            fps_limit: FPS_LIMIT,

            ball_radius: BALL_RADIUS,
            ball_default_speed: BALL_DEFAULT_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            ball_speed_step: BALL_SPEED_STEP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,

            win_score: WIN_SCORE,

            power_up_size: POWER_UP_SIZE,
            power_up_spawn_min: POWER_UP_SPAWN_MIN,
            power_up_spawn_max: POWER_UP_SPAWN_MAX,
            power_up_blink_window: POWER_UP_BLINK_WINDOW,
            freeze_duration: FREEZE_DURATION,
            slow_speed: SLOW_SPEED,
            slow_duration: SLOW_DURATION,
            extra_width: EXTRA_WIDTH,
            extra_width_duration: EXTRA_WIDTH_DURATION,
            cannon_duration: CANNON_DURATION,

            wave_duration: WAVE_DURATION,
            wave_frequency: WAVE_FREQUENCY,
            wave_base_speed: WAVE_BASE_SPEED,
            wave_max_size: WAVE_MAX_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of the area below the HUD strip.
    ///
    /// Also used as the bottom exit line for balls and bullets.
    pub fn game_area_height(&self) -> f32 {
        self.screen_height - self.interface_height
    }

    /// Top exit line (ball scores for the player, bullets vanish)
    pub fn play_top(&self) -> f32 {
        self.interface_height
    }

    /// Bottom exit line (ball scores for the AI, bullets vanish)
    pub fn play_bottom(&self) -> f32 {
        self.game_area_height()
    }

    /// Paddle spawn X, shared by both sides
    pub fn paddle_start_x(&self) -> f32 {
        (self.screen_width - 100.0) / 2.0
    }

    /// Parse from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the simulation cannot run with (empty random ranges,
    /// non-positive sizes)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_up_spawn_min < 0.0 || self.power_up_spawn_min > self.power_up_spawn_max {
            return Err(ConfigError::Invalid(format!(
                "power-up spawn interval [{}, {}] is empty or negative",
                self.power_up_spawn_min, self.power_up_spawn_max
            )));
        }
        // Power-ups spawn with x in [50, width - 100]
        if self.screen_width < 150.0 {
            return Err(ConfigError::Invalid(format!(
                "screen_width {} leaves no room to spawn power-ups (minimum 150)",
                self.screen_width
            )));
        }
        if self.screen_height < self.interface_height {
            return Err(ConfigError::Invalid(format!(
                "screen_height {} is smaller than interface_height {}",
                self.screen_height, self.interface_height
            )));
        }
        if self.paddle_width <= 0.0 || self.ball_radius <= 0.0 {
            return Err(ConfigError::Invalid(
                "paddle_width and ball_radius must be positive".to_string(),
            ));
        }
        if self.wave_base_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wave_base_speed {} is negative",
                self.wave_base_speed
            )));
        }
        Ok(())
    }

    /// Read, parse and validate a JSON config file
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, falling back to defaults when the file is
    /// missing, malformed or invalid
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Config {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_playfield_bounds() {
        let config = Config::new();
        assert_eq!(config.play_top(), 50.0);
        assert_eq!(config.play_bottom(), 550.0);
        assert_eq!(config.paddle_start_x(), 350.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "win_score": 3, "ball_max_speed": 900.0 }"#).unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.ball_max_speed, 900.0);
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_json_roundtrip_default() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = Config::load(Path::new("/definitely/not/here.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_inverted_spawn_interval_is_rejected() {
        let config =
            Config::from_json(r#"{ "power_up_spawn_min": 12.0, "power_up_spawn_max": 4.0 }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_narrow_screen_is_rejected() {
        let config = Config::from_json(r#"{ "screen_width": 120.0 }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let path = std::env::temp_dir().join(format!("cannon-pong-invalid-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "power_up_spawn_min": 9.0, "power_up_spawn_max": 1.0 }"#).unwrap();

        assert!(matches!(Config::try_load(&path), Err(ConfigError::Invalid(_))));
        assert_eq!(Config::load(&path), Config::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Config::from_json("{ not json").is_err());
    }
}
