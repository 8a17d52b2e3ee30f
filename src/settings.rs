//! Game configuration
//!
//! Fixed at controller construction. Loadable from JSON; missing fields
//! fall back to the classic defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Construction-time game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    /// Initial viewport width
    pub viewport_width: f64,
    /// Initial viewport height
    pub viewport_height: f64,
    /// Border band thickness (constant for a round)
    pub border: f64,

    // === Player ===
    /// Side length of the player square
    pub player_size: f64,

    // === Enemies ===
    /// Number of enemies per round
    pub enemy_count: usize,
    /// Smallest enemy side length
    pub enemy_min_size: f64,
    /// Largest enemy side length
    pub enemy_max_size: f64,
    /// Enemy speed at round start (units per tick)
    pub initial_speed: f64,
    /// Placement retries allowed per reset
    pub spawn_attempts: u32,

    // === Difficulty ===
    /// Elapsed time per speed step (ms)
    pub difficulty_interval_ms: u64,
    /// Speed added per step
    pub difficulty_increment: f64,

    // === Clock ===
    /// Nominal tick interval of the driving clock (ms)
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            border: BORDER,

            player_size: PLAYER_SIZE,

            enemy_count: ENEMY_COUNT,
            enemy_min_size: ENEMY_MIN_SIZE,
            enemy_max_size: ENEMY_MAX_SIZE,
            initial_speed: INITIAL_SPEED,
            spawn_attempts: SPAWN_ATTEMPTS,

            difficulty_interval_ms: DIFFICULTY_INTERVAL_MS,
            difficulty_increment: DIFFICULTY_INCREMENT,

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> GameError {
    GameError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), GameError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

impl GameConfig {
    /// Config with a custom enemy count and border, everything else default
    pub fn with_enemies(enemy_count: usize, border: f64) -> Self {
        Self {
            enemy_count,
            border,
            ..Self::default()
        }
    }

    /// Check every option independently of the viewport.
    ///
    /// Arena geometry (border vs. viewport) is checked by `Arena::new`.
    pub fn validate(&self) -> Result<(), GameError> {
        require_positive("viewport_width", self.viewport_width)?;
        require_positive("viewport_height", self.viewport_height)?;
        if !self.border.is_finite() || self.border < 0.0 {
            return Err(invalid("border", "must be a non-negative number"));
        }
        require_positive("player_size", self.player_size)?;
        if self.enemy_count == 0 {
            return Err(invalid("enemy_count", "at least one enemy is required"));
        }
        require_positive("enemy_min_size", self.enemy_min_size)?;
        require_positive("enemy_max_size", self.enemy_max_size)?;
        if self.enemy_min_size > self.enemy_max_size {
            return Err(invalid(
                "enemy_min_size",
                format!(
                    "min size {} exceeds max size {}",
                    self.enemy_min_size, self.enemy_max_size
                ),
            ));
        }
        // Zero speed would leave enemies without a direction to rescale
        require_positive("initial_speed", self.initial_speed)?;
        if !self.difficulty_increment.is_finite() || self.difficulty_increment < 0.0 {
            return Err(invalid(
                "difficulty_increment",
                "must be a non-negative number",
            ));
        }
        if self.difficulty_interval_ms == 0 {
            return Err(invalid("difficulty_interval_ms", "must be non-zero"));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be non-zero"));
        }
        if self.spawn_attempts == 0 {
            return Err(invalid("spawn_attempts", "must be non-zero"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| invalid("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| invalid("path", format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enemy_count, 4);
        assert_eq!(config.border, 60.0);
        assert_eq!(config.initial_speed, 6.0);
        assert_eq!(config.difficulty_interval_ms, 10_000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "enemy_count": 7, "border": 40 }"#).unwrap();
        assert_eq!(config.enemy_count, 7);
        assert_eq!(config.border, 40.0);
        assert_eq!(config.enemy_max_size, ENEMY_MAX_SIZE);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = GameConfig {
            initial_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig {
                field: "initial_speed",
                ..
            })
        ));

        let config = GameConfig {
            enemy_min_size: 90.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig::with_enemies(0, 60.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(GameError::InvalidConfig { field: "json", .. })
        ));
    }
}
