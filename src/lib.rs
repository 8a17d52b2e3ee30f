//! Escapa - drag the square, dodge the bouncing blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, arena, collisions, difficulty, round lifecycle)
//! - `settings`: Construction-time game configuration
//! - `error`: Configuration and geometry errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::GameConfig;

/// Game configuration defaults
pub mod consts {
    /// Nominal tick interval of the external clock (ms)
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Viewport defaults (matches the classic 600x600 window)
    pub const VIEWPORT_WIDTH: f64 = 600.0;
    pub const VIEWPORT_HEIGHT: f64 = 600.0;
    /// Thickness of the deadly border band
    pub const BORDER: f64 = 60.0;

    /// Side length of the player square
    pub const PLAYER_SIZE: f64 = 50.0;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 4;
    pub const ENEMY_MIN_SIZE: f64 = 20.0;
    pub const ENEMY_MAX_SIZE: f64 = 80.0;
    /// Enemy speed at round start (units per tick)
    pub const INITIAL_SPEED: f64 = 6.0;
    /// Clearance kept between a spawned enemy and the border band
    pub const SPAWN_MARGIN: f64 = 1.0;
    /// Placement retries allowed per reset before giving up
    pub const SPAWN_ATTEMPTS: u32 = 10_000;

    /// Difficulty step: +1 speed every 10 seconds
    pub const DIFFICULTY_INTERVAL_MS: u64 = 10_000;
    pub const DIFFICULTY_INCREMENT: f64 = 1.0;

    /// Tolerance for speed/geometry comparisons
    pub const EPSILON: f64 = 1e-9;
}
