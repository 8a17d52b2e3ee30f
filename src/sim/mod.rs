//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Ticks driven by an external clock, one step per call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod round;
pub mod state;

pub use arena::Arena;
pub use collision::{BorderContact, Wall, player_breaches_border, reflect_off_border, resolve_tick};
pub use difficulty::DifficultyScheduler;
pub use entity::{Entity, Rect};
pub use round::RoundController;
pub use state::{LossCause, RoundEvent, RoundPhase, RoundSummary, TickOutcome, WorldSnapshot};
