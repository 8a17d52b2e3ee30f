//! Round state and the types shared with collaborators
//!
//! Phases, loss causes, outbound events and the read-only world snapshot
//! handed to renderers.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::Rect;

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// World laid out, clock not running. Waiting for the player to grab the square.
    #[default]
    Idle,
    /// Clock running, ticks advance the world
    Running,
    /// Round lost. Transient: the controller resets straight back to Idle.
    Ended,
}

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Player square touched the border band
    Border,
    /// Player square overlapped the enemy at this index
    Enemy { index: usize },
}

/// Result of a finished round, for the notification sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Survival time (ms)
    pub elapsed_ms: u64,
    /// Ticks simulated in the round
    pub ticks: u64,
    /// Enemy speed when the round ended
    pub final_speed: f64,
    pub cause: LossCause,
}

impl RoundSummary {
    /// Survival time in fractional seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }

    /// Message for the end-of-round dialog
    pub fn message(&self) -> String {
        format!("You lasted {} seconds.", self.seconds())
    }
}

/// Events raised by the controller, drained by the UI between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    Started { at_ms: u64 },
    SpeedIncreased { speed: f64, elapsed_ms: u64 },
    Ended(RoundSummary),
}

/// Outcome of a single `tick` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Round not running; nothing happened
    Skipped,
    /// World advanced one step
    Advanced,
    /// Round lost this tick; the controller has already reset to Idle
    RoundEnded(RoundSummary),
}

/// Read-only view of the world for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub phase: RoundPhase,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub border: f64,
    pub player: Rect,
    pub enemies: Vec<Rect>,
    pub elapsed_ms: u64,
    pub speed: f64,
}

impl WorldSnapshot {
    /// Border bands to fill (left, top, right, bottom)
    pub fn border_rects(&self) -> Vec<Rect> {
        Arena::new(self.viewport_width, self.viewport_height, self.border)
            .map(|arena| arena.border_rects().to_vec())
            .unwrap_or_default()
    }
}
