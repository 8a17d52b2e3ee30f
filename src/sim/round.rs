//! Round controller
//!
//! Owns the world (player square, enemies, arena) and drives the round
//! lifecycle: Idle -> Running -> Ended -> (reset) -> Idle. An external clock
//! calls `tick` at a fixed interval; input collaborators go through the
//! pointer methods and never touch the world directly.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::collision;
use super::difficulty::DifficultyScheduler;
use super::entity::{Entity, Rect};
use super::state::{LossCause, RoundEvent, RoundPhase, RoundSummary, TickOutcome, WorldSnapshot};
use crate::consts::SPAWN_MARGIN;
use crate::error::GameError;
use crate::settings::GameConfig;

#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    arena: Arena,
    phase: RoundPhase,
    player: Rect,
    enemies: Vec<Entity>,
    difficulty: DifficultyScheduler,
    /// Clock time the current round started (ms)
    start_ms: u64,
    elapsed_ms: u64,
    ticks: u64,
    /// Pointer position relative to the player's top-left while dragging
    drag_offset: Option<DVec2>,
    rng: Pcg32,
    events: Vec<RoundEvent>,
}

impl RoundController {
    /// Build a controller and lay out the first round.
    ///
    /// Fails fast on an invalid config, an arena with no interior, or an
    /// interior too small to place the enemies.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let arena = Arena::new(config.viewport_width, config.viewport_height, config.border)?;
        check_room(&config, &arena)?;

        let mut controller = Self {
            difficulty: DifficultyScheduler::from_config(&config),
            player: Rect::new(0.0, 0.0, config.player_size, config.player_size),
            config,
            arena,
            phase: RoundPhase::Idle,
            enemies: Vec::new(),
            start_ms: 0,
            elapsed_ms: 0,
            ticks: 0,
            drag_offset: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        controller.reset()?;
        Ok(controller)
    }

    // === Accessors ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player(&self) -> &Rect {
        &self.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Current global enemy speed
    pub fn speed(&self) -> f64 {
        self.difficulty.speed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    // === Lifecycle ===

    /// Start the clock. Only valid from Idle; returns whether the round started.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase != RoundPhase::Idle {
            log::warn!("start() ignored in {:?}", self.phase);
            return false;
        }
        self.phase = RoundPhase::Running;
        self.start_ms = now_ms;
        self.elapsed_ms = 0;
        self.ticks = 0;
        self.events.push(RoundEvent::Started { at_ms: now_ms });
        log::info!("Round started at {now_ms}ms");
        true
    }

    /// Advance one step. Ticks outside Running are skipped.
    ///
    /// On a loss the round ends, a `RoundEvent::Ended` is queued and the
    /// world is reset to a fresh Idle round before returning.
    pub fn tick(&mut self, now_ms: u64) -> Result<TickOutcome, GameError> {
        if self.phase != RoundPhase::Running {
            return Ok(TickOutcome::Skipped);
        }

        // Clock is monotonic; never let elapsed time run backwards
        self.elapsed_ms = now_ms.saturating_sub(self.start_ms).max(self.elapsed_ms);
        self.ticks += 1;

        if self.difficulty.update(self.elapsed_ms, &mut self.enemies)? > 0 {
            self.events.push(RoundEvent::SpeedIncreased {
                speed: self.difficulty.speed(),
                elapsed_ms: self.elapsed_ms,
            });
        }

        match collision::resolve_tick(&self.player, &mut self.enemies, &self.arena) {
            None => Ok(TickOutcome::Advanced),
            Some(cause) => {
                let summary = self.end(cause);
                self.reset()?;
                Ok(TickOutcome::RoundEnded(summary))
            }
        }
    }

    fn end(&mut self, cause: LossCause) -> RoundSummary {
        self.phase = RoundPhase::Ended;
        let summary = RoundSummary {
            elapsed_ms: self.elapsed_ms,
            ticks: self.ticks,
            final_speed: self.difficulty.speed(),
            cause,
        };
        log::info!("Round ended ({cause:?}): {}", summary.message());
        self.events.push(RoundEvent::Ended(summary));
        summary
    }

    /// Lay out a fresh round: player centred, speed back to initial, all
    /// enemies regenerated. Valid from any phase; leaves the controller Idle.
    ///
    /// On error nothing is changed.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let player = Rect::new(
            self.arena.width() / 2.0,
            self.arena.height() / 2.0,
            self.config.player_size,
            self.config.player_size,
        );
        let enemies = self.spawn_enemies(&player, self.config.initial_speed)?;

        self.player = player;
        self.enemies = enemies;
        self.difficulty.reset();
        self.phase = RoundPhase::Idle;
        self.elapsed_ms = 0;
        self.ticks = 0;
        self.drag_offset = None;
        log::info!("Round reset: {} enemies", self.enemies.len());
        Ok(())
    }

    /// Place `enemy_count` enemies uniformly inside the interior, rejecting
    /// spots that overlap the player. Retries are bounded by `spawn_attempts`.
    fn spawn_enemies(&mut self, player: &Rect, speed: f64) -> Result<Vec<Entity>, GameError> {
        let requested = self.config.enemy_count;
        let budget = self.config.spawn_attempts;
        let (min_size, max_size) = (self.config.enemy_min_size, self.config.enemy_max_size);
        let lo = self.arena.border() + SPAWN_MARGIN;
        let mut enemies = Vec::with_capacity(requested);
        let mut attempts = 0u32;

        while enemies.len() < requested {
            if attempts >= budget {
                return Err(GameError::SpawnStarvation {
                    placed: enemies.len(),
                    requested,
                    attempts,
                });
            }
            attempts += 1;

            let width = self.rng.random_range(min_size..=max_size);
            let height = self.rng.random_range(min_size..=max_size);
            let theta = self.rng.random_range(0.0..TAU);

            let span_x = (self.arena.inner_right() - SPAWN_MARGIN - width - lo).max(0.0);
            let span_y = (self.arena.inner_bottom() - SPAWN_MARGIN - height - lo).max(0.0);
            let x = lo + self.rng.random::<f64>() * span_x;
            let y = lo + self.rng.random::<f64>() * span_y;

            let rect = Rect::new(x, y, width, height);
            if rect.intersects(player) {
                continue;
            }
            log::debug!("spawned enemy {width:.0}x{height:.0} at ({x:.0}, {y:.0})");
            enemies.push(Entity::with_heading(rect, speed, theta));
        }
        Ok(enemies)
    }

    /// Track a new viewport size. While Idle the world is laid out again for
    /// the new size; a running round keeps its enemies.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), GameError> {
        let mut arena = self.arena;
        arena.resize(width, height)?;
        if let Err(e) = check_room(&self.config, &arena) {
            log::warn!("resize to {width}x{height} rejected: {e}");
            return Err(e);
        }

        let previous = self.arena;
        self.arena = arena;
        if self.phase == RoundPhase::Idle {
            if let Err(e) = self.reset() {
                self.arena = previous;
                return Err(e);
            }
        }
        Ok(())
    }

    // === Input ===

    /// Move the player square. Never clamped: leaving the interior is a
    /// loss on the next tick, not a constraint on input.
    pub fn set_player_position(&mut self, x: f64, y: f64) {
        self.player.pos = DVec2::new(x, y);
    }

    /// Pointer pressed. Grabbing the player square starts an idle round and
    /// begins a drag. Returns whether the square was grabbed.
    pub fn pointer_down(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        let point = DVec2::new(x, y);
        if !self.player.contains_point(point) {
            return false;
        }
        if self.phase == RoundPhase::Idle {
            self.start(now_ms);
        }
        self.drag_offset = Some(point - self.player.pos);
        true
    }

    /// Pointer moved; drags the square if a drag is active
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(offset) = self.drag_offset {
            let pos = DVec2::new(x, y) - offset;
            self.set_player_position(pos.x, pos.y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag_offset = None;
    }

    // === Output ===

    /// Events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            phase: self.phase,
            viewport_width: self.arena.width(),
            viewport_height: self.arena.height(),
            border: self.arena.border(),
            player: self.player,
            enemies: self.enemies.iter().map(|e| e.rect).collect(),
            elapsed_ms: self.elapsed_ms,
            speed: self.difficulty.speed(),
        }
    }
}

/// The interior must hold the largest enemy (with spawn margin) and the
/// centred player square.
fn check_room(config: &GameConfig, arena: &Arena) -> Result<(), GameError> {
    let interior = arena.interior();
    let needed = config.enemy_max_size + 2.0 * SPAWN_MARGIN;
    if interior.width() < needed || interior.height() < needed {
        return Err(GameError::InvalidConfig {
            field: "enemy_max_size",
            reason: format!(
                "{} does not fit a {}x{} interior",
                config.enemy_max_size,
                interior.width(),
                interior.height()
            ),
        });
    }

    let player = Rect::new(
        arena.width() / 2.0,
        arena.height() / 2.0,
        config.player_size,
        config.player_size,
    );
    if !arena.contains(&player) {
        return Err(GameError::InvalidConfig {
            field: "player_size",
            reason: format!(
                "centred player {} leaves the {}x{} interior",
                config.player_size,
                interior.width(),
                interior.height()
            ),
        });
    }
    Ok(())
}
