//! Time-driven difficulty
//!
//! Enemy speed is a step function of elapsed round time: one increment per
//! completed interval. An explicit interval counter makes each step fire
//! exactly once regardless of tick jitter.

use super::entity::Entity;
use crate::consts::EPSILON;
use crate::error::GameError;
use crate::settings::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyScheduler {
    initial_speed: f64,
    increment: f64,
    interval_ms: u64,
    /// Completed intervals already applied this round
    steps: u64,
    speed: f64,
}

impl DifficultyScheduler {
    pub fn new(initial_speed: f64, increment: f64, interval_ms: u64) -> Self {
        Self {
            initial_speed,
            increment,
            interval_ms: interval_ms.max(1),
            steps: 0,
            speed: initial_speed,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.initial_speed,
            config.difficulty_increment,
            config.difficulty_interval_ms,
        )
    }

    /// Current global enemy speed
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Intervals applied so far this round
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Back to the initial speed for a fresh round
    pub fn reset(&mut self) {
        self.steps = 0;
        self.speed = self.initial_speed;
    }

    /// Speed after `steps` completed intervals
    fn speed_at(&self, steps: u64) -> f64 {
        self.initial_speed + steps as f64 * self.increment
    }

    /// Catch up to `elapsed_ms`, rescaling every enemy if a step boundary
    /// was crossed. Returns the number of steps applied (usually 0 or 1).
    pub fn update(&mut self, elapsed_ms: u64, enemies: &mut [Entity]) -> Result<u64, GameError> {
        let target = elapsed_ms / self.interval_ms;
        if target <= self.steps {
            return Ok(0);
        }

        // All-or-nothing: never leave enemies at mixed speeds
        if enemies.iter().any(|e| e.speed() <= EPSILON) {
            return Err(GameError::ZeroSpeed);
        }
        let new_speed = self.speed_at(target);
        for enemy in enemies.iter_mut() {
            enemy.set_speed(new_speed)?;
        }

        let applied = target - self.steps;
        self.steps = target;
        self.speed = new_speed;
        log::debug!(
            "difficulty step x{applied} at {elapsed_ms}ms: speed now {:.1}",
            self.speed
        );
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Rect;
    use glam::DVec2;

    fn enemy(vel: DVec2) -> Entity {
        Entity::new(Rect::new(100.0, 100.0, 20.0, 20.0), vel)
    }

    #[test]
    fn test_no_step_at_round_start() {
        let mut sched = DifficultyScheduler::new(6.0, 1.0, 10_000);
        let mut enemies = vec![enemy(DVec2::new(6.0, 0.0))];
        assert_eq!(sched.update(0, &mut enemies).unwrap(), 0);
        assert_eq!(sched.update(20, &mut enemies).unwrap(), 0);
        assert_eq!(sched.update(9_999, &mut enemies).unwrap(), 0);
        assert_eq!(sched.speed(), 6.0);
    }

    #[test]
    fn test_step_fires_once_per_interval() {
        let mut sched = DifficultyScheduler::new(6.0, 1.0, 10_000);
        let mut enemies = vec![enemy(DVec2::new(0.0, -6.0)), enemy(DVec2::new(3.0, 4.0))];

        assert_eq!(sched.update(10_005, &mut enemies).unwrap(), 1);
        assert_eq!(sched.speed(), 7.0);
        // Jittered ticks near the boundary don't step again
        assert_eq!(sched.update(10_010, &mut enemies).unwrap(), 0);
        assert_eq!(sched.update(10_019, &mut enemies).unwrap(), 0);

        for e in &enemies {
            assert!((e.speed() - 7.0).abs() < 1e-9);
        }
        // Direction preserved
        assert!(enemies[0].vel.x.abs() < 1e-9);
        assert!(enemies[0].vel.y < 0.0);
        assert!((enemies[1].vel.x / enemies[1].vel.y - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_long_gap_catches_up() {
        let mut sched = DifficultyScheduler::new(6.0, 1.0, 10_000);
        let mut enemies = vec![enemy(DVec2::new(6.0, 0.0))];
        assert_eq!(sched.update(35_000, &mut enemies).unwrap(), 3);
        assert_eq!(sched.speed(), 9.0);
        assert_eq!(sched.steps(), 3);

        sched.reset();
        assert_eq!(sched.speed(), 6.0);
        assert_eq!(sched.steps(), 0);
    }

    #[test]
    fn test_zero_velocity_enemy_errors() {
        let mut sched = DifficultyScheduler::new(6.0, 1.0, 10_000);
        let mut enemies = vec![enemy(DVec2::ZERO)];
        assert_eq!(sched.update(10_000, &mut enemies), Err(GameError::ZeroSpeed));
        // Failed step is not recorded
        assert_eq!(sched.steps(), 0);
    }
}
