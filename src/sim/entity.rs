//! Rectangle geometry and moving entities
//!
//! A `Rect` is an axis-aligned box in screen space (y grows downward),
//! positioned by its top-left corner. An `Entity` composes a `Rect` with a
//! velocity in units per tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;
use crate::error::GameError;

/// Axis-aligned rectangle. Size is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: DVec2,
    size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Interior overlap test. Shared edges do not count as overlap, and an
    /// empty rectangle never overlaps anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width() > 0.0
            && self.height() > 0.0
            && other.width() > 0.0
            && other.height() > 0.0
            && self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Half-open point containment: `[min, max)` on both axes
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min_x()
            && point.y >= self.min_y()
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// True if `other` lies entirely within this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// A moving rectangle (enemy block)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub rect: Rect,
    pub vel: DVec2,
}

impl Entity {
    pub fn new(rect: Rect, vel: DVec2) -> Self {
        Self { rect, vel }
    }

    /// Entity moving at `speed` in direction `theta` (radians, screen space)
    pub fn with_heading(rect: Rect, speed: f64, theta: f64) -> Self {
        Self::new(rect, DVec2::new(theta.cos(), theta.sin()) * speed)
    }

    /// Displace by one tick of velocity. No bounds checking.
    #[inline]
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    #[inline]
    pub fn reverse_vx(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reverse_vy(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Current speed magnitude
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Rescale velocity to magnitude `speed`, keeping its direction.
    ///
    /// Fails with `GameError::ZeroSpeed` when the entity is at rest, since
    /// there is no direction to keep.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), GameError> {
        let current = self.speed();
        if current <= EPSILON || !current.is_finite() {
            return Err(GameError::ZeroSpeed);
        }
        self.vel *= speed / current;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap_and_touching() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&a));
        // Shared edge is not overlap
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(DVec2::new(10.0, 10.0)));
        assert!(r.contains_point(DVec2::new(29.9, 29.9)));
        assert!(!r.contains_point(DVec2::new(30.0, 15.0)));
        assert!(!r.contains_point(DVec2::new(9.9, 15.0)));
    }

    #[test]
    fn test_advance_and_reverse() {
        let mut e = Entity::new(Rect::new(0.0, 0.0, 10.0, 10.0), DVec2::new(3.0, -4.0));
        e.advance();
        assert_eq!(e.rect.pos, DVec2::new(3.0, -4.0));
        e.reverse_vx();
        assert_eq!(e.vel, DVec2::new(-3.0, -4.0));
        e.reverse_vy();
        assert_eq!(e.vel, DVec2::new(-3.0, 4.0));
        // Size untouched by motion
        assert_eq!(e.rect.size(), DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_set_speed_preserves_direction() {
        let mut e = Entity::new(Rect::new(0.0, 0.0, 10.0, 10.0), DVec2::new(3.0, 4.0));
        e.set_speed(10.0).unwrap();
        assert!((e.vel.x - 6.0).abs() < 1e-9);
        assert!((e.vel.y - 8.0).abs() < 1e-9);
        assert!((e.speed() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_speed_zero_velocity_fails() {
        let mut e = Entity::new(Rect::new(0.0, 0.0, 10.0, 10.0), DVec2::ZERO);
        assert_eq!(e.set_speed(5.0), Err(GameError::ZeroSpeed));
        assert_eq!(e.vel, DVec2::ZERO);
    }

    #[test]
    fn test_with_heading() {
        let e = Entity::with_heading(Rect::new(0.0, 0.0, 1.0, 1.0), 6.0, 0.0);
        assert!((e.vel.x - 6.0).abs() < 1e-9);
        assert!(e.vel.y.abs() < 1e-9);
    }
}
