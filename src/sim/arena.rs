//! Bordered playfield
//!
//! The viewport is framed by a deadly border band. Everything inside the
//! band is the legal interior.

use serde::{Deserialize, Serialize};

use super::entity::Rect;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f64,
    height: f64,
    border: f64,
}

fn check(width: f64, height: f64, border: f64) -> Result<(), GameError> {
    let finite = width.is_finite() && height.is_finite() && border.is_finite();
    if !finite || border < 0.0 || border >= width.min(height) / 2.0 {
        return Err(GameError::InvalidArena {
            width,
            height,
            border,
        });
    }
    Ok(())
}

impl Arena {
    /// Fails unless `border < min(width, height) / 2`
    pub fn new(width: f64, height: f64, border: f64) -> Result<Self, GameError> {
        check(width, height, border)?;
        Ok(Self {
            width,
            height,
            border,
        })
    }

    /// Track a new viewport size. On error the arena is left unchanged.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), GameError> {
        check(width, height, self.border)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn border(&self) -> f64 {
        self.border
    }

    /// Right edge of the legal interior
    #[inline]
    pub fn inner_right(&self) -> f64 {
        self.width - self.border
    }

    /// Bottom edge of the legal interior
    #[inline]
    pub fn inner_bottom(&self) -> f64 {
        self.height - self.border
    }

    /// `[border, width-border] x [border, height-border]`
    pub fn interior(&self) -> Rect {
        Rect::new(
            self.border,
            self.border,
            self.width - 2.0 * self.border,
            self.height - 2.0 * self.border,
        )
    }

    /// True if `rect` sits fully inside the legal interior (touching allowed)
    pub fn contains(&self, rect: &Rect) -> bool {
        self.interior().contains_rect(rect)
    }

    /// The four border bands as rectangles (left, top, right, bottom)
    pub fn border_rects(&self) -> [Rect; 4] {
        let (w, h, b) = (self.width, self.height, self.border);
        [
            Rect::new(0.0, 0.0, b, h),
            Rect::new(0.0, 0.0, w, b),
            Rect::new(w - b, 0.0, b, h),
            Rect::new(0.0, h - b, w, b),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior() {
        let arena = Arena::new(600.0, 400.0, 60.0).unwrap();
        let inner = arena.interior();
        assert_eq!(inner.min_x(), 60.0);
        assert_eq!(inner.min_y(), 60.0);
        assert_eq!(inner.max_x(), 540.0);
        assert_eq!(inner.max_y(), 340.0);
        assert_eq!(arena.inner_right(), 540.0);
        assert_eq!(arena.inner_bottom(), 340.0);
    }

    #[test]
    fn test_border_too_thick() {
        assert!(Arena::new(600.0, 100.0, 50.0).is_err());
        assert!(Arena::new(600.0, 100.0, 49.0).is_ok());
        assert!(Arena::new(600.0, 600.0, -1.0).is_err());
    }

    #[test]
    fn test_resize_rejects_without_mutation() {
        let mut arena = Arena::new(600.0, 600.0, 60.0).unwrap();
        assert!(arena.resize(100.0, 100.0).is_err());
        assert_eq!(arena.width(), 600.0);
        arena.resize(800.0, 500.0).unwrap();
        assert_eq!(arena.inner_right(), 740.0);
    }

    #[test]
    fn test_contains() {
        let arena = Arena::new(600.0, 600.0, 60.0).unwrap();
        assert!(arena.contains(&Rect::new(60.0, 60.0, 480.0, 480.0)));
        assert!(!arena.contains(&Rect::new(59.0, 100.0, 10.0, 10.0)));
        assert!(!arena.contains(&Rect::new(500.0, 100.0, 41.0, 10.0)));
    }
}
