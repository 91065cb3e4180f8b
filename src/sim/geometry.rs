//! Geometry helpers for the rectangular court
//!
//! The ball is treated as a circle around its bounding-box center; paddles
//! are axis-aligned rectangles.

use glam::Vec2;

/// Bound `value` to `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: if `min > max` the result is `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Axis-aligned rectangle described by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Circle used for collision tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Coarse circle-vs-rectangle overlap test.
///
/// Compares center distance against `half_extent + radius` on each axis
/// independently, so a ball diagonally off a rectangle corner still counts
/// as a hit.
pub fn intersects(circle: &Circle, rect: &Rect) -> bool {
    let dist = (circle.center - rect.center()).abs();
    let reach = rect.half_extents() + Vec2::splat(circle.radius);

    if dist.x > reach.x {
        return false;
    }
    if dist.y > reach.y {
        return false;
    }
    true
}
