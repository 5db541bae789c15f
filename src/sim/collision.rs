//! Axis-aligned bounding box collision
//!
//! Every player/entity overlap check goes through `check_collision`. Boxes
//! whose edges merely touch do not collide.

use glam::Vec2;

/// An axis-aligned box: top-left corner plus size (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Strict overlap test on both axes
#[inline]
pub fn check_collision(a: &Aabb, b: &Aabb) -> bool {
    a.min().x < b.max().x && a.max().x > b.min().x && a.min().y < b.max().y && a.max().y > b.min().y
}
