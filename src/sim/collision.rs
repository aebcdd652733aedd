//! Axis-aligned collision detection
//!
//! Boxes are half-open: a box at `x` with width `w` covers `[x, x + w)`.
//! Two boxes that only share an edge do not intersect.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Bullet;

/// Axis-aligned bounding box in field pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlap test with non-zero area; empty boxes never intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }

    /// Point containment (left/top edges inclusive, right/bottom exclusive)
    pub fn contains(&self, point: IVec2) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.y >= self.y
            && (point.x as i64) < self.right()
            && (point.y as i64) < self.bottom()
    }
}

/// First bullet whose box overlaps the plane, if any
///
/// Pure existence test: the bullet order does not change the answer.
pub fn first_hit<'a>(plane: &Aabb, bullets: &'a [Bullet]) -> Option<&'a Bullet> {
    bullets.iter().find(|b| plane.intersects(&b.bounds()))
}

/// True if any bullet overlaps the plane
pub fn plane_hit(plane: &Aabb, bullets: &[Bullet]) -> bool {
    first_hit(plane, bullets).is_some()
}
