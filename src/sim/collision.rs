//! Collision and pass-through detection
//!
//! Everything here is axis-aligned: the body is a box and each obstacle is
//! two solid boxes with the gap between them.

use glam::Vec2;

use super::body::Body;
use super::obstacles::Obstacle;
use crate::consts::*;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl Body {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.min(), self.max())
    }
}

impl Obstacle {
    /// Solid segment from the top of the playfield down to the gap
    pub fn top_segment(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.trailing_edge(), self.gap_top),
        )
    }

    /// Solid segment from the gap down to the ground surface
    pub fn bottom_segment(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_bottom()),
            Vec2::new(self.trailing_edge(), GROUND_TOP),
        )
    }

    pub fn collides_with(&self, body: &Aabb) -> bool {
        self.top_segment().overlaps(body) || self.bottom_segment().overlaps(body)
    }
}

/// Index of the first obstacle the body hits, if any. Stops at the first hit.
pub fn first_collision(body: &Body, obstacles: &[Obstacle]) -> Option<usize> {
    let hitbox = body.hitbox();
    obstacles.iter().position(|o| o.collides_with(&hitbox))
}

/// Mark newly cleared obstacles as passed. Returns how many flipped this call.
///
/// An obstacle counts as cleared once its trailing edge is behind the body's
/// leading edge; `passed` never flips back.
pub fn mark_passed(body: &Body, obstacles: &mut [Obstacle]) -> u32 {
    let leading = body.leading_edge();
    let mut newly_passed = 0;
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.trailing_edge() < leading {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}
