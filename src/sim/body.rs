//! Falling body kinematics
//!
//! Gravity and flap are applied per tick, not scaled by dt: the host clock
//! already bounds how far apart two ticks can be.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Result of checking the body against the playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    None,
    /// Touched the top edge; position clamped, no consequence
    Ceiling,
    /// Touched the ground surface; position clamped
    Ground,
}

/// The player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position (x never changes)
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    /// Visual tilt in radians
    pub rotation: f32,
    /// Half extents of the axis-aligned hitbox
    pub half_size: Vec2,
    /// Wing-beat animation phase
    pub anim_phase: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BODY_X, BODY_START_Y),
            vy: 0.0,
            rotation: 0.0,
            half_size: Vec2::new(BODY_HALF_WIDTH, BODY_HALF_HEIGHT),
            anim_phase: 0.0,
        }
    }
}

impl Body {
    /// Back to the initial pose
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Top-left corner of the hitbox
    pub fn min(&self) -> Vec2 {
        self.pos - self.half_size
    }

    /// Bottom-right corner of the hitbox
    pub fn max(&self) -> Vec2 {
        self.pos + self.half_size
    }

    /// Rightmost x of the hitbox
    pub fn leading_edge(&self) -> f32 {
        self.pos.x + self.half_size.x
    }

    /// Absolute velocity assignment, independent of current fall speed
    pub fn flap(&mut self) {
        self.vy = FLAP_IMPULSE;
    }

    /// One live tick: velocity first, then position
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.pos.y += self.vy;
        self.rotation = (self.vy * ROTATION_GAIN).clamp(ROTATION_MIN, ROTATION_MAX);
    }

    /// Advance the wing animation
    pub fn animate(&mut self, dt: f32) {
        self.anim_phase += dt * ANIM_RATE;
    }

    /// Cosmetic hover while waiting to start. Leaves vy and rotation alone.
    pub fn idle_bob(&mut self, elapsed_ms: f64, dt: f32) {
        let wave = (elapsed_ms * IDLE_BOB_RATE).sin() as f32;
        self.pos.y = BODY_START_Y + wave * IDLE_BOB_AMPLITUDE;
        self.animate(dt);
    }

    /// Clamp into the playfield. Ground is checked first: it is the one that kills.
    pub fn clamp_to_bounds(&mut self) -> BoundsContact {
        if self.pos.y + self.half_size.y >= GROUND_TOP {
            self.pos.y = GROUND_TOP - self.half_size.y;
            return BoundsContact::Ground;
        }
        if self.pos.y - self.half_size.y <= 0.0 {
            self.pos.y = self.half_size.y;
            return BoundsContact::Ceiling;
        }
        BoundsContact::None
    }

    /// Post-mortem tick: keep falling, tip toward the terminal angle, rest on the ground
    pub fn fall_dead(&mut self) {
        self.vy += GRAVITY;
        self.pos.y += self.vy;
        self.rotation = (self.rotation + DEATH_ROTATION_STEP).min(DEATH_ROTATION);
        if self.pos.y + self.half_size.y >= GROUND_TOP {
            self.pos.y = GROUND_TOP - self.half_size.y;
            self.vy = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(y: f32, vy: f32) -> Body {
        let mut body = Body::default();
        body.pos.y = y;
        body.vy = vy;
        body
    }

    #[test]
    fn test_integrate_velocity_before_position() {
        let mut body = body_at(100.0, 0.0);

        body.integrate();
        assert!((body.vy - 0.10).abs() < 1e-5);
        assert!((body.pos.y - 100.10).abs() < 1e-4);

        let mut last_y = body.pos.y;
        for _ in 0..2 {
            body.integrate();
            assert!(body.pos.y > last_y);
            last_y = body.pos.y;
        }
        assert!((body.vy - 0.30).abs() < 1e-5);
        assert!((body.pos.y - 100.60).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_clamped() {
        let mut body = body_at(200.0, 100.0);
        body.integrate();
        assert_eq!(body.rotation, ROTATION_MAX);

        let mut body = body_at(200.0, -100.0);
        body.integrate();
        assert_eq!(body.rotation, ROTATION_MIN);
    }

    #[test]
    fn test_ground_contact_clamps() {
        let mut body = body_at(GROUND_TOP - 5.0, 3.0);
        assert_eq!(body.clamp_to_bounds(), BoundsContact::Ground);
        assert_eq!(body.pos.y, GROUND_TOP - BODY_HALF_HEIGHT);
        // Velocity is left for the state machine to decide
        assert_eq!(body.vy, 3.0);
    }

    #[test]
    fn test_ceiling_is_soft() {
        let mut body = body_at(4.0, -5.0);
        assert_eq!(body.clamp_to_bounds(), BoundsContact::Ceiling);
        assert_eq!(body.pos.y, BODY_HALF_HEIGHT);
        assert_eq!(body.vy, -5.0);
    }

    #[test]
    fn test_fall_dead_rests_on_ground() {
        let mut body = body_at(GROUND_TOP - BODY_HALF_HEIGHT - 1.0, 4.0);
        body.fall_dead();
        assert_eq!(body.pos.y, GROUND_TOP - BODY_HALF_HEIGHT);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_fall_dead_rotation_saturates() {
        let mut body = body_at(100.0, 0.0);
        body.rotation = -0.5;
        for _ in 0..200 {
            body.fall_dead();
        }
        assert_eq!(body.rotation, DEATH_ROTATION);
    }

    #[test]
    fn test_idle_bob_bounded_and_physics_free() {
        let mut body = body_at(BODY_START_Y, 2.5);
        body.rotation = 0.3;
        for i in 0..500 {
            body.idle_bob(i as f64 * 16.0, 16.0);
            assert!((body.pos.y - BODY_START_Y).abs() <= IDLE_BOB_AMPLITUDE + 1e-4);
        }
        assert_eq!(body.vy, 2.5);
        assert_eq!(body.rotation, 0.3);
    }

    proptest! {
        #[test]
        fn flap_overwrites_any_velocity(vy in -50.0f32..50.0) {
            let mut body = body_at(200.0, vy);
            body.flap();
            prop_assert_eq!(body.vy, FLAP_IMPULSE);
        }

        #[test]
        fn integrate_is_euler(y in 20.0f32..380.0, vy in -10.0f32..10.0) {
            let mut body = body_at(y, vy);
            body.integrate();
            let vy_after = vy + GRAVITY;
            prop_assert!((body.vy - vy_after).abs() < 1e-4);
            prop_assert!((body.pos.y - (y + vy_after)).abs() < 1e-3);
        }
    }
}
