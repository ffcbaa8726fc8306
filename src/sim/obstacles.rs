//! Obstacle pairs: spawning, scrolling, retirement

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A top/bottom obstacle pair with a passable gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Y where the gap begins (bottom of the top segment)
    pub gap_top: f32,
    /// Set once the body has cleared this pair
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Right edge
    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Y where the gap ends (top of the bottom segment)
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + GAP_HEIGHT
    }

    /// Vertical center of the gap
    pub fn gap_center(&self) -> f32 {
        self.gap_top + GAP_HEIGHT / 2.0
    }
}

/// Timer-driven obstacle generator and owner of the active list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Time accumulated since the last spawn (ms)
    pub timer: f32,
    /// Active obstacles, oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleSpawner {
    /// Drop every obstacle and restart the timer
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.obstacles.clear();
    }

    /// Advance the spawn timer; appends one obstacle when the interval elapses.
    /// Returns true if an obstacle was spawned.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.timer += dt;
        if self.timer < SPAWN_INTERVAL {
            return false;
        }
        self.timer = 0.0;
        let gap_top = rng.random_range(GAP_MIN_TOP..=GAP_MAX_TOP) as f32;
        self.obstacles.push(Obstacle::new(SPAWN_X, gap_top));
        log::debug!("Spawned obstacle with gap at {}", gap_top);
        true
    }

    /// Move every obstacle left by one tick of scroll
    pub fn scroll(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= SCROLL_SPEED;
        }
    }

    /// Garbage-collect obstacles that are fully off screen
    pub fn retire(&mut self) {
        self.obstacles.retain(|o| o.x >= RETIRE_X);
    }
}
