//! Skyflap - a side-scrolling flap-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, score)
//! - `platform`: Host abstraction (frame clock, input mapping, storage)
//! - `audio`: Sound cue sinks
//! - `renderer`: Snapshot consumers
//! - `game`: Session glue driving one simulation per host frame

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// Part of the gameplay contract: not configurable at runtime.
pub mod consts {
    /// Logical playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 288.0;
    pub const PLAYFIELD_HEIGHT: f32 = 512.0;
    /// Height of the ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 112.0;
    /// Y coordinate of the ground surface
    pub const GROUND_TOP: f32 = PLAYFIELD_HEIGHT - GROUND_HEIGHT;

    /// Largest frame delta the clock will report (ms)
    pub const MAX_FRAME_DT: f32 = 32.0;

    /// Body kinematics (per tick, not dt-scaled)
    pub const GRAVITY: f32 = 0.10;
    pub const FLAP_IMPULSE: f32 = -6.25;
    pub const ROTATION_GAIN: f32 = 0.05;
    pub const ROTATION_MIN: f32 = -0.5;
    pub const ROTATION_MAX: f32 = 1.1;
    /// Angle the body tips toward while falling dead
    pub const DEATH_ROTATION: f32 = 1.2;
    pub const DEATH_ROTATION_STEP: f32 = 0.04;

    /// Body geometry
    pub const BODY_X: f32 = 60.0;
    pub const BODY_HALF_WIDTH: f32 = 17.0;
    pub const BODY_HALF_HEIGHT: f32 = 12.0;
    /// Resting height while waiting to start
    pub const BODY_START_Y: f32 = PLAYFIELD_HEIGHT * 0.45;
    /// Idle bob amplitude and angular rate (per ms)
    pub const IDLE_BOB_AMPLITUDE: f32 = 6.0;
    pub const IDLE_BOB_RATE: f64 = 0.003;
    /// Wing animation rate (per ms)
    pub const ANIM_RATE: f32 = 0.02;

    /// Obstacle layout
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const GAP_HEIGHT: f32 = 200.0;
    pub const GAP_MARGIN_TOP: u32 = 40;
    pub const GAP_MARGIN_BOTTOM: u32 = 40;
    pub const GAP_MIN_TOP: u32 = GAP_MARGIN_TOP;
    pub const GAP_MAX_TOP: u32 =
        (PLAYFIELD_HEIGHT - GROUND_HEIGHT - GAP_HEIGHT) as u32 - GAP_MARGIN_BOTTOM;
    /// Obstacles enter just beyond the right edge
    pub const SPAWN_X: f32 = PLAYFIELD_WIDTH + 10.0;
    /// Obstacles left of this are retired
    pub const RETIRE_X: f32 = -60.0;
    /// Time between spawns (ms)
    pub const SPAWN_INTERVAL: f32 = 1400.0;
    /// Horizontal scroll per tick, shared by obstacles and ground
    pub const SCROLL_SPEED: f32 = 3.9;
    /// Width of one repeating ground tile
    pub const GROUND_TILE: f32 = 24.0;

    /// Death debris
    pub const PARTICLE_BURST: usize = 16;
    pub const PARTICLE_LIFE_MIN: u32 = 18;
    pub const PARTICLE_LIFE_MAX: u32 = 30;

    /// Persistent store key for the best score
    pub const BEST_SCORE_KEY: &str = "flap_best";
}
