//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, all mutation inside `tick`
//! - Seeded RNG only
//! - Elapsed time injected, never sampled
//! - No rendering or platform dependencies beyond the storage trait

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod score;
pub mod state;
pub mod tick;

pub use body::{Body, BoundsContact};
pub use collision::{Aabb, first_collision, mark_passed};
pub use obstacles::{Obstacle, ObstacleSpawner};
pub use particles::Particle;
pub use score::{Medal, ScoreTracker};
pub use state::{GameEvent, GamePhase, Snapshot, World};
pub use tick::{TickInput, tick};
