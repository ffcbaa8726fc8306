//! Game state and core simulation types
//!
//! The whole game lives in one `World`, mutated only by `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacles::{Obstacle, ObstacleSpawner};
use super::particles::Particle;
use super::score::{Medal, ScoreTracker};
use crate::platform::storage::PersistentStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hovering, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; body falls to the ground
    GameOver,
}

/// Discrete events raised during a tick, for audio and other listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Impulse applied while playing
    Flap,
    /// An obstacle was cleared
    Scored,
    /// Collision or ground contact ended the run
    Death,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle placement and debris
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Global pause gate, independent of phase
    pub paused: bool,
    /// The player
    pub body: Body,
    /// Spawn timer and active obstacles
    pub spawner: ObstacleSpawner,
    /// Current and best score
    pub score: ScoreTracker,
    /// Death debris (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Ground strip scroll, in `(-GROUND_TILE, 0]`
    pub ground_offset: f32,
    /// Unpaused ticks since creation
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a new world with the given seed and best score
    pub fn new(seed: u64, best: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            paused: false,
            body: Body::default(),
            spawner: ObstacleSpawner::default(),
            score: ScoreTracker { current: 0, best },
            particles: Vec::new(),
            ground_offset: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Create a world whose best score comes from `store`
    pub fn load(seed: u64, store: &dyn PersistentStore) -> Self {
        let mut world = Self::new(seed, 0);
        world.score = ScoreTracker::load(store);
        world
    }

    /// Back to Ready with a fresh run. Best score, pause flag and RNG stream survive.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.body.reset();
        self.spawner.reset();
        self.score.reset();
        self.particles.clear();
        self.ground_offset = 0.0;
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.spawner.obstacles
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            body: &self.body,
            obstacles: &self.spawner.obstacles,
            particles: &self.particles,
            score: self.score.current,
            best: self.score.best,
            paused: self.paused,
            ground_offset: self.ground_offset,
            medal: (self.phase == GamePhase::GameOver).then(|| Medal::for_score(self.score.current)),
        }
    }
}

/// Borrowed view of the world handed to rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub body: &'a Body,
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    pub score: u32,
    pub best: u32,
    pub paused: bool,
    pub ground_offset: f32,
    /// Only present once the run is over
    pub medal: Option<Medal>,
}
