//! Death debris. Visual only; nothing in gameplay reads these.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single debris particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
}

/// Replace `particles` with a fresh burst centered on `origin`
pub fn burst<R: Rng>(particles: &mut Vec<Particle>, origin: Vec2, rng: &mut R) {
    particles.clear();
    particles.extend((0..PARTICLE_BURST).map(|_| Particle {
        pos: origin,
        vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..1.0)),
        life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
    }));
}

/// Move every particle one tick and drop the expired ones
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
