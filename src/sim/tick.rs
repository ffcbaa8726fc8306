//! Per-frame simulation tick
//!
//! Dispatches this frame's actions, then runs the per-phase update. One call
//! per host frame; nothing suspends mid-tick.

use super::body::BoundsContact;
use super::collision::{first_collision, mark_passed};
use super::particles;
use super::state::{GameEvent, GamePhase, World};
use crate::consts::*;
use crate::platform::storage::PersistentStore;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (space / tap): start, impulse, or restart depending on phase
    pub flap: bool,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Restart immediately from any phase
    pub force_reset: bool,
    /// Host monotonic time (ms), drives the idle bob
    pub elapsed_ms: f64,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32, store: &mut dyn PersistentStore) {
    world.events.clear();

    if input.toggle_pause {
        world.paused = !world.paused;
        log::info!("{}", if world.paused { "Paused" } else { "Resumed" });
    }
    if world.paused {
        return;
    }

    if input.force_reset {
        log::info!("Reset requested");
        world.reset();
    }
    if input.flap {
        flap(world);
    }

    world.time_ticks += 1;
    world.ground_offset = (world.ground_offset - SCROLL_SPEED) % GROUND_TILE;

    match world.phase {
        GamePhase::Ready => {
            world.body.idle_bob(input.elapsed_ms, dt);
        }
        GamePhase::Playing => tick_playing(world, dt, store),
        GamePhase::GameOver => {
            world.body.fall_dead();
            particles::update(&mut world.particles);
        }
    }
}

/// The flap action means something different in every phase
fn flap(world: &mut World) {
    match world.phase {
        GamePhase::Ready => {
            world.phase = GamePhase::Playing;
            world.spawner.timer = 0.0;
            world.body.vy = 0.0;
            log::info!("Run started");
        }
        GamePhase::Playing => {
            world.body.flap();
            world.events.push(GameEvent::Flap);
        }
        GamePhase::GameOver => world.reset(),
    }
}

fn tick_playing(world: &mut World, dt: f32, store: &mut dyn PersistentStore) {
    // Obstacles all see the body where the previous tick left it
    world.spawner.scroll();
    world.spawner.advance(dt, &mut world.rng);

    let mut died = first_collision(&world.body, &world.spawner.obstacles).is_some();
    if !died {
        for _ in 0..mark_passed(&world.body, &mut world.spawner.obstacles) {
            world.score.score();
            world.events.push(GameEvent::Scored);
        }
    }
    world.spawner.retire();

    world.body.integrate();
    world.body.animate(dt);
    if world.body.clamp_to_bounds() == BoundsContact::Ground {
        died = true;
    }

    if died {
        game_over(world, store);
    }
}

/// Playing -> GameOver
fn game_over(world: &mut World, store: &mut dyn PersistentStore) {
    world.phase = GamePhase::GameOver;
    world.score.record_death(store);
    particles::burst(&mut world.particles, world.body.pos, &mut world.rng);
    world.events.push(GameEvent::Death);
    log::info!(
        "Game over: score {} (best {})",
        world.score.current,
        world.score.best
    );
}
