//! Demo-mode controller
//!
//! Plays the game on its own for attract screens and headless runs. Reads the
//! world, never mutates it.

use super::state::{GamePhase, World};
use crate::consts::*;

/// How far below the gap center the body may sink before flapping
const SINK_ALLOWANCE: f32 = 35.0;

/// Whether the autopilot wants to flap this frame
pub fn wants_flap(world: &World) -> bool {
    match world.phase {
        // Start straight away; restart once the body has settled
        GamePhase::Ready => true,
        GamePhase::GameOver => world.body.vy == 0.0 && world.particles.is_empty(),
        GamePhase::Playing => {
            let body = &world.body;
            let target = next_gap_center(world).unwrap_or(BODY_START_Y);
            body.vy >= 0.0 && body.pos.y + body.vy > target + SINK_ALLOWANCE
        }
    }
}

/// Center of the first gap the body has not yet cleared
fn next_gap_center(world: &World) -> Option<f32> {
    let trailing_limit = world.body.min().x;
    world
        .obstacles()
        .iter()
        .find(|o| o.trailing_edge() >= trailing_limit)
        .map(|o| o.gap_center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use crate::sim::obstacles::Obstacle;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_starts_from_ready() {
        let world = World::new(1, 0);
        assert!(wants_flap(&world));
    }

    #[test]
    fn test_flaps_when_sinking_below_gap() {
        let mut world = World::new(1, 0);
        world.phase = GamePhase::Playing;
        world.spawner.obstacles.push(Obstacle::new(150.0, 60.0));
        // Gap center is 160
        world.body.pos.y = 250.0;
        world.body.vy = 1.0;
        assert!(wants_flap(&world));

        world.body.pos.y = 150.0;
        assert!(!wants_flap(&world));

        // Already rising
        world.body.pos.y = 250.0;
        world.body.vy = -3.0;
        assert!(!wants_flap(&world));
    }

    #[test]
    fn test_keeps_body_airborne() {
        let mut store = MemoryStore::new();
        let mut world = World::new(2024, 0);

        for i in 0..3000 {
            // Open sky: only the ground can end the run
            world.spawner.obstacles.clear();
            let input = TickInput {
                flap: wants_flap(&world),
                elapsed_ms: i as f64 * 16.0,
                ..Default::default()
            };
            tick(&mut world, &input, 16.0, &mut store);
            assert_eq!(world.phase, GamePhase::Playing, "fell at tick {}", i);
        }
    }
}
