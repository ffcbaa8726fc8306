//! Session glue
//!
//! Owns the world plus its collaborators and runs one simulation tick per
//! host frame: clock, pending input, tick, then audio cues.

use crate::audio::AudioCue;
use crate::platform::{Action, Clock, InputDispatcher, PersistentStore, RawInput};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, Snapshot, World, autopilot, tick};

/// Game instance holding all state
pub struct Game<S: PersistentStore, A: AudioCue> {
    pub world: World,
    pub settings: Settings,
    /// Let the autopilot play (attract / headless mode)
    pub autopilot: bool,
    clock: Clock,
    input: InputDispatcher,
    store: S,
    audio: A,
}

impl<S: PersistentStore, A: AudioCue> Game<S, A> {
    /// Load settings and best score from `store`. A seed in the settings
    /// overrides `fallback_seed`.
    pub fn new(store: S, audio: A, fallback_seed: u64) -> Self {
        let settings = Settings::load(&store);
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Starting session with seed {}", seed);
        Self {
            world: World::load(seed, &store),
            settings,
            autopilot: false,
            clock: Clock::new(),
            input: InputDispatcher::new(),
            store,
            audio,
        }
    }

    /// Feed one raw device event
    pub fn handle_input(&mut self, raw: &RawInput) -> Option<Action> {
        self.input.handle(raw)
    }

    /// Queue an action directly (UI buttons, blur auto-pause)
    pub fn push_action(&mut self, action: Action) {
        self.input.push(action);
    }

    /// Run one frame at host time `timestamp_ms`. Returns the events it raised.
    pub fn frame(&mut self, timestamp_ms: f64) -> &[GameEvent] {
        let dt = self.clock.tick(timestamp_ms);
        if self.autopilot && !self.world.paused && autopilot::wants_flap(&self.world) {
            self.input.push(Action::Flap);
        }
        let input = self.input.take(self.clock.elapsed_ms());

        tick(&mut self.world, &input, dt, &mut self.store);

        if self.settings.effective_volume() > 0.0 {
            for &event in &self.world.events {
                self.audio.play(event);
            }
        }
        &self.world.events
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.world.snapshot()
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.world.snapshot());
    }

    /// Persist the current settings
    pub fn save_settings(&mut self) {
        self.settings.save(&mut self.store);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::MemoryStore;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct RecordingCue {
        played: Vec<GameEvent>,
    }

    impl AudioCue for RecordingCue {
        fn play(&mut self, event: GameEvent) {
            self.played.push(event);
        }
    }

    fn game() -> Game<MemoryStore, RecordingCue> {
        Game::new(MemoryStore::new(), RecordingCue::default(), 42)
    }

    #[test]
    fn test_space_starts_and_flaps() {
        let mut game = game();
        game.frame(16.0);
        assert_eq!(game.world.phase, GamePhase::Ready);

        game.handle_input(&RawInput::key("Space", " "));
        game.frame(32.0);
        assert_eq!(game.world.phase, GamePhase::Playing);
        assert!(game.audio().played.is_empty());

        game.handle_input(&RawInput::PointerDown);
        let events = game.frame(48.0).to_vec();
        assert_eq!(events, vec![GameEvent::Flap]);
        assert_eq!(game.audio().played, vec![GameEvent::Flap]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut game = game();
        game.settings.muted = true;
        game.push_action(Action::Flap);
        game.frame(16.0);
        game.push_action(Action::Flap);
        assert_eq!(game.frame(32.0), &[GameEvent::Flap]);
        assert!(game.audio().played.is_empty());
    }

    #[test]
    fn test_pause_key_freezes_world() {
        let mut game = game();
        game.push_action(Action::Flap);
        game.frame(16.0);

        game.handle_input(&RawInput::key("KeyP", "p"));
        game.frame(32.0);
        let y = game.snapshot().body.pos.y;
        for i in 0..30 {
            game.frame(48.0 + i as f64 * 16.0);
        }
        assert!(game.snapshot().paused);
        assert_eq!(game.snapshot().body.pos.y, y);
    }

    #[test]
    fn test_stalled_frame_is_bounded() {
        let mut game = game();
        game.push_action(Action::Flap);
        game.frame(16.0);
        game.frame(60_000.0);
        // One clamped step, nowhere near a spawn interval
        assert_eq!(game.world.spawner.timer, 16.0 + MAX_FRAME_DT);
        assert!(game.world.obstacles().is_empty());
    }

    #[test]
    fn test_seed_from_settings() {
        let mut store = MemoryStore::new();
        Settings {
            seed: Some(9),
            ..Default::default()
        }
        .save(&mut store);
        let game = Game::new(store, RecordingCue::default(), 1);
        assert_eq!(game.world.seed, 9);
    }

    #[test]
    fn test_best_persists_across_sessions() {
        let mut game = game();
        game.push_action(Action::Flap);
        game.frame(16.0);
        game.world.score.current = 4;
        game.world.body.pos.y = GROUND_TOP;
        game.frame(32.0);
        assert_eq!(game.world.phase, GamePhase::GameOver);
        assert_eq!(game.audio().played.last(), Some(&GameEvent::Death));

        let store = game.store().clone();
        let next = Game::new(store, RecordingCue::default(), 42);
        assert_eq!(next.snapshot().best, 4);
    }

    #[test]
    fn test_autopilot_starts_run() {
        let mut game = game();
        game.autopilot = true;
        game.frame(16.0);
        assert_eq!(game.world.phase, GamePhase::Playing);
    }
}
