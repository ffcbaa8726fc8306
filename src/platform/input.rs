//! Raw input to abstract actions
//!
//! Device events arrive whenever the host delivers them; they are folded into
//! a pending `TickInput` and handed to the simulation once per frame.

use crate::sim::TickInput;

/// Abstract actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Flap,
    TogglePause,
    ForceReset,
}

/// Raw device event, already stripped of platform types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Keyboard press: `code` is the physical key (`"Space"`), `key` the produced value (`" "`)
    Key { code: String, key: String },
    /// Primary pointer / touch press
    PointerDown,
}

impl RawInput {
    pub fn key(code: &str, key: &str) -> Self {
        RawInput::Key {
            code: code.to_string(),
            key: key.to_string(),
        }
    }

    /// Map to an action; unbound input maps to nothing
    pub fn action(&self) -> Option<Action> {
        match self {
            RawInput::PointerDown => Some(Action::Flap),
            RawInput::Key { code, key } => match (code.as_str(), key.as_str()) {
                ("Space", _) | (_, " ") => Some(Action::Flap),
                ("KeyP", _) | (_, "p" | "P") => Some(Action::TogglePause),
                ("KeyR", _) | (_, "r" | "R") => Some(Action::ForceReset),
                _ => None,
            },
        }
    }
}

/// Accumulates actions between frames
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    pending: TickInput,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one raw event. Returns the action it mapped to, if any.
    pub fn handle(&mut self, raw: &RawInput) -> Option<Action> {
        let action = raw.action()?;
        self.push(action);
        Some(action)
    }

    pub fn push(&mut self, action: Action) {
        match action {
            Action::Flap => self.pending.flap = true,
            // Two toggles in one frame cancel out
            Action::TogglePause => self.pending.toggle_pause = !self.pending.toggle_pause,
            Action::ForceReset => self.pending.force_reset = true,
        }
    }

    /// Take this frame's actions, leaving nothing pending
    pub fn take(&mut self, elapsed_ms: f64) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.elapsed_ms = elapsed_ms;
        input
    }
}
