//! Frame clock
//!
//! Turns the host's animation-frame timestamps into a bounded delta. A tab
//! coming back from the background reports one huge gap; the clamp keeps
//! that from turning into a single giant physics step.

use crate::consts::MAX_FRAME_DT;

/// Tracks the previous host timestamp
#[derive(Debug, Clone, Default)]
pub struct Clock {
    prev: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the last call in ms, clamped to `[0, MAX_FRAME_DT]`
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = (timestamp_ms - self.prev).clamp(0.0, MAX_FRAME_DT as f64);
        self.prev = timestamp_ms;
        dt as f32
    }

    /// Latest host timestamp, used as monotonic elapsed time
    pub fn elapsed_ms(&self) -> f64 {
        self.prev
    }
}
