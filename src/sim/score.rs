//! Score bookkeeping and best-score write-through

use serde::{Deserialize, Serialize};

use crate::consts::BEST_SCORE_KEY;
use crate::platform::storage::PersistentStore;

/// Results-panel medal tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    pub fn for_score(score: u32) -> Self {
        match score {
            30.. => Medal::Platinum,
            20..=29 => Medal::Gold,
            10..=19 => Medal::Silver,
            _ => Medal::Bronze,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }
}

/// Current run score and best-ever score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub current: u32,
    pub best: u32,
}

impl ScoreTracker {
    /// Start with the stored best (0 if absent or unreadable)
    pub fn load(store: &dyn PersistentStore) -> Self {
        let best = store.get(BEST_SCORE_KEY);
        log::info!("Best score loaded: {}", best);
        Self { current: 0, best }
    }

    pub fn score(&mut self) {
        self.current += 1;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Fold the finished run into the best score. Writes through immediately
    /// when it improves; returns the new best in that case.
    pub fn record_death(&mut self, store: &mut dyn PersistentStore) -> Option<u32> {
        if self.current <= self.best {
            return None;
        }
        self.best = self.current;
        store.set(BEST_SCORE_KEY, self.best);
        log::info!("New best score: {}", self.best);
        Some(self.best)
    }
}
