//! Snapshot consumers
//!
//! Renderers receive a borrowed, read-only view of the world each frame and
//! draw it onto a 288x512 logical surface. Device scaling is theirs to handle.

use crate::sim::{GamePhase, Snapshot};

/// Anything that can present a snapshot
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>);
}

/// One-line textual summary of a snapshot
pub fn status_line(snapshot: &Snapshot<'_>) -> String {
    let phase = match snapshot.phase {
        GamePhase::Ready => "READY",
        GamePhase::Playing => "PLAYING",
        GamePhase::GameOver => "GAME OVER",
    };
    let mut line = format!(
        "{} score={} best={} y={:.1} obstacles={}",
        phase,
        snapshot.score,
        snapshot.best,
        snapshot.body.pos.y,
        snapshot.obstacles.len()
    );
    if let Some(medal) = snapshot.medal {
        line.push_str(&format!(" medal={}", medal.as_str()));
    }
    if snapshot.paused {
        line.push_str(" [paused]");
    }
    line
}

/// Logs a status line whenever it changes (native / headless)
#[derive(Debug, Default)]
pub struct TextRenderer {
    last: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        // Position changes every frame; only log phase/score/pause changes
        let key = format!(
            "{:?} {} {} {}",
            snapshot.phase, snapshot.score, snapshot.best, snapshot.paused
        );
        if key != self.last {
            log::info!("{}", status_line(snapshot));
            self.last = key;
        }
    }
}

/// Writes score and phase text into page elements (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct DomHud {
    document: Option<web_sys::Document>,
}

#[cfg(target_arch = "wasm32")]
impl DomHud {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.as_ref().and_then(|d| d.get_element_by_id(id)) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for DomHud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Renderer for DomHud {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        self.set_text("hud-score", &snapshot.score.to_string());
        self.set_text("hud-best", &snapshot.best.to_string());
        self.set_text("hud-status", &status_line(snapshot));
    }
}
