//! Sound cues
//!
//! The simulation only names what happened; sinks decide what it sounds
//! like. Playback failures stay inside the sink.

use crate::sim::GameEvent;

/// Fire-and-forget consumer of gameplay events
pub trait AudioCue {
    fn play(&mut self, event: GameEvent);
}

/// Tone parameters for one cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beep {
    pub waveform: Waveform,
    /// Frequency (Hz)
    pub freq: f32,
    /// Duration (seconds)
    pub duration: f32,
    /// Gain before master volume
    pub gain: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
}

impl Beep {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Flap => Beep {
                waveform: Waveform::Square,
                freq: 800.0,
                duration: 0.05,
                gain: 0.15,
            },
            GameEvent::Scored => Beep {
                waveform: Waveform::Triangle,
                freq: 600.0,
                duration: 0.04,
                gain: 0.12,
            },
            GameEvent::Death => Beep {
                waveform: Waveform::Square,
                freq: 220.0,
                duration: 0.12,
                gain: 0.2,
            },
        }
    }
}

/// Logs cues instead of playing them (native / headless)
#[derive(Debug, Default)]
pub struct LogCue;

impl AudioCue for LogCue {
    fn play(&mut self, event: GameEvent) {
        let beep = Beep::for_event(event);
        log::debug!("cue {:?}: {:?} {} Hz", event, beep.waveform, beep.freq);
    }
}

/// Web Audio oscillator beeps (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct BeepCue {
    ctx: Option<web_sys::AudioContext>,
    volume: f32,
}

#[cfg(target_arch = "wasm32")]
impl BeepCue {
    pub fn new(volume: f32) -> Self {
        // Created lazily: browsers refuse audio before a user gesture
        Self {
            ctx: None,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    fn context(&mut self) -> Option<&web_sys::AudioContext> {
        if self.ctx.is_none() {
            match web_sys::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::warn!("Failed to create AudioContext: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.as_ref()
    }

    fn beep(&mut self, beep: Beep) -> Result<(), wasm_bindgen::JsValue> {
        use web_sys::OscillatorType;

        let volume = self.volume;
        let Some(ctx) = self.context() else {
            return Ok(());
        };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(match beep.waveform {
            Waveform::Square => OscillatorType::Square,
            Waveform::Triangle => OscillatorType::Triangle,
        });
        osc.frequency().set_value(beep.freq);
        gain.gain().set_value(beep.gain * volume);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let t = ctx.current_time();
        osc.start()?;
        osc.stop_with_when(t + beep.duration as f64)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioCue for BeepCue {
    fn play(&mut self, event: GameEvent) {
        if self.volume <= 0.0 {
            return;
        }
        if let Err(e) = self.beep(Beep::for_event(event)) {
            log::warn!("Audio cue {:?} failed: {:?}", event, e);
        }
    }
}
