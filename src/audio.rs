//! Sound cues
//!
//! The simulation only says *which* cue fires and when; sinks decide how it
//! sounds. The web sink synthesises tones with the Web Audio API, native
//! builds log cues.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Coin picked up
    Coin,
    /// Player hit an obstacle
    Crash,
}

impl SoundEffect {
    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CoinCollected => Some(SoundEffect::Coin),
            GameEvent::Crash => Some(SoundEffect::Crash),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Coin => "coin",
            SoundEffect::Crash => "crash",
        }
    }
}

/// Anything that can play cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;

    /// Play the cues for a batch of events, in order
    fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

/// Sink that writes cues to the log and remembers what it played
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: Vec<SoundEffect>,
}

impl LogAudio {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            played: Vec::new(),
        }
    }

    /// Cues played while unmuted
    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::debug!("sound: {}", effect.name());
        self.played.push(effect);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect};

    /// Web Audio sink with procedurally generated beeps
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl WebAudio {
        pub fn new(volume: f32, muted: bool) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
                muted,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.volume }
        }

        /// Oscillator routed through a gain node to the speakers
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short decaying tone
        fn beep(ctx: &AudioContext, freq: f32, osc_type: OscillatorType, peak: f32, secs: f64) {
            let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(peak, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + secs)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + secs).ok();
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Coin => Self::beep(ctx, 800.0, OscillatorType::Sine, vol * 0.3, 0.1),
                SoundEffect::Crash => {
                    Self::beep(ctx, 100.0, OscillatorType::Sawtooth, vol * 0.5, 0.3)
                }
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn is_muted(&self) -> bool {
            self.muted
        }
    }
}
