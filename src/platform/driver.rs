//! Frame scheduling
//!
//! The caller owns the clock (requestAnimationFrame, a fixed-rate loop) and
//! feeds one timestamp per frame. The driver ticks the session, routes drained
//! events to the audio sink and hands the result to the presenter.

use crate::audio::AudioSink;
use crate::consts::FRAME_DT_MS;
use crate::renderer::Presenter;
use crate::sim::{GameEvent, Session, SessionStatus, TickInput, tick};

/// Longest frame gap fed to the simulation, in seconds
const MAX_DT: f32 = 0.1;

/// Result of one driven frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Schedule another frame
    pub keep_running: bool,
    /// Events drained this frame, in order
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Default)]
pub struct FrameDriver {
    last_time: Option<f64>,
    /// Ticks run since construction or the last reset
    pub frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the timing baseline, e.g. after a restart
    pub fn reset(&mut self) {
        self.last_time = None;
        self.frames = 0;
    }

    /// Seconds since the previous ticked frame
    fn delta(&self, timestamp_ms: f64) -> f32 {
        match self.last_time {
            Some(last) if timestamp_ms > last => (((timestamp_ms - last) / 1000.0) as f32).min(MAX_DT),
            _ => (FRAME_DT_MS / 1000.0) as f32,
        }
    }

    /// Drive one frame
    pub fn frame(
        &mut self,
        session: &mut Session,
        input: &TickInput,
        timestamp_ms: f64,
        audio: &mut dyn AudioSink,
        presenter: &mut dyn Presenter,
    ) -> FrameOutcome {
        if session.status == SessionStatus::Running {
            let dt = self.delta(timestamp_ms);
            self.last_time = Some(timestamp_ms);
            tick(session, input, dt);
            self.frames += 1;
        } else {
            // Resuming must not see the paused time as one long frame
            self.last_time = None;
        }

        let events = session.drain_events();
        audio.play_events(&events);

        if session.status != SessionStatus::Idle {
            presenter.render(&session.snapshot());
        }

        FrameOutcome {
            keep_running: matches!(session.status, SessionStatus::Running | SessionStatus::Paused),
            events,
        }
    }
}
