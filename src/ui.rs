//! HUD text, menu visibility and game-over messages

use rand::Rng;

use crate::sim::{GameEvent, SessionSnapshot, SessionStatus};

/// Shown when a run sets a new best
pub const NEW_BEST_MESSAGE: &str = "🎉 NEW BEST SCORE! 🎉";

/// One of these is picked at random when a run ends below the best
pub const TRY_AGAIN_MESSAGES: [&str; 5] = [
    "Nice try! Keep racing!",
    "Almost there! Try again!",
    "You can do better!",
    "Practice makes perfect!",
    "Speed demon in training!",
];

/// Message for a game-over event; `None` for any other event
pub fn game_over_message<R: Rng + ?Sized>(event: &GameEvent, rng: &mut R) -> Option<&'static str> {
    match event {
        GameEvent::NewBest { .. } => Some(NEW_BEST_MESSAGE),
        GameEvent::TryAgain { .. } => {
            Some(TRY_AGAIN_MESSAGES[rng.random_range(0..TRY_AGAIN_MESSAGES.len())])
        }
        _ => None,
    }
}

/// Speedometer reading: pixels per tick times ten, rounded down
#[inline]
pub fn speed_readout(speed: f32) -> u32 {
    (speed * 10.0).floor().max(0.0) as u32
}

/// Text for the HUD counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub best: String,
    pub speed: String,
}

impl Hud {
    pub fn from_snapshot(snapshot: &SessionSnapshot<'_>) -> Self {
        Self {
            score: snapshot.score.to_string(),
            best: snapshot.best_score.to_string(),
            speed: speed_readout(snapshot.speed).to_string(),
        }
    }
}

/// Overlay a status calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StartMenu,
    Playing,
    PauseMenu,
    GameOver,
}

impl Screen {
    pub fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Idle => Screen::StartMenu,
            SessionStatus::Running => Screen::Playing,
            SessionStatus::Paused => Screen::PauseMenu,
            SessionStatus::GameOver => Screen::GameOver,
        }
    }
}
