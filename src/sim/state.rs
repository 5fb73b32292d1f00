//! Session state and the run lifecycle
//!
//! A `Session` owns everything the simulation mutates: road, player, entity
//! pools, the speed clock and the seeded RNG. Adapters read it through
//! [`SessionSnapshot`] and react to the [`GameEvent`]s it records.

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::clock::{SimClock, SpeedProfile};
use super::entities::{Coin, EntityPools, Obstacle, Particle};
use super::player::Player;
use super::road::Road;
use crate::consts::*;
use crate::persistence::BestScoreStore;
use crate::settings::Settings;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Start menu shown, nothing simulated
    Idle,
    Running,
    Paused,
    /// Crashed; waits for a restart or quit
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Base and top speed for a run at this difficulty
    pub fn speed_profile(&self) -> SpeedProfile {
        let (base_speed, max_speed) = match self {
            Difficulty::Easy => (2.0, 10.0),
            Difficulty::Medium => (3.0, 15.0),
            Difficulty::Hard => (4.0, 20.0),
        };
        SpeedProfile {
            base_speed,
            max_speed,
            speed_increment: SPEED_INCREMENT,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Discrete things that happened, for audio and UI adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { difficulty: Difficulty },
    Paused,
    Resumed,
    Quit,
    CoinCollected,
    /// Player hit an obstacle
    Crash,
    /// Run ended above the previous best
    NewBest { score: u64 },
    /// Run ended without beating the best
    TryAgain { score: u64, best: u64 },
}

/// Read-only view handed to presenters each frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSnapshot<'a> {
    pub status: SessionStatus,
    pub difficulty: Difficulty,
    pub score: u64,
    pub best_score: u64,
    pub speed: f32,
    pub road: &'a Road,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub coins: &'a [Coin],
    pub particles: &'a [Particle],
}

pub struct Session {
    pub status: SessionStatus,
    pub difficulty: Difficulty,
    pub score: u64,
    /// Highest score ever reached, loaded from the store
    pub best_score: u64,
    pub clock: SimClock,
    pub road: Road,
    pub player: Player,
    pub pools: EntityPools,
    /// Seed of the RNG, for reproducing a session
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub(super) events: Vec<GameEvent>,
    store: Box<dyn BestScoreStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("status", &self.status)
            .field("difficulty", &self.difficulty)
            .field("score", &self.score)
            .field("best_score", &self.best_score)
            .field("speed", &self.clock.speed)
            .field("seed", &self.seed)
            .field("obstacles", &self.pools.obstacles.len())
            .field("coins", &self.pools.coins.len())
            .field("particles", &self.pools.particles.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Build an idle session from settings, reading the best score once.
    /// Out-of-range road dimensions fall back to the defaults.
    pub fn new(settings: &Settings, store: Box<dyn BestScoreStore>) -> Self {
        let settings = settings.clone().validated();
        let seed = settings.seed.unwrap_or_else(rand::random);
        let road = Road::new(settings.road_width, settings.road_height, settings.lane_count);
        Self::with_road(seed, road, settings.difficulty, store)
    }

    /// Idle session on the default road with a fixed seed
    pub fn with_seed(seed: u64, store: Box<dyn BestScoreStore>) -> Self {
        let road = Road::new(ROAD_WIDTH, ROAD_HEIGHT, LANE_COUNT);
        Self::with_road(seed, road, Difficulty::default(), store)
    }

    fn with_road(
        seed: u64,
        road: Road,
        difficulty: Difficulty,
        store: Box<dyn BestScoreStore>,
    ) -> Self {
        let best_score = store.load_best_score();
        log::info!("Session created (seed {}, best {})", seed, best_score);

        let mut clock = SimClock::new(difficulty.speed_profile());
        clock.speed = 0.0;

        Self {
            status: SessionStatus::Idle,
            difficulty,
            score: 0,
            best_score,
            clock,
            player: Player::new(&road),
            road,
            pools: EntityPools::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            store,
        }
    }

    /// Begin a fresh run. Valid from any status.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.clock.reset(difficulty.speed_profile());
        self.score = 0;
        self.pools.clear();
        self.road.reset();
        self.player = Player::new(&self.road);
        self.status = SessionStatus::Running;
        self.events.push(GameEvent::Started { difficulty });
        log::info!(
            "Run started on {} (speed {} -> {})",
            difficulty,
            self.clock.profile.base_speed,
            self.clock.profile.max_speed
        );
    }

    pub fn pause(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
            self.events.push(GameEvent::Paused);
            log::info!("Paused at score {}", self.score);
        }
    }

    pub fn resume(&mut self) {
        if self.status == SessionStatus::Paused {
            self.status = SessionStatus::Running;
            self.events.push(GameEvent::Resumed);
            log::info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            SessionStatus::Running => self.pause(),
            SessionStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Back to the start menu. Abandoned runs never touch the best score.
    pub fn quit(&mut self) {
        if self.status != SessionStatus::Idle {
            self.status = SessionStatus::Idle;
            self.events.push(GameEvent::Quit);
            log::info!("Quit to menu");
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.clock.speed
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            status: self.status,
            difficulty: self.difficulty,
            score: self.score,
            best_score: self.best_score,
            speed: self.clock.speed,
            road: &self.road,
            player: &self.player,
            obstacles: &self.pools.obstacles,
            coins: &self.pools.coins,
            particles: &self.pools.particles,
        }
    }

    /// Mark the run as crashed. Only the first crash of a run counts.
    pub(super) fn crash(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::GameOver;
            self.events.push(GameEvent::Crash);
            log::info!("Crashed at score {}", self.score);
        }
    }

    /// Compare the finished run against the best score, persisting a new best
    pub(super) fn settle_game_over(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save_best_score(self.best_score);
            self.events.push(GameEvent::NewBest { score: self.score });
            log::info!("New best score: {}", self.score);
        } else {
            self.events.push(GameEvent::TryAgain {
                score: self.score,
                best: self.best_score,
            });
        }
    }
}
