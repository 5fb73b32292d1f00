//! Lane Racer - an endless lane-runner arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (road, player, entity pools, session state)
//! - `renderer`: Tessellation of session snapshots into GPU-ready vertices
//! - `platform`: Input mapping, frame driver, headless autopilot
//! - `persistence`: Best-score storage
//! - `audio`: Sound cue sinks
//! - `settings`: Runtime configuration
//! - `ui`: HUD text and game-over messages

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use sim::{Difficulty, GameEvent, Session, SessionStatus, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration for headless drivers (60 Hz), in milliseconds
    pub const FRAME_DT_MS: f64 = 1000.0 / 60.0;

    /// Road defaults
    pub const ROAD_WIDTH: f32 = 400.0;
    pub const ROAD_HEIGHT: f32 = 600.0;
    pub const LANE_COUNT: u32 = 5;
    pub const STRIPE_HEIGHT: f32 = 40.0;
    pub const STRIPE_GAP: f32 = 20.0;

    /// Player car
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Horizontal pixels per tick while steering
    pub const PLAYER_MOVE_SPEED: f32 = 8.0;
    /// Gap between the player's rear bumper and the bottom of the road
    pub const PLAYER_BOTTOM_MARGIN: f32 = 50.0;

    /// Speed gained per tick, same for every difficulty
    pub const SPEED_INCREMENT: f32 = 0.001;

    /// Spawn chance per tick
    pub const OBSTACLE_SPAWN_CHANCE: f32 = 0.02;
    pub const COIN_SPAWN_CHANCE: f32 = 0.015;

    /// Coins
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_SPIN: f32 = 0.1; // radians per tick
    pub const COIN_VALUE: u64 = 100;

    /// Pickup particles
    pub const PARTICLE_BURST: usize = 10;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 4.0;
}
