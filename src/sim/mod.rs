//! Simulation module
//!
//! All gameplay logic lives here and stays free of platform code:
//! - One `tick` per rendered frame, no scheduling of its own
//! - Seeded RNG only, so a run replays from its seed
//! - Pools pruned in place with stable order
//! - No rendering, audio or storage calls except through injected traits

pub mod clock;
pub mod entities;
pub mod geometry;
pub mod player;
pub mod road;
pub mod state;
pub mod tick;

pub use clock::{SimClock, SpeedProfile, points_for_speed};
pub use entities::{Coin, EntityPools, Obstacle, Particle, COIN_COLOR, OBSTACLE_PALETTE};
pub use geometry::{Bounded, Rect, overlaps};
pub use player::Player;
pub use road::{Road, Stripe};
pub use state::{
    Difficulty, GameEvent, ParseDifficultyError, Session, SessionSnapshot, SessionStatus,
};
pub use tick::{TickInput, tick};
