//! Speed progression and score accrual
//!
//! Movement is tied to frame ticks, not wall-clock time: one `advance` per
//! rendered frame, whatever the frame rate.

use serde::{Deserialize, Serialize};

/// Speed bounds for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    pub base_speed: f32,
    pub max_speed: f32,
    /// Speed gained per tick
    pub speed_increment: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    /// Pixels per tick for everything on the road
    pub speed: f32,
    pub profile: SpeedProfile,
    /// Ticks since the run started
    pub ticks: u64,
}

impl SimClock {
    pub fn new(profile: SpeedProfile) -> Self {
        Self {
            speed: profile.base_speed,
            profile,
            ticks: 0,
        }
    }

    /// Restart at the profile's base speed
    pub fn reset(&mut self, profile: SpeedProfile) {
        *self = Self::new(profile);
    }

    /// Advance one tick and return the points earned by driving
    pub fn advance(&mut self) -> u64 {
        self.ticks += 1;
        self.speed = (self.speed + self.profile.speed_increment).min(self.profile.max_speed);
        points_for_speed(self.speed)
    }
}

/// Points per tick at a given speed: one per 10 px/tick, rounded down
#[inline]
pub fn points_for_speed(speed: f32) -> u64 {
    (speed / 10.0).floor().max(0.0) as u64
}
