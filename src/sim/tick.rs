//! Per-frame simulation tick
//!
//! Advances a running session by one frame: speed ramp and score, road
//! scroll, steering, spawning, then obstacle, coin and particle updates.

use super::geometry::Bounded;
use super::state::{GameEvent, Session, SessionStatus};
use crate::consts::COIN_VALUE;

/// Steering intents for a single tick, set by input handling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one frame.
///
/// Does nothing unless the session is running. `_dt` is the time since the
/// previous frame; movement is per tick, so game speed follows the frame rate.
///
/// A crash switches the session to `GameOver` immediately, but the rest of
/// the frame (coins, particles) still completes before the best score is
/// settled.
pub fn tick(session: &mut Session, input: &TickInput, _dt: f32) {
    if session.status != SessionStatus::Running {
        return;
    }

    session.score += session.clock.advance();
    let speed = session.clock.speed;

    session.road.scroll(speed);
    session
        .player
        .steer(input.move_left, input.move_right, &session.road);

    let car_size = session.player.size;
    session
        .pools
        .spawn(&mut session.rng, &session.road, car_size);

    let player = session.player.bounds();
    let road_height = session.road.height;

    if session.pools.update_obstacles(speed, &player, road_height) {
        session.crash();
    }

    let collected = session
        .pools
        .update_coins(&mut session.rng, speed, &player, road_height);
    for _ in 0..collected {
        session.score += COIN_VALUE;
        session.events.push(GameEvent::CoinCollected);
    }

    session.pools.update_particles();

    if session.status == SessionStatus::GameOver {
        session.settle_game_over();
    }
}
