//! Demo driver for headless runs
//!
//! Picks the closest lane with no traffic coming up, preferring one with a
//! coin in it, and steers the car towards that lane's centre.

use crate::sim::{SessionSnapshot, TickInput};

/// How far above the car traffic is considered a threat
const LOOK_AHEAD: f32 = 220.0;

/// Pick steering for the next tick
pub fn steer(snapshot: &SessionSnapshot<'_>) -> TickInput {
    let road = snapshot.road;
    let player = snapshot.player;
    let top = player.pos.y - LOOK_AHEAD;
    let bottom = player.pos.y + player.size.y;

    let blocked = |lane: u32| {
        snapshot
            .obstacles
            .iter()
            .any(|o| o.lane == lane && o.pos.y + o.size.y > top && o.pos.y < bottom)
    };
    let has_coin = |lane: u32| {
        snapshot
            .coins
            .iter()
            .any(|c| road.lane_of(c.center().x) == lane && c.pos.y < bottom)
    };

    let current = road.lane_of(player.pos.x + player.size.x / 2.0);

    // Lower cost wins: distance in lanes, a coin is worth a one-lane detour
    let target = (0..road.lane_count)
        .filter(|&lane| !blocked(lane))
        .min_by(|&a, &b| {
            let cost = |lane: u32| {
                let distance = lane.abs_diff(current) as f32;
                if has_coin(lane) { distance - 1.5 } else { distance }
            };
            cost(a)
                .partial_cmp(&cost(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(current);

    let target_x = road.lane_center(target) - player.size.x / 2.0;
    let dx = target_x - player.pos.x;
    let deadzone = player.move_speed / 2.0;
    TickInput {
        move_left: dx < -deadzone,
        move_right: dx > deadzone,
    }
}
