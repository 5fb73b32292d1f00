//! The player's car

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounded, Rect};
use super::road::Road;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick
    pub move_speed: f32,
}

impl Player {
    /// Place the car in the middle lane, near the bottom of the road
    pub fn new(road: &Road) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let lane = road.lane_count / 2;
        Self {
            pos: Vec2::new(
                road.lane_center(lane) - size.x / 2.0,
                road.height - size.y - PLAYER_BOTTOM_MARGIN,
            ),
            size,
            move_speed: PLAYER_MOVE_SPEED,
        }
    }

    /// Rightmost allowed x
    #[inline]
    pub fn max_x(&self, road: &Road) -> f32 {
        (road.width - self.size.x).max(0.0)
    }

    /// Apply one tick of steering, then keep the car on the road
    pub fn steer(&mut self, move_left: bool, move_right: bool, road: &Road) {
        let max_x = self.max_x(road);
        if move_left && self.pos.x > 0.0 {
            self.pos.x -= self.move_speed;
        }
        if move_right && self.pos.x < max_x {
            self.pos.x += self.move_speed;
        }
        self.pos.x = self.pos.x.min(max_x).max(0.0);
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
