//! Road geometry: lanes and the scrolling lane-divider stripes
//!
//! Stripes and the scroll offset are purely visual; gameplay only reads
//! lane positions.

use serde::{Deserialize, Serialize};

use crate::consts::{STRIPE_GAP, STRIPE_HEIGHT};

/// One lane-divider dash
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stripe {
    pub y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    pub width: f32,
    pub height: f32,
    pub lane_count: u32,
    pub lane_width: f32,
    pub stripe_height: f32,
    pub stripe_gap: f32,
    pub stripes: Vec<Stripe>,
    /// Texture scroll, wraps to 0 every stripe period
    pub offset: f32,
}

impl Road {
    pub fn new(width: f32, height: f32, lane_count: u32) -> Self {
        let lane_count = lane_count.max(1);
        let mut road = Self {
            width,
            height,
            lane_count,
            lane_width: width / lane_count as f32,
            stripe_height: STRIPE_HEIGHT,
            stripe_gap: STRIPE_GAP,
            stripes: Vec::new(),
            offset: 0.0,
        };
        road.reset();
        road
    }

    /// Distance from one stripe to the next
    #[inline]
    pub fn stripe_period(&self) -> f32 {
        self.stripe_height + self.stripe_gap
    }

    /// Re-lay stripes to cover the visible height plus two spares above
    pub fn reset(&mut self) {
        self.lane_width = self.width / self.lane_count as f32;
        self.offset = 0.0;

        let period = self.stripe_period();
        let count = (self.height / period + 2.0).ceil().max(0.0) as usize;
        self.stripes = (0..count)
            .map(|i| Stripe {
                y: i as f32 * period - self.stripe_height,
            })
            .collect();
    }

    /// X coordinate of a lane's centre line
    #[inline]
    pub fn lane_center(&self, lane: u32) -> f32 {
        lane as f32 * self.lane_width + self.lane_width / 2.0
    }

    /// Lane containing x (clamped to the road)
    pub fn lane_of(&self, x: f32) -> u32 {
        let lane = (x / self.lane_width).floor().max(0.0) as u32;
        lane.min(self.lane_count - 1)
    }

    /// Scroll the road down by `speed` pixels
    pub fn scroll(&mut self, speed: f32) {
        self.offset += speed;
        if self.offset >= self.stripe_period() {
            self.offset = 0.0;
        }

        for stripe in &mut self.stripes {
            stripe.y += speed;
            if stripe.y > self.height {
                stripe.y = -self.stripe_height;
            }
        }
    }
}
