//! Presentation adapter
//!
//! Presenters consume a [`SessionSnapshot`] once per frame and never mutate
//! the session. [`DrawList`] turns a snapshot into coloured triangles whose
//! bytes can go straight into a GPU vertex buffer.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::{Bounded, Rect, SessionSnapshot};
pub use vertex::{Vertex, colors, rgb};

/// Triangle segments used for coins
const COIN_SEGMENTS: u32 = 16;
/// Lane divider thickness
const STRIPE_WIDTH: f32 = 4.0;
/// Road edge line thickness
const EDGE_WIDTH: f32 = 6.0;

/// Anything that can show a frame
pub trait Presenter {
    fn render(&mut self, snapshot: &SessionSnapshot<'_>);
}

/// CPU-side tessellation of one frame
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw vertex bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Rebuild the list from a snapshot, back to front
    pub fn build(&mut self, snapshot: &SessionSnapshot<'_>) {
        self.clear();
        let out = &mut self.vertices;
        let road = snapshot.road;

        shapes::rect(out, Rect::new(0.0, 0.0, road.width, road.height), colors::ROAD);

        // Lane dividers
        for lane in 1..road.lane_count {
            let x = lane as f32 * road.lane_width;
            for stripe in &road.stripes {
                shapes::rect(
                    out,
                    Rect::new(x - STRIPE_WIDTH / 2.0, stripe.y, STRIPE_WIDTH, road.stripe_height),
                    colors::LANE_STRIPE,
                );
            }
        }

        // Edge lines, half of each stroke falls off-canvas
        shapes::rect(out, Rect::new(-EDGE_WIDTH / 2.0, 0.0, EDGE_WIDTH, road.height), colors::ROAD_EDGE);
        shapes::rect(
            out,
            Rect::new(road.width - EDGE_WIDTH / 2.0, 0.0, EDGE_WIDTH, road.height),
            colors::ROAD_EDGE,
        );

        for obstacle in snapshot.obstacles {
            shapes::car(out, obstacle.bounds(), rgb(obstacle.color, 1.0), false);
        }

        for coin in snapshot.coins {
            let center = coin.center();
            let radius = coin.size / 2.0;
            shapes::circle(out, center, radius, colors::COIN, COIN_SEGMENTS);
            // Shine spot spins with the coin
            let shine = Vec2::from_angle(coin.rotation).rotate(Vec2::new(-3.0, -3.0));
            shapes::circle(out, center + shine, coin.size / 4.0, colors::COIN_SHINE, COIN_SEGMENTS);
            shapes::ring(out, center, radius - 1.0, radius + 1.0, colors::COIN_RIM, COIN_SEGMENTS);
        }

        for particle in snapshot.particles {
            let color = rgb(particle.color, particle.alpha.clamp(0.0, 1.0));
            shapes::rect(
                out,
                Rect::new(particle.pos.x, particle.pos.y, particle.size, particle.size),
                color,
            );
        }

        shapes::car(out, snapshot.player.bounds(), colors::PLAYER, true);
    }
}

impl Presenter for DrawList {
    fn render(&mut self, snapshot: &SessionSnapshot<'_>) {
        self.build(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{Coin, Difficulty, Obstacle, Session};

    /// Vertices for road, dividers and edges on the default 5-lane road
    fn road_vertices(session: &Session) -> usize {
        let stripes = session.road.stripes.len() * (session.road.lane_count as usize - 1);
        (1 + stripes + 2) * 6
    }

    #[test]
    fn test_empty_road_frame() {
        let mut session = Session::with_seed(1, Box::new(MemoryStore::new()));
        session.start(Difficulty::Easy);

        let mut list = DrawList::new();
        list.render(&session.snapshot());

        let player_car = 9 * 6;
        assert_eq!(list.vertices.len(), road_vertices(&session) + player_car);
        assert_eq!(list.as_bytes().len(), list.vertices.len() * Vertex::STRIDE);
        assert_eq!(list.triangle_count() * 3, list.vertices.len());
    }

    #[test]
    fn test_entities_are_drawn_and_rebuild_replaces() {
        let mut session = Session::with_seed(1, Box::new(MemoryStore::new()));
        session.start(Difficulty::Easy);
        session.pools.obstacles.push(Obstacle {
            pos: Vec2::new(20.0, 40.0),
            size: Vec2::new(40.0, 70.0),
            lane: 0,
            color: 0x3498db,
        });
        session.pools.coins.push(Coin {
            pos: Vec2::new(100.0, 100.0),
            size: 20.0,
            rotation: 0.3,
        });

        let mut list = DrawList::new();
        list.build(&session.snapshot());
        let coin = (COIN_SEGMENTS as usize) * 3 * 2 + (COIN_SEGMENTS as usize) * 6;
        let expected = road_vertices(&session) + 2 * 9 * 6 + coin;
        assert_eq!(list.vertices.len(), expected);

        // Obstacle body keeps its palette colour
        let body = road_vertices(&session);
        assert_eq!(list.vertices[body].color, rgb(0x3498db, 1.0));

        list.build(&session.snapshot());
        assert_eq!(list.vertices.len(), expected);
    }

    #[test]
    fn test_particle_alpha_carried() {
        let mut session = Session::with_seed(1, Box::new(MemoryStore::new()));
        session.start(Difficulty::Easy);
        session.pools.particles.push(crate::sim::Particle {
            pos: Vec2::new(5.0, 5.0),
            vel: Vec2::ZERO,
            size: 3.0,
            color: 0xffd700,
            life: 15,
            alpha: 0.5,
        });

        let mut list = DrawList::new();
        list.build(&session.snapshot());
        let particle = road_vertices(&session);
        assert_eq!(list.vertices[particle].color[3], 0.5);
    }
}
