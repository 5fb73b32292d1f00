//! Pooled road entities: obstacles, coins and pickup particles
//!
//! Each pool is a plain `Vec` pruned with `retain_mut`, so every entity alive
//! at the start of an update is visited exactly once and survivors keep their
//! order.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounded, Rect};
use super::road::Road;
use crate::consts::*;

/// Obstacle body colours (0xRRGGBB)
pub const OBSTACLE_PALETTE: [u32; 5] = [0xe74c3c, 0x3498db, 0x2ecc71, 0x9b59b6, 0xf39c12];

/// Coin and coin-particle colour
pub const COIN_COLOR: u32 = 0xffd700;

/// A car travelling in a lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: u32,
    pub color: u32,
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub size: f32,
    /// Cosmetic spin (radians)
    pub rotation: f32,
}

impl Coin {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

impl Bounded for Coin {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
    /// Frames left
    pub life: u32,
    /// `life / PARTICLE_LIFE`
    pub alpha: f32,
}

impl Particle {
    /// Move one frame and fade
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.alpha = self.life as f32 / PARTICLE_LIFE as f32;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// All pooled entities, owned by the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityPools {
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub particles: Vec<Particle>,
}

impl EntityPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.coins.clear();
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.coins.is_empty() && self.particles.is_empty()
    }

    /// Roll this tick's spawn chances (obstacle first, then coin)
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, road: &Road, car_size: Vec2) {
        if rng.random::<f32>() < OBSTACLE_SPAWN_CHANCE {
            self.spawn_obstacle(rng, road, car_size);
        }
        if rng.random::<f32>() < COIN_SPAWN_CHANCE {
            self.spawn_coin(rng, road);
        }
    }

    /// Add an obstacle just above the top of a random lane
    pub fn spawn_obstacle<R: Rng + ?Sized>(&mut self, rng: &mut R, road: &Road, size: Vec2) {
        let lane = rng.random_range(0..road.lane_count);
        let color = OBSTACLE_PALETTE[rng.random_range(0..OBSTACLE_PALETTE.len())];
        log::debug!("Obstacle spawned in lane {}", lane);
        self.obstacles.push(Obstacle {
            pos: Vec2::new(road.lane_center(lane) - size.x / 2.0, -size.y),
            size,
            lane,
            color,
        });
    }

    /// Add a coin just above the top of a random lane
    pub fn spawn_coin<R: Rng + ?Sized>(&mut self, rng: &mut R, road: &Road) {
        let lane = rng.random_range(0..road.lane_count);
        self.coins.push(Coin {
            pos: Vec2::new(road.lane_center(lane) - COIN_SIZE / 2.0, -COIN_SIZE),
            size: COIN_SIZE,
            rotation: 0.0,
        });
    }

    /// Move obstacles down and drop the ones past the bottom.
    ///
    /// Returns true if any obstacle overlaps the player. Colliding obstacles
    /// stay in the pool.
    pub fn update_obstacles(&mut self, speed: f32, player: &Rect, road_height: f32) -> bool {
        let mut crashed = false;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.pos.y += speed;
            if obstacle.bounds().overlaps(player) {
                crashed = true;
            }
            obstacle.pos.y <= road_height
        });
        crashed
    }

    /// Move and spin coins, collecting any the player touches.
    ///
    /// Each collected coin is removed and leaves a particle burst at its
    /// centre. Returns the number collected.
    pub fn update_coins<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        speed: f32,
        player: &Rect,
        road_height: f32,
    ) -> u32 {
        let mut collected = 0;
        let particles = &mut self.particles;
        self.coins.retain_mut(|coin| {
            coin.pos.y += speed;
            coin.rotation += COIN_SPIN;
            if coin.bounds().overlaps(player) {
                collected += 1;
                spawn_burst(particles, rng, coin.center());
                return false;
            }
            coin.pos.y <= road_height
        });
        collected
    }

    pub fn update_particles(&mut self) {
        self.particles.retain_mut(|particle| {
            particle.update();
            particle.is_alive()
        });
    }
}

/// Push a burst of coin-coloured sparks centred on `center`
pub fn spawn_burst<R: Rng + ?Sized>(particles: &mut Vec<Particle>, rng: &mut R, center: Vec2) {
    for _ in 0..PARTICLE_BURST {
        let vx = (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED;
        let vy = (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED;
        let size = rng.random::<f32>() * PARTICLE_SIZE_RANGE + PARTICLE_MIN_SIZE;
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(vx, vy),
            size,
            color: COIN_COLOR,
            life: PARTICLE_LIFE,
            alpha: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn road() -> Road {
        Road::new(ROAD_WIDTH, ROAD_HEIGHT, LANE_COUNT)
    }

    fn car() -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn far_player() -> Rect {
        Rect::new(-1000.0, -1000.0, 1.0, 1.0)
    }

    #[test]
    fn test_spawned_obstacle_sits_in_a_lane() {
        let road = road();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pools = EntityPools::new();
        for _ in 0..50 {
            pools.spawn_obstacle(&mut rng, &road, car());
        }
        for obstacle in &pools.obstacles {
            assert!(obstacle.lane < road.lane_count);
            assert_eq!(obstacle.pos.x, road.lane_center(obstacle.lane) - PLAYER_WIDTH / 2.0);
            assert_eq!(obstacle.pos.y, -PLAYER_HEIGHT);
            assert_eq!(obstacle.size, car());
            assert!(OBSTACLE_PALETTE.contains(&obstacle.color));
        }
    }

    #[test]
    fn test_spawned_coin_defaults() {
        let road = road();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pools = EntityPools::new();
        pools.spawn_coin(&mut rng, &road);
        let coin = &pools.coins[0];
        assert_eq!(coin.size, 20.0);
        assert_eq!(coin.rotation, 0.0);
        assert_eq!(coin.pos.y, -20.0);
        let lane = road.lane_of(coin.center().x);
        assert_eq!(coin.pos.x, road.lane_center(lane) - 10.0);
    }

    #[test]
    fn test_spawn_rates_roughly_match() {
        let road = road();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pools = EntityPools::new();
        let trials = 100_000;
        for _ in 0..trials {
            pools.spawn(&mut rng, &road, car());
        }
        let obstacles = pools.obstacles.len() as f32 / trials as f32;
        let coins = pools.coins.len() as f32 / trials as f32;
        assert!((obstacles - 0.02).abs() < 0.003, "obstacle rate {obstacles}");
        assert!((coins - 0.015).abs() < 0.003, "coin rate {coins}");
    }

    #[test]
    fn test_obstacles_fall_and_prune() {
        let mut pools = EntityPools::new();
        for y in [0.0, 595.0, 598.0] {
            pools.obstacles.push(Obstacle {
                pos: Vec2::new(0.0, y),
                size: car(),
                lane: 0,
                color: OBSTACLE_PALETTE[0],
            });
        }
        let crashed = pools.update_obstacles(3.0, &far_player(), ROAD_HEIGHT);
        assert!(!crashed);
        // 598 + 3 = 601 is past the bottom; 595 + 3 = 598 survives
        let ys: Vec<f32> = pools.obstacles.iter().map(|o| o.pos.y).collect();
        assert_eq!(ys, vec![3.0, 598.0]);
    }

    #[test]
    fn test_obstacle_collision_keeps_obstacle() {
        let mut pools = EntityPools::new();
        pools.obstacles.push(Obstacle {
            pos: Vec2::new(110.0, 510.0),
            size: car(),
            lane: 1,
            color: OBSTACLE_PALETTE[1],
        });
        let player = Rect::new(100.0, 500.0, 40.0, 70.0);
        assert!(pools.update_obstacles(3.0, &player, ROAD_HEIGHT));
        assert_eq!(pools.obstacles.len(), 1);
    }

    #[test]
    fn test_coin_pickup_bursts_particles() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pools = EntityPools::new();
        pools.coins.push(Coin {
            pos: Vec2::new(110.0, 500.0),
            size: COIN_SIZE,
            rotation: 0.0,
        });
        pools.coins.push(Coin {
            pos: Vec2::new(300.0, 100.0),
            size: COIN_SIZE,
            rotation: 0.0,
        });
        let player = Rect::new(100.0, 500.0, 40.0, 70.0);

        let collected = pools.update_coins(&mut rng, 3.0, &player, ROAD_HEIGHT);
        assert_eq!(collected, 1);
        assert_eq!(pools.coins.len(), 1);
        assert!((pools.coins[0].rotation - 0.1).abs() < 1e-6);
        assert_eq!(pools.particles.len(), 10);

        let center = Vec2::new(120.0, 513.0);
        for particle in &pools.particles {
            assert_eq!(particle.pos, center);
            assert_eq!(particle.life, 30);
            assert_eq!(particle.alpha, 1.0);
            assert_eq!(particle.color, COIN_COLOR);
            assert!(particle.vel.x.abs() <= 2.0 && particle.vel.y.abs() <= 2.0);
            assert!(particle.size >= 2.0 && particle.size < 6.0);
        }
    }

    #[test]
    fn test_coins_leave_bottom() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pools = EntityPools::new();
        pools.coins.push(Coin {
            pos: Vec2::new(0.0, 599.0),
            size: COIN_SIZE,
            rotation: 0.0,
        });
        let collected = pools.update_coins(&mut rng, 2.0, &far_player(), ROAD_HEIGHT);
        assert_eq!(collected, 0);
        assert!(pools.coins.is_empty());
        assert!(pools.particles.is_empty());
    }

    #[test]
    fn test_particles_fade_out() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut pools = EntityPools::new();
        spawn_burst(&mut pools.particles, &mut rng, Vec2::new(50.0, 50.0));
        let start = pools.particles[0].clone();

        pools.update_particles();
        let p = &pools.particles[0];
        assert_eq!(p.life, 29);
        assert!((p.alpha - 29.0 / 30.0).abs() < 1e-6);
        assert_eq!(p.pos, start.pos + start.vel);

        for _ in 0..28 {
            pools.update_particles();
        }
        assert_eq!(pools.particles.len(), 10);
        pools.update_particles();
        assert!(pools.particles.is_empty());
    }

    #[test]
    fn test_clear_empties_every_pool() {
        let road = road();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pools = EntityPools::new();
        pools.spawn_obstacle(&mut rng, &road, car());
        pools.spawn_coin(&mut rng, &road);
        spawn_burst(&mut pools.particles, &mut rng, Vec2::ZERO);
        assert!(!pools.is_empty());
        pools.clear();
        assert!(pools.is_empty());
    }
}
