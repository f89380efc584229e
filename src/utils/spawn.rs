use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::{
    config::{GROWTH_SPAWN_X, GROWTH_SPAWN_Y, INITIAL_SPAWN_X, INITIAL_SPAWN_Y},
    core::Body,
};

/// Axis-aligned rectangle new bodies are placed in, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub x: (f32, f32),
    pub y: (f32, f32),
}

impl SpawnArea {
    /// Area used for the bodies created at startup.
    pub const INITIAL: SpawnArea = SpawnArea {
        x: INITIAL_SPAWN_X,
        y: INITIAL_SPAWN_Y,
    };

    /// Area used for bodies appended when the count grows.
    pub const GROWTH: SpawnArea = SpawnArea {
        x: GROWTH_SPAWN_X,
        y: GROWTH_SPAWN_Y,
    };

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x.0 && point.x <= self.x.1 && point.y >= self.y.0 && point.y <= self.y.1
    }
}

/// Creates bodies at random positions, at rest.
#[derive(Debug, Clone)]
pub struct BodySpawner {
    rng: Xoshiro256StarStar,
}

impl BodySpawner {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic spawner for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self, area: SpawnArea, radius: f32) -> Body {
        let position = Vec2::new(
            self.rng.random_range(area.x.0..=area.x.1),
            self.rng.random_range(area.y.0..=area.y.1),
        );
        Body::new(position, radius)
    }

    pub fn spawn_many(&mut self, count: usize, area: SpawnArea, radius: f32) -> Vec<Body> {
        (0..count).map(|_| self.spawn(area, radius)).collect()
    }
}

impl Default for BodySpawner {
    fn default() -> Self {
        Self::new()
    }
}
