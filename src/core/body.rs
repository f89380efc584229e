use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::types::Color;

/// Circular unit-mass body. Identity is its index in the owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: crate::config::DEFAULT_RADIUS as f32,
            color: Color::default(),
        }
    }
}

impl Body {
    /// Creates a body at rest.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            radius,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Stand-in for inverse mass: larger disks react less to impulses.
    pub fn inverse_radius(&self) -> f32 {
        1.0 / self.radius
    }

    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}
