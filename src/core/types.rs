use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRAVITY, DEFAULT_RESTITUTION, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
    DEFAULT_VELOCITY_DAMPING, GRAVITY_RANGE, RESTITUTION_RANGE, VELOCITY_DAMPING_RANGE,
};

use super::body::Body;

/// Display color of a body, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);
    pub const RED: Color = Color::rgba(230, 41, 55, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLUE
    }
}

/// Rectangular area the bodies live in, anchored at the origin (Y-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether the whole disk lies inside the area, walls included.
    pub fn contains(&self, body: &Body) -> bool {
        let r = body.radius;
        let p = body.position;
        p.x >= r && p.x <= self.width - r && p.y >= r && p.y <= self.height - r
    }
}

/// Per-frame parameters read by the physics step.
///
/// The block is owned by the caller and passed by reference into every step;
/// the step never stores or validates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Downward acceleration (px/s²).
    pub gravity: f32,
    /// Wall-bounce retention factor and collision impulse scale.
    pub velocity_damping: f32,
    pub restitution: f32,
    /// Keep the collision highlight color until render time.
    pub highlight_collisions: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            restitution: DEFAULT_RESTITUTION,
            highlight_collisions: false,
        }
    }
}

impl SimulationParams {
    /// Returns a copy with each value clamped to its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            gravity: self.gravity.clamp(GRAVITY_RANGE.0, GRAVITY_RANGE.1),
            velocity_damping: self
                .velocity_damping
                .clamp(VELOCITY_DAMPING_RANGE.0, VELOCITY_DAMPING_RANGE.1),
            restitution: self
                .restitution
                .clamp(RESTITUTION_RANGE.0, RESTITUTION_RANGE.1),
            highlight_collisions: self.highlight_collisions,
        }
    }
}
