//! Values edited by the UI overlay, applied to the sandbox between frames.

use serde::{Deserialize, Serialize};

use crate::{
    config::{
        DEFAULT_BODY_COUNT, DEFAULT_GRAVITY, DEFAULT_RADIUS, DEFAULT_RESTITUTION,
        DEFAULT_VELOCITY_DAMPING,
    },
    core::SimulationParams,
};

/// Raw widget state. Integer inputs may hold invalid values while the user
/// is typing; [`crate::world::Sandbox::apply_controls`] rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub body_count: i32,
    pub gravity: f32,
    pub velocity_damping: f32,
    pub restitution: f32,
    /// Radius of bodies created from now on.
    pub radius: i32,
    pub highlight_collisions: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT as i32,
            gravity: DEFAULT_GRAVITY,
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            restitution: DEFAULT_RESTITUTION,
            radius: DEFAULT_RADIUS,
            highlight_collisions: false,
        }
    }
}

impl Controls {
    /// Slider values as a parameter block, clamped to the slider ranges.
    pub fn params(&self) -> SimulationParams {
        SimulationParams {
            gravity: self.gravity,
            velocity_damping: self.velocity_damping,
            restitution: self.restitution,
            highlight_collisions: self.highlight_collisions,
        }
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parameter_defaults() {
        let controls = Controls::default();
        assert_eq!(controls.body_count, 2);
        assert_eq!(controls.radius, 10);
        assert_eq!(controls.params(), SimulationParams::default());
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let controls: Controls =
            ron::from_str("(gravity: 40.0, body_count: 12)").expect("valid controls");
        assert_eq!(controls.gravity, 40.0);
        assert_eq!(controls.body_count, 12);
        assert_eq!(controls.velocity_damping, 0.8);
        assert_eq!(controls.radius, 10);
    }
}
