use glam::Vec2;

use crate::core::Body;

/// Impulse response for a pair of overlapping disks.
///
/// Bodies carry no mass; the impulse is divided by the sum of inverse radii
/// and added to the velocities as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImpulseSolver;

impl ImpulseSolver {
    pub fn new() -> Self {
        Self
    }

    /// Applies the collision impulse along the line of centers.
    ///
    /// Returns the impulse added to `a` (and subtracted from `b`), or `None`
    /// when the centers coincide or the pair is already separating.
    pub fn resolve(
        &self,
        a: &mut Body,
        b: &mut Body,
        restitution: f32,
        damping: f32,
    ) -> Option<Vec2> {
        let offset = a.position - b.position;
        let distance = offset.length();
        if distance == 0.0 {
            return None;
        }
        let normal = offset / distance;

        let relative_velocity = a.velocity - b.velocity;
        let vel_along_normal = relative_velocity.dot(normal);
        if vel_along_normal > 0.0 {
            return None;
        }

        let impulse_mag = -(1.0 + restitution) * vel_along_normal
            / (a.inverse_radius() + b.inverse_radius());
        let impulse = normal * (impulse_mag * damping);

        a.apply_impulse(impulse);
        b.apply_impulse(-impulse);
        Some(impulse)
    }
}
