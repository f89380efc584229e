use crate::{
    config::DEFAULT_REST_SPEED,
    core::{Body, Bounds},
};

/// Explicit Euler integrator that keeps bodies inside the walls.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub bounds: Bounds,
    /// Bounced velocity components slower than this are zeroed.
    pub rest_speed: f32,
}

impl Integrator {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rest_speed: DEFAULT_REST_SPEED,
        }
    }

    pub fn integrate_velocity(&self, body: &mut Body, dt: f32, gravity: f32) {
        body.velocity.y += gravity * dt;
    }

    pub fn integrate_position(&self, body: &mut Body, dt: f32) {
        body.position += body.velocity * dt;
    }

    /// Clamps the body against each wall in turn: bottom, top, left, right.
    ///
    /// Axes are handled independently, so a corner hit bounces both
    /// components.
    pub fn resolve_walls(&self, body: &mut Body, damping: f32) {
        let r = body.radius;
        let (width, height) = (self.bounds.width, self.bounds.height);

        if body.position.y + r > height {
            body.position.y = height - r;
            body.velocity.y = self.bounce(body.velocity.y, damping);
        }
        if body.position.y - r < 0.0 {
            body.position.y = r;
            body.velocity.y = self.bounce(body.velocity.y, damping);
        }
        if body.position.x - r < 0.0 {
            body.position.x = r;
            body.velocity.x = self.bounce(body.velocity.x, damping);
        }
        if body.position.x + r > width {
            body.position.x = width - r;
            body.velocity.x = self.bounce(body.velocity.x, damping);
        }
    }

    fn bounce(&self, component: f32, damping: f32) -> f32 {
        let bounced = -component * damping;
        if bounced.abs() < self.rest_speed {
            0.0
        } else {
            bounced
        }
    }

    pub fn step(&self, bodies: &mut [Body], dt: f32, gravity: f32, damping: f32) {
        for body in bodies.iter_mut() {
            self.integrate_velocity(body, dt, gravity);
            self.integrate_position(body, dt);
            self.resolve_walls(body, damping);
        }
    }
}
