use approx::assert_relative_eq;
use sandsim::*;

const DT: f32 = 1.0 / 120.0;

#[test]
fn body_falls_under_gravity() {
    let mut bodies = vec![Body::new(Vec2::new(250.0, 0.0), 10.0)];
    let params = SimulationParams {
        gravity: 50.0,
        ..SimulationParams::default()
    };

    step(&mut bodies, 1.0, &params, Bounds::new(500.0, 600.0));

    assert_relative_eq!(bodies[0].velocity.y, 50.0);
    assert_relative_eq!(bodies[0].position.y, 50.0);
    assert_relative_eq!(bodies[0].position.x, 250.0);
}

#[test]
fn floor_bounce_clamps_and_damps() {
    let mut bodies =
        vec![Body::new(Vec2::new(250.0, 590.0), 10.0).with_velocity(Vec2::new(0.0, 200.0))];
    let params = SimulationParams {
        velocity_damping: 0.8,
        ..SimulationParams::default()
    };

    step(&mut bodies, 1.0 / 60.0, &params, Bounds::new(500.0, 600.0));

    assert_relative_eq!(bodies[0].position.y, 590.0);
    assert_relative_eq!(bodies[0].velocity.y, -160.0, epsilon = 1e-4);
}

#[test]
fn bodies_stay_inside_walls_every_frame() {
    let bounds = Bounds::default();
    let mut sandbox = Sandbox::with_seed(9, 40, 10, bounds);
    let params = SimulationParams {
        gravity: 100.0,
        velocity_damping: 1.0,
        ..SimulationParams::default()
    };

    for frame in 0..600 {
        sandbox.step(DT, &params);
        for (index, body) in sandbox.bodies().iter().enumerate() {
            assert!(
                bounds.contains(body),
                "body {index} left the canvas on frame {frame}: {:?}",
                body.position
            );
        }
    }
}

#[test]
fn resting_body_settles_on_floor() {
    let mut sandbox = Sandbox::with_seed(4, 1, 10, Bounds::default());
    let params = SimulationParams {
        gravity: 100.0,
        ..SimulationParams::default()
    };

    for _ in 0..(120 * 60) {
        sandbox.step(DT, &params);
    }

    let body = sandbox.bodies()[0];
    assert_relative_eq!(body.position.y, 590.0, epsilon = 1.0);
    assert!(body.velocity.y.abs() < 1.0, "velocity {:?}", body.velocity);
}

#[test]
fn step_reports_every_pair() {
    let mut sandbox = Sandbox::with_seed(5, 12, 10, Bounds::default());
    let stats = sandbox.step(DT, &SimulationParams::default());

    assert_eq!(stats.body_count, 12);
    assert_eq!(stats.pairs_tested, 66);
    assert_eq!(sandbox.last_stats(), &stats);
}
