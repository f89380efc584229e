use approx::assert_relative_eq;
use sandsim::*;

fn approaching_pair() -> (Body, Body) {
    (
        Body::new(Vec2::new(100.0, 100.0), 10.0).with_velocity(Vec2::new(10.0, 0.0)),
        Body::new(Vec2::new(120.0, 100.0), 10.0).with_velocity(Vec2::new(-10.0, 0.0)),
    )
}

#[test]
fn head_on_collision_follows_impulse_formula() {
    let (a, b) = approaching_pair();
    let mut bodies = vec![a, b];
    let params = SimulationParams {
        restitution: 0.1,
        velocity_damping: 0.8,
        ..SimulationParams::default()
    };

    let stats = step(&mut bodies, 0.0, &params, Bounds::default());

    // j = -(1.1)(-20) / (1/10 + 1/10) = 110; impulse = n * j * 0.8 with n = -X
    assert_eq!(stats.impulses_applied, 1);
    assert_relative_eq!(bodies[0].velocity.x, 10.0 - 88.0, epsilon = 1e-4);
    assert_relative_eq!(bodies[1].velocity.x, -10.0 + 88.0, epsilon = 1e-4);
}

#[test]
fn detection_is_symmetric() {
    let (a, b) = approaching_pair();
    let far = Body::new(Vec2::new(200.0, 100.0), 10.0);

    assert!(NarrowPhase::overlaps(&a, &b));
    assert_eq!(NarrowPhase::overlaps(&a, &b), NarrowPhase::overlaps(&b, &a));
    assert_eq!(NarrowPhase::overlaps(&a, &far), NarrowPhase::overlaps(&far, &a));
    assert!(!NarrowPhase::overlaps(&far, &b));
}

#[test]
fn elastic_equal_radii_conserve_momentum() {
    let mut a = Body::new(Vec2::new(100.0, 100.0), 10.0).with_velocity(Vec2::new(30.0, 5.0));
    let mut b = Body::new(Vec2::new(112.0, 109.0), 10.0).with_velocity(Vec2::new(-10.0, -20.0));
    let before = a.velocity + b.velocity;

    let impulse = ImpulseSolver::new().resolve(&mut a, &mut b, 1.0, 1.0);

    assert!(impulse.is_some());
    let after = a.velocity + b.velocity;
    assert_relative_eq!(after.x, before.x, epsilon = 1e-4);
    assert_relative_eq!(after.y, before.y, epsilon = 1e-4);
}

#[test]
fn coincident_centers_leave_velocities_untouched() {
    let mut a = Body::new(Vec2::new(60.0, 60.0), 10.0).with_velocity(Vec2::new(5.0, 1.0));
    let mut b = Body::new(Vec2::new(60.0, 60.0), 10.0).with_velocity(Vec2::new(-2.0, 3.0));

    assert!(ImpulseSolver::new().resolve(&mut a, &mut b, 0.1, 0.8).is_none());
    assert_eq!(a.velocity, Vec2::new(5.0, 1.0));
    assert_eq!(b.velocity, Vec2::new(-2.0, 3.0));
    assert!(!a.velocity.is_nan() && !b.velocity.is_nan());
}

#[test]
fn separating_pair_is_left_alone() {
    let mut a = Body::new(Vec2::new(100.0, 100.0), 10.0).with_velocity(Vec2::new(-10.0, 0.0));
    let mut b = Body::new(Vec2::new(115.0, 100.0), 10.0).with_velocity(Vec2::new(10.0, 0.0));

    assert!(ImpulseSolver::new().resolve(&mut a, &mut b, 0.1, 0.8).is_none());
    assert_eq!(a.velocity, Vec2::new(-10.0, 0.0));
    assert_eq!(b.velocity, Vec2::new(10.0, 0.0));
}

#[test]
fn zero_damping_absorbs_collision() {
    let (mut a, mut b) = approaching_pair();
    let impulse = ImpulseSolver::new()
        .resolve(&mut a, &mut b, 0.1, 0.0)
        .expect("approaching pair");

    assert_eq!(impulse, Vec2::ZERO);
    assert_eq!(a.velocity, Vec2::new(10.0, 0.0));
}
