use std::time::Instant;

use log::{debug, warn};

use crate::{
    collision::{all_pairs, pair_mut, NarrowPhase},
    config::{DEFAULT_BODY_COUNT, DEFAULT_RADIUS, FRAME_BUDGET_MS},
    controls::Controls,
    core::{Body, Bounds, Color, SimulationParams},
    dynamics::{ImpulseSolver, Integrator},
    error::{ControlsError, Result},
    utils::{
        logging::{warn_if_frame_budget_exceeded, TraceSpan},
        profiling::{ScopedTimer, StepStats},
        spawn::{BodySpawner, SpawnArea},
    },
};

/// Advances `bodies` by one frame inside `bounds`.
///
/// Every body is integrated and clamped to the walls first, then every
/// unordered pair is tested once and overlapping pairs receive an impulse.
pub fn step(
    bodies: &mut [Body],
    dt: f32,
    params: &SimulationParams,
    bounds: Bounds,
) -> StepStats {
    PhysicsStep::new(bounds).run(bodies, dt, params)
}

/// The per-frame transform: integration, wall bounces, collision response.
/// Holds no simulation state of its own.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsStep {
    pub integrator: Integrator,
    pub solver: ImpulseSolver,
}

impl PhysicsStep {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            integrator: Integrator::new(bounds),
            solver: ImpulseSolver::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.integrator.bounds
    }

    pub fn run(&self, bodies: &mut [Body], dt: f32, params: &SimulationParams) -> StepStats {
        let frame_start = Instant::now();
        let mut stats = StepStats {
            body_count: bodies.len(),
            ..StepStats::default()
        };

        {
            let _span = TraceSpan::new("step::integrate");
            let _timer = ScopedTimer::new(&mut stats.integrate_time);
            self.integrator
                .step(bodies, dt, params.gravity, params.velocity_damping);
        }

        {
            let _span = TraceSpan::new("step::collisions");
            let _timer = ScopedTimer::new(&mut stats.collision_time);

            for body in bodies.iter_mut() {
                body.color = Color::BLUE;
            }

            for (i, j) in all_pairs(bodies.len()) {
                let Some((a, b)) = pair_mut(bodies, i, j) else {
                    continue;
                };
                stats.pairs_tested += 1;
                if !NarrowPhase::overlaps(a, b) {
                    continue;
                }
                stats.overlaps += 1;
                if params.highlight_collisions {
                    a.color = Color::RED;
                    b.color = Color::RED;
                }
                if self
                    .solver
                    .resolve(a, b, params.restitution, params.velocity_damping)
                    .is_some()
                {
                    stats.impulses_applied += 1;
                }
            }
        }

        stats.total_frame_time = frame_start.elapsed();
        stats
    }
}

/// Owner of the body collection, driven once per frame by the window loop.
///
/// Resizing happens only through `&mut self` between calls to
/// [`Sandbox::step`], so a step always sees a consistent collection.
#[derive(Debug, Clone)]
pub struct Sandbox {
    bodies: Vec<Body>,
    physics: PhysicsStep,
    spawner: BodySpawner,
    spawn_radius: i32,
    last_stats: StepStats,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_COUNT, DEFAULT_RADIUS, Bounds::default())
    }
}

impl Sandbox {
    pub fn new(count: usize, radius: i32, bounds: Bounds) -> Self {
        Self::with_spawner(BodySpawner::new(), count, radius, bounds)
    }

    /// Same as [`Sandbox::new`] with reproducible body placement.
    pub fn with_seed(seed: u64, count: usize, radius: i32, bounds: Bounds) -> Self {
        Self::with_spawner(BodySpawner::with_seed(seed), count, radius, bounds)
    }

    fn with_spawner(mut spawner: BodySpawner, count: usize, radius: i32, bounds: Bounds) -> Self {
        let radius = radius.max(1);
        let bodies = spawner.spawn_many(count, SpawnArea::INITIAL, radius as f32);
        debug!("sandbox created with {count} bodies of radius {radius}");
        Self {
            bodies,
            physics: PhysicsStep::new(bounds),
            spawner,
            spawn_radius: radius,
            last_stats: StepStats::default(),
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.physics.bounds()
    }

    /// Radius given to bodies created by the next resize.
    pub fn spawn_radius(&self) -> i32 {
        self.spawn_radius
    }

    pub fn last_stats(&self) -> &StepStats {
        &self.last_stats
    }

    /// Grows by appending freshly spawned bodies, or truncates from the end.
    /// Bodies below `count` keep their state.
    pub fn resize(&mut self, count: usize, radius: f32) {
        let previous = self.bodies.len();
        if count > previous {
            let added = self
                .spawner
                .spawn_many(count - previous, SpawnArea::GROWTH, radius);
            self.bodies.extend(added);
        } else {
            self.bodies.truncate(count);
        }
        debug!("resized sandbox from {previous} to {count} bodies");
    }

    /// Applies UI edits. Must be called between steps.
    ///
    /// A negative count or a radius below 1 is reverted in `controls` and
    /// reported; the other controls are still applied.
    pub fn apply_controls(&mut self, controls: &mut Controls) -> Result<()> {
        let mut outcome = Ok(());

        if controls.radius < 1 {
            warn!(
                "rejected radius {}, keeping {}",
                controls.radius, self.spawn_radius
            );
            outcome = Err(ControlsError::RadiusTooSmall(controls.radius));
            controls.radius = self.spawn_radius;
        } else {
            self.spawn_radius = controls.radius;
        }

        if controls.body_count != self.bodies.len() as i32 {
            match usize::try_from(controls.body_count) {
                Ok(count) => self.resize(count, self.spawn_radius as f32),
                Err(_) => {
                    warn!(
                        "rejected body count {}, keeping {}",
                        controls.body_count,
                        self.bodies.len()
                    );
                    if outcome.is_ok() {
                        outcome = Err(ControlsError::NegativeBodyCount(controls.body_count));
                    }
                    controls.body_count = self.bodies.len() as i32;
                }
            }
        }

        outcome
    }

    /// Advances every body by `dt` seconds.
    pub fn step(&mut self, dt: f32, params: &SimulationParams) -> StepStats {
        let _span = TraceSpan::new("sandbox::step");
        let stats = self.physics.run(&mut self.bodies, dt, params);
        warn_if_frame_budget_exceeded(stats.total_frame_time, FRAME_BUDGET_MS);
        stats.report();
        self.last_stats = stats;
        stats
    }
}
