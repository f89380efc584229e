//! Default values for the sandbox and its tunable parameters.

/// Default canvas width in pixels.
pub const DEFAULT_SCREEN_WIDTH: f32 = 500.0;

/// Default canvas height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;

/// Frame rate cap of the driving loop.
pub const TARGET_FPS: u32 = 120;

/// Time budget of a single frame at [`TARGET_FPS`] (in milliseconds).
pub const FRAME_BUDGET_MS: f32 = 1000.0 / TARGET_FPS as f32;

/// Number of bodies created at startup.
pub const DEFAULT_BODY_COUNT: usize = 2;

/// Radius (pixels) assigned to newly created bodies.
pub const DEFAULT_RADIUS: i32 = 10;

/// Downward acceleration in px/s².
pub const DEFAULT_GRAVITY: f32 = 0.0;
pub const GRAVITY_RANGE: (f32, f32) = (0.0, 100.0);

/// Wall-bounce retention factor, also scales collision impulses.
pub const DEFAULT_VELOCITY_DAMPING: f32 = 0.8;
pub const VELOCITY_DAMPING_RANGE: (f32, f32) = (0.0, 1.0);

/// Collision elasticity coefficient.
pub const DEFAULT_RESTITUTION: f32 = 0.1;
pub const RESTITUTION_RANGE: (f32, f32) = (0.0, 0.1);

/// Speed (px/s) below which a bounced velocity component is zeroed.
pub const DEFAULT_REST_SPEED: f32 = 1.0;

/// Spawn area of the bodies created at startup.
pub const INITIAL_SPAWN_X: (f32, f32) = (100.0, 700.0);
pub const INITIAL_SPAWN_Y: (f32, f32) = (100.0, 500.0);

/// Spawn area of bodies appended after startup.
pub const GROWTH_SPAWN_X: (f32, f32) = (100.0, 400.0);
pub const GROWTH_SPAWN_Y: (f32, f32) = (100.0, 500.0);
