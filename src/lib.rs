//! SandSim – a real-time 2D sandbox of bouncing, colliding disks.
//!
//! Bodies fall under adjustable gravity, bounce off the four walls of the
//! canvas, and exchange momentum through pairwise impulses. The window and UI
//! live outside this crate: they own a [`Sandbox`], feed it the edited
//! [`Controls`] between frames, call [`Sandbox::step`] once per frame, and draw
//! the resulting [`Body`] positions and colors.

pub mod collision;
pub mod config;
pub mod controls;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{all_pairs, pair_mut, NarrowPhase, PairIter};
pub use controls::Controls;
pub use crate::core::{Body, Bounds, Color, SimulationParams};
pub use dynamics::{ImpulseSolver, Integrator};
pub use error::ControlsError;
pub use utils::{BodySpawner, SpawnArea, StepStats};
pub use world::{step, PhysicsStep, Sandbox};
