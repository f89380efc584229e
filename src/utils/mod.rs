//! Utility helpers: tracing spans, step profiling, and random body placement.

pub mod logging;
pub mod profiling;
pub mod spawn;

pub use profiling::{ScopedTimer, StepStats};
pub use spawn::{BodySpawner, SpawnArea};
