//! Core types describing the simulated bodies and the parameters they obey.

pub mod body;
pub mod types;

pub use body::Body;
pub use types::{Bounds, Color, SimulationParams};
