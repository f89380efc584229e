//! Simulation dynamics: integration with wall bounces and pairwise impulse response.

pub mod integrator;
pub mod solver;

pub use integrator::Integrator;
pub use solver::ImpulseSolver;
