//! Collision detection: exhaustive pair enumeration and the disk overlap test.

pub mod broadphase;
pub mod narrowphase;

pub use broadphase::{all_pairs, pair_mut, PairIter};
pub use narrowphase::NarrowPhase;
