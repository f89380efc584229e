use crate::core::Body;

/// Exact overlap test between two disks.
pub struct NarrowPhase;

impl NarrowPhase {
    /// True when the centers are no further apart than the sum of the radii.
    /// Touching disks count as overlapping.
    pub fn overlaps(a: &Body, b: &Body) -> bool {
        a.position.distance(b.position) <= a.radius + b.radius
    }
}
