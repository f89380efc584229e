//! Errors reported when UI-edited controls are applied at a frame boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlsError {
    #[error("body count must not be negative, got {0}")]
    NegativeBodyCount(i32),

    #[error("radius must be at least 1, got {0}")]
    RadiusTooSmall(i32),
}

pub type Result<T> = std::result::Result<T, ControlsError>;
