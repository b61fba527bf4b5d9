//! Error types for yatra-sim.

use thiserror::Error;

use crate::core::Coord;

/// Core error type.
///
/// Movement always succeeds (wraparound absorbs edge overflow) and
/// journey computation always terminates, so the only fault a caller can
/// observe is an obstacle coordinate outside the surface limits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YatraError {
    /// Coordinate lies outside the surface limits
    #[error("coordinate {0} is outside the surface bounds")]
    OutOfBounds(Coord),
}

pub type Result<T> = std::result::Result<T, YatraError>;
