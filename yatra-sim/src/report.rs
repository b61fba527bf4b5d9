//! Obstacle reporting into a surface.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Heading};
use crate::error::Result;
use crate::surface::Surface;

/// A discovered obstacle observation.
///
/// The wire shape matches the session payload: `{ x, y, direction }`.
/// The heading records the orientation from which the obstacle was
/// seen; it is observation metadata only and never affects the
/// planner's blocking logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleReport {
    /// Obstacle cell
    #[serde(flatten)]
    pub position: Coord,
    /// Orientation the rover held when the obstacle was observed
    #[serde(rename = "direction")]
    pub heading: Heading,
}

impl ObstacleReport {
    /// Create a new report.
    pub fn new(position: Coord, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// Record a reported obstacle into the surface.
///
/// Bounds validation is delegated to [`Surface::add_obstacle`];
/// [`crate::YatraError::OutOfBounds`] is surfaced to the caller as a
/// rejected report. Duplicate reports of the same coordinate are
/// silently idempotent.
pub fn report(surface: &mut Surface, observation: &ObstacleReport) -> Result<()> {
    let added = surface.add_obstacle(observation.position)?;
    if added {
        debug!(
            "[Report] obstacle at {} observed facing {} ({} known)",
            observation.position,
            observation.heading,
            surface.obstacle_count()
        );
    } else {
        debug!(
            "[Report] duplicate obstacle report at {}",
            observation.position
        );
    }
    Ok(())
}
