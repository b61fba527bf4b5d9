//! The surface: fixed grid bounds plus the set of known obstacles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::error::{Result, YatraError};

/// A bounded, toroidal surface with a registry of known obstacles.
///
/// Bounds are fixed at the grid limits (`Coord::X_MIN..=Coord::X_MAX`,
/// `Coord::Y_MIN..=Coord::Y_MAX`). A surface starts with an empty
/// obstacle set; obstacles are only ever added, one at a time, and a
/// cell stays impassable for the life of the surface.
///
/// The seed coordinate passed at creation is retained as `origin` for
/// traceability (the rover's starting point when the session began);
/// it has no effect on bounds or obstacle state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Surface {
    /// Rover position the surface was seeded with
    origin: Coord,
    /// Known impassable cells (unique, unordered)
    obstacles: HashSet<Coord>,
}

impl Surface {
    /// Create a surface seeded from a rover's starting coordinate.
    pub fn new(seed: Coord) -> Self {
        Self {
            origin: seed,
            obstacles: HashSet::new(),
        }
    }

    /// Seed coordinate the surface was created with
    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// O(1) obstacle membership test
    #[inline]
    pub fn has_obstacle(&self, coord: Coord) -> bool {
        self.obstacles.contains(&coord)
    }

    /// Record an obstacle cell.
    ///
    /// Fails with [`YatraError::OutOfBounds`] when the coordinate lies
    /// outside the grid limits; the obstacle set is left untouched on
    /// failure. Duplicate inserts are idempotent.
    ///
    /// Returns whether the obstacle set grew (false for a duplicate).
    pub fn add_obstacle(&mut self, coord: Coord) -> Result<bool> {
        if !coord.in_bounds() {
            return Err(YatraError::OutOfBounds(coord));
        }
        Ok(self.obstacles.insert(coord))
    }

    /// Number of known obstacles
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Iterate over the known obstacle cells (unordered)
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.obstacles.iter().copied()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Coord::default())
    }
}
