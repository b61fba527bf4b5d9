//! Journey planner implementation.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::core::{Coord, Heading};
use crate::rover::Rover;
use crate::surface::Surface;

use super::types::{Journey, JourneyConfig, JourneyEnd, Waypoint};

/// Bounded-horizon journey planner.
///
/// Explores outward from the rover's cell in breadth-first order over
/// the 4-connected wrapped grid, skipping obstacle cells. At every cell
/// the neighbor expansion order is the configured turn preference
/// relative to the heading of arrival (straight, right, left, reverse
/// by default), so planner output is fully deterministic. The journey
/// is the path to the deepest cell discovered, preferring the first
/// cell found at each depth.
pub struct JourneyPlanner<'a> {
    surface: &'a Surface,
    config: JourneyConfig,
}

impl<'a> JourneyPlanner<'a> {
    /// Create a new planner over a surface.
    pub fn new(surface: &'a Surface, config: JourneyConfig) -> Self {
        Self { surface, config }
    }

    /// Create with default configuration.
    pub fn with_defaults(surface: &'a Surface) -> Self {
        Self::new(surface, JourneyConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &JourneyConfig {
        &self.config
    }

    /// Compute a journey from the rover's current state.
    ///
    /// Always terminates (the horizon bounds depth, the visited set
    /// bounds total work on the wrapped grid) and always returns at
    /// least the starting waypoint.
    pub fn plan(&self, rover: &Rover) -> Journey {
        let start = Waypoint::new(rover.position, rover.heading);
        trace!(
            "[Journey] plan: start={} heading={} horizon={}",
            rover.position,
            rover.heading,
            self.config.horizon
        );

        // An obstacle reported at the rover's own cell: no movement.
        if self.surface.has_obstacle(rover.position) {
            debug!(
                "[Journey] start cell {} is blocked, no movement attempted",
                rover.position
            );
            return Journey::degenerate(start, JourneyEnd::StartBlocked);
        }

        let mut frontier: VecDeque<(Coord, Heading, usize)> = VecDeque::new();
        let mut visited: HashSet<Coord> = HashSet::new();
        // Parent cell and heading of arrival, for path reconstruction.
        let mut came_from: HashMap<Coord, (Coord, Heading)> = HashMap::new();

        frontier.push_back((rover.position, rover.heading, 0));
        visited.insert(rover.position);

        // First cell discovered at the greatest depth.
        let mut deepest = (rover.position, 0usize);
        let mut cells_expanded = 0usize;

        while let Some((coord, heading, depth)) = frontier.pop_front() {
            if depth == self.config.horizon {
                continue;
            }
            cells_expanded += 1;

            for turn in self.config.turn_order {
                let next_heading = turn.apply(heading);
                let next = coord.step(next_heading);

                if visited.contains(&next) || self.surface.has_obstacle(next) {
                    continue;
                }

                visited.insert(next);
                came_from.insert(next, (coord, next_heading));
                if depth + 1 > deepest.1 {
                    deepest = (next, depth + 1);
                }
                frontier.push_back((next, next_heading, depth + 1));
            }
        }

        let end = if deepest.1 == self.config.horizon {
            JourneyEnd::HorizonReached
        } else {
            JourneyEnd::Exhausted
        };

        self.reconstruct(start, came_from, deepest.0, cells_expanded, end)
    }

    /// Walk the parent map back from the destination cell.
    fn reconstruct(
        &self,
        start: Waypoint,
        came_from: HashMap<Coord, (Coord, Heading)>,
        destination: Coord,
        cells_expanded: usize,
        end: JourneyEnd,
    ) -> Journey {
        let mut waypoints = Vec::new();
        let mut current = destination;

        while let Some(&(parent, heading)) = came_from.get(&current) {
            waypoints.push(Waypoint::new(current, heading));
            current = parent;
        }
        waypoints.push(start);
        waypoints.reverse();

        debug!(
            "[Journey] {} steps to {} ({:?}), {} cells expanded",
            waypoints.len() - 1,
            destination,
            end,
            cells_expanded
        );

        Journey {
            waypoints,
            cells_expanded,
            end,
        }
    }
}

/// Compute a journey with the default configuration.
///
/// Convenience entry point for callers that do not carry a
/// [`JourneyConfig`] of their own.
pub fn compute_journey(rover: &Rover, surface: &Surface) -> Journey {
    JourneyPlanner::with_defaults(surface).plan(rover)
}
