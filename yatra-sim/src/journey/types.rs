//! Journey planner types.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Heading};

/// A turn relative to the heading of arrival at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    /// Keep the current heading
    Straight,
    /// One step clockwise
    Right,
    /// One step counter-clockwise
    Left,
    /// Opposite heading
    Reverse,
}

impl Turn {
    /// Resolve this turn against a concrete heading.
    #[inline]
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Turn::Straight => heading,
            Turn::Right => heading.turn_right(),
            Turn::Left => heading.turn_left(),
            Turn::Reverse => heading.reverse(),
        }
    }
}

/// Journey planner configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyConfig {
    /// Maximum number of steps to explore before terminating.
    ///
    /// The sole termination guarantee on the wrapped (cycle-containing)
    /// grid: the journey never exceeds this many moves.
    pub horizon: usize,

    /// Neighbor expansion priority relative to the heading of arrival.
    ///
    /// The fixed default (straight, right, left, reverse) makes planner
    /// output fully deterministic.
    pub turn_order: [Turn; 4],
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            horizon: 32,
            turn_order: [Turn::Straight, Turn::Right, Turn::Left, Turn::Reverse],
        }
    }
}

impl JourneyConfig {
    /// Create with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the step horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Builder-style setter for the turn preference order.
    pub fn with_turn_order(mut self, turn_order: [Turn; 4]) -> Self {
        self.turn_order = turn_order;
        self
    }
}

/// One journey element: a coordinate plus the heading held on arrival.
///
/// The starting waypoint carries the rover's heading at planning time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Cell position
    pub position: Coord,
    /// Heading on arrival at this cell
    pub heading: Heading,
}

impl Waypoint {
    /// Create a new waypoint.
    #[inline]
    pub fn new(position: Coord, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// Why the planner stopped extending the journey.
///
/// All of these are normal terminal outcomes, never faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyEnd {
    /// The step horizon was reached; the journey has full length
    HorizonReached,
    /// Every reachable cell was explored before the horizon
    Exhausted,
    /// The rover's own cell is an obstacle; no movement was attempted
    StartBlocked,
}

/// A planned traversal: ordered waypoints starting at the rover's
/// current state, plus search diagnostics.
///
/// Read-only once produced; recomputed on demand from the current
/// rover and surface, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journey {
    /// Waypoints in travel order, beginning with the starting cell
    pub waypoints: Vec<Waypoint>,
    /// Number of cells expanded during the search
    pub cells_expanded: usize,
    /// Why planning terminated
    pub end: JourneyEnd,
}

impl Journey {
    /// Create a single-waypoint journey (no movement).
    pub(super) fn degenerate(start: Waypoint, end: JourneyEnd) -> Self {
        Self {
            waypoints: vec![start],
            cells_expanded: 0,
            end,
        }
    }

    /// Number of moves in the journey (waypoints minus the start).
    pub fn steps(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// The starting waypoint.
    pub fn start(&self) -> Waypoint {
        self.waypoints[0]
    }

    /// The final waypoint.
    pub fn destination(&self) -> Waypoint {
        *self.waypoints.last().expect("journey has at least the start")
    }

    /// Does the journey visit this cell?
    pub fn visits(&self, coord: Coord) -> bool {
        self.waypoints.iter().any(|w| w.position == coord)
    }

    /// A journey that makes no movement.
    pub fn is_degenerate(&self) -> bool {
        self.waypoints.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_apply() {
        assert_eq!(Turn::Straight.apply(Heading::North), Heading::North);
        assert_eq!(Turn::Right.apply(Heading::North), Heading::East);
        assert_eq!(Turn::Left.apply(Heading::North), Heading::West);
        assert_eq!(Turn::Reverse.apply(Heading::North), Heading::South);
    }

    #[test]
    fn test_config_default() {
        let config = JourneyConfig::default();
        assert_eq!(config.horizon, 32);
        assert_eq!(
            config.turn_order,
            [Turn::Straight, Turn::Right, Turn::Left, Turn::Reverse]
        );
    }

    #[test]
    fn test_config_builder() {
        let config = JourneyConfig::new()
            .with_horizon(8)
            .with_turn_order([Turn::Straight, Turn::Left, Turn::Right, Turn::Reverse]);
        assert_eq!(config.horizon, 8);
        assert_eq!(config.turn_order[1], Turn::Left);
    }

    #[test]
    fn test_journey_accessors() {
        let start = Waypoint::new(Coord::new(0, 0), Heading::North);
        let journey = Journey {
            waypoints: vec![start, Waypoint::new(Coord::new(0, 1), Heading::North)],
            cells_expanded: 2,
            end: JourneyEnd::HorizonReached,
        };
        assert_eq!(journey.steps(), 1);
        assert_eq!(journey.start(), start);
        assert_eq!(journey.destination().position, Coord::new(0, 1));
        assert!(journey.visits(Coord::new(0, 1)));
        assert!(!journey.visits(Coord::new(5, 5)));
        assert!(!journey.is_degenerate());
    }

    #[test]
    fn test_degenerate_journey() {
        let start = Waypoint::new(Coord::new(2, 2), Heading::East);
        let journey = Journey::degenerate(start, JourneyEnd::StartBlocked);
        assert!(journey.is_degenerate());
        assert_eq!(journey.steps(), 0);
        assert_eq!(journey.destination(), start);
    }
}
