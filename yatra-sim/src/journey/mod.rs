//! Journey planning over the surface.
//!
//! A journey is a forward-progress traversal from the rover's current
//! state that never steps onto a known obstacle cell. Planning is a
//! breadth-first exploration of the 4-connected wrapped grid, bounded
//! by a configurable step horizon.
//!
//! ```rust
//! use yatra_sim::{compute_journey, Rover, Surface, Coord};
//!
//! let mut surface = Surface::new(Coord::new(0, 0));
//! surface.add_obstacle(Coord::new(0, 1)).unwrap();
//!
//! let journey = compute_journey(&Rover::new(), &surface);
//! assert!(!journey.visits(Coord::new(0, 1)));
//! ```

mod planner;
mod types;

pub use planner::{compute_journey, JourneyPlanner};
pub use types::{Journey, JourneyConfig, JourneyEnd, Turn, Waypoint};
