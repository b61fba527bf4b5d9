//! Test utilities shared by the integration suites.

#![allow(dead_code)]

use yatra_sim::{Coord, Heading, ObstacleReport, Surface};

/// Build a surface with obstacles at the given cells.
pub fn surface_with_obstacles(cells: &[(i32, i32)]) -> Surface {
    let mut surface = Surface::new(Coord::new(0, 0));
    for &(x, y) in cells {
        yatra_sim::report(
            &mut surface,
            &ObstacleReport::new(Coord::new(x, y), Heading::North),
        )
        .expect("test obstacle in bounds");
    }
    surface
}

/// Journey positions as plain (x, y) pairs for compact assertions.
pub fn positions(journey: &yatra_sim::Journey) -> Vec<(i32, i32)> {
    journey
        .waypoints
        .iter()
        .map(|w| (w.position.x, w.position.y))
        .collect()
}
