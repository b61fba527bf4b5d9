//! ASCII rendering of a surface window for debugging and demos.

use std::collections::HashSet;

use crate::core::Coord;
use crate::journey::Journey;
use crate::rover::Rover;
use crate::surface::Surface;

/// Render a window of the surface centered on the rover.
///
/// One row per y value, top row is the highest y; columns run west to
/// east. Cells wrap at the surface edges like movement does.
///
/// Glyphs: `R` rover, `#` obstacle, `*` journey cell, `.` free.
pub fn ascii_window(
    surface: &Surface,
    rover: &Rover,
    journey: Option<&Journey>,
    half_width: i32,
    half_height: i32,
) -> String {
    let journey_cells: HashSet<Coord> = journey
        .map(|j| j.waypoints.iter().map(|w| w.position).collect())
        .unwrap_or_default();

    let mut out = String::new();
    for dy in (-half_height..=half_height).rev() {
        for dx in -half_width..=half_width {
            let cell = Coord::wrapped(rover.position.x + dx, rover.position.y + dy);
            let glyph = if cell == rover.position {
                'R'
            } else if surface.has_obstacle(cell) {
                '#'
            } else if journey_cells.contains(&cell) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
