//! Rover state and command application.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Heading};

/// A movement command for the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// One unit step in the current heading (wraps at the surface edges)
    MoveForward,
    /// Rotate one step counter-clockwise
    TurnLeft,
    /// Rotate one step clockwise
    TurnRight,
}

/// Rover state: a position and a heading on the surface.
///
/// Value-semantic: [`Rover::apply`] consumes the rover and returns the
/// next state, so concurrent readers never observe a half-updated rover.
/// The rover does not validate moves against obstacles — collision
/// avoidance is the journey planner's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rover {
    /// Current position
    pub position: Coord,
    /// Current heading
    pub heading: Heading,
}

impl Rover {
    /// Create a rover at the default start: (0, 0) facing North.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rover at an explicit position and heading.
    pub fn at(position: Coord, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Apply one command, returning the next rover state.
    #[must_use]
    pub fn apply(self, command: Command) -> Rover {
        match command {
            Command::MoveForward => Rover {
                position: self.position.step(self.heading),
                heading: self.heading,
            },
            Command::TurnLeft => Rover {
                position: self.position,
                heading: self.heading.turn_left(),
            },
            Command::TurnRight => Rover {
                position: self.position,
                heading: self.heading.turn_right(),
            },
        }
    }
}
