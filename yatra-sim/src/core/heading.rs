//! Compass heading for the rover.

use serde::{Deserialize, Serialize};

/// Compass heading, one of the four cardinal directions.
///
/// Headings are cyclically ordered N → E → S → W → N for right turns
/// (left turns run the cycle in reverse). Rotation is modular over the
/// four states and never fails.
///
/// The wire form is the single letter used by session payloads:
/// `"N"`, `"E"`, `"S"`, `"W"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    /// Positive y direction
    #[default]
    #[serde(rename = "N")]
    North,
    /// Positive x direction
    #[serde(rename = "E")]
    East,
    /// Negative y direction
    #[serde(rename = "S")]
    South,
    /// Negative x direction
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// All headings in cyclic order (N, E, S, W)
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate one step clockwise (N → E → S → W → N)
    #[inline]
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotate one step counter-clockwise (N → W → S → E → N)
    #[inline]
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Opposite heading (two right turns)
    #[inline]
    pub fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    /// Unit step offset (dx, dy) for one forward move in this heading
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Single character representation for debugging and rendering
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = char;

    fn try_from(value: char) -> Result<Self, char> {
        match value {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_right_cycle() {
        // Four right turns return to the starting heading
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
        }
    }

    #[test]
    fn test_turn_left_inverts_turn_right() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_left(), h);
            assert_eq!(h.turn_left().turn_right(), h);
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Heading::North.reverse(), Heading::South);
        assert_eq!(Heading::East.reverse(), Heading::West);
        for h in Heading::ALL {
            assert_eq!(h.reverse().reverse(), h);
            assert_eq!(h.turn_right().turn_right(), h.reverse());
        }
    }

    #[test]
    fn test_offsets_are_units() {
        for h in Heading::ALL {
            let (dx, dy) = h.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Heading::North.offset(), (0, 1));
        assert_eq!(Heading::South.offset(), (0, -1));
    }

    #[test]
    fn test_char_round_trip() {
        for h in Heading::ALL {
            assert_eq!(Heading::try_from(h.as_char()), Ok(h));
        }
        assert_eq!(Heading::try_from('X'), Err('X'));
    }

    #[test]
    fn test_wire_form() {
        let yaml = serde_yaml::to_string(&Heading::North).unwrap();
        assert_eq!(yaml.trim(), "N");
        let parsed: Heading = serde_yaml::from_str("W").unwrap();
        assert_eq!(parsed, Heading::West);
    }
}
