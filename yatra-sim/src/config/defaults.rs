//! Default value functions for serde deserialization.

use crate::journey::Turn;

pub fn horizon() -> usize {
    32
}

pub fn turn_order() -> [Turn; 4] {
    [Turn::Straight, Turn::Right, Turn::Left, Turn::Reverse]
}
