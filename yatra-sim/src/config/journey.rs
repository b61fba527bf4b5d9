//! Journey planner configuration section.

use serde::{Deserialize, Serialize};

use crate::journey::{JourneyConfig, Turn};

use super::defaults;

/// Journey settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneySection {
    /// Maximum steps to explore before terminating
    #[serde(default = "defaults::horizon")]
    pub horizon: usize,

    /// Neighbor expansion priority relative to the heading of arrival
    #[serde(default = "defaults::turn_order")]
    pub turn_order: [Turn; 4],
}

impl Default for JourneySection {
    fn default() -> Self {
        Self {
            horizon: defaults::horizon(),
            turn_order: defaults::turn_order(),
        }
    }
}

impl JourneySection {
    /// Convert to the planner's config type
    pub fn to_journey_config(&self) -> JourneyConfig {
        JourneyConfig {
            horizon: self.horizon,
            turn_order: self.turn_order,
        }
    }
}
