//! Main YatraConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::journey::JourneyConfig;

use super::error::ConfigLoadError;
use super::journey::JourneySection;

/// Full yatra-sim configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct YatraConfig {
    /// Journey planner settings
    #[serde(default)]
    pub journey: JourneySection,
}

impl YatraConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the journey planner config
    pub fn journey_config(&self) -> JourneyConfig {
        self.journey.to_journey_config()
    }
}
