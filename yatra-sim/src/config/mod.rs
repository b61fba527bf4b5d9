//! Unified configuration loading.
//!
//! Loads all configuration from a single YAML file; every field has a
//! serde default so partial files work.

mod defaults;
mod error;
mod journey;
mod yatra;

pub use error::ConfigLoadError;
pub use journey::JourneySection;
pub use yatra::YatraConfig;
