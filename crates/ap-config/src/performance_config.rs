use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LIVE_CONFIDENCE_THRESHOLD,
    DEFAULT_STATIC_CONFIDENCE_THRESHOLD,
};

use serde::Deserialize;

/// Confidence thresholds for the detection demos.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Applied to uploaded still images
    pub static_confidence_threshold: f32,
    /// Applied to live camera frames
    pub live_confidence_threshold: f32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            static_confidence_threshold: DEFAULT_STATIC_CONFIDENCE_THRESHOLD,
            live_confidence_threshold: DEFAULT_LIVE_CONFIDENCE_THRESHOLD,
        }
    }
}

impl PerformanceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("static_confidence_threshold", self.static_confidence_threshold),
            ("live_confidence_threshold", self.live_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::performance(format!(
                    "{name} must be within 0.0-1.0, got {value}"
                )));
            }
        }

        Ok(())
    }
}
