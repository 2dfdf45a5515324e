use crate::{ConfigError, ConfigErrorResult, DEFAULT_MANIFEST};

use serde::Deserialize;

/// A module the server scripts need importable from the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequiredModule {
    /// Import name (e.g. "cv2")
    pub module: String,
    /// Human readable name (e.g. "OpenCV")
    pub name: String,
}

impl RequiredModule {
    fn new(module: &str, name: &str) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    pub enabled: bool,
    /// Requirements manifest used for the automatic install step
    pub manifest: String,
    pub modules: Vec<RequiredModule>,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            manifest: String::from(DEFAULT_MANIFEST),
            modules: vec![
                RequiredModule::new("gradio", "Gradio (Web Interface)"),
                RequiredModule::new("ultralytics", "Ultralytics YOLO"),
                RequiredModule::new("cv2", "OpenCV"),
                RequiredModule::new("PIL", "Pillow"),
                RequiredModule::new("numpy", "NumPy"),
                RequiredModule::new("requests", "Requests"),
            ],
        }
    }
}

impl PreflightConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Module names end up inside `-c "import <module>"`
        if let Some(bad) = self.modules.iter().find(|m| {
            m.module.is_empty()
                || !m
                    .module
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        }) {
            return Err(ConfigError::preflight(format!(
                "invalid module name '{}'",
                bad.module
            )));
        }

        Ok(())
    }
}
