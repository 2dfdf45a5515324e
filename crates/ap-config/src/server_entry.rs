use crate::{ConfigError, ConfigErrorResult, MIN_PORT};

use serde::Deserialize;

/// One row of the server table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerEntry {
    /// Stable identifier (e.g. "TrafficSign")
    pub key: String,
    /// Display name
    pub name: String,
    pub port: u16,
    #[serde(default)]
    pub icon: String,
    /// Script path relative to the config directory
    pub script: String,
    /// Model weights relative to the config directory, checked by `autopilot check`
    #[serde(default)]
    pub weights: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ServerEntry {
    fn new(
        key: &str,
        name: &str,
        port: u16,
        icon: &str,
        script: &str,
        weights: Option<&str>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            port,
            icon: icon.into(),
            script: script.into(),
            weights: weights.map(String::from),
            enabled: true,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::server("servers[].key must not be empty"));
        }

        if self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "servers.{}.port must be >= {}, got {}",
                self.key, MIN_PORT, self.port
            )));
        }

        if self.script.trim().is_empty() {
            return Err(ConfigError::server(format!(
                "servers.{}.script must not be empty",
                self.key
            )));
        }

        Ok(())
    }
}

/// The five demo servers shipped with the project, in launch order.
pub fn default_servers() -> Vec<ServerEntry> {
    vec![
        ServerEntry::new(
            "LTV_HTV",
            "LTV/HTV Detection",
            7860,
            "🚙",
            "LTV_HTV_Model/LTV_HTV_Model.py",
            Some("LTV_HTV_Model/LTV_HTV.pt"),
        ),
        ServerEntry::new(
            "Pedestrian",
            "Pedestrian Detection",
            7861,
            "🚶",
            "Pedestrian_Model/Pedestrian_Model.py",
            Some("Pedestrian_Model/last.pt"),
        ),
        ServerEntry::new(
            "TrafficLight",
            "Traffic Light Detection",
            7862,
            "🚦",
            "Traffic_Light_Model/TRAFFIC_LIGHT_MODEL.py",
            Some("Traffic_Light_Model/epoch70.pt"),
        ),
        ServerEntry::new(
            "TrafficSign",
            "Traffic Sign Detection",
            7869,
            "🚸",
            "TRAFFIC_SIGN_MODEL/TRAFFIC_SIGN_MODEL.py",
            Some("TRAFFIC_SIGN_MODEL/trafic.pt"),
        ),
        ServerEntry::new(
            "AutopilotPro",
            "Autopilot Pro (Combined)",
            7868,
            "🤖",
            "AUTOPILOT PRO/Autopilotpro.py",
            None,
        ),
    ]
}
