use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LauncherSettings,
    LoggingConfig, PerformanceConfig, PreflightConfig, ServerEntry, UiConfig, default_servers,
};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub launcher: LauncherSettings,
    pub servers: Vec<ServerEntry>,
    pub ui: UiConfig,
    pub performance: PerformanceConfig,
    pub preflight: PreflightConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            launcher: LauncherSettings::default(),
            servers: default_servers(),
            ui: UiConfig::default(),
            performance: PerformanceConfig::default(),
            preflight: PreflightConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. AUTOPILOT_HOME env var, else the current working directory
    /// 2. autopilot.toml in that directory if it exists, else defaults
    /// 3. AUTOPILOT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config from an explicit directory (still applies env overrides).
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AUTOPILOT_HOME env var > current working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.launcher.validate()?;
        self.performance.validate()?;
        self.preflight.validate()?;

        let mut keys = HashSet::new();
        let mut ports = HashSet::new();

        for server in &self.servers {
            server.validate()?;

            if !keys.insert(server.key.as_str()) {
                return Err(ConfigError::server(format!(
                    "duplicate server key '{}'",
                    server.key
                )));
            }

            if server.enabled && !ports.insert(server.port) {
                return Err(ConfigError::server(format!(
                    "port {} is assigned to more than one enabled server",
                    server.port
                )));
            }
        }

        Ok(())
    }

    /// Enabled servers, in table order.
    pub fn enabled_servers(&self) -> impl Iterator<Item = &ServerEntry> {
        self.servers.iter().filter(|s| s.enabled)
    }

    /// Absolute path of the UI landing page.
    pub fn ui_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.ui.path)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  launcher: startup_timeout={}s, poll={}s, probe_timeout={}s, supervise={}s",
            self.launcher.startup_timeout_secs,
            self.launcher.health_check_interval_secs,
            self.launcher.probe_timeout_secs,
            self.launcher.supervise_interval_secs
        );
        info!(
            "  shutdown: grace={}s, launch grace={}ms",
            self.launcher.graceful_shutdown_timeout_secs, self.launcher.launch_grace_ms
        );
        info!(
            "  interpreter: {}",
            if self.launcher.interpreter.is_empty() {
                "(none, scripts run directly)"
            } else {
                self.launcher.interpreter.as_str()
            }
        );

        let enabled = self.enabled_servers().count();
        info!("  servers: {}/{} enabled", enabled, self.servers.len());
        for server in self.enabled_servers() {
            info!("    {} {} -> :{}", server.icon, server.name, server.port);
        }

        info!(
            "  thresholds: static={}, live={}",
            self.performance.static_confidence_threshold,
            self.performance.live_confidence_threshold
        );
        info!(
            "  preflight: {} ({} modules, manifest {})",
            if self.preflight.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.preflight.modules.len(),
            self.preflight.manifest
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Launcher
        Self::apply_env_parse(
            "AUTOPILOT_STARTUP_TIMEOUT_SECS",
            &mut self.launcher.startup_timeout_secs,
        );
        Self::apply_env_bool(
            "AUTOPILOT_AUTO_OPEN_BROWSER",
            &mut self.launcher.auto_open_browser,
        );
        Self::apply_env_bool(
            "AUTOPILOT_SHOW_SERVER_LOGS",
            &mut self.launcher.show_server_logs,
        );
        Self::apply_env_string("AUTOPILOT_INTERPRETER", &mut self.launcher.interpreter);

        // Logging
        Self::apply_env_parse("AUTOPILOT_LOG_LEVEL", &mut self.logging.level);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
