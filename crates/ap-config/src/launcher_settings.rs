use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTO_OPEN_BROWSER, DEFAULT_HEALTH_CHECK_INTERVAL_SECS,
    DEFAULT_INTERPRETER, DEFAULT_LAUNCH_GRACE_MS, DEFAULT_PROBE_TIMEOUT_SECS,
    DEFAULT_SHOW_SERVER_LOGS, DEFAULT_SHUTDOWN_TIMEOUT_SECS, DEFAULT_STARTUP_TIMEOUT_SECS,
    DEFAULT_SUPERVISE_INTERVAL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Overall bound on waiting for servers to answer (seconds)
    pub startup_timeout_secs: u64,
    /// Seconds between readiness probe rounds
    pub health_check_interval_secs: u64,
    /// Per-probe HTTP timeout (seconds)
    pub probe_timeout_secs: u64,
    /// Seconds between liveness checks once everything is up
    pub supervise_interval_secs: u64,
    /// How long a freshly spawned process must survive to count as launched
    pub launch_grace_ms: u64,
    /// Wait after SIGTERM before force-killing (seconds)
    pub graceful_shutdown_timeout_secs: u64,
    pub auto_open_browser: bool,
    /// Pass child stdout/stderr through instead of discarding them
    pub show_server_logs: bool,
    /// Program used to run each server script; empty runs the script directly
    pub interpreter: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            startup_timeout_secs: DEFAULT_STARTUP_TIMEOUT_SECS,
            health_check_interval_secs: DEFAULT_HEALTH_CHECK_INTERVAL_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            supervise_interval_secs: DEFAULT_SUPERVISE_INTERVAL_SECS,
            launch_grace_ms: DEFAULT_LAUNCH_GRACE_MS,
            graceful_shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            auto_open_browser: DEFAULT_AUTO_OPEN_BROWSER,
            show_server_logs: DEFAULT_SHOW_SERVER_LOGS,
            interpreter: String::from(DEFAULT_INTERPRETER),
        }
    }
}

impl LauncherSettings {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.startup_timeout_secs == 0 {
            return Err(ConfigError::launcher("startup_timeout_secs must be > 0"));
        }

        if self.health_check_interval_secs == 0 {
            return Err(ConfigError::launcher(
                "health_check_interval_secs must be > 0",
            ));
        }

        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::launcher("probe_timeout_secs must be > 0"));
        }

        // A probe round must fit inside one poll interval
        if self.probe_timeout_secs > self.health_check_interval_secs {
            return Err(ConfigError::launcher(format!(
                "probe_timeout_secs ({}) must not exceed health_check_interval_secs ({})",
                self.probe_timeout_secs, self.health_check_interval_secs
            )));
        }

        if self.supervise_interval_secs == 0 {
            return Err(ConfigError::launcher("supervise_interval_secs must be > 0"));
        }

        Ok(())
    }
}
