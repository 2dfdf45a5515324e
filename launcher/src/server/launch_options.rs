use ap_config::LauncherSettings;

use std::time::Duration;

/// Timing and process settings for a [`crate::server::ServerLauncher`].
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub startup_timeout: Duration,
    pub poll_interval: Duration,
    pub probe_timeout: Duration,
    pub supervise_interval: Duration,
    pub launch_grace: Duration,
    pub shutdown_grace: Duration,
    /// Program that runs each script; None runs the script directly
    pub interpreter: Option<String>,
    pub show_server_logs: bool,
}

impl LaunchOptions {
    pub fn from_settings(settings: &LauncherSettings) -> Self {
        let interpreter = settings.interpreter.trim();

        Self {
            startup_timeout: Duration::from_secs(settings.startup_timeout_secs),
            poll_interval: Duration::from_secs(settings.health_check_interval_secs),
            probe_timeout: Duration::from_secs(settings.probe_timeout_secs),
            supervise_interval: Duration::from_secs(settings.supervise_interval_secs),
            launch_grace: Duration::from_millis(settings.launch_grace_ms),
            shutdown_grace: Duration::from_secs(settings.graceful_shutdown_timeout_secs),
            interpreter: (!interpreter.is_empty()).then(|| interpreter.to_string()),
            show_server_logs: settings.show_server_logs,
        }
    }
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self::from_settings(&LauncherSettings::default())
    }
}
