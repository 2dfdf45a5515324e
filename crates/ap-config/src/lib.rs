mod config;
mod error;
mod launcher_settings;
mod log_level;
mod logging_config;
mod performance_config;
mod preflight_config;
mod server_entry;
mod ui_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use launcher_settings::LauncherSettings;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use performance_config::PerformanceConfig;
pub use preflight_config::{PreflightConfig, RequiredModule};
pub use server_entry::{ServerEntry, default_servers};
pub use ui_config::UiConfig;

pub const CONFIG_FILENAME: &str = "autopilot.toml";
pub const CONFIG_DIR_ENV: &str = "AUTOPILOT_HOME";

const MIN_PORT: u16 = 1024;

const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 120;
const DEFAULT_HEALTH_CHECK_INTERVAL_SECS: u64 = 2;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 2;
const DEFAULT_SUPERVISE_INTERVAL_SECS: u64 = 5;
const DEFAULT_LAUNCH_GRACE_MS: u64 = 500;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;
const DEFAULT_AUTO_OPEN_BROWSER: bool = true;
const DEFAULT_SHOW_SERVER_LOGS: bool = false;
const DEFAULT_INTERPRETER: &str = "python3";

const DEFAULT_UI_PATH: &str = "UI/home.html";

const DEFAULT_STATIC_CONFIDENCE_THRESHOLD: f32 = 0.4;
const DEFAULT_LIVE_CONFIDENCE_THRESHOLD: f32 = 0.7;

const DEFAULT_MANIFEST: &str = "requirements.txt";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "autopilot";
const DEFAULT_LOG_COLORED: bool = true;
