//! Logging setup with file rotation.

use ap_config::LoggingConfig;

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Setup logging with console and rotating file output.
///
/// `RUST_LOG` wins over the configured level. Library crates log through
/// the `log` facade, which is bridged into the same subscriber.
pub fn setup_logging(
    config: &LoggingConfig,
    config_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let logs_dir = logs_dir(config, config_dir);
    std::fs::create_dir_all(&logs_dir)?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(config.colored);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(&config.file_prefix)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&logs_dir)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

pub fn logs_dir(config: &LoggingConfig, config_dir: &Path) -> PathBuf {
    config_dir.join(&config.dir)
}

/// Path of today's log file.
pub fn current_log_path(config: &LoggingConfig, config_dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    logs_dir(config, config_dir).join(format!(
        "{}.{}.{}",
        config.file_prefix, today, LOG_FILE_SUFFIX
    ))
}
