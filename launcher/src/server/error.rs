use std::panic::Location;
use std::path::PathBuf;

use ap_config::ConfigError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Server script not found at {path} {location}")]
    ScriptNotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to spawn {name}: {source} {location}")]
    ProcessSpawn {
        name: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("{name} exited immediately with status {code:?} {location}")]
    ProcessCrashed {
        name: String,
        code: Option<i32>,
        location: ErrorLocation,
    },

    #[error("{name} did not answer on port {port} within {timeout_secs}s {location}")]
    ReadinessTimeout {
        name: String,
        port: u16,
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("{name} did not exit within {timeout_secs}s of SIGTERM {location}")]
    ShutdownTimeout {
        name: String,
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Required modules are missing: {modules} {location}")]
    DependenciesMissing {
        modules: String,
        location: ErrorLocation,
    },

    #[error("Dependency installation failed: {message} {location}")]
    DependencyInstall {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to register signal handlers: {source} {location}")]
    SignalRegistration {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to build HTTP client: {source} {location}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Configuration invalid: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl LaunchError {
    #[track_caller]
    pub fn dependencies_missing<S: Into<String>>(modules: S) -> Self {
        Self::DependenciesMissing {
            modules: modules.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dependency_install<S: Into<String>>(message: S) -> Self {
        Self::DependencyInstall {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ScriptNotFound { .. } => {
                "Run the launcher from the project directory, or point \
                   AUTOPILOT_HOME / --config-dir at it."
            }
            Self::ProcessSpawn { .. } => {
                "Check that the configured interpreter is installed and on PATH."
            }
            Self::ProcessCrashed { .. } => {
                "The server exited right away. \
                   Set show_server_logs = true to see its output."
            }
            Self::ReadinessTimeout { .. } => {
                "The server is taking too long to start. \
                   Raise startup_timeout_secs or check the server output."
            }
            Self::ShutdownTimeout { .. } => {
                "The server ignored SIGTERM and was force-killed."
            }
            Self::DependenciesMissing { .. } | Self::DependencyInstall { .. } => {
                "Install the dependencies manually: pip install -r requirements.txt"
            }
            Self::SignalRegistration { .. } => {
                "Signal handlers could not be installed. \
                   Stop the launcher with its process id if Ctrl+C has no effect."
            }
            Self::Config { .. } => {
                "Configuration file has invalid settings. \
                   Check the logs for details or delete autopilot.toml to use defaults."
            }
            _ => "An unexpected error occurred. Please check the logs for details.",
        }
    }
}

impl From<std::io::Error> for LaunchError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LaunchError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::HttpClient {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for LaunchError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
