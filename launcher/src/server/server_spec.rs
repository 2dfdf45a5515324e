use ap_config::ServerEntry;

use std::path::{Path, PathBuf};

/// Static description of one demo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    pub key: String,
    pub name: String,
    pub script: PathBuf,
    pub port: u16,
    pub icon: String,
}

impl ServerSpec {
    pub fn new(key: &str, name: &str, script: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            script: script.into(),
            port,
            icon: String::new(),
        }
    }

    /// Resolve a configured server; relative scripts are taken from `config_dir`.
    pub fn from_entry(entry: &ServerEntry, config_dir: &Path) -> Self {
        Self {
            key: entry.key.clone(),
            name: entry.name.clone(),
            script: config_dir.join(&entry.script),
            port: entry.port,
            icon: entry.icon.clone(),
        }
    }

    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Directory the process runs in.
    pub fn working_dir(&self) -> &Path {
        match self.script.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
