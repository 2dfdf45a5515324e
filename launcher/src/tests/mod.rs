mod readiness;
mod verify;


use crate::server::LaunchOptions;

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

/// Durations short enough for tests; scripts run through `sh`
pub(crate) fn fast_options() -> LaunchOptions {
    LaunchOptions {
        startup_timeout: Duration::from_secs(2),
        poll_interval: Duration::from_millis(200),
        probe_timeout: Duration::from_millis(200),
        supervise_interval: Duration::from_millis(100),
        launch_grace: Duration::from_millis(100),
        shutdown_grace: Duration::from_millis(500),
        interpreter: Some("sh".into()),
        show_server_logs: false,
    }
}

/// Write a shell script into `dir` and return its path
pub(crate) fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// A port nothing is listening on (released before return)
pub(crate) fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
