use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{info, warn};

/// Open a local HTML file in the default browser.
///
/// Best effort: failures are logged and the launcher carries on.
pub fn open_in_browser(path: &Path) -> bool {
    if !path.exists() {
        warn!("UI file not found: {}", path.display());
        return false;
    }

    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    match opener(&path).stdout(Stdio::null()).stderr(Stdio::null()).spawn() {
        Ok(_) => {
            info!("Opened {} in browser", path.display());
            true
        }
        Err(e) => {
            warn!("Could not open browser: {e}");
            warn!("Open this file manually: {}", path.display());
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("explorer");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
