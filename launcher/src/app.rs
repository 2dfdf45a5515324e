//! The default command: preflight, launch, wait, supervise, shut down.

use crate::ShutdownCoordinator;
use crate::browser::open_in_browser;
use crate::preflight::Preflight;
use crate::server::{LaunchOptions, LaunchResult, ServerLauncher, ServerSpec};

use ap_config::Config;

use std::path::Path;

use tracing::{error, info, warn};

const BANNER_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub open_browser: bool,
    pub run_preflight: bool,
}

/// How a launcher run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Servers came up and were stopped on request
    Stopped { ready: usize },
    /// Shutdown was requested before the servers finished starting
    Interrupted,
    NoServersReady,
    PreflightFailed,
}

impl RunOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Stopped { .. } | Self::Interrupted => 0,
            Self::NoServersReady | Self::PreflightFailed => 1,
        }
    }
}

/// Run the launcher until `shutdown` is triggered.
///
/// Whatever path is taken, every started process is shut down exactly once
/// before this returns.
pub async fn run(
    config: &Config,
    config_dir: &Path,
    options: RunOptions,
    shutdown: &ShutdownCoordinator,
) -> LaunchResult<RunOutcome> {
    if options.run_preflight {
        let preflight =
            Preflight::new(&config.launcher.interpreter, &config.preflight, config_dir);
        if let Err(e) = preflight.run() {
            error!("{e}");
            error!("{}", e.recovery_hint());
            return Ok(RunOutcome::PreflightFailed);
        }
    }

    let specs: Vec<ServerSpec> = config
        .enabled_servers()
        .map(|entry| ServerSpec::from_entry(entry, config_dir))
        .collect();

    let launch_options = LaunchOptions::from_settings(&config.launcher);
    let mut launcher = ServerLauncher::new(specs, launch_options)?;

    launcher.launch_all(shutdown).await;

    if shutdown.is_shutdown() {
        launcher.shutdown_all().await;
        return Ok(RunOutcome::Interrupted);
    }

    let readiness = launcher.await_ready(shutdown).await;
    if readiness.cancelled {
        info!("Interrupted while waiting for servers");
        launcher.shutdown_all().await;
        return Ok(RunOutcome::Interrupted);
    }

    let ready = launcher.ready_count();
    if ready == 0 {
        error!("No servers started successfully");
        launcher.shutdown_all().await;
        return Ok(RunOutcome::NoServersReady);
    }

    for state in launcher.states().iter().filter(|s| s.status.is_failed()) {
        warn!("{} {}: {}", state.spec.icon, state.spec.name, state.status);
    }

    let ui_path = config.ui_path(config_dir);
    println!("{}", server_info(&launcher, &ui_path));

    if options.open_browser {
        open_in_browser(&ui_path);
    }

    launcher.supervise(shutdown).await;
    launcher.shutdown_all().await;

    Ok(RunOutcome::Stopped { ready })
}

/// Banner listing the URL of every ready server.
pub fn server_info(launcher: &ServerLauncher, ui_path: &Path) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let total = launcher.states().len();

    let mut out = format!(
        "{rule}\nAutopilot Pro is running ({}/{} servers ready)\n{rule}\n",
        launcher.ready_count(),
        total
    );

    for spec in launcher.ready_servers() {
        out.push_str(&format!("  {} {:<24} {}\n", spec.icon, spec.name, spec.url()));
    }

    out.push_str(&format!("\n  Landing page: {}\n", ui_path.display()));
    out.push_str(&format!("{rule}\nPress Ctrl+C to stop all servers"));

    out
}
