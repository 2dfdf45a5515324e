//! Process launcher with readiness monitoring and graceful shutdown.

use crate::ShutdownCoordinator;
use crate::server::{
    HttpProbe, LaunchError, LaunchOptions, LaunchResult, ReadinessReport, ServerSpec, ServerState,
    ServerStatus, readiness,
};

use std::panic::Location;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use tracing::{error, info, warn};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Counts from [`ServerLauncher::launch_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    pub total: usize,
    /// Servers whose script exists
    pub attempted: usize,
    pub already_running: usize,
    pub failed: usize,
    /// Servers left unstarted because shutdown was requested
    pub skipped: usize,
}

/// Counts from [`ServerLauncher::shutdown_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    pub stopped: usize,
    pub force_killed: usize,
    pub errors: usize,
}

/// Result of one supervision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LivenessReport {
    pub alive: usize,
    pub tracked: usize,
    /// Keys of servers found dead in this pass
    pub newly_exited: Vec<String>,
}

/// Starts the configured servers and owns their child processes.
///
/// All state lives in this struct and is driven from one task; the only
/// thing shared with other threads is the [`ShutdownCoordinator`].
pub struct ServerLauncher {
    specs: Vec<ServerSpec>,
    states: Vec<ServerState>,
    options: LaunchOptions,
    probe: HttpProbe,
    shut_down: bool,
}

impl ServerLauncher {
    pub fn new(specs: Vec<ServerSpec>, options: LaunchOptions) -> LaunchResult<Self> {
        let probe = HttpProbe::new(options.probe_timeout)?;

        Ok(Self {
            specs,
            states: Vec::new(),
            options,
            probe,
            shut_down: false,
        })
    }

    pub fn states(&self) -> &[ServerState] {
        &self.states
    }

    pub fn ready_servers(&self) -> impl Iterator<Item = &ServerSpec> {
        self.states
            .iter()
            .filter(|s| s.status.is_ready())
            .map(|s| &s.spec)
    }

    pub fn ready_count(&self) -> usize {
        self.ready_servers().count()
    }

    /// Start one server.
    ///
    /// Never returns an error: failures are logged and reflected in the
    /// returned state's status.
    pub async fn launch(&self, spec: &ServerSpec) -> ServerState {
        if !spec.script.exists() {
            let err = LaunchError::ScriptNotFound {
                path: spec.script.clone(),
                location: ErrorLocation::from(Location::caller()),
            };
            error!("{}: {err}", spec.name);
            return ServerState::failed(spec.clone(), "script not found");
        }

        if self.probe.is_occupied(spec.port).await {
            info!(
                "{} {} already running on port {}",
                spec.icon, spec.name, spec.port
            );
            let mut state = ServerState::new(spec.clone());
            state.status = ServerStatus::Ready;
            return state;
        }

        let mut child = match self.spawn(spec) {
            Ok(child) => child,
            Err(e) => {
                error!("{e}");
                return ServerState::failed(spec.clone(), "spawn failed");
            }
        };

        info!(
            "Starting {} {} on port {} (PID: {})",
            spec.icon,
            spec.name,
            spec.port,
            child.id()
        );

        tokio::time::sleep(self.options.launch_grace).await;

        if let Ok(Some(status)) = child.try_wait() {
            let err = LaunchError::ProcessCrashed {
                name: spec.name.clone(),
                code: status.code(),
                location: ErrorLocation::from(Location::caller()),
            };
            error!("{err}");
            return ServerState::failed(spec.clone(), "exited immediately");
        }

        ServerState {
            spec: spec.clone(),
            child: Some(child),
            status: ServerStatus::Starting,
        }
    }

    fn spawn(&self, spec: &ServerSpec) -> LaunchResult<std::process::Child> {
        let mut cmd = match &self.options.interpreter {
            Some(interpreter) => {
                let mut cmd = Command::new(interpreter);
                cmd.arg(&spec.script);
                cmd
            }
            None => Command::new(&spec.script),
        };

        cmd.current_dir(spec.working_dir()).stdin(Stdio::null());

        if !self.options.show_server_logs {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        // Own process group: terminal Ctrl+C reaches only the launcher,
        // and shutdown can signal the whole group
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        cmd.spawn().map_err(|e| LaunchError::ProcessSpawn {
            name: spec.name.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Launch every configured server in order. One failure never stops the rest.
    ///
    /// Once `shutdown` is triggered no further process is spawned; the
    /// remaining servers stay `NotStarted`.
    pub async fn launch_all(&mut self, shutdown: &ShutdownCoordinator) -> LaunchSummary {
        let mut summary = LaunchSummary {
            total: self.specs.len(),
            ..LaunchSummary::default()
        };

        info!("Launching {} servers", summary.total);

        let mut states = Vec::with_capacity(self.specs.len());
        for spec in &self.specs {
            if shutdown.is_shutdown() {
                if summary.skipped == 0 {
                    info!("Shutdown requested, not starting remaining servers");
                }
                summary.skipped += 1;
                states.push(ServerState::new(spec.clone()));
                continue;
            }

            if spec.script.exists() {
                summary.attempted += 1;
            }

            let state = self.launch(spec).await;
            match &state.status {
                ServerStatus::Ready => summary.already_running += 1,
                ServerStatus::Failed { .. } => summary.failed += 1,
                _ => {}
            }
            states.push(state);
        }

        self.states.extend(states);

        info!(
            "Launch finished: {} attempted, {} already running, {} failed, {} skipped",
            summary.attempted, summary.already_running, summary.failed, summary.skipped
        );

        summary
    }

    /// Poll every `Starting` server until it answers, the startup timeout
    /// passes, or shutdown is requested.
    ///
    /// Servers that were already running count as ready. A process that
    /// exits while being polled is marked failed at the next round. Servers still
    /// pending at the timeout are marked failed but keep their process so
    /// shutdown still reaches them. On cancellation pending servers keep
    /// their status.
    pub async fn await_ready(&mut self, shutdown: &ShutdownCoordinator) -> ReadinessReport {
        let ports: Vec<u16> = self
            .states
            .iter()
            .filter(|s| s.status == ServerStatus::Starting)
            .map(|s| s.spec.port)
            .collect();

        info!(
            "Waiting up to {}s for {} servers",
            self.options.startup_timeout.as_secs(),
            ports.len()
        );

        let states = &mut self.states;
        let mut report = readiness::await_ready_with(
            &self.probe,
            &ports,
            self.options.startup_timeout,
            self.options.poll_interval,
            shutdown,
            || reap_exited_starting(states),
        )
        .await;

        for state in &mut self.states {
            let port = state.spec.port;

            match state.status {
                ServerStatus::Starting if report.ready.contains(&port) => {
                    info!(
                        "{} {} is ready at {}",
                        state.spec.icon,
                        state.spec.name,
                        state.spec.url()
                    );
                    state.status = ServerStatus::Ready;
                }
                ServerStatus::Starting if !report.cancelled => {
                    let err = LaunchError::ReadinessTimeout {
                        name: state.spec.name.clone(),
                        port,
                        timeout_secs: self.options.startup_timeout.as_secs(),
                        location: ErrorLocation::from(Location::caller()),
                    };
                    warn!("{err}");
                    state.status = ServerStatus::Failed {
                        reason: "readiness timeout".into(),
                    };
                }
                // Already running before launch
                ServerStatus::Ready => {
                    report.ready.insert(port);
                }
                _ => {}
            }
        }

        report
    }

    /// Check every tracked process once.
    ///
    /// Newly exited servers are logged and released. Nothing is restarted.
    pub fn check_liveness(&mut self) -> LivenessReport {
        let mut report = LivenessReport::default();

        for state in &mut self.states {
            if state.child.is_none() {
                continue;
            }
            report.tracked += 1;

            match state.poll_exit() {
                None => report.alive += 1,
                Some(status) => {
                    error!(
                        "{} {} exited unexpectedly ({status})",
                        state.spec.icon, state.spec.name
                    );
                    state.child = None;
                    state.status = ServerStatus::Failed {
                        reason: format!("exited ({status})"),
                    };
                    report.newly_exited.push(state.spec.key.clone());
                }
            }
        }

        if !report.newly_exited.is_empty() {
            warn!("{}/{} servers still running", report.alive, report.tracked);
        }

        report
    }

    /// Re-check processes every supervise interval until shutdown.
    pub async fn supervise(&mut self, shutdown: &ShutdownCoordinator) {
        let interval = self.options.supervise_interval;

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    self.check_liveness();
                }
                _ = shutdown.wait() => break,
            }
        }
    }

    /// Stop every process we started.
    ///
    /// Sends SIGTERM, waits up to the grace period, then force-kills.
    /// Errors are logged, never returned. Calling it again does nothing.
    pub async fn shutdown_all(&mut self) -> ShutdownReport {
        let mut report = ShutdownReport::default();

        if self.shut_down {
            return report;
        }
        self.shut_down = true;

        let running = self.states.iter().filter(|s| s.child.is_some()).count();
        if running > 0 {
            info!("Shutting down {running} servers...");
        }

        let grace = self.options.shutdown_grace;
        for state in &mut self.states {
            if state.status != ServerStatus::NotStarted {
                stop_one(state, grace, &mut report).await;
            }
        }

        if running > 0 {
            info!(
                "All servers stopped ({} graceful, {} killed, {} errors)",
                report.stopped, report.force_killed, report.errors
            );
        }

        report
    }
}

/// Mark `Starting` servers whose process has exited as failed and return their ports.
fn reap_exited_starting(states: &mut [ServerState]) -> Vec<u16> {
    let mut ports = Vec::new();

    for state in states
        .iter_mut()
        .filter(|s| s.status == ServerStatus::Starting)
    {
        if let Some(status) = state.poll_exit() {
            error!(
                "{} {} exited before becoming ready ({status})",
                state.spec.icon, state.spec.name
            );
            state.child = None;
            state.status = ServerStatus::Failed {
                reason: format!("exited ({status})"),
            };
            ports.push(state.spec.port);
        }
    }

    ports
}

async fn stop_one(state: &mut ServerState, grace: Duration, report: &mut ShutdownReport) {
    let Some(mut child) = state.child.take() else {
        state.status = ServerStatus::Stopped;
        return;
    };

    let name = state.spec.name.clone();

    if let Ok(Some(_)) = child.try_wait() {
        state.status = ServerStatus::Stopped;
        report.stopped += 1;
        return;
    }

    if let Err(e) = terminate(&child) {
        warn!("Failed to send SIGTERM to {name}: {e}");
    }

    let start = Instant::now();
    let mut exited = false;
    while start.elapsed() < grace {
        match child.try_wait() {
            Ok(Some(_)) => {
                exited = true;
                break;
            }
            Ok(None) => tokio::time::sleep(EXIT_POLL_INTERVAL).await,
            Err(e) => {
                warn!("Failed to poll {name}: {e}");
                break;
            }
        }
    }

    if exited {
        info!("Stopped {name}");
        report.stopped += 1;
    } else {
        let err = LaunchError::ShutdownTimeout {
            name: name.clone(),
            timeout_secs: grace.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        };
        warn!("{err}");

        force_kill(&mut child);
        match child.wait() {
            Ok(_) => report.force_killed += 1,
            Err(e) => {
                error!("Failed to reap {name}: {e}");
                report.errors += 1;
            }
        }
    }

    state.status = ServerStatus::Stopped;
}

#[cfg(unix)]
fn terminate(child: &std::process::Child) -> nix::Result<()> {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    killpg(Pid::from_raw(child.id() as i32), Signal::SIGTERM)
}

#[cfg(not(unix))]
fn terminate(child: &std::process::Child) -> std::io::Result<()> {
    // No graceful signal here; the force-kill path does the work
    let _ = child;
    Ok(())
}

fn force_kill(child: &mut std::process::Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        killpg(Pid::from_raw(child.id() as i32), Signal::SIGKILL).ok();
    }

    child.kill().ok();
}
