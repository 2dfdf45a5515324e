//! Launcher for the Autopilot Pro detection demos.
//!
//! Starts one process per configured demo server, polls each until it
//! answers HTTP, opens the landing page, and tears everything down on
//! SIGINT/SIGTERM.

mod app;
mod browser;
mod cli;
mod logging;
mod preflight;
mod shutdown_coordinator;
mod signals;
mod verify;

pub mod server;

#[cfg(test)]
mod tests;

pub use app::{RunOptions, RunOutcome, run, server_info};
pub use browser::open_in_browser;
pub use cli::{Cli, Command};
pub use logging::{current_log_path, setup_logging};
pub use preflight::Preflight;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use signals::install_signal_handlers;
pub use verify::{CheckItem, CheckReport, run_checks};
