//! autopilot - start every demo server and the landing page
//!
//! ```bash
//! # Launch everything from the project directory
//! autopilot
//!
//! # Verify files and ports without launching
//! autopilot check
//! ```

use autopilot_launcher::server::LaunchError;
use autopilot_launcher::{
    Cli, Command, RunOptions, ShutdownCoordinator, current_log_path, install_signal_handlers, run,
    run_checks, setup_logging,
};

use ap_config::Config;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => match Config::config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match Config::load_from(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = setup_logging(&config.logging, &config_dir) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("Autopilot Pro launcher v{}", env!("CARGO_PKG_VERSION"));
    info!("Project directory: {}", config_dir.display());
    info!(
        "Log file: {}",
        current_log_path(&config.logging, &config_dir).display()
    );

    if let Err(e) = config.validate() {
        let e = LaunchError::from(e);
        error!("{e}");
        error!("{}", e.recovery_hint());
        return ExitCode::FAILURE;
    }

    config.log_summary();

    if let Some(Command::Check { skip_modules }) = cli.command {
        let report = run_checks(&config, &config_dir, !skip_modules);
        print!("{}", report.render());
        return if report.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let shutdown = ShutdownCoordinator::new();
    if let Err(e) = install_signal_handlers(shutdown.clone()) {
        error!("{e}");
        error!("{}", e.recovery_hint());
    }

    let options = RunOptions {
        open_browser: config.launcher.auto_open_browser && !cli.no_browser,
        run_preflight: config.preflight.enabled && !cli.skip_preflight,
    };

    match run(&config, &config_dir, options, &shutdown).await {
        Ok(outcome) => {
            info!("Launcher finished: {outcome:?}");
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            error!("{e}");
            error!("{}", e.recovery_hint());
            ExitCode::FAILURE
        }
    }
}
