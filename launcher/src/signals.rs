//! OS signal handling. Each delivered signal only triggers the coordinator.

use crate::ShutdownCoordinator;
use crate::server::LaunchResult;

#[cfg(unix)]
pub fn install_signal_handlers(coordinator: ShutdownCoordinator) -> LaunchResult<()> {
    use crate::server::LaunchError;

    use std::panic::Location;

    use error_location::ErrorLocation;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use tracing::info;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).map_err(|e| LaunchError::SignalRegistration {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

    std::thread::Builder::new()
        .name("signal-listener".into())
        .spawn(move || {
            for sig in signals.forever() {
                if coordinator.shutdown() {
                    info!("Received signal {sig}, shutting down...");
                } else {
                    info!("Received signal {sig}, shutdown already in progress");
                }
            }
        })?;

    Ok(())
}

/// Must be called from inside a tokio runtime.
#[cfg(not(unix))]
pub fn install_signal_handlers(coordinator: ShutdownCoordinator) -> LaunchResult<()> {
    use tracing::info;

    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if coordinator.shutdown() {
                info!("Received Ctrl+C, shutting down...");
            }
        }
    });

    Ok(())
}
