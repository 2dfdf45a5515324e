use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

/// Shared cancellation flag for the launcher.
///
/// Cloned into the signal listener, the readiness loop and the supervisor.
/// Triggering is idempotent; waiters wake on the first trigger.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            shutdown_tx: Arc::new(shutdown_tx),
        }
    }

    /// Trigger shutdown. Returns true only for the call that flipped the flag.
    pub fn shutdown(&self) -> bool {
        let was_shutdown = self.shutdown_tx.send_replace(true);
        if !was_shutdown {
            info!("Shutdown requested, notifying all subsystems");
        }
        !was_shutdown
    }

    /// Check if shutdown has been triggered (non-blocking)
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Resolve once shutdown has been triggered.
    pub async fn wait(&self) {
        let mut rx = self.shutdown_tx.subscribe();
        // Sender lives in self, so the channel cannot close while we wait
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
