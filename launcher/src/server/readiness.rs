//! Readiness polling across many ports.

use crate::ShutdownCoordinator;
use crate::server::HttpProbe;

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{debug, info};

/// Outcome of [`await_ready`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadinessReport {
    pub ready: BTreeSet<u16>,
    pub pending: BTreeSet<u16>,
    /// Ports dropped because their process exited while being polled
    pub exited: BTreeSet<u16>,
    pub elapsed: Duration,
    pub cancelled: bool,
}

impl ReadinessReport {
    pub fn all_ready(&self) -> bool {
        self.pending.is_empty() && self.exited.is_empty()
    }
}

/// Poll `ports` until each answers 2xx, `timeout` elapses, or shutdown is requested.
///
/// Every unconfirmed port is probed once per round; probes in a round run
/// concurrently and the round itself is cut off at the deadline. Rounds are
/// `interval` apart, so the call returns within `timeout + interval`.
pub async fn await_ready(
    probe: &HttpProbe,
    ports: &[u16],
    timeout: Duration,
    interval: Duration,
    shutdown: &ShutdownCoordinator,
) -> ReadinessReport {
    await_ready_with(probe, ports, timeout, interval, shutdown, Vec::new).await
}

/// Like [`await_ready`], but calls `exited` at the start of every round.
///
/// Ports it returns stop being polled and are reported in
/// [`ReadinessReport::exited`].
pub async fn await_ready_with<F>(
    probe: &HttpProbe,
    ports: &[u16],
    timeout: Duration,
    interval: Duration,
    shutdown: &ShutdownCoordinator,
    mut exited: F,
) -> ReadinessReport
where
    F: FnMut() -> Vec<u16>,
{
    let start = Instant::now();
    let mut pending: BTreeSet<u16> = ports.iter().copied().collect();
    let mut ready = BTreeSet::new();
    let mut dead = BTreeSet::new();
    let mut cancelled = false;
    let mut round = 0u32;

    while !pending.is_empty() {
        if shutdown.is_shutdown() {
            cancelled = true;
            break;
        }

        for port in exited() {
            if pending.remove(&port) {
                dead.insert(port);
            }
        }
        if pending.is_empty() {
            break;
        }

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            break;
        }

        round += 1;
        let targets: Vec<u16> = pending.iter().copied().collect();
        let probes = join_all(
            targets
                .into_iter()
                .map(|port| async move { (port, probe.is_ready(port).await) }),
        );

        tokio::select! {
            results = tokio::time::timeout(remaining, probes) => {
                for (port, is_ready) in results.unwrap_or_default() {
                    if is_ready {
                        info!("Port {port} is ready ({:.1}s)", start.elapsed().as_secs_f32());
                        pending.remove(&port);
                        ready.insert(port);
                    }
                }
            }
            _ = shutdown.wait() => {
                cancelled = true;
                break;
            }
        }

        if pending.is_empty() {
            break;
        }

        debug!("Round {round}: {} ready, {} pending", ready.len(), pending.len());

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(interval.min(remaining)) => {}
            _ = shutdown.wait() => {
                cancelled = true;
                break;
            }
        }
    }

    ReadinessReport {
        ready,
        pending,
        exited: dead,
        elapsed: start.elapsed(),
        cancelled,
    }
}
