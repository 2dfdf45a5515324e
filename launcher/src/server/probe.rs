//! HTTP probing of the demo servers.

use crate::server::LaunchResult;

use std::time::Duration;

use tracing::trace;

const PROTOCOL: &str = "http";
const HOST: &str = "127.0.0.1";

/// Result of one GET against a server's root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response
    Ready,
    /// Some other HTTP status; the port is taken but the app is not up yet
    Responding(u16),
    /// Connection refused, reset or timed out
    Unreachable,
}

impl ProbeOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Any HTTP response at all.
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Self::Unreachable)
    }
}

/// Shared HTTP client with a per-request timeout.
#[derive(Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> LaunchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .no_proxy()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }

    pub async fn probe(&self, port: u16) -> ProbeOutcome {
        let url = format!("{PROTOCOL}://{HOST}:{port}/");

        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => ProbeOutcome::Ready,
            Ok(resp) => {
                trace!("Port {port} answered HTTP {}", resp.status());
                ProbeOutcome::Responding(resp.status().as_u16())
            }
            Err(e) => {
                trace!("Port {port} unreachable: {e}");
                ProbeOutcome::Unreachable
            }
        }
    }

    pub async fn is_ready(&self, port: u16) -> bool {
        self.probe(port).await.is_ready()
    }

    pub async fn is_occupied(&self, port: u16) -> bool {
        self.probe(port).await.is_occupied()
    }
}
