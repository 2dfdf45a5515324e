use crate::server::{ServerSpec, ServerStatus};

use std::process::{Child, ExitStatus};

/// A server plus the process we started for it, if any.
#[derive(Debug)]
pub struct ServerState {
    pub spec: ServerSpec,
    pub child: Option<Child>,
    pub status: ServerStatus,
}

impl ServerState {
    pub fn new(spec: ServerSpec) -> Self {
        Self {
            spec,
            child: None,
            status: ServerStatus::NotStarted,
        }
    }

    pub fn failed(spec: ServerSpec, reason: impl Into<String>) -> Self {
        Self {
            spec,
            child: None,
            status: ServerStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Exit status if the process has ended. None while it runs or when untracked.
    pub fn poll_exit(&mut self) -> Option<ExitStatus> {
        let child = self.child.as_mut()?;
        child.try_wait().ok().flatten()
    }

    /// True while a tracked process has not exited.
    pub fn is_running(&mut self) -> bool {
        self.child.is_some() && self.poll_exit().is_none()
    }
}
