use std::fmt;

/// Lifecycle of one managed server.
///
/// `NotStarted -> Starting -> {Ready | Failed}`, `NotStarted -> Ready` for a
/// server that was already answering, `NotStarted -> Failed` for a missing
/// script, and anything but `NotStarted` can move to `Stopped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    NotStarted,
    Starting,
    Ready,
    Failed { reason: String },
    Stopped,
}

impl ServerStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::Starting => f.write_str("starting"),
            Self::Ready => f.write_str("ready"),
            Self::Failed { reason } => write!(f, "failed ({reason})"),
            Self::Stopped => f.write_str("stopped"),
        }
    }
}
