mod error;
mod launch_options;
mod launcher;
mod port;
mod probe;
mod readiness;
mod server_spec;
mod server_state;
mod server_status;

pub use error::{LaunchError, Result as LaunchResult};
pub use launch_options::LaunchOptions;
pub use launcher::{LaunchSummary, LivenessReport, ServerLauncher, ShutdownReport};
pub use port::PortManager;
pub use probe::{HttpProbe, ProbeOutcome};
pub use readiness::{ReadinessReport, await_ready, await_ready_with};
pub use server_spec::ServerSpec;
pub use server_state::ServerState;
pub use server_status::ServerStatus;
