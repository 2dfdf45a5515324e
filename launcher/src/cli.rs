use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "autopilot")]
#[command(about = "Launch the Autopilot Pro detection demos and the landing page")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project directory holding autopilot.toml and the demo scripts
    /// (default: $AUTOPILOT_HOME, then the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Do not open the landing page once servers are up
    #[arg(long)]
    pub no_browser: bool,

    /// Skip the dependency check
    #[arg(long)]
    pub skip_preflight: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify scripts, weights, UI files and ports without launching anything
    Check {
        /// Skip importing each required module through the interpreter
        #[arg(long)]
        skip_modules: bool,
    },
}
