//! Sandbox CLI - terminal front end for the ethical sandbox
//!
//! The binary is a presentation collaborator: it renders what the
//! [`sandbox_player::ScenarioPlayer`] shows, feeds learner input back as
//! actions and persists records through a [`sandbox_storage::FileStore`].

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod terminal;

pub use cli::build_cli;
pub use config::SandboxConfig;
pub use terminal::{PlayReport, Terminal};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, falling back
/// to `warn`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
