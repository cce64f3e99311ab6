//! Command line interface for the Unity build runner.
//!
//! Parses flags (with environment fallbacks) into a [`BuildConfig`] and hands
//! it to the [`UnityBuilder`].

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::build::{BuildConfig, UnityBuilder};
use clap::Parser;

/// Main CLI entry point. Returns the process exit status.
///
/// Argument errors are tooling failures and exit with 1; `--help` and
/// `--version` exit with 0.
pub async fn run() -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    let config = BuildConfig::from(&args);
    log::debug!("Build configuration: {config:?}");

    let output = OutputManager::new();
    UnityBuilder::new(config).run(&output).await
}
