//! Batch-mode build execution.
//!
//! - [`arguments`] - editor command line assembly
//! - [`runner`] - editor process execution
//! - [`logfile`] - build log location and retrieval
//! - [`orchestrator`] - the [`UnityBuilder`] that ties everything together

mod arguments;
mod config;
mod logfile;
mod orchestrator;
mod runner;

pub use arguments::{BuildArgument, BuildArguments, parse_custom_options};
pub use config::BuildConfig;
pub use logfile::{BuildLog, log_file_path};
pub use orchestrator::UnityBuilder;
pub use runner::{BuildOutcome, run_editor};
