//! Editor process execution.

use super::BuildArguments;
use crate::error::{BuilderError, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// How a build that actually ran ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Editor exited with status 0
    Succeeded,
    /// Editor exited non-zero (or was killed by a signal, reported as 1)
    Failed {
        /// Exit status to propagate
        code: i32,
    },
}

impl BuildOutcome {
    /// Process exit status mirroring the editor's own
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Failed { code } => code,
        }
    }
}

impl From<ExitStatus> for BuildOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Self::Succeeded,
            Some(code) => Self::Failed { code },
            None => Self::Failed { code: 1 },
        }
    }
}

/// Runs the editor and waits for it to exit.
///
/// Standard streams are inherited so the build output shows up live. The
/// working directory is the project root, which is also what a relative
/// `-logFile` resolves against. No timeout is applied.
///
/// # Errors
///
/// [`BuilderError::ProcessLaunch`] if the process cannot be started. A
/// non-zero exit is not an error; it comes back as [`BuildOutcome::Failed`].
pub async fn run_editor(
    executable: &Path,
    arguments: &BuildArguments,
    working_dir: &Path,
) -> Result<BuildOutcome> {
    log::debug!(
        "Spawning {} in {}",
        executable.display(),
        working_dir.display()
    );

    let status = Command::new(executable)
        .args(arguments.argv())
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| BuilderError::ProcessLaunch {
            executable: executable.to_path_buf(),
            source: e,
        })?;

    let outcome = BuildOutcome::from(status);
    match outcome {
        BuildOutcome::Succeeded => log::info!("Unity exited successfully"),
        BuildOutcome::Failed { code } => log::warn!("Unity exited with status {code} ({status})"),
    }
    Ok(outcome)
}
