//! Error types for locating and running the Unity editor.
//!
//! Every variant of [`BuilderError`] is a tooling failure and maps to exit
//! status 1. A build that runs but fails is not an error here; it is reported
//! through [`crate::build::BuildOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Main error type for all builder operations
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Version declaration file missing or unparseable
    #[error("failed to parse project version from {}: {source}", path.display())]
    Config {
        /// Path of the version declaration file
        path: PathBuf,
        /// What went wrong while reading it
        #[source]
        source: VersionError,
    },

    /// Host OS is not Windows, macOS or Linux
    #[error("unsupported platform: {os}")]
    UnsupportedPlatform {
        /// Value of `std::env::consts::OS`
        os: String,
    },

    /// No directory under the install root matches the version
    #[error(
        "unable to find the Unity {version} installation folder under {}",
        root.display()
    )]
    InstallNotFound {
        /// Editor version searched for
        version: String,
        /// Install root that was searched
        root: PathBuf,
    },

    /// Version directory found, but it holds no editor binary
    #[error(
        "no {} found inside Unity installation {}",
        relative_path.display(),
        install_dir.display()
    )]
    ExecutableNotFound {
        /// Matched installation directory
        install_dir: PathBuf,
        /// Platform-specific executable path that was looked for
        relative_path: PathBuf,
    },

    /// Editor process could not be started
    #[error("failed to launch {}: {source}", executable.display())]
    ProcessLaunch {
        /// Executable that was launched
        executable: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed for a reason other than permissions
    #[error("failed to list directory {}: {source}", path.display())]
    Search {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuilderError {
    /// Process exit status for this failure.
    ///
    /// Tooling failures always exit with 1 so callers can tell them apart from
    /// a build that ran and returned its own status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Reasons the version declaration file could not yield a version
#[derive(Error, Debug)]
pub enum VersionError {
    /// File missing or unreadable
    #[error("cannot read version file: {0}")]
    Unreadable(#[from] std::io::Error),

    /// No line carries the marker key
    #[error("no line contains `{marker}`")]
    MissingMarker {
        /// Marker key searched for
        marker: &'static str,
    },

    /// Marker present but nothing follows it
    #[error("`{marker}` has no value")]
    MissingValue {
        /// Marker key searched for
        marker: &'static str,
    },
}
