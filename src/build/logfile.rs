//! Build log location and retrieval.
//!
//! The editor writes the log itself; this side only computes where it goes
//! and reads it back once the editor has exited.

use crate::error::Result;
use std::io;
use std::path::{Path, PathBuf};

/// Returns `<log_dir>/<log_name>_<build_version>.log`
pub fn log_file_path(log_dir: &Path, log_name: &str, build_version: &str) -> PathBuf {
    log_dir.join(format!("{log_name}_{build_version}.log"))
}

/// A log file produced by the editor
#[derive(Clone, Debug)]
pub struct BuildLog {
    path: PathBuf,
    contents: String,
}

impl BuildLog {
    /// Where `log_file` ends up on disk.
    ///
    /// The editor runs with the project root as its working directory, so a
    /// relative `-logFile` lands under the project root. Absolute paths are
    /// returned unchanged.
    pub fn location(project_root: &Path, log_file: &Path) -> PathBuf {
        project_root.join(log_file)
    }

    /// Reads the log at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist, which is normal when
    /// the editor never started or failed before opening its log. Invalid
    /// UTF-8 is replaced rather than rejected.
    pub async fn read(path: &Path) -> Result<Option<Self>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Self {
            path: path.to_path_buf(),
            contents: String::from_utf8_lossy(&bytes).into_owned(),
        }))
    }

    /// Returns the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the log text
    pub fn contents(&self) -> &str {
        &self.contents
    }
}
