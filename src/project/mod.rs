//! Unity project descriptor and editor version discovery.

use crate::error::{BuilderError, Result, VersionError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Version declaration file, relative to the project root
pub const VERSION_FILE: &str = "ProjectSettings/ProjectVersion.txt";

/// Key whose value is the pinned editor version
pub const VERSION_MARKER: &str = "m_EditorVersion:";

/// Editor version pinned by a project (e.g. `2021.3.5f1`).
///
/// Opaque token. It is only ever matched as a substring of directory names,
/// never parsed or compared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVersion(String);

impl EditorVersion {
    /// Wraps a raw version token
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Unity project rooted at an absolute path
#[derive(Clone, Debug)]
pub struct UnityProject {
    root: PathBuf,
}

impl UnityProject {
    /// Creates a project descriptor for `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of `ProjectSettings/ProjectVersion.txt`
    pub fn version_file(&self) -> PathBuf {
        self.root.join(VERSION_FILE)
    }

    /// Reads the pinned editor version.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Config`] when the file cannot be read or has no
    /// `m_EditorVersion:` value.
    pub async fn editor_version(&self) -> Result<EditorVersion> {
        read_editor_version(&self.version_file()).await
    }
}

/// Reads `path` and extracts the editor version from it.
pub async fn read_editor_version(path: &Path) -> Result<EditorVersion> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| BuilderError::Config {
            path: path.to_path_buf(),
            source: VersionError::Unreadable(e),
        })?;

    let version = parse_editor_version(&contents).map_err(|source| BuilderError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read editor version {} from {}", version, path.display());
    Ok(version)
}

/// Extracts the token following `m_EditorVersion:` from file contents.
///
/// The first line containing the marker wins. Only the first
/// whitespace-delimited token after the marker is returned, so a trailing
/// revision hash or `\r` is ignored.
pub fn parse_editor_version(contents: &str) -> std::result::Result<EditorVersion, VersionError> {
    let line = contents
        .lines()
        .find(|line| line.contains(VERSION_MARKER))
        .ok_or(VersionError::MissingMarker {
            marker: VERSION_MARKER,
        })?;

    let after_marker = line
        .split_once(VERSION_MARKER)
        .map(|(_, rest)| rest)
        .unwrap_or_default();

    after_marker
        .split_whitespace()
        .next()
        .map(EditorVersion::new)
        .ok_or(VersionError::MissingValue {
            marker: VERSION_MARKER,
        })
}
