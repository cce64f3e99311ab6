//! Version-directed search for an installed Unity editor.
//!
//! The search runs in two phases:
//!
//! 1. [`find_install_dir`] walks the install root breadth-first and returns the
//!    shallowest directory whose name contains the version string.
//! 2. [`find_executable`] walks that directory depth-first for the
//!    platform-specific executable path.

use super::Platform;
use crate::error::{BuilderError, Result};
use crate::project::EditorVersion;
use std::collections::VecDeque;
use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

/// A resolved editor installation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorInstallation {
    /// Directory whose name matched the version
    pub install_dir: PathBuf,
    /// Editor binary inside `install_dir`
    pub executable: PathBuf,
}

/// Returns the configured install root, or the platform default.
pub fn resolve_install_root(configured: Option<&Path>, platform: Platform) -> PathBuf {
    match configured {
        Some(root) => root.to_path_buf(),
        None => platform.profile().default_install_root().to_path_buf(),
    }
}

/// Finds the editor executable for `version` under `root`.
///
/// # Errors
///
/// - [`BuilderError::InstallNotFound`] if no directory name contains `version`
/// - [`BuilderError::ExecutableNotFound`] if the matched directory has no
///   executable at the platform's relative path
/// - [`BuilderError::Search`] on listing failures other than permission denial
pub fn locate_editor(
    root: &Path,
    version: &EditorVersion,
    platform: Platform,
) -> Result<EditorInstallation> {
    let install_dir =
        find_install_dir(root, version)?.ok_or_else(|| BuilderError::InstallNotFound {
            version: version.to_string(),
            root: root.to_path_buf(),
        })?;
    log::info!("Found Unity installation folder: {}", install_dir.display());

    let relative_path = platform.profile().executable_path();
    let executable = find_executable(&install_dir, relative_path)?.ok_or_else(|| {
        BuilderError::ExecutableNotFound {
            install_dir: install_dir.clone(),
            relative_path: relative_path.to_path_buf(),
        }
    })?;

    Ok(EditorInstallation {
        install_dir,
        executable,
    })
}

/// Breadth-first search for a directory whose name contains `version`.
///
/// The root itself is never a candidate. Entries of one directory are
/// examined in file-name order, and the whole level is examined before any
/// deeper one, so the shallowest match wins. Subtrees that cannot be listed
/// because of missing permissions are skipped.
///
/// Returns `Ok(None)` when nothing matches.
pub fn find_install_dir(root: &Path, version: &EditorVersion) -> Result<Option<PathBuf>> {
    find_install_dir_with(root, version, list_subdirectories)
}

/// [`find_install_dir`] over an arbitrary directory tree.
///
/// `list` returns the subdirectories of a directory in the order they should
/// be examined. A `PermissionDenied` error skips that directory, any other
/// error ends the search with [`BuilderError::Search`].
pub fn find_install_dir_with<F>(
    root: &Path,
    version: &EditorVersion,
    mut list: F,
) -> Result<Option<PathBuf>>
where
    F: FnMut(&Path) -> io::Result<Vec<PathBuf>>,
{
    let mut pending = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = pending.pop_front() {
        let children = match list(&dir) {
            Ok(children) => children,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                log::debug!("Skipping {} (permission denied)", dir.display());
                continue;
            }
            Err(e) => {
                return Err(BuilderError::Search {
                    path: dir,
                    source: e,
                });
            }
        };

        for child in children {
            let matches = child
                .file_name()
                .is_some_and(|name| name.to_string_lossy().contains(version.as_str()));
            if matches {
                return Ok(Some(child));
            }
            pending.push_back(child);
        }
    }

    Ok(None)
}

/// Depth-first search for `relative_path` below `install_dir`.
///
/// Checks `install_dir/relative_path` first, then the same relative path
/// under every subdirectory in pre-order. Listing failures propagate.
pub fn find_executable(install_dir: &Path, relative_path: &Path) -> Result<Option<PathBuf>> {
    for entry in walkdir::WalkDir::new(install_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| BuilderError::Search {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| install_dir.to_path_buf()),
            source: e.into(),
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let candidate = entry.path().join(relative_path);
        if candidate.exists() {
            log::debug!("Found editor executable: {}", candidate.display());
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Lists the real subdirectories of `dir` (symlinks excluded), sorted by name.
fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut subdirectories = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirectories.push(entry);
        }
    }
    subdirectories.sort_by_key(DirEntry::file_name);
    Ok(subdirectories.iter().map(DirEntry::path).collect())
}
