//! Build configuration record.

use super::logfile::log_file_path;
use std::path::PathBuf;

/// Everything one build run needs, read once at startup.
///
/// Built from the command line (with environment fallbacks) in the CLI layer;
/// nothing below it reads process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Unity project root
    pub project_path: PathBuf,

    /// Install root override. `None` means the platform default.
    pub install_dir: Option<PathBuf>,

    /// Static method the editor executes, e.g. `BuildScript.Perform`
    pub build_method: String,

    /// Directory part of the log file path
    pub log_dir: PathBuf,

    /// Log file name stem
    pub log_name: String,

    /// Appended to the stem as `<log_name>_<build_version>.log`
    pub build_version: String,

    /// Free-form extra editor options
    pub custom_options: String,
}

impl BuildConfig {
    /// Log file path handed to `-logFile`
    pub fn log_file(&self) -> PathBuf {
        log_file_path(&self.log_dir, &self.log_name, &self.build_version)
    }
}
