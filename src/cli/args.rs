//! Command line argument parsing.
//!
//! Every flag falls back to an environment variable so the tool can be driven
//! entirely from CI job variables.

use crate::build::BuildConfig;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Headless Unity build runner
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_unity",
    version,
    about = "Locates the Unity editor pinned by a project and runs a batch-mode build",
    long_about = "Reads the editor version from ProjectSettings/ProjectVersion.txt, finds the matching
Unity installation under the install root, runs it with -batchmode -quit and prints the build log.

Usage:
  kodegen_bundler_unity --project-path ./game --build-method BuildScript.Perform \\
      --log-dir Logs --log-name build --build-version 42
  project_path=./game build_method=BuildScript.Perform log_dir=Logs log_name=build \\
      build_version=42 custom_options='-buildTarget Android' kodegen_bundler_unity

Exit code 0 = build succeeded, 1 = tooling failure, anything else = Unity's own exit code."
)]
pub struct Args {
    /// Unity project root
    #[arg(long, env = "project_path", value_name = "PATH")]
    pub project_path: PathBuf,

    /// Directory to search for Unity installations
    ///
    /// Defaults to `C:\Program Files\` on Windows, `/Applications/` on macOS
    /// and `/opt/` on Linux. An empty value also selects the default.
    #[arg(
        long,
        env = "unity_install_dir",
        value_name = "PATH",
        value_parser = clap::builder::ValueParser::os_string()
    )]
    pub install_dir: Option<OsString>,

    /// Static method executed by the editor, e.g. BuildScript.Perform
    #[arg(long, env = "build_method", value_name = "METHOD")]
    pub build_method: String,

    /// Directory of the build log (relative paths resolve against the project)
    #[arg(long, env = "log_dir", value_name = "DIR")]
    pub log_dir: PathBuf,

    /// Build log name stem
    #[arg(long, env = "log_name", value_name = "NAME")]
    pub log_name: String,

    /// Build version appended to the log name
    #[arg(long, env = "build_version", value_name = "VERSION")]
    pub build_version: String,

    /// Extra editor options, e.g. "-buildTarget Android -development"
    #[arg(
        long,
        env = "custom_options",
        value_name = "OPTIONS",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub custom_options: String,
}

impl From<&Args> for BuildConfig {
    fn from(args: &Args) -> Self {
        Self {
            project_path: args.project_path.clone(),
            install_dir: args
                .install_dir
                .as_ref()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            build_method: args.build_method.clone(),
            log_dir: args.log_dir.clone(),
            log_name: args.log_name.clone(),
            build_version: args.build_version.clone(),
            custom_options: args.custom_options.clone(),
        }
    }
}
