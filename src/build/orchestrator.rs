//! Main build orchestration.
//!
//! This module provides the [`UnityBuilder`] orchestrator that sequences
//! version discovery, editor lookup, argument assembly and the editor run,
//! then surfaces the build log.

use super::{BuildArguments, BuildConfig, BuildLog, BuildOutcome, run_editor};
use crate::cli::OutputManager;
use crate::editor::{Platform, locate_editor, resolve_install_root};
use crate::error::{BuilderError, Result};
use crate::project::UnityProject;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Main build orchestrator.
///
/// One instance performs exactly one build.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_unity::build::{BuildConfig, UnityBuilder};
/// use kodegen_bundler_unity::cli::OutputManager;
///
/// # async fn example(config: BuildConfig) {
/// let output = OutputManager::new();
/// let exit_code = UnityBuilder::new(config).run(&output).await;
/// std::process::exit(exit_code);
/// # }
/// ```
#[derive(Debug)]
pub struct UnityBuilder {
    config: BuildConfig,
    platform: Option<Platform>,
}

impl UnityBuilder {
    /// Creates a builder for the host platform.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            platform: None,
        }
    }

    /// Uses `platform` instead of detecting the host OS.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Runs the build and returns the process exit status.
    ///
    /// - 0 when the editor exits successfully
    /// - the editor's own status when it exits non-zero
    /// - 1 for any tooling failure (see [`BuilderError`])
    ///
    /// The build log is printed afterwards whichever way the build went, as
    /// long as the file exists. If the editor never ran, the printed log is
    /// flagged as left over from an earlier build.
    pub async fn run(&self, output: &OutputManager) -> i32 {
        let project_root = self.project_root();

        let result = self.build(&project_root, output).await;
        let editor_ran = result.is_ok();
        let exit_code = match result {
            Ok(outcome) => {
                if let BuildOutcome::Failed { code } = outcome {
                    let _ = output.error(&format!("Process exited with code: {code}"));
                }
                outcome.exit_code()
            }
            Err(e) => {
                if let BuilderError::ProcessLaunch { source, .. } = &e {
                    let _ = output.error(&format!("Process failed with error: {source}"));
                }
                let _ = output.error(&format!("Error: {e}"));
                e.exit_code()
            }
        };

        self.print_build_log(&project_root, editor_ran, output).await;
        exit_code
    }

    /// Resolves everything and runs the editor once.
    ///
    /// # Errors
    ///
    /// Any tooling failure. A failed build is `Ok(BuildOutcome::Failed)`.
    pub async fn build(&self, project_root: &Path, output: &OutputManager) -> Result<BuildOutcome> {
        output.progress(&format!(
            "Unity project path used: {}",
            project_root.display()
        ))?;

        let version = UnityProject::new(project_root).editor_version().await?;
        output.progress(&format!("Unity version used: {version}"))?;

        let platform = match self.platform {
            Some(platform) => platform,
            None => Platform::current()?,
        };
        let install_root = resolve_install_root(self.config.install_dir.as_deref(), platform);
        log::info!(
            "Searching {} for Unity {} ({:?})",
            install_root.display(),
            version,
            platform
        );

        let installation = locate_editor(&install_root, &version, platform)?;
        output.progress(&format!(
            "Executable: {}",
            installation.executable.display()
        ))?;

        let arguments = BuildArguments::new(
            project_root,
            &self.config.build_method,
            &self.config.log_file(),
            &self.config.custom_options,
        );
        output.progress(&format!("Arguments: {arguments}"))?;

        output.progress("Start Unity build.")?;
        run_editor(&installation.executable, &arguments, project_root).await
    }

    /// Absolute project root, falling back to the configured path as given.
    fn project_root(&self) -> PathBuf {
        match self.config.project_path.absolutize() {
            Ok(path) => path.into_owned(),
            Err(e) => {
                log::warn!(
                    "Could not make {} absolute: {e}",
                    self.config.project_path.display()
                );
                self.config.project_path.clone()
            }
        }
    }

    async fn print_build_log(
        &self,
        project_root: &Path,
        editor_ran: bool,
        output: &OutputManager,
    ) {
        let location = BuildLog::location(project_root, &self.config.log_file());

        match BuildLog::read(&location).await {
            Ok(Some(log)) => {
                log::debug!("Printing build log {}", log.path().display());
                if !editor_ran {
                    let _ = output.warn(&format!(
                        "Unity did not run, {} is from an earlier build",
                        log.path().display()
                    ));
                }
                let _ = output.section("Unity Build Log:");
                let _ = output.raw(log.contents());
            }
            Ok(None) => log::debug!("No build log at {}", location.display()),
            Err(e) => {
                let _ = output.warn(&format!(
                    "Failed to read build log {}: {e}",
                    location.display()
                ));
            }
        }
    }
}
