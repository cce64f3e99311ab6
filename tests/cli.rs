#![cfg(unix)]

mod common;

use assert_cmd::Command;
use kodegen_bundler_unity::editor::Platform;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn project(&self) -> PathBuf {
        self.dir.path().join("game")
    }

    fn install_root(&self) -> PathBuf {
        self.dir.path().join("install")
    }

    /// Installs a stub editor for `version` using the host's layout
    fn install_editor(&self, version: &str, exit_code: i32) {
        let relative = Platform::current().unwrap().profile().executable_path();
        let install_dir = self.install_root().join("Hub/Editor").join(version);
        common::write_stub_editor(&install_dir.join(relative), exit_code, "stub build log");
    }

    /// The binary with a clean configuration environment
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("kodegen_bundler_unity").unwrap();
        for var in common::CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn configured(&self) -> Command {
        let mut cmd = self.command();
        cmd.env("project_path", self.project())
            .env("unity_install_dir", self.install_root())
            .env("build_method", "BuildScript.Perform")
            .env("log_dir", "Logs")
            .env("log_name", "build")
            .env("build_version", "42");
        cmd
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn builds_with_environment_configuration() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "2021.3.5f1");
    ws.install_editor("2021.3.5f1", 0);

    ws.configured()
        .env("custom_options", "-logFile ignored")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Unity project path used: {}",
            path_str(&ws.project())
        )))
        .stdout(predicate::str::contains("Unity version used: 2021.3.5f1"))
        .stdout(predicate::str::contains("Executable: "))
        .stdout(predicate::str::contains(format!(
            "Arguments: -batchmode -quit -projectPath {} -executeMethod BuildScript.Perform \
             -logFile Logs/build_42.log -logFile ignored",
            path_str(&ws.project())
        )))
        .stdout(predicate::str::contains("Unity Build Log:"))
        .stdout(predicate::str::contains("stub build log"));
}

#[test]
fn flags_override_environment() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "2021.3.5f1");
    ws.install_editor("2021.3.5f1", 0);

    ws.configured()
        .env("build_method", "Wrong.Method")
        .args(["--build-method", "BuildScript.Perform"])
        .args(["--custom-options", "-buildTarget Android -development"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-executeMethod BuildScript.Perform -logFile Logs/build_42.log \
             -buildTarget Android -development",
        ));

    let recorded = common::recorded_args(&ws.project());
    assert_eq!(recorded[recorded.len() - 3..], ["-buildTarget", "Android", "-development"]);
}

#[test]
fn build_failure_exit_code_is_mirrored() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "2021.3.5f1");
    ws.install_editor("2021.3.5f1", 3);

    ws.configured()
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Process exited with code: 3"))
        .stderr(predicate::str::contains("earlier build").not())
        .stdout(predicate::str::contains("stub build log"));
}

#[test]
fn unreadable_version_exits_with_one() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.project()).unwrap();
    ws.install_editor("2021.3.5f1", 0);

    ws.configured()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse project version"))
        .stderr(predicate::str::contains("cannot read version file"))
        .stdout(predicate::str::contains("Unity Build Log:").not());
}

#[test]
fn malformed_version_reports_the_cause() {
    let ws = Workspace::new();
    common::touch(&ws.project().join("ProjectSettings/ProjectVersion.txt"));
    std::fs::write(
        ws.project().join("ProjectSettings/ProjectVersion.txt"),
        "garbage\n",
    )
    .unwrap();

    ws.configured()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ProjectVersion.txt: no line contains `m_EditorVersion:`",
        ));
}

#[test]
fn empty_install_dir_searches_the_default_root() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "0.0.0-not-installed");
    let default_root = Platform::current().unwrap().profile().default_install_root();

    ws.configured()
        .env("unity_install_dir", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a value is required").not())
        .stderr(predicate::str::contains(path_str(default_root)))
        .stdout(predicate::str::contains("Unity version used: 0.0.0-not-installed"));
}

#[test]
fn missing_installation_exits_with_one() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "2023.2.0f1");
    ws.install_editor("2021.3.5f1", 0);

    ws.configured()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("2023.2.0f1"))
        .stdout(predicate::str::contains("Start Unity build.").not());
}

#[test]
fn log_from_an_earlier_build_is_flagged() {
    let ws = Workspace::new();
    common::write_project(&ws.project(), "2023.2.0f1");
    ws.install_editor("2021.3.5f1", 0);
    common::touch(&ws.project().join("Logs/build_42.log"));
    std::fs::write(ws.project().join("Logs/build_42.log"), "old build log\n").unwrap();

    ws.configured()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unity Build Log:"))
        .stdout(predicate::str::contains("old build log"))
        .stderr(predicate::str::contains("is from an earlier build"));
}

#[test]
fn unlaunchable_editor_exits_with_one() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    common::write_project(&ws.project(), "2021.3.5f1");
    ws.install_editor("2021.3.5f1", 0);
    let relative = Platform::current().unwrap().profile().executable_path();
    let editor = ws
        .install_root()
        .join("Hub/Editor/2021.3.5f1")
        .join(relative);
    std::fs::set_permissions(&editor, std::fs::Permissions::from_mode(0o644)).unwrap();

    ws.configured()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Process failed with error:"));
}

#[test]
fn missing_configuration_exits_with_one() {
    let ws = Workspace::new();

    ws.command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--project-path"));
}

#[test]
fn help_exits_with_zero() {
    Workspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--custom-options"));
}
