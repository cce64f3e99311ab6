//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables the binary falls back to
pub const CONFIG_ENV_VARS: [&str; 7] = [
    "project_path",
    "unity_install_dir",
    "build_method",
    "log_dir",
    "log_name",
    "build_version",
    "custom_options",
];

/// Creates `ProjectSettings/ProjectVersion.txt` the way Unity writes it
pub fn write_project(root: &Path, version: &str) {
    let settings = root.join("ProjectSettings");
    fs::create_dir_all(&settings).unwrap();
    fs::write(
        settings.join("ProjectVersion.txt"),
        format!("m_EditorVersion: {version}\nm_EditorVersionWithRevision: {version} (40eb3a945986)\n"),
    )
    .unwrap();
}

/// Creates an empty file (and its parents) at `path`
pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Writes a shell script standing in for the Unity editor.
///
/// The stub records its argv (one per line) in `editor_args.txt` inside its
/// working directory, writes `log_text` to the first `-logFile` it is given,
/// then exits with `exit_code`.
#[cfg(unix)]
pub fn write_stub_editor(path: &Path, exit_code: i32, log_text: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" > "$PWD/editor_args.txt"
log=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-logFile" ] && [ -z "$log" ]; then
    log="$2"
  fi
  shift
done
if [ -n "$log" ]; then
  mkdir -p "$(dirname "$log")"
  printf '%s\n' "{log_text}" > "$log"
fi
exit {exit_code}
"#
    );

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// Reads the argv recorded by [`write_stub_editor`]
pub fn recorded_args(project_root: &Path) -> Vec<String> {
    fs::read_to_string(project_root.join("editor_args.txt"))
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
