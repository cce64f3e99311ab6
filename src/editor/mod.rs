//! Unity editor discovery.
//!
//! - [`platform`] - per-OS install conventions
//! - [`locator`] - breadth-first version search and executable lookup

mod locator;
mod platform;

pub use locator::{
    EditorInstallation, find_executable, find_install_dir, find_install_dir_with, locate_editor,
    resolve_install_root,
};
pub use platform::{Platform, PlatformProfile};
