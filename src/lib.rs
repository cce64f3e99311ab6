//! Headless Unity build runner library
//!
//! This library provides the pieces behind the `kodegen_bundler_unity` binary:
//! - reading the editor version pinned by a Unity project
//! - locating the matching editor installation on Windows, macOS and Linux
//! - assembling batch-mode arguments and running the editor
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod build;
pub mod cli;
pub mod editor;
pub mod error;
pub mod project;

// Re-export commonly used types
pub use error::{BuilderError, Result, VersionError};
