//! Host platforms and where Unity lives on each of them.

use crate::error::{BuilderError, Result};
use std::path::Path;

/// Host operating system the editor is installed on.
///
/// Each variant owns one [`PlatformProfile`] describing the conventional
/// install root and the executable's location inside a version directory.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_unity::editor::Platform;
///
/// # fn example() -> kodegen_bundler_unity::Result<()> {
/// let platform = Platform::current()?;
/// println!("Searching {}", platform.profile().default_install_root().display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Windows - `Unity.exe` somewhere under the version directory
    Windows,
    /// macOS - the binary inside `Unity.app`
    MacOs,
    /// Linux - `Editor/Unity` under the version directory
    Linux,
}

/// Install conventions for one [`Platform`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlatformProfile {
    default_install_root: &'static str,
    executable_path: &'static str,
}

impl PlatformProfile {
    /// Searched when no install root is configured
    pub fn default_install_root(&self) -> &'static Path {
        Path::new(self.default_install_root)
    }

    /// Executable path relative to some directory inside the version directory
    pub fn executable_path(&self) -> &'static Path {
        Path::new(self.executable_path)
    }
}

static WINDOWS: PlatformProfile = PlatformProfile {
    default_install_root: "C:\\Program Files\\",
    executable_path: "Unity.exe",
};

static MACOS: PlatformProfile = PlatformProfile {
    default_install_root: "/Applications/",
    executable_path: "Unity.app/Contents/MacOS/Unity",
};

static LINUX: PlatformProfile = PlatformProfile {
    default_install_root: "/opt/",
    executable_path: "Editor/Unity",
};

impl Platform {
    /// Every recognized platform
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Detects the host platform.
    ///
    /// # Errors
    ///
    /// [`BuilderError::UnsupportedPlatform`] on anything other than Windows,
    /// macOS or Linux.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(BuilderError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Returns the install conventions for this platform
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Self::Windows => &WINDOWS,
            Self::MacOs => &MACOS,
            Self::Linux => &LINUX,
        }
    }
}
