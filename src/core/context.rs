//! Run context
//!
//! The handful of values every setup step reads: which OS family we are
//! provisioning for, where the project lives and where the build goes.
//! Built once at startup and never mutated, so steps can be pointed at a
//! temporary directory in tests instead of the real process state.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{
    BUILD_CONFIG, BUILD_DIR_NAME, EXECUTABLE_NAME, EXECUTABLE_SUBDIR, VCPKG_BOOTSTRAP_UNIX,
    VCPKG_BOOTSTRAP_WINDOWS, VCPKG_DIR_NAME, VCPKG_EXE_UNIX, VCPKG_EXE_WINDOWS,
    VCPKG_TOOLCHAIN_FILE,
};
use crate::error::SetupError;

/// Operating-system family the setup branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
}

impl OsFamily {
    /// Family of the host this binary was compiled for
    pub fn host() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a Rust OS name (`std::env::consts::OS`) to a family
    ///
    /// Anything that is neither macOS nor Windows takes the Linux path.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Linux,
        }
    }

    /// Human-readable OS name as reported in platform detection
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "Darwin",
            Self::Windows => "Windows",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Immutable inputs shared by every setup step
#[derive(Debug, Clone)]
pub struct RunContext {
    os: OsFamily,
    project_root: PathBuf,
    build_dir: PathBuf,
    search_path: Option<OsString>,
}

impl RunContext {
    /// Create a context for `os` rooted at `project_root`
    ///
    /// The build directory is always `<project_root>/build`.
    pub fn new(os: OsFamily, project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let build_dir = project_root.join(BUILD_DIR_NAME);
        Self {
            os,
            project_root,
            build_dir,
            search_path: None,
        }
    }

    /// Create a context for the host OS, resolving `project_root` to an absolute path
    pub fn for_host(project_root: &Path) -> Result<Self, SetupError> {
        let root = project_root
            .canonicalize()
            .map_err(|e| SetupError::ProjectRoot {
                path: project_root.to_path_buf(),
                error: e.to_string(),
            })?;
        if !root.is_dir() {
            return Err(SetupError::ProjectRoot {
                path: root,
                error: "not a directory".to_string(),
            });
        }
        Ok(Self::new(OsFamily::host(), strip_verbatim(root)))
    }

    /// Locate executables using `path` instead of the process `PATH`
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn os(&self) -> OsFamily {
        self.os
    }

    pub fn is_linux(&self) -> bool {
        self.os == OsFamily::Linux
    }

    pub fn is_macos(&self) -> bool {
        self.os == OsFamily::MacOs
    }

    pub fn is_windows(&self) -> bool {
        self.os == OsFamily::Windows
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Explicit search path, if one was set
    pub fn search_path(&self) -> Option<&OsString> {
        self.search_path.as_ref()
    }

    /// Vendored package manager directory
    pub fn vcpkg_dir(&self) -> PathBuf {
        self.project_root.join(VCPKG_DIR_NAME)
    }

    /// Vendored package manager executable
    pub fn vcpkg_executable(&self) -> PathBuf {
        let name = if self.is_windows() {
            VCPKG_EXE_WINDOWS
        } else {
            VCPKG_EXE_UNIX
        };
        self.vcpkg_dir().join(name)
    }

    /// Script that builds the vendored package manager
    pub fn vcpkg_bootstrap_script(&self) -> PathBuf {
        let name = if self.is_windows() {
            VCPKG_BOOTSTRAP_WINDOWS
        } else {
            VCPKG_BOOTSTRAP_UNIX
        };
        self.vcpkg_dir().join(name)
    }

    /// Toolchain file supplied by the vendored package manager
    pub fn toolchain_file(&self) -> PathBuf {
        VCPKG_TOOLCHAIN_FILE
            .iter()
            .fold(self.vcpkg_dir(), |path, part| path.join(part))
    }

    /// Where the build places the application executable
    ///
    /// Multi-config generators on Windows add a per-configuration subdirectory.
    pub fn executable_path(&self) -> PathBuf {
        let dir = self.build_dir.join(EXECUTABLE_SUBDIR);
        if self.is_windows() {
            dir.join(BUILD_CONFIG).join(format!("{EXECUTABLE_NAME}.exe"))
        } else {
            dir.join(EXECUTABLE_NAME)
        }
    }
}

/// Drop the `\\?\` prefix `canonicalize` adds on Windows
///
/// The generator does not accept verbatim paths for `-S`/`-B`.
fn strip_verbatim(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(stripped) if !stripped.starts_with("UNC\\") => PathBuf::from(stripped),
        _ => path,
    }
}
