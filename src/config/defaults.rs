//! Default configuration values
//!
//! The project layout the setup tool expects. None of these are user
//! configurable; the build directory in particular is always
//! `<project-root>/build`.

/// Display name of the application being built
pub const APP_NAME: &str = "VivaLux";

/// Base name of the executable produced by the build
pub const EXECUTABLE_NAME: &str = "VivaLux";

/// Build output directory, relative to the project root
pub const BUILD_DIR_NAME: &str = "build";

/// Subdirectory of the build directory that receives the executable
pub const EXECUTABLE_SUBDIR: &str = "src";

/// Build type passed to the configure step and configuration passed to the build step
pub const BUILD_CONFIG: &str = "Release";

/// Vendored package manager directory, relative to the project root
pub const VCPKG_DIR_NAME: &str = "vcpkg";

/// Toolchain file, relative to the vendored package manager directory
pub const VCPKG_TOOLCHAIN_FILE: &[&str] = &["scripts", "buildsystems", "vcpkg.cmake"];

/// Vendored package manager executable (non-Windows)
pub const VCPKG_EXE_UNIX: &str = "vcpkg";

/// Vendored package manager executable (Windows)
pub const VCPKG_EXE_WINDOWS: &str = "vcpkg.exe";

/// Bootstrap script (non-Windows)
pub const VCPKG_BOOTSTRAP_UNIX: &str = "bootstrap-vcpkg.sh";

/// Bootstrap script (Windows)
pub const VCPKG_BOOTSTRAP_WINDOWS: &str = "bootstrap-vcpkg.bat";

/// Build-configuration generator
pub const CMAKE: &str = "cmake";

/// Version-control client
pub const GIT: &str = "git";

/// System package manager required on macOS
pub const BREW: &str = "brew";

/// Optional per-project settings file, relative to the project root
pub const PROJECT_CONFIG_FILE: &str = "vivalux-setup.toml";

/// Width of the banner lines printed around section headers
pub const BANNER_WIDTH: usize = 70;

/// Environment variable overriding the project root
pub const PROJECT_ROOT_ENV: &str = "VIVALUX_PROJECT_ROOT";
