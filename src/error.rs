//! Error types for vivalux-setup
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },
}

/// External process errors
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Program could not be located on the search path
    #[error("Program '{program}' not found on the search path")]
    NotFound { program: String },

    /// Program could not be started
    #[error("Error executing command '{command}': {error}")]
    Spawn { command: String, error: String },

    /// Program ran but exited unsuccessfully
    #[error("Command failed: {command}{}", code.map(|c| format!(" (exit status {c})")).unwrap_or_default())]
    Failed { command: String, code: Option<i32> },
}

/// Project settings file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// The file is not valid TOML or has unexpected fields
    #[error("Failed to parse '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Top-level setup error type
///
/// Every variant aborts the remaining steps.
#[derive(Error, Debug)]
pub enum SetupError {
    /// One or more required tools are missing
    #[error("Please install missing tools: {}", tools.join(", "))]
    MissingTools { tools: Vec<String> },

    /// Neither the vendored package manager nor its bootstrap script exists
    #[error("vcpkg bootstrap script not found at {}", path.display())]
    BootstrapScriptNotFound { path: PathBuf },

    /// The bootstrap script ran but failed
    #[error("Failed to bootstrap vcpkg: {0}")]
    BootstrapFailed(#[source] ProcessError),

    /// The platform has no toolchain-free configure fallback
    #[error("vcpkg toolchain not found at {}. Please ensure vcpkg is properly initialized", path.display())]
    ToolchainRequired { path: PathBuf },

    /// Project root is missing or unusable
    #[error("Project root '{path}' is not accessible: {error}")]
    ProjectRoot { path: PathBuf, error: String },

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// External process error
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Project settings error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The user interrupted the run
#[derive(Error, Debug)]
#[error("Setup cancelled by user")]
pub struct Cancelled;
