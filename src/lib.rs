//! vivalux-setup - configure and build VivaLux on Windows, macOS and Linux
//!
//! Detects the host platform, checks for the required build tools,
//! bootstraps the vendored vcpkg, resets the build directory and drives
//! CMake through its configure and build phases.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line parsing and terminal output
//! - [`core`] - The setup steps and their sequencing
//! - [`infra`] - Filesystem, tool lookup and process execution
//! - [`config`] - Project layout constants and optional project settings
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
