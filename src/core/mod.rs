//! Core setup logic
//!
//! Each provisioning step lives in its own module and reaches the outside
//! world only through [`crate::infra`] and the [`progress::Progress`] sink.
//!
//! # Submodules
//!
//! - [`context`] - Run context (OS family, project and build paths)
//! - [`platform`] - Platform detection
//! - [`deps`] - Required tool check
//! - [`vcpkg`] - Vendored package-manager bootstrap
//! - [`build_dir`] - Build-directory reset
//! - [`cmake`] - Configure and build phases
//! - [`report`] - Completion report
//! - [`setup`] - Step sequencing
//! - [`progress`] - Progress reporting seam

pub mod build_dir;
pub mod cmake;
pub mod context;
pub mod deps;
pub mod platform;
pub mod progress;
pub mod report;
pub mod setup;
pub mod vcpkg;
