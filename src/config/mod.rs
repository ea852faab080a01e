//! Configuration and constants
//!
//! - [`defaults`] - Fixed project layout and tool names
//! - [`project`] - Optional per-project settings file

pub mod defaults;
pub mod project;
