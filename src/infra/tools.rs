//! Executable lookup
//!
//! Resolves tool names against a search path with the `which` crate.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

/// Locate `tool` on `search_path`, or on the process `PATH` when none is given
pub fn locate(tool: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let found = match search_path {
        Some(paths) => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            which::which_in(tool, Some(paths), cwd)
        }
        None => which::which(tool),
    };

    match found {
        Ok(path) => {
            tracing::debug!("Resolved {tool} to {}", path.display());
            Some(path)
        }
        Err(e) => {
            tracing::debug!("Could not resolve {tool}: {e}");
            None
        }
    }
}

static VERSION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Extract a version string from `--version` style output
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .get_or_init(|| Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok())
        .as_ref()?
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
