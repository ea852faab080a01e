//! Dependency check
//!
//! Verifies the external tools the setup shells out to are on the search
//! path. Every tool is checked before failing so the user sees the full
//! list of what to install.

use std::path::PathBuf;

use crate::config::defaults::{BREW, CMAKE, GIT};
use crate::core::context::{OsFamily, RunContext};
use crate::core::progress::Progress;
use crate::error::SetupError;
use crate::infra::process::{CommandRunner, CommandSpec};
use crate::infra::tools::{extract_version, locate};

/// A tool that must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredTool {
    /// Executable name
    pub name: &'static str,
    /// Why the tool is needed, shown when it is missing
    pub hint: Option<&'static str>,
}

/// Tools required on `os`, in check order
pub fn required_tools(os: OsFamily) -> Vec<RequiredTool> {
    let mut tools = vec![
        RequiredTool {
            name: CMAKE,
            hint: None,
        },
        RequiredTool {
            name: GIT,
            hint: None,
        },
    ];
    if os == OsFamily::MacOs {
        tools.push(RequiredTool {
            name: BREW,
            hint: Some("needed for macOS dependencies"),
        });
    }
    tools
}

/// Outcome of looking for one tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Executable name
    pub name: String,
    /// Resolved location, if found
    pub path: Option<PathBuf>,
    /// Version reported by `--version`, if it could be read
    pub version: Option<String>,
}

impl ToolStatus {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Result of the full dependency check
#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    pub tools: Vec<ToolStatus>,
}

impl DependencyReport {
    /// Names of missing tools, in check order
    pub fn missing(&self) -> Vec<String> {
        self.tools
            .iter()
            .filter(|t| !t.found())
            .map(|t| t.name.clone())
            .collect()
    }

    pub fn all_found(&self) -> bool {
        self.tools.iter().all(ToolStatus::found)
    }
}

/// Look for every tool required on `ctx.os()`
pub fn check_dependencies(
    ctx: &RunContext,
    runner: &mut dyn CommandRunner,
    progress: &mut dyn Progress,
) -> Result<DependencyReport, SetupError> {
    progress.header("DEPENDENCY CHECK");

    let search_path = ctx.search_path().map(|p| p.as_os_str());
    let mut report = DependencyReport::default();

    for tool in required_tools(ctx.os()) {
        let path = locate(tool.name, search_path);
        let version = path.as_ref().and_then(|p| {
            runner
                .capture(&CommandSpec::new(p.as_os_str()).arg("--version"))
                .and_then(|out| extract_version(&out))
        });

        match (&path, &version, tool.hint) {
            (Some(_), Some(v), _) => progress.success(&format!("Found {} (v{v})", tool.name)),
            (Some(_), None, _) => progress.success(&format!("Found {}", tool.name)),
            (None, _, Some(hint)) => progress.error(&format!("Missing {} ({hint})", tool.name)),
            (None, _, None) => progress.error(&format!("Missing {}", tool.name)),
        }

        report.tools.push(ToolStatus {
            name: tool.name.to_string(),
            path,
            version,
        });
    }

    let missing = report.missing();
    if !missing.is_empty() {
        tracing::info!("Missing tools: {}", missing.join(", "));
        return Err(SetupError::MissingTools { tools: missing });
    }

    progress.success("All required tools found");
    Ok(report)
}
