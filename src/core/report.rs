//! Completion report
//!
//! Where the built executable ends up and what to run next.

use std::path::PathBuf;

use crate::config::defaults::{BANNER_WIDTH, BUILD_CONFIG, CMAKE};
use crate::core::context::RunContext;
use crate::core::progress::Progress;

/// Follow-up information printed after a successful setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    /// Expected location of the application executable
    pub executable: PathBuf,
    /// Build directory for incremental rebuilds
    pub build_dir: PathBuf,
    /// Command for an incremental rebuild, run from `build_dir`
    pub rebuild_command: String,
    /// Command that cleans and rebuilds from scratch
    pub setup_command: String,
}

/// Compute the report for `ctx`
pub fn completion_report(ctx: &RunContext) -> CompletionReport {
    CompletionReport {
        executable: ctx.executable_path(),
        build_dir: ctx.build_dir().to_path_buf(),
        rebuild_command: format!("{CMAKE} --build . --config {BUILD_CONFIG}"),
        setup_command: format!(
            "{} --project-root {}",
            env!("CARGO_PKG_NAME"),
            ctx.project_root().display()
        ),
    }
}

/// Print the next-steps section
pub fn print(report: &CompletionReport, progress: &mut dyn Progress) {
    progress.header("NEXT STEPS");

    progress.line("1. Run the application:");
    progress.line(&format!("   {}", report.executable.display()));
    progress.line("");
    progress.line("2. For development, use:");
    progress.line(&format!("   cd {}", report.build_dir.display()));
    progress.line(&format!("   {}", report.rebuild_command));
    progress.line("");
    progress.line("3. To clean and rebuild:");
    progress.line(&format!("   {}", report.setup_command));
    progress.line(&"=".repeat(BANNER_WIDTH));
}
