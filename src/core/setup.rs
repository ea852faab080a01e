//! Setup orchestration
//!
//! Runs the provisioning steps in a fixed order. The first failing step
//! stops the run; earlier side effects (such as a removed build directory)
//! are left as they are.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::config::defaults::APP_NAME;
use crate::core::context::RunContext;
use crate::core::platform::{self, PlatformInfo};
use crate::core::progress::Progress;
use crate::core::report::{self, CompletionReport};
use crate::core::deps::{self, DependencyReport};
use crate::core::{build_dir, cmake, vcpkg};
use crate::error::SetupError;
use crate::infra::process::CommandRunner;

/// Setup steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PlatformDetection,
    DependencyCheck,
    PackageManagerBootstrap,
    BuildDirectoryReset,
    Configure,
    Build,
    CompletionReport,
}

impl Step {
    /// All steps in execution order
    pub const ALL: [Step; 7] = [
        Step::PlatformDetection,
        Step::DependencyCheck,
        Step::PackageManagerBootstrap,
        Step::BuildDirectoryReset,
        Step::Configure,
        Step::Build,
        Step::CompletionReport,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::PlatformDetection => "Platform detection",
            Self::DependencyCheck => "Dependency check",
            Self::PackageManagerBootstrap => "vcpkg setup",
            Self::BuildDirectoryReset => "Build directory reset",
            Self::Configure => "CMake configuration",
            Self::Build => "Build",
            Self::CompletionReport => "Completion report",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct SetupSummary {
    pub platform: PlatformInfo,
    pub dependencies: DependencyReport,
    pub completed: Vec<Step>,
    pub report: CompletionReport,
}

/// The step that stopped the run and why
#[derive(Error, Debug)]
#[error("{step} failed: {source}")]
pub struct StepFailure {
    /// Step that failed
    pub step: Step,
    /// Steps that finished before it
    pub completed: Vec<Step>,
    /// Underlying error
    #[source]
    pub source: SetupError,
}

/// Record a finished step, or turn its error into a [`StepFailure`]
fn gate<T>(
    step: Step,
    completed: &mut Vec<Step>,
    result: Result<T, SetupError>,
) -> Result<T, StepFailure> {
    match result {
        Ok(value) => {
            tracing::info!("{step} finished");
            completed.push(step);
            Ok(value)
        }
        Err(source) => {
            tracing::info!("{step} failed: {source}");
            Err(StepFailure {
                step,
                completed: completed.clone(),
                source,
            })
        }
    }
}

/// Run the full setup for `ctx`
pub fn run_setup(
    ctx: &RunContext,
    runner: &mut dyn CommandRunner,
    progress: &mut dyn Progress,
) -> Result<SetupSummary, StepFailure> {
    let mut completed = Vec::with_capacity(Step::ALL.len());

    progress.header(&format!("{} PROJECT SETUP", APP_NAME.to_uppercase()));
    progress.line(&format!("Project root: {}", ctx.project_root().display()));

    let platform = platform::detect(ctx, runner);
    platform::print(&platform, progress);
    completed.push(Step::PlatformDetection);

    let dependencies = gate(
        Step::DependencyCheck,
        &mut completed,
        deps::check_dependencies(ctx, runner, progress),
    )?;
    gate(
        Step::PackageManagerBootstrap,
        &mut completed,
        vcpkg::ensure_vcpkg(ctx, runner, progress),
    )?;
    gate(
        Step::BuildDirectoryReset,
        &mut completed,
        build_dir::reset_build_dir(ctx, progress),
    )?;
    gate(
        Step::Configure,
        &mut completed,
        cmake::configure(ctx, runner, progress),
    )?;
    gate(
        Step::Build,
        &mut completed,
        cmake::build(ctx, runner, progress),
    )?;

    progress.header("SETUP COMPLETE");
    progress.success("Project configured and built successfully!");
    let report = report::completion_report(ctx);
    report::print(&report, progress);
    completed.push(Step::CompletionReport);

    Ok(SetupSummary {
        platform,
        dependencies,
        completed,
        report,
    })
}
