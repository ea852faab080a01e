//! Configure and build steps
//!
//! Both phases drive the build-configuration generator. Configure picks a
//! per-family argument set; build is the same everywhere.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::defaults::{BUILD_CONFIG, CMAKE};
use crate::core::context::{OsFamily, RunContext};
use crate::core::progress::Progress;
use crate::error::SetupError;
use crate::infra::process::{CommandRunner, CommandSpec};

/// Resolved configure invocation for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurePlan {
    /// Generator command
    pub command: CommandSpec,
    /// Toolchain file that was looked for but not found, when falling back
    pub missing_toolchain: Option<PathBuf>,
}

/// Short description of what each family configures for
pub fn platform_description(os: OsFamily) -> &'static str {
    match os {
        OsFamily::Linux => "Linux (OpenGL)",
        OsFamily::MacOs => "macOS (Vulkan + MoltenVK)",
        OsFamily::Windows => "Windows (OpenGL with Visual Studio)",
    }
}

/// Whether configuring on `os` is impossible without the toolchain file
pub fn requires_toolchain(os: OsFamily) -> bool {
    os == OsFamily::MacOs
}

/// Decide the configure invocation for `ctx`
///
/// The toolchain argument is added exactly when the toolchain file exists.
/// Families that require it fail instead of falling back.
pub fn plan_configure(ctx: &RunContext) -> Result<ConfigurePlan, SetupError> {
    let toolchain = ctx.toolchain_file();
    let mut command = CommandSpec::new(CMAKE)
        .arg("-S")
        .arg(ctx.project_root())
        .arg("-B")
        .arg(ctx.build_dir())
        .arg(format!("-DCMAKE_BUILD_TYPE={BUILD_CONFIG}"));

    if toolchain.exists() {
        let mut define = OsString::from("-DCMAKE_TOOLCHAIN_FILE=");
        define.push(toolchain.as_os_str());
        command = command.arg(define);
        return Ok(ConfigurePlan {
            command,
            missing_toolchain: None,
        });
    }

    if requires_toolchain(ctx.os()) {
        return Err(SetupError::ToolchainRequired { path: toolchain });
    }

    Ok(ConfigurePlan {
        command,
        missing_toolchain: Some(toolchain),
    })
}

/// Run the configure phase
pub fn configure(
    ctx: &RunContext,
    runner: &mut dyn CommandRunner,
    progress: &mut dyn Progress,
) -> Result<ConfigurePlan, SetupError> {
    progress.header("CMAKE CONFIGURATION");
    progress.step(&format!(
        "Configuring CMake for {}",
        platform_description(ctx.os())
    ));

    let plan = plan_configure(ctx)?;
    if let Some(missing) = &plan.missing_toolchain {
        tracing::warn!(
            "vcpkg toolchain not found at {}, configuring without it",
            missing.display()
        );
        progress.warning(&format!(
            "vcpkg toolchain not found at {}",
            missing.display()
        ));
        progress.step("Attempting standard CMake configuration...");
    }

    progress.step("Running CMake configuration");
    runner.run(&plan.command)?;
    progress.success("CMake configuration complete");
    Ok(plan)
}

/// Generator invocation that compiles the configured build directory
pub fn build_command(ctx: &RunContext) -> CommandSpec {
    CommandSpec::new(CMAKE)
        .arg("--build")
        .arg(ctx.build_dir())
        .args(["--config", BUILD_CONFIG])
}

/// Run the build phase
pub fn build(
    ctx: &RunContext,
    runner: &mut dyn CommandRunner,
    progress: &mut dyn Progress,
) -> Result<(), SetupError> {
    progress.header("BUILD");
    progress.step("Building project");
    runner.run(&build_command(ctx))?;
    progress.success("Build complete");
    Ok(())
}
