//! Package-manager bootstrap
//!
//! Makes sure the vendored vcpkg executable exists, running its bootstrap
//! script when it does not.

use crate::core::context::RunContext;
use crate::core::progress::Progress;
use crate::error::SetupError;
use crate::infra::process::{CommandRunner, CommandSpec};

/// What the bootstrap step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The executable was already present
    AlreadyPresent,
    /// The bootstrap script ran successfully
    Bootstrapped,
}

/// Command that runs the bootstrap script for `ctx`
///
/// Windows runs the batch file directly, leaving argument quoting to the
/// standard library; everything else goes through `bash`.
pub fn bootstrap_command(ctx: &RunContext) -> CommandSpec {
    let script = ctx.vcpkg_bootstrap_script();
    let spec = if ctx.is_windows() {
        CommandSpec::new(script)
    } else {
        CommandSpec::new("bash").arg(script)
    };
    spec.current_dir(ctx.vcpkg_dir())
}

/// Ensure the vendored package manager is usable
pub fn ensure_vcpkg(
    ctx: &RunContext,
    runner: &mut dyn CommandRunner,
    progress: &mut dyn Progress,
) -> Result<BootstrapOutcome, SetupError> {
    let executable = ctx.vcpkg_executable();
    if executable.exists() {
        tracing::debug!("vcpkg present at {}", executable.display());
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    progress.header("VCPKG SETUP");
    progress.step("vcpkg not found, attempting to initialize...");

    let script = ctx.vcpkg_bootstrap_script();
    if !script.exists() {
        return Err(SetupError::BootstrapScriptNotFound { path: script });
    }

    progress.step("Bootstrapping vcpkg");
    runner
        .run(&bootstrap_command(ctx))
        .map_err(SetupError::BootstrapFailed)?;

    progress.success("vcpkg bootstrapped");
    Ok(BootstrapOutcome::Bootstrapped)
}
