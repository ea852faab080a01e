//! Build-directory reset
//!
//! Deletes any previous build output and recreates an empty build directory.
//! Nothing is restored if a later step fails.

use crate::core::context::RunContext;
use crate::core::progress::Progress;
use crate::error::SetupError;
use crate::infra::filesystem;

/// Remove the build directory if present
///
/// Returns whether a previous directory was removed.
pub fn clean_build_dir(
    ctx: &RunContext,
    progress: &mut dyn Progress,
) -> Result<bool, SetupError> {
    progress.step("Cleaning previous build directory");

    let removed = filesystem::remove_dir_all(ctx.build_dir())?;
    if removed {
        progress.success("Build directory removed");
    } else {
        progress.success("No previous build directory found");
    }
    Ok(removed)
}

/// Create the build directory, including parents
pub fn create_build_dir(ctx: &RunContext, progress: &mut dyn Progress) -> Result<(), SetupError> {
    progress.step("Creating build directory");
    filesystem::create_dir_all(ctx.build_dir())?;
    progress.success("Build directory created");
    Ok(())
}

/// Clean then create the build directory
pub fn reset_build_dir(
    ctx: &RunContext,
    progress: &mut dyn Progress,
) -> Result<bool, SetupError> {
    let removed = clean_build_dir(ctx, progress)?;
    create_build_dir(ctx, progress)?;
    Ok(removed)
}
