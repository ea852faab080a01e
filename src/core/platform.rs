//! Platform detection
//!
//! Reports what the setup is running on. Never fails: anything that cannot
//! be determined is simply left out of the report.

use serde::Serialize;

use crate::core::context::{OsFamily, RunContext};
use crate::core::progress::Progress;
use crate::infra::process::{CommandRunner, CommandSpec};
use crate::infra::tools::extract_version;

/// What the setup is running on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    /// OS family the setup branches on
    pub os: OsFamily,
    /// CPU architecture
    pub arch: String,
    /// Version of the Rust toolchain this tool was built with
    pub rustc_version: String,
    /// Target triple this tool was built for
    pub target: String,
    /// OS release, reported on macOS and Windows only
    pub os_version: Option<String>,
}

/// Collect platform information for `ctx`
pub fn detect(ctx: &RunContext, runner: &mut dyn CommandRunner) -> PlatformInfo {
    PlatformInfo {
        os: ctx.os(),
        arch: std::env::consts::ARCH.to_string(),
        rustc_version: option_env!("VERGEN_RUSTC_SEMVER")
            .unwrap_or("unknown")
            .to_string(),
        target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
            .unwrap_or("unknown")
            .to_string(),
        os_version: os_version_probe(ctx.os())
            .and_then(|spec| runner.capture(&spec))
            .and_then(|out| extract_version(&out)),
    }
}

/// Command that reports the OS release, if the family has one
pub fn os_version_probe(os: OsFamily) -> Option<CommandSpec> {
    match os {
        OsFamily::MacOs => Some(CommandSpec::new("sw_vers").arg("-productVersion")),
        OsFamily::Windows => Some(CommandSpec::new("cmd").args(["/C", "ver"])),
        OsFamily::Linux => None,
    }
}

/// Print the platform section
pub fn print(info: &PlatformInfo, progress: &mut dyn Progress) {
    progress.header("PLATFORM DETECTION");
    progress.line(&format!("OS: {}", info.os));
    progress.line(&format!("Architecture: {}", info.arch));
    progress.line(&format!("Rust Version: {} ({})", info.rustc_version, info.target));

    if let Some(version) = &info.os_version {
        match info.os {
            OsFamily::MacOs => progress.line(&format!("macOS Version: {version}")),
            OsFamily::Windows => progress.line(&format!("Windows Version: {version}")),
            OsFamily::Linux => {}
        }
    }
}
