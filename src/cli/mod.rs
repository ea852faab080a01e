//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! The setup steps themselves live in [`crate::core`].

pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::defaults::PROJECT_ROOT_ENV;
use crate::config::project::ProjectConfig;
use crate::core::context::RunContext;
use crate::core::setup::{run_setup, SetupSummary, StepFailure};
use crate::error::Cancelled;
use crate::infra::process::SystemRunner;
use output::{ConsoleProgress, OutputConfig};

/// vivalux-setup - configure and build VivaLux
///
/// Checks build tools, bootstraps vcpkg, recreates the build directory and
/// runs the CMake configure and build phases. Takes no arguments beyond the
/// output flags; every invocation runs the full sequence.
#[derive(Parser, Debug)]
#[command(name = "vivalux-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON summary for scripting
    #[arg(long)]
    pub json: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, env = PROJECT_ROOT_ENV, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

impl Cli {
    /// Log level implied by `-v`
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Run the setup
    ///
    /// The blocking step sequence runs off the async runtime so an interrupt
    /// can be reported while a child process is still running.
    pub async fn run(self) -> Result<()> {
        let root = match self.project_root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let ctx = RunContext::for_host(&root)?;

        let settings = ProjectConfig::load(ctx.project_root())?;
        let output = OutputConfig::new(
            self.quiet || settings.output.quiet.unwrap_or(false),
            self.json || settings.output.json.unwrap_or(false),
            self.verbose,
        );
        output.apply_global();
        tracing::debug!("Output settings: {output:?}");

        let json = output.json;
        let outcome = tokio::select! {
            joined = tokio::task::spawn_blocking(move || {
                let mut runner = SystemRunner::new()
                    .with_search_path(ctx.search_path().cloned())
                    .with_stdout_to_stderr(json);
                run_setup(&ctx, &mut runner, &mut ConsoleProgress)
            }) => finish_blocking(joined)?,
            Ok(()) = tokio::signal::ctrl_c() => return Err(Cancelled.into()),
        };

        match outcome {
            Ok(summary) => {
                if json {
                    print_json_success(&summary)?;
                }
                Ok(())
            }
            Err(failure) => {
                if json {
                    print_json_failure(&failure)?;
                }
                Err(failure.into())
            }
        }
    }
}

/// Unwrap the blocking task's result, reporting a panic as an unexpected error
fn finish_blocking<T>(joined: Result<T, tokio::task::JoinError>) -> Result<T> {
    joined.map_err(|e| anyhow::anyhow!("Unexpected error: {e}"))
}

fn print_json_success(summary: &SetupSummary) -> Result<()> {
    let tools: Vec<_> = summary
        .dependencies
        .tools
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name,
                "path": tool.path.as_ref().map(|p| p.display().to_string()),
                "version": tool.version,
            })
        })
        .collect();

    let result = serde_json::json!({
        "status": "success",
        "platform": serde_json::to_value(&summary.platform)
            .context("Failed to serialize platform information")?,
        "completed": serde_json::to_value(&summary.completed)
            .context("Failed to serialize completed steps")?,
        "tools": tools,
        "executable": summary.report.executable.display().to_string(),
        "build_dir": summary.report.build_dir.display().to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_json_failure(failure: &StepFailure) -> Result<()> {
    let result = serde_json::json!({
        "status": "error",
        "failed_step": serde_json::to_value(failure.step)
            .context("Failed to serialize failed step")?,
        "completed": serde_json::to_value(&failure.completed)
            .context("Failed to serialize completed steps")?,
        "error": failure.source.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
