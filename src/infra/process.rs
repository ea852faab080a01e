//! External process execution
//!
//! Every external tool the setup drives goes through [`CommandRunner`], so
//! the orchestration can be exercised without spawning real processes.
//! Invocations are blocking and have no timeout.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ProcessError;
use crate::infra::tools;

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name (looked up on the search path) or path
    pub program: OsString,
    /// Arguments in order
    pub args: Vec<OsString>,
    /// Working directory, if different from the current one
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append an argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir`
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Program name as a lossy string
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Arguments as lossy strings
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the setup steps
pub trait CommandRunner {
    /// Run to completion with output going to the terminal
    ///
    /// Fails if the program cannot be started or exits unsuccessfully.
    fn run(&mut self, spec: &CommandSpec) -> Result<(), ProcessError>;

    /// Run and capture stdout and stderr, best effort
    ///
    /// Returns `None` if the program is missing or fails.
    fn capture(&mut self, spec: &CommandSpec) -> Option<String>;
}

/// Runs commands as real child processes
#[derive(Debug, Default, Clone)]
pub struct SystemRunner {
    search_path: Option<OsString>,
    stdout_to_stderr: bool,
}

impl SystemRunner {
    /// Create a runner resolving programs on the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve programs on `path` and hand it to children as their `PATH`
    #[must_use]
    pub fn with_search_path(mut self, path: Option<OsString>) -> Self {
        self.search_path = path;
        self
    }

    /// Send child stdout to our stderr, keeping stdout free for JSON output
    #[must_use]
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn build(&self, spec: &CommandSpec) -> Result<Command, ProcessError> {
        let program = self.resolve(&spec.program).ok_or_else(|| ProcessError::NotFound {
            program: spec.program_name(),
        })?;

        let mut cmd = Command::new(program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.current_dir {
            cmd.current_dir(dir);
        }
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }
        Ok(cmd)
    }

    fn resolve(&self, program: &OsStr) -> Option<PathBuf> {
        let path = Path::new(program);
        if path.components().count() > 1 || path.is_absolute() {
            return Some(path.to_path_buf());
        }
        tools::locate(&program.to_string_lossy(), self.search_path.as_deref())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<(), ProcessError> {
        tracing::debug!("Running: {spec}");
        let mut cmd = self.build(spec)?;
        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        }

        let status = cmd.status().map_err(|e| ProcessError::Spawn {
            command: spec.to_string(),
            error: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!("{spec} exited with {status}");
            Err(ProcessError::Failed {
                command: spec.to_string(),
                code: status.code(),
            })
        }
    }

    fn capture(&mut self, spec: &CommandSpec) -> Option<String> {
        tracing::debug!("Probing: {spec}");
        let output = self
            .build(spec)
            .ok()?
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        Some(format!("{stdout}{stderr}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display() {
        let spec = CommandSpec::new("cmake")
            .arg("--build")
            .arg("/p/build")
            .args(["--config", "Release"]);
        assert_eq!(spec.to_string(), "cmake --build /p/build --config Release");
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut runner =
            SystemRunner::new().with_search_path(Some(dir.path().as_os_str().to_owned()));

        let err = runner
            .run(&CommandSpec::new("definitely-not-a-tool"))
            .unwrap_err();
        assert!(matches!(err, ProcessError::NotFound { .. }));
        assert!(runner
            .capture(&CommandSpec::new("definitely-not-a-tool"))
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reports_command_line() {
        let mut runner = SystemRunner::new();
        let spec = CommandSpec::new("/bin/sh").args(["-c", "exit 3"]);

        let err = runner.run(&spec).unwrap_err();
        match err {
            ProcessError::Failed { command, code } => {
                assert_eq!(command, "/bin/sh -c exit 3");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_collects_output() {
        let mut runner = SystemRunner::new();
        let spec = CommandSpec::new("/bin/sh").args(["-c", "echo tool 1.2.3"]);
        let out = runner.capture(&spec).unwrap();
        assert!(out.contains("1.2.3"));
    }
}
