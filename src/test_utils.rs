//! Test utilities
//!
//! Fakes for the process and progress seams, plus proptest generators.

use std::collections::HashMap;
use std::path::Path;

use crate::core::progress::Progress;
use crate::error::ProcessError;
use crate::infra::process::{CommandRunner, CommandSpec};

/// Records every command instead of running it
///
/// Commands succeed unless their program (by file name) was registered with
/// [`RecordingRunner::failing`].
#[derive(Debug, Default)]
pub struct RecordingRunner {
    /// Commands passed to `run`, in order
    pub ran: Vec<CommandSpec>,
    /// Commands passed to `capture`, in order
    pub captured: Vec<CommandSpec>,
    failing: Vec<String>,
    outputs: HashMap<String, String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `run` fail for `program`
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Make `capture` return `output` for `program`
    pub fn with_capture(mut self, program: &str, output: &str) -> Self {
        self.outputs.insert(program.to_string(), output.to_string());
        self
    }

    /// Whether any `run` invocation had `program` as its program
    pub fn ran_program(&self, program: &str) -> bool {
        self.ran.iter().any(|spec| program_key(spec) == program)
    }
}

fn program_key(spec: &CommandSpec) -> String {
    Path::new(&spec.program)
        .file_name()
        .map_or_else(|| spec.program_name(), |n| n.to_string_lossy().into_owned())
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<(), ProcessError> {
        self.ran.push(spec.clone());
        if self.failing.contains(&program_key(spec)) {
            return Err(ProcessError::Failed {
                command: spec.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn capture(&mut self, spec: &CommandSpec) -> Option<String> {
        self.captured.push(spec.clone());
        self.outputs.get(&program_key(spec)).cloned()
    }
}

/// Kind of a recorded progress message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Header,
    Step,
    Success,
    Error,
    Warning,
    Line,
}

/// Keeps every progress message for inspection
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub messages: Vec<(MessageKind, String)>,
}

impl RecordingProgress {
    /// Whether any message contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|(_, m)| m.contains(text))
    }

    /// Whether a message of `kind` contains `text`
    pub fn contains_kind(&self, kind: MessageKind, text: &str) -> bool {
        self.messages
            .iter()
            .any(|(k, m)| *k == kind && m.contains(text))
    }
}

impl Progress for RecordingProgress {
    fn header(&mut self, title: &str) {
        self.messages.push((MessageKind::Header, title.to_string()));
    }
    fn step(&mut self, message: &str) {
        self.messages.push((MessageKind::Step, message.to_string()));
    }
    fn success(&mut self, message: &str) {
        self.messages.push((MessageKind::Success, message.to_string()));
    }
    fn error(&mut self, message: &str) {
        self.messages.push((MessageKind::Error, message.to_string()));
    }
    fn warning(&mut self, message: &str) {
        self.messages.push((MessageKind::Warning, message.to_string()));
    }
    fn line(&mut self, message: &str) {
        self.messages.push((MessageKind::Line, message.to_string()));
    }
}

/// Check whether `path` is a directory with no entries
pub fn is_empty_dir(path: &Path) -> std::io::Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}

/// Create an executable shell script named `name` in `dir`
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake tool");
    path
}

pub mod generators {
    use crate::core::context::OsFamily;
    use proptest::prelude::*;

    /// Any supported OS family
    pub fn os_family() -> impl Strategy<Value = OsFamily> {
        prop_oneof![
            Just(OsFamily::Linux),
            Just(OsFamily::MacOs),
            Just(OsFamily::Windows),
        ]
    }

    /// A plausible project directory name
    pub fn dir_name() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_-]{0,20}"
    }
}
