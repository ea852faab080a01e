//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! project tree plus a directory of fake tools that becomes the `PATH` of
//! the binary under test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
pub struct TestProject {
    /// Temporary project root
    pub dir: TempDir,
    /// Temporary directory used as the only `PATH` entry
    pub bin: TempDir,
}

impl TestProject {
    /// Create an empty project and an empty tool directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            bin: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Pretend vcpkg has already been bootstrapped
    pub fn with_vcpkg(&self) {
        self.create_file("vcpkg/vcpkg", "");
    }

    /// Provide the vcpkg toolchain file
    pub fn with_toolchain(&self) {
        self.create_file("vcpkg/scripts/buildsystems/vcpkg.cmake", "");
    }

    /// Leave output from an earlier build behind
    pub fn with_stale_build(&self) {
        self.create_file("build/CMakeCache.txt", "stale");
        self.create_file("build/src/old.o", "stale");
    }

    /// Path of the log the fake cmake appends its arguments to
    pub fn cmake_log_path(&self) -> PathBuf {
        self.bin.path().join("cmake.log")
    }

    /// Every fake cmake invocation, one line each
    pub fn cmake_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.cmake_log_path())
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Install an executable shell script as `name` on the test `PATH`
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// Install a fake cmake; `build_exit` is the exit status of `--build`
    #[cfg(unix)]
    pub fn fake_cmake(&self, build_exit: i32) {
        let log = self.cmake_log_path();
        self.fake_tool(
            "cmake",
            &format!(
                r#"if [ "$1" = "--version" ]; then echo "cmake version 3.28.1"; exit 0; fi
echo "$*" >> "{}"
echo "fake cmake output"
if [ "$1" = "--build" ]; then exit {build_exit}; fi
exit 0"#,
                log.display()
            ),
        );
    }

    /// Install fake cmake, git and brew that all succeed
    #[cfg(unix)]
    pub fn all_tools(&self) {
        self.fake_cmake(0);
        self.fake_tool("git", r#"echo "git version 2.43.0""#);
        self.fake_tool("brew", r#"echo "Homebrew 4.2.0""#);
    }

    /// Setup command running in `dir` with only the fake tools on `PATH`
    pub fn setup_command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vivalux-setup"));
        cmd.current_dir(dir)
            .env("PATH", self.bin.path())
            .env_remove("VIVALUX_PROJECT_ROOT")
            .env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd
    }

    /// Run the setup binary in the project with only the fake tools on `PATH`
    pub fn run_setup(&self, args: &[&str]) -> Output {
        self.setup_command(self.dir.path(), args)
            .output()
            .expect("Failed to execute vivalux-setup")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined stdout and stderr
pub fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
