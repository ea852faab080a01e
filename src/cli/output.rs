//! Output formatting
//!
//! Banner, step and status lines for the terminal, gated by the global
//! quiet/JSON settings. Errors always go to stderr.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::defaults::BANNER_WIDTH;
use crate::core::progress::Progress;

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);
static VERBOSITY: AtomicU8 = AtomicU8::new(0);

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Step prefix (arrow)
    pub const STEP: &str = "➜";
}

/// Resolved output settings for this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub json: bool,
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make these settings visible to the `print_*` helpers
    pub fn apply_global(&self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
        VERBOSITY.store(self.verbose, Ordering::Relaxed);
    }
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

pub fn verbosity() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

fn progress_enabled() -> bool {
    !is_quiet() && !is_json()
}

/// Banner line of `=`
pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Print a section header framed by banner lines
pub fn print_header(title: &str) {
    if progress_enabled() {
        println!("\n{}", banner());
        println!("  {title}");
        println!("{}", banner());
    }
}

/// Print the start of an action
pub fn print_step(message: &str) {
    if progress_enabled() {
        println!("\n{} {message}", status::STEP);
    }
}

/// Print a success line
pub fn print_success(message: &str) {
    if progress_enabled() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning line
pub fn print_warning(message: &str) {
    if progress_enabled() {
        println!("{} {message}", status::WARNING);
    }
}

/// Print a plain line
pub fn print_info(message: &str) {
    if progress_enabled() {
        println!("{message}");
    }
}

/// Print an error line, regardless of quiet or JSON mode
pub fn print_error(message: &str) {
    eprintln!("{} {message}", status::ERROR);
}

/// Report a top-level error, with its causes when verbose
pub fn display_error(error: &anyhow::Error) {
    print_error(&error.to_string());
    if verbosity() > 0 {
        for cause in error.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
    }
}

/// [`Progress`] sink that writes to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn header(&mut self, title: &str) {
        print_header(title);
    }

    fn step(&mut self, message: &str) {
        print_step(message);
    }

    fn success(&mut self, message: &str) {
        print_success(message);
    }

    fn error(&mut self, message: &str) {
        print_error(message);
    }

    fn warning(&mut self, message: &str) {
        print_warning(message);
    }

    fn line(&mut self, message: &str) {
        print_info(message);
    }
}
