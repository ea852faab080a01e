//! Progress reporting seam
//!
//! Steps describe what they are doing through [`Progress`]; the CLI decides
//! how (or whether) that reaches the terminal.

/// Sink for user-facing progress messages
pub trait Progress {
    /// Section banner
    fn header(&mut self, title: &str);

    /// Start of an action
    fn step(&mut self, message: &str);

    /// Something succeeded or was found
    fn success(&mut self, message: &str);

    /// Something failed or is missing
    fn error(&mut self, message: &str);

    /// Non-fatal problem
    fn warning(&mut self, message: &str);

    /// Plain informational line
    fn line(&mut self, message: &str);
}
