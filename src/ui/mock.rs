//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    headers: Vec<String>,
    sections: Vec<String>,
    lines: Vec<(StatusKind, String)>,
    command_output: Vec<String>,
    summaries: Vec<(usize, usize)>,
    guidance: Vec<(String, Vec<String>)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured status lines.
    pub fn lines(&self) -> &[(StatusKind, String)] {
        &self.lines
    }

    /// Status lines of one kind.
    pub fn lines_of(&self, kind: StatusKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    /// Whether a status line of `kind` contains `needle`.
    pub fn has_line(&self, kind: StatusKind, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(k, msg)| *k == kind && msg.contains(needle))
    }

    /// Whether any status line, of any kind, contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, m)| m.contains(needle))
    }

    /// Get all captured command output.
    pub fn captured_output(&self) -> &[String] {
        &self.command_output
    }

    /// Get all captured summaries as `(passed, total)`.
    pub fn summaries(&self) -> &[(usize, usize)] {
        &self.summaries
    }

    /// Get all captured guidance blocks.
    pub fn guidance(&self) -> &[(String, Vec<String>)] {
        &self.guidance
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.lines.push((kind, msg.to_string()));
    }

    fn command_output(&mut self, output: &str) {
        self.command_output.push(output.to_string());
    }

    fn show_summary(&mut self, passed: usize, total: usize) {
        self.summaries.push((passed, total));
    }

    fn show_guidance(&mut self, title: &str, lines: &[String]) {
        self.guidance.push((title.to_string(), lines.to_vec()));
    }
}
