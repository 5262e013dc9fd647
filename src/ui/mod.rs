//! Terminal output for check reports.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`hints`] for remediation and quick-start text
//!
//! # Example
//!
//! ```
//! use pheno_check::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("PhenoAI Installation Test");
//! ui.status(StatusKind::Success, "numpy is available");
//! assert!(ui.has_line(StatusKind::Success, "numpy"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CheckTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show the report banner.
    fn show_header(&mut self, title: &str);

    /// Start a new section (one per check).
    fn show_section(&mut self, title: &str);

    /// Display a line tagged with a status icon.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display captured output from a child process.
    fn command_output(&mut self, output: &str);

    /// Show the final tally.
    fn show_summary(&mut self, passed: usize, total: usize);

    /// Show a guidance block: a title followed by indented lines.
    fn show_guidance(&mut self, title: &str, lines: &[String]);

    /// Display a success line.
    fn success(&mut self, msg: &str) {
        self.status(StatusKind::Success, msg);
    }

    /// Display a warning line.
    fn warning(&mut self, msg: &str) {
        self.status(StatusKind::Warning, msg);
    }

    /// Display an error line.
    fn error(&mut self, msg: &str) {
        self.status(StatusKind::Failed, msg);
    }

    /// Display an informational line.
    fn info(&mut self, msg: &str) {
        self.status(StatusKind::Info, msg);
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, colors))
}
