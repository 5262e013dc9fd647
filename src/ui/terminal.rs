//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{CheckTheme, OutputMode, StatusKind, UserInterface};

/// Width of the rule printed around the report.
const RULE_WIDTH: usize = 40;

/// Terminal UI implementation.
///
/// Everything goes to stdout, except that in [`OutputMode::Silent`] failures
/// are still written to stderr so a machine-readable stdout stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            CheckTheme::new()
        } else {
            CheckTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    fn visible(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Success | StatusKind::Info => self.mode.shows_details(),
            StatusKind::Warning | StatusKind::Failed => self.mode.shows_status(),
        }
    }

    fn rule(&self) -> String {
        self.theme.dim.apply_to("=".repeat(RULE_WIDTH)).to_string()
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            let rule = self.rule();
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
            writeln!(self.out, "{}", rule).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "\n{}", self.theme.format_section(title)).ok();
        }
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        let line = self.theme.format_status(kind, msg);
        if self.visible(kind) {
            writeln!(self.out, "{}", line).ok();
        } else if kind == StatusKind::Failed {
            writeln!(self.err, "{}", line).ok();
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                writeln!(self.out, "  {}", self.theme.dim.apply_to(line)).ok();
            }
        }
    }

    fn show_summary(&mut self, passed: usize, total: usize) {
        if self.mode.shows_status() {
            let rule = self.rule();
            let style = if passed == total {
                &self.theme.success
            } else {
                &self.theme.error
            };
            writeln!(self.out, "\n{}", rule).ok();
            writeln!(
                self.out,
                "{} {}",
                self.theme.highlight.apply_to("Test Results:"),
                style.apply_to(format!("{}/{} tests passed", passed, total))
            )
            .ok();
        }
    }

    fn show_guidance(&mut self, title: &str, lines: &[String]) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}", self.theme.highlight.apply_to(title)).ok();
            for line in lines {
                writeln!(self.out, "  {}", self.theme.hint.apply_to(line)).ok();
            }
        }
    }
}
