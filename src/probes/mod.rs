//! The individual installation checks.
//!
//! Each probe is a single best-effort attempt: it reports what it finds
//! through the [`UserInterface`] and returns a [`CheckResult`]. Probes never
//! return errors; every failure becomes a report line.
//!
//! - [`import`] - the package and its named symbols
//! - [`version`] - the package's `__version__` (informational)
//! - [`entry_point`] - the package's CLI under a bounded wait
//! - [`dependencies`] - required third-party libraries
//! - [`optional`] - optional libraries (informational, always passes)

pub mod dependencies;
pub mod entry_point;
pub mod import;
pub mod optional;
pub mod version;

pub use dependencies::check_dependencies;
pub use entry_point::check_entry_point;
pub use import::check_import;
pub use optional::check_optional_dependencies;
pub use version::check_version;

use serde::Serialize;

use crate::ui::{StatusKind, UserInterface};

/// Which check a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Import,
    Version,
    EntryPoint,
    Dependencies,
    OptionalDependencies,
}

impl CheckKind {
    /// Whether this check counts toward the pass tally.
    pub fn is_tallied(self) -> bool {
        !matches!(self, Self::Version)
    }

    /// Section title shown before the check runs.
    pub fn title(self) -> &'static str {
        match self {
            Self::Import => "Testing package import...",
            Self::Version => "Checking package version...",
            Self::EntryPoint => "Testing CLI interface...",
            Self::Dependencies => "Testing core dependencies...",
            Self::OptionalDependencies => "Testing optional dependencies...",
        }
    }
}

/// One line of a check's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub kind: StatusKind,
    pub message: String,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub passed: bool,
    pub tallied: bool,
    pub lines: Vec<ReportLine>,
}

impl CheckResult {
    /// Whether this result adds one to the tally.
    pub fn counts(&self) -> bool {
        self.tallied && self.passed
    }

    /// Whether any line of `kind` contains `needle`.
    pub fn has_line(&self, kind: StatusKind, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|l| l.kind == kind && l.message.contains(needle))
    }
}

/// Writes lines to the UI while keeping a copy for the report.
pub(crate) struct CheckRecorder<'a> {
    ui: &'a mut dyn UserInterface,
    kind: CheckKind,
    lines: Vec<ReportLine>,
}

impl<'a> CheckRecorder<'a> {
    /// Open the section for `kind`.
    pub(crate) fn start(kind: CheckKind, ui: &'a mut dyn UserInterface) -> Self {
        ui.show_section(kind.title());
        Self {
            ui,
            kind,
            lines: Vec::new(),
        }
    }

    pub(crate) fn status(&mut self, kind: StatusKind, message: impl Into<String>) {
        let message = message.into();
        self.ui.status(kind, &message);
        self.lines.push(ReportLine {
            kind,
            message,
        });
    }

    pub(crate) fn success(&mut self, message: impl Into<String>) {
        self.status(StatusKind::Success, message);
    }

    pub(crate) fn failure(&mut self, message: impl Into<String>) {
        self.status(StatusKind::Failed, message);
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.status(StatusKind::Warning, message);
    }

    pub(crate) fn info(&mut self, message: impl Into<String>) {
        self.status(StatusKind::Info, message);
    }

    /// Captured child output; shown in verbose mode, not recorded.
    pub(crate) fn command_output(&mut self, output: &str) {
        if !output.trim().is_empty() {
            self.ui.command_output(output);
        }
    }

    pub(crate) fn finish(self, passed: bool) -> CheckResult {
        tracing::debug!("{:?} check finished: passed={}", self.kind, passed);
        CheckResult {
            kind: self.kind,
            passed,
            tallied: self.kind.is_tallied(),
            lines: self.lines,
        }
    }
}
