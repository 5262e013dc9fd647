//! Result of a full verification run.

use serde::Serialize;
use std::time::Duration;

use crate::probes::{CheckKind, CheckResult};

/// Number of checks counted toward the tally.
///
/// Import, CLI, required dependencies and optional dependencies; the
/// version lookup is informational.
pub const TALLIED_CHECKS: usize = 4;

/// Result of running every check.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Display name of the package under test.
    pub package: String,
    /// Interpreter the checks ran against.
    pub interpreter: String,
    /// Results in execution order.
    pub checks: Vec<CheckResult>,
    /// Tallied checks that passed.
    pub passed: usize,
    /// Tallied checks in total.
    pub total: usize,
    /// Wall time for the whole run.
    #[serde(serialize_with = "serialize_millis", rename = "duration_ms")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl VerifyReport {
    /// Build a report, tallying the checks that count.
    pub fn new(
        package: String,
        interpreter: String,
        checks: Vec<CheckResult>,
        duration: Duration,
    ) -> Self {
        let passed = checks.iter().filter(|c| c.counts()).count();
        Self {
            package,
            interpreter,
            checks,
            passed,
            total: TALLIED_CHECKS,
            duration,
        }
    }

    /// Whether every tallied check passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Result of a particular check, if it ran.
    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
