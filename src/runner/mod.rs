//! Check orchestration.
//!
//! [`Verifier`] runs every probe in a fixed order against one
//! [`PythonRuntime`], tallies the outcome and prints the closing guidance.
//! A failing probe never stops the ones after it.

pub mod report;

pub use report::{VerifyReport, TALLIED_CHECKS};

use std::time::Instant;

use crate::config::VerifyConfig;
use crate::probes::{
    check_dependencies, check_entry_point, check_import, check_optional_dependencies,
    check_version,
};
use crate::runtime::PythonRuntime;
use crate::ui::{hints, UserInterface};

/// Runs the installation checks for one configuration.
pub struct Verifier<'a> {
    config: &'a VerifyConfig,
    runtime: &'a dyn PythonRuntime,
}

impl<'a> Verifier<'a> {
    /// Create a new verifier.
    pub fn new(config: &'a VerifyConfig, runtime: &'a dyn PythonRuntime) -> Self {
        Self { config, runtime }
    }

    /// Run every check and print the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> VerifyReport {
        let start = Instant::now();
        let package = &self.config.package;

        ui.show_header(&format!("{} Installation Test", package.display_name));
        tracing::debug!("Checking {} with {}", package.module, self.runtime.describe());

        let checks = vec![
            check_import(self.runtime, package, ui),
            check_version(self.runtime, package, ui),
            check_entry_point(self.runtime, &self.config.cli, ui),
            check_dependencies(
                self.runtime,
                &self.config.dependencies.required,
                package,
                ui,
            ),
            check_optional_dependencies(self.runtime, &self.config.dependencies.optional, ui),
        ];

        let report = VerifyReport::new(
            package.display_name.clone(),
            self.runtime.describe(),
            checks,
            start.elapsed(),
        );

        self.show_summary(&report, ui);
        report
    }

    fn show_summary(&self, report: &VerifyReport, ui: &mut dyn UserInterface) {
        let package = &self.config.package;
        ui.show_summary(report.passed, report.total);

        if report.all_passed() {
            ui.success(&format!(
                "All tests passed! {} is ready to use.",
                package.display_name
            ));
            ui.show_guidance("Quick Start:", &hints::quick_start(package));
            ui.show_guidance("CLI Usage:", &hints::cli_usage(&self.config.cli));
        } else {
            ui.error("Some tests failed. Please check the installation.");
            ui.show_guidance(
                "Try reinstalling with all dependencies:",
                &hints::reinstall_steps(package),
            );
        }
    }
}
