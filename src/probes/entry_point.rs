//! CLI entry point check.

use std::time::Duration;

use crate::config::CliConfig;
use crate::error::VerifyError;
use crate::runtime::PythonRuntime;
use crate::ui::UserInterface;

use super::{CheckKind, CheckRecorder, CheckResult};

/// Run the package's CLI with its help flag and require exit status 0
/// within `cli.timeout_secs`.
pub fn check_entry_point(
    runtime: &dyn PythonRuntime,
    cli: &CliConfig,
    ui: &mut dyn UserInterface,
) -> CheckResult {
    let mut rec = CheckRecorder::start(CheckKind::EntryPoint, ui);
    let timeout = Duration::from_secs(cli.timeout_secs);

    match runtime.run_module(&cli.module, &cli.args, timeout) {
        Ok(result) if result.success => {
            rec.command_output(&result.stdout);
            rec.success("CLI interface is working");
            rec.finish(true)
        }
        Ok(result) => {
            match result.exit_code {
                Some(code) => rec.failure(format!("CLI failed with return code: {}", code)),
                None => rec.failure("CLI was terminated by a signal"),
            }
            let stderr = result.stderr.trim();
            if !stderr.is_empty() {
                rec.warning(format!("Error: {}", stderr));
            }
            rec.finish(false)
        }
        Err(VerifyError::CommandTimedOut { timeout, .. }) => {
            rec.failure(format!("CLI test timed out after {}s", timeout.as_secs()));
            rec.finish(false)
        }
        Err(e) => {
            rec.failure(format!("CLI test failed: {}", e));
            rec.finish(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{CliBehavior, MockRuntime};
    use crate::ui::{MockUI, OutputMode, StatusKind};

    #[test]
    fn zero_exit_passes() {
        let runtime = MockRuntime::new();
        let mut ui = MockUI::new();

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert!(result.passed);
        assert!(ui.has_line(StatusKind::Success, "CLI interface is working"));
        assert_eq!(ui.captured_output(), &["usage: cli [-h]".to_string()]);
        let calls = runtime.cli_calls();
        assert_eq!(calls[0].0, "phenoAI.cli");
        assert_eq!(calls[0].1, vec!["--help"]);
        assert_eq!(calls[0].2, Duration::from_secs(10));
    }

    #[test]
    fn nonzero_exit_reports_code_and_stderr() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::Exit {
            code: 2,
            stderr: "error: unrecognized arguments\n".to_string(),
        });
        let mut ui = MockUI::with_mode(OutputMode::Normal);

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert!(!result.passed);
        assert!(result.has_line(StatusKind::Failed, "return code: 2"));
        assert!(result.has_line(StatusKind::Warning, "Error: error: unrecognized arguments"));
        assert!(ui.mentions("unrecognized arguments"));
    }

    #[test]
    fn stderr_is_reported_as_a_warning() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::Exit {
            code: 1,
            stderr: "Traceback (most recent call last):\n  ...\nImportError: boom\n".to_string(),
        });
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        let warnings = ui.lines_of(StatusKind::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Error: Traceback"));
        assert!(warnings[0].ends_with("ImportError: boom"));
    }

    #[test]
    fn empty_stderr_adds_no_error_line() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::Exit {
            code: 4,
            stderr: String::new(),
        });
        let mut ui = MockUI::new();

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert_eq!(result.lines.len(), 1);
        assert!(ui.lines_of(StatusKind::Warning).is_empty());
    }

    #[test]
    fn timeout_is_failure_not_error() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::Hang);
        let mut ui = MockUI::new();

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert!(!result.passed);
        assert!(ui.has_line(StatusKind::Failed, "CLI test timed out after 10s"));
    }

    #[test]
    fn signal_is_failure() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::Killed);
        let mut ui = MockUI::new();

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert!(!result.passed);
        assert!(ui.has_line(StatusKind::Failed, "terminated by a signal"));
    }

    #[test]
    fn launch_error_is_failure() {
        let mut runtime = MockRuntime::new();
        runtime.set_cli(CliBehavior::LaunchError("No such file or directory".to_string()));
        let mut ui = MockUI::new();

        let result = check_entry_point(&runtime, &CliConfig::default(), &mut ui);

        assert!(!result.passed);
        assert!(ui.has_line(StatusKind::Failed, "CLI test failed"));
        assert!(ui.has_line(StatusKind::Failed, "No such file or directory"));
    }

    #[test]
    fn custom_timeout_is_passed_through() {
        let runtime = MockRuntime::new();
        let mut ui = MockUI::new();
        let cli = CliConfig {
            timeout_secs: 3,
            ..Default::default()
        };

        check_entry_point(&runtime, &cli, &mut ui);

        assert_eq!(runtime.cli_calls()[0].2, Duration::from_secs(3));
    }
}
