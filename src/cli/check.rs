//! The installation check command.

use std::time::Duration;

use crate::config::{load_config, validate};
use crate::error::Result;
use crate::runner::{Verifier, VerifyReport};
use crate::runtime::PythonInterpreter;
use crate::shell::PYTHON_CANDIDATES;
use crate::ui::UserInterface;

use super::args::Cli;

/// Load the configuration, resolve the interpreter and run every check.
///
/// Only configuration problems are returned as errors. A missing
/// interpreter is reported and the checks still run, each failing on its
/// own.
pub fn run_checks(cli: &Cli, ui: &mut dyn UserInterface) -> Result<VerifyReport> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    validate(&config)?;

    let interpreter = PythonInterpreter::from_config(&config).unwrap_or_else(|e| {
        ui.error(&e.to_string());
        let fallback = PythonInterpreter::new(
            PYTHON_CANDIDATES[0],
            Duration::from_secs(config.import_timeout_secs),
        );
        match &config.working_dir {
            Some(dir) => fallback.with_working_dir(dir.clone()),
            None => fallback,
        }
    });

    Ok(Verifier::new(&config, &interpreter).run(ui))
}
