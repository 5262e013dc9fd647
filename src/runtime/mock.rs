//! Scripted runtime for testing.
//!
//! `MockRuntime` succeeds at everything unless told otherwise, and records
//! every import it was asked for so tests can assert on lookup names.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crate::config::ImportTarget;
use crate::error::{Result, VerifyError};
use crate::shell::CommandResult;

use super::PythonRuntime;

/// How the mocked CLI entry point behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliBehavior {
    /// Exit with the given code and stderr.
    Exit { code: i32, stderr: String },
    /// Killed by a signal (no exit code).
    Killed,
    /// Never finishes within the timeout.
    Hang,
    /// The interpreter cannot be launched.
    LaunchError(String),
}

/// Mock runtime implementation for testing.
#[derive(Debug)]
pub struct MockRuntime {
    missing: HashMap<String, String>,
    version: Option<String>,
    version_error: Option<String>,
    cli: CliBehavior,
    imports: RefCell<Vec<String>>,
    cli_calls: RefCell<Vec<(String, Vec<String>, Duration)>>,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRuntime {
    /// A runtime where every import works and the CLI exits 0.
    pub fn new() -> Self {
        Self {
            missing: HashMap::new(),
            version: None,
            version_error: None,
            cli: CliBehavior::Exit {
                code: 0,
                stderr: String::new(),
            },
            imports: RefCell::new(Vec::new()),
            cli_calls: RefCell::new(Vec::new()),
        }
    }

    /// Make imports of `name` fail with `reason`.
    ///
    /// `name` matches a target's module (which fails every symbol from it)
    /// or its dotted `module.symbol` name.
    pub fn fail_import(&mut self, name: &str, reason: &str) {
        self.missing.insert(name.to_string(), reason.to_string());
    }

    /// Report `version` as the package's `__version__`.
    pub fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    /// Make the version lookup itself fail.
    pub fn fail_version(&mut self, reason: &str) {
        self.version_error = Some(reason.to_string());
    }

    /// Set how the CLI entry point behaves.
    pub fn set_cli(&mut self, behavior: CliBehavior) {
        self.cli = behavior;
    }

    /// Every import attempted, as dotted names, in order.
    pub fn imports(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }

    /// Every CLI invocation as `(module, args, timeout)`.
    pub fn cli_calls(&self) -> Vec<(String, Vec<String>, Duration)> {
        self.cli_calls.borrow().clone()
    }
}

impl PythonRuntime for MockRuntime {
    fn import(&self, target: &ImportTarget) -> Result<()> {
        let qualified = target.qualified_name();
        self.imports.borrow_mut().push(qualified.clone());

        let reason = self
            .missing
            .get(&qualified)
            .or_else(|| self.missing.get(&target.module));
        match reason {
            Some(reason) => Err(VerifyError::ImportFailed {
                target: target.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn version(&self, module: &str) -> Result<Option<String>> {
        if let Some(reason) = &self.version_error {
            return Err(VerifyError::ImportFailed {
                target: format!("import {}", module),
                reason: reason.clone(),
            });
        }
        if let Some(reason) = self.missing.get(module) {
            return Err(VerifyError::ImportFailed {
                target: format!("import {}", module),
                reason: reason.clone(),
            });
        }
        Ok(self.version.clone())
    }

    fn run_module(
        &self,
        module: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandResult> {
        self.cli_calls
            .borrow_mut()
            .push((module.to_string(), args.to_vec(), timeout));
        let command = format!("python -m {} {}", module, args.join(" "));

        match &self.cli {
            CliBehavior::Exit { code: 0, .. } => Ok(CommandResult::success(
                "usage: cli [-h]".to_string(),
                String::new(),
                Duration::from_millis(5),
            )),
            CliBehavior::Exit { code, stderr } => Ok(CommandResult::failure(
                Some(*code),
                String::new(),
                stderr.clone(),
                Duration::from_millis(5),
            )),
            CliBehavior::Killed => Ok(CommandResult::failure(
                None,
                String::new(),
                String::new(),
                Duration::from_millis(5),
            )),
            CliBehavior::Hang => Err(VerifyError::CommandTimedOut { command, timeout }),
            CliBehavior::LaunchError(message) => Err(VerifyError::SpawnFailed {
                command,
                source: io::Error::new(io::ErrorKind::NotFound, message.clone()),
            }),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
