//! Configuration validation rules.
//!
//! Module paths and symbols are passed to the interpreter as arguments, so
//! they are checked to be plain Python identifiers before any probe runs.

use crate::config::schema::{VerifyConfig, MAX_TIMEOUT_SECS};
use crate::error::{Result, VerifyError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_package(config));
    errors.extend(validate_cli(config));
    errors.extend(validate_dependencies(config));

    errors.extend(check_timeout("import_timeout_secs", config.import_timeout_secs));

    if let Some(interpreter) = &config.interpreter {
        if interpreter.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-interpreter",
                "interpreter must not be empty".to_string(),
            ));
        }
    }

    if let Some(dir) = &config.working_dir {
        if !dir.is_dir() {
            errors.push(ValidationError::new(
                "missing-working-dir",
                format!("working_dir '{}' is not a directory", dir.display()),
            ));
        }
    }

    errors
}

fn check_timeout(field: &str, secs: u64) -> Option<ValidationError> {
    if secs == 0 {
        Some(ValidationError::new(
            "zero-timeout",
            format!("{} must be greater than zero", field),
        ))
    } else if secs > MAX_TIMEOUT_SECS {
        Some(ValidationError::new(
            "timeout-too-long",
            format!("{} must be at most {} seconds", field, MAX_TIMEOUT_SECS),
        ))
    } else {
        None
    }
}

fn validate_package(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let package = &config.package;

    if !is_module_path(&package.module) {
        errors.push(ValidationError::new(
            "invalid-module",
            format!("package.module '{}' is not a module path", package.module),
        ));
    }

    if package.pip_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-pip-name",
            "package.pip_name must not be empty".to_string(),
        ));
    }

    for target in &package.imports {
        if !is_module_path(&target.module) {
            errors.push(ValidationError::new(
                "invalid-module",
                format!("import '{}' is not a module path", target.module),
            ));
        }
        if let Some(symbol) = &target.symbol {
            if !is_identifier(symbol) {
                errors.push(ValidationError::new(
                    "invalid-symbol",
                    format!("symbol '{}' in '{}' is not an identifier", symbol, target.module),
                ));
            }
        }
    }

    errors
}

fn validate_cli(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_module_path(&config.cli.module) {
        errors.push(ValidationError::new(
            "invalid-module",
            format!("cli.module '{}' is not a module path", config.cli.module),
        ));
    }

    errors.extend(check_timeout("cli.timeout_secs", config.cli.timeout_secs));

    errors
}

fn validate_dependencies(config: &VerifyConfig) -> Vec<ValidationError> {
    let deps = &config.dependencies;
    deps.required
        .iter()
        .chain(deps.optional.iter())
        .filter(|dep| !is_module_path(&dep.import_name()))
        .map(|dep| {
            ValidationError::new(
                "invalid-dependency",
                format!(
                    "dependency '{}' does not map to a module path ('{}')",
                    dep.name,
                    dep.import_name()
                ),
            )
        })
        .collect()
}

/// Validate a configuration, failing with every error joined into one message.
pub fn validate(config: &VerifyConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(VerifyError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

/// Whether `name` is a Python identifier (ASCII subset).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Whether `path` is a dotted sequence of identifiers.
pub fn is_module_path(path: &str) -> bool {
    !path.is_empty() && path.split('.').all(is_identifier)
}
