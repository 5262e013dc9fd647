//! Configuration loading.
//!
//! With no `--config` the built-in PhenoAI profile is used. A profile file
//! is parsed over the defaults and then validated.

use crate::config::schema::VerifyConfig;
use crate::config::validator::validate;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::Path;

/// Load the configuration for a run.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `path` is given but doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the values are unusable.
pub fn load_config(path: Option<&Path>) -> Result<VerifyConfig> {
    let config = match path {
        Some(path) => load_config_file(path)?,
        None => VerifyConfig::default(),
    };

    validate(&config)?;
    Ok(config)
}

/// Load and parse a profile file without validating it.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a `VerifyConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifyConfig> {
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
