//! Interpreter discovery on PATH.

use crate::error::{Result, VerifyError};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Interpreter names tried in order when none is configured.
#[cfg(not(windows))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Interpreter names tried in order when none is configured.
#[cfg(windows)]
pub const PYTHON_CANDIDATES: &[&str] = &["python.exe", "python3.exe", "py.exe"];

/// Find the first of `candidates` that is an executable on `search_path`.
///
/// `search_path` uses the platform's PATH syntax; `None` finds nothing.
pub fn find_interpreter(candidates: &[&str], search_path: Option<&OsStr>) -> Result<PathBuf> {
    candidates
        .iter()
        .find_map(|name| which::which_in(name, search_path, ".").ok())
        .ok_or_else(|| VerifyError::InterpreterNotFound {
            tried: candidates.join(", "),
        })
}

/// Find a Python interpreter on the system PATH.
pub fn detect_python() -> Result<PathBuf> {
    let path = std::env::var_os("PATH");
    let found = find_interpreter(PYTHON_CANDIDATES, path.as_deref())?;
    tracing::debug!("Using interpreter {}", found.display());
    Ok(found)
}
