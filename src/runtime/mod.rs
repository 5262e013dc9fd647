//! Access to the Python environment under test.
//!
//! Probes never talk to a process directly: they go through the
//! [`PythonRuntime`] trait so the reporting logic can be exercised with
//! [`MockRuntime`] in tests.
//!
//! # Example
//!
//! ```
//! use pheno_check::config::ImportTarget;
//! use pheno_check::runtime::{MockRuntime, PythonRuntime};
//!
//! let mut runtime = MockRuntime::new();
//! runtime.fail_import("rasterio", "ModuleNotFoundError: No module named 'rasterio'");
//!
//! assert!(runtime.import(&ImportTarget::module("numpy")).is_ok());
//! assert!(runtime.import(&ImportTarget::module("rasterio")).is_err());
//! ```

pub mod interpreter;
pub mod mock;

pub use interpreter::PythonInterpreter;
pub use mock::{CliBehavior, MockRuntime};

use std::time::Duration;

use crate::config::ImportTarget;
use crate::error::Result;
use crate::shell::CommandResult;

/// Operations the probes need from a Python environment.
pub trait PythonRuntime {
    /// Import `target`.
    ///
    /// A failed import is `VerifyError::ImportFailed` carrying the
    /// interpreter's error line; launch problems surface as their own
    /// variants.
    fn import(&self, target: &ImportTarget) -> Result<()>;

    /// Read `module.__version__`, `None` when the attribute is absent.
    fn version(&self, module: &str) -> Result<Option<String>>;

    /// Run `module` as a script (`-m`) with `args`, waiting at most `timeout`.
    ///
    /// A non-zero exit is an `Ok` result; exceeding `timeout` is
    /// `VerifyError::CommandTimedOut`.
    fn run_module(&self, module: &str, args: &[String], timeout: Duration)
        -> Result<CommandResult>;

    /// Human-readable description of the environment, for report headers.
    fn describe(&self) -> String;
}
