//! pheno-check - Verify a PhenoAI installation.
//!
//! pheno-check drives a Python interpreter to confirm that the PhenoAI
//! package and its dependencies import, that its command-line entry point
//! answers `--help`, and reports a pass/fail tally.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Package profile, loading and validation
//! - [`error`] - Error types and result aliases
//! - [`probes`] - The individual checks
//! - [`runner`] - Check orchestration and the final report
//! - [`runtime`] - Access to the Python environment under test
//! - [`shell`] - Child processes with a bounded wait
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pheno_check::config::VerifyConfig;
//! use pheno_check::runner::Verifier;
//! use pheno_check::runtime::MockRuntime;
//! use pheno_check::ui::MockUI;
//!
//! let config = VerifyConfig::default();
//! let runtime = MockRuntime::new();
//! let mut ui = MockUI::new();
//!
//! let report = Verifier::new(&config, &runtime).run(&mut ui);
//! assert_eq!((report.passed, report.total), (4, 4));
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod runner;
pub mod runtime;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
