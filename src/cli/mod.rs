//! Command-line interface for pheno-check.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command itself

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::run_checks;
