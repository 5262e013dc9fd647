//! CLI argument definitions.
//!
//! With no arguments the full PhenoAI check runs against the first Python
//! interpreter on PATH. Every flag is an override.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{VerifyConfig, MAX_TIMEOUT_SECS};
use crate::ui::OutputMode;

/// pheno-check - Verify a PhenoAI installation.
#[derive(Debug, Default, Parser)]
#[command(name = "pheno-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML profile overriding the built-in package definition
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Python interpreter to check (default: python3, then python, on PATH)
    #[arg(long, value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Seconds to wait for the package CLI before giving up
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub timeout: Option<u64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Show captured CLI output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show problems and the final tally
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode implied by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut VerifyConfig) {
        if let Some(python) = &self.python {
            config.interpreter = Some(python.clone());
        }
        if let Some(timeout) = self.timeout {
            config.cli.timeout_secs = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_parses() {
        let cli = Cli::try_parse_from(["pheno-check"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn json_wins_over_verbosity() {
        let cli = Cli::try_parse_from(["pheno-check", "--json", "--verbose"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pheno-check", "-q", "-v"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["pheno-check", "--timeout", "0"]).is_err());
    }

    #[test]
    fn oversized_timeout_is_rejected() {
        let too_big = u64::MAX.to_string();
        assert!(Cli::try_parse_from(["pheno-check", "--timeout", too_big.as_str()]).is_err());
        assert!(Cli::try_parse_from(["pheno-check", "--timeout", "86401"]).is_err());
        let cli = Cli::try_parse_from(["pheno-check", "--timeout", "86400"]).unwrap();
        assert_eq!(cli.timeout, Some(MAX_TIMEOUT_SECS));
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "pheno-check",
            "--python",
            "/usr/bin/python3.11",
            "--timeout",
            "30",
        ])
        .unwrap();
        let mut config = VerifyConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.interpreter.as_deref(), Some("/usr/bin/python3.11"));
        assert_eq!(config.cli.timeout_secs, 30);
    }

    #[test]
    fn no_overrides_leave_config_untouched() {
        let cli = Cli::default();
        let mut config = VerifyConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, VerifyConfig::default());
    }
}
