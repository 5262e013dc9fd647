//! Remediation and next-step text.
//!
//! Hints are derived from the configured package so a custom profile gets
//! commands for its own distribution and entry point.

use crate::config::{CliConfig, PackageConfig};

/// One-line hint after required dependencies were found missing.
pub fn install_extras(package: &PackageConfig) -> String {
    format!("Try installing with: pip install {}[all]", package.pip_name)
}

/// Steps for reinstalling after a failed check.
pub fn reinstall_steps(package: &PackageConfig) -> Vec<String> {
    vec![
        format!("pip uninstall {}", package.pip_name),
        format!("pip install {}[all]", package.pip_name),
    ]
}

/// A minimal Python snippet using the package.
///
/// Uses the first configured symbol exported by the top-level module, if
/// there is one, as the entry point.
pub fn quick_start(package: &PackageConfig) -> Vec<String> {
    let entry = package
        .imports
        .iter()
        .filter(|t| t.module == package.module)
        .find_map(|t| t.symbol.as_deref());

    match entry {
        Some(symbol) => vec![
            format!("from {} import {}", package.module, symbol),
            format!("analyzer = {}()", symbol),
            "# Start analyzing your remote sensing data!".to_string(),
        ],
        None => vec![format!("import {}", package.module)],
    }
}

/// How to start the package's CLI interactively.
pub fn cli_usage(cli: &CliConfig) -> Vec<String> {
    vec![format!("python -m {} --interactive", cli.module)]
}
