//! Package version lookup. Informational: never part of the tally.

use crate::config::PackageConfig;
use crate::runtime::PythonRuntime;
use crate::ui::UserInterface;

use super::{CheckKind, CheckRecorder, CheckResult};

/// Report the package's `__version__`, if it has one.
///
/// `passed` is false only when the lookup itself failed.
pub fn check_version(
    runtime: &dyn PythonRuntime,
    package: &PackageConfig,
    ui: &mut dyn UserInterface,
) -> CheckResult {
    let mut rec = CheckRecorder::start(CheckKind::Version, ui);

    match runtime.version(&package.module) {
        Ok(Some(version)) => {
            rec.info(format!("{} version: {}", package.display_name, version));
            rec.finish(true)
        }
        Ok(None) => {
            rec.info(format!(
                "{} version: Unable to determine",
                package.display_name
            ));
            rec.finish(true)
        }
        Err(e) => {
            rec.failure(format!("Version check failed: {}", e));
            rec.finish(false)
        }
    }
}
