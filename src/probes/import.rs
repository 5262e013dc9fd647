//! Package import check.

use crate::config::{ImportTarget, PackageConfig};
use crate::runtime::PythonRuntime;
use crate::ui::UserInterface;

use super::{CheckKind, CheckRecorder, CheckResult};

/// Import the package, then each configured symbol, stopping at the first
/// failure.
pub fn check_import(
    runtime: &dyn PythonRuntime,
    package: &PackageConfig,
    ui: &mut dyn UserInterface,
) -> CheckResult {
    let mut rec = CheckRecorder::start(CheckKind::Import, ui);

    let targets = std::iter::once(ImportTarget::module(package.module.clone()))
        .chain(package.imports.iter().cloned());

    for target in targets {
        match runtime.import(&target) {
            Ok(()) => rec.success(format!("Successfully imported {}", target.label())),
            Err(e) => {
                rec.failure(format!("Import failed: {}", e));
                return rec.finish(false);
            }
        }
    }

    rec.finish(true)
}
