//! Required dependency check.

use crate::config::{Dependency, ImportTarget, PackageConfig};
use crate::runtime::PythonRuntime;
use crate::ui::{hints, UserInterface};

use super::{CheckKind, CheckRecorder, CheckResult};

/// Import every required dependency; any miss fails the check.
///
/// Every dependency is tried even after a miss, so the report lists all of
/// them at once.
pub fn check_dependencies(
    runtime: &dyn PythonRuntime,
    required: &[Dependency],
    package: &PackageConfig,
    ui: &mut dyn UserInterface,
) -> CheckResult {
    let mut rec = CheckRecorder::start(CheckKind::Dependencies, ui);
    let mut missing = Vec::new();

    for dep in required {
        match runtime.import(&ImportTarget::module(dep.import_name())) {
            Ok(()) => rec.success(format!("{} is available", dep.name)),
            Err(e) => {
                tracing::debug!("{} unavailable: {}", dep.name, e);
                rec.warning(format!("{} is missing", dep.name));
                missing.push(dep.name.as_str());
            }
        }
    }

    if missing.is_empty() {
        return rec.finish(true);
    }

    rec.warning(format!("Missing dependencies: {}", missing.join(", ")));
    rec.warning(hints::install_extras(package));
    rec.finish(false)
}
