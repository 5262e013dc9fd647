//! Optional dependency report. Always passes.

use crate::config::{Dependency, ImportTarget};
use crate::runtime::PythonRuntime;
use crate::ui::UserInterface;

use super::{CheckKind, CheckRecorder, CheckResult};

/// Report which optional libraries are importable.
pub fn check_optional_dependencies(
    runtime: &dyn PythonRuntime,
    optional: &[Dependency],
    ui: &mut dyn UserInterface,
) -> CheckResult {
    let mut rec = CheckRecorder::start(CheckKind::OptionalDependencies, ui);

    for dep in optional {
        let suffix = dep
            .description
            .as_deref()
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();

        match runtime.import(&ImportTarget::module(dep.import_name())) {
            Ok(()) => rec.success(format!("{} is available{}", dep.name, suffix)),
            Err(e) => {
                tracing::debug!("optional {} unavailable: {}", dep.name, e);
                rec.info(format!("{} is not installed{}", dep.name, suffix));
            }
        }
    }

    rec.finish(true)
}
