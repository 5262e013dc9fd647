//! [`PythonRuntime`] backed by a real interpreter process.
//!
//! Each operation runs `<interpreter> -c <script> <args...>`. Module names
//! are passed as `argv` entries, never spliced into the script text.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::{ImportTarget, VerifyConfig};
use crate::error::{Result, VerifyError};
use crate::shell::{detect_python, display_command, execute, CommandOptions, CommandResult};

use super::PythonRuntime;

/// Imports `argv[1]`, then `argv[2]` from it the way `from m import s` does.
const IMPORT_SCRIPT: &str = r#"import importlib, sys
name = sys.argv[1]
module = importlib.import_module(name)
if len(sys.argv) > 2:
    attr = sys.argv[2]
    if not hasattr(module, attr):
        try:
            importlib.import_module(name + "." + attr)
        except ModuleNotFoundError as exc:
            if exc.name != name + "." + attr:
                raise
            raise ImportError("cannot import name %r from %r" % (attr, name)) from None
"#;

/// Prints `argv[1].__version__` as a JSON string, or `null` when absent.
const VERSION_SCRIPT: &str = r#"import importlib, json, sys
module = importlib.import_module(sys.argv[1])
version = getattr(module, "__version__", None)
print(json.dumps(None if version is None else str(version)))
"#;

/// A Python interpreter on this machine.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    program: String,
    import_timeout: Duration,
    working_dir: Option<PathBuf>,
}

impl PythonInterpreter {
    /// Use `program` as the interpreter.
    pub fn new(program: impl Into<String>, import_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            import_timeout,
            working_dir: None,
        }
    }

    /// Run the interpreter from `dir`, which puts `dir` on `sys.path`.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Use the configured interpreter, or find one on PATH.
    pub fn from_config(config: &VerifyConfig) -> Result<Self> {
        let import_timeout = Duration::from_secs(config.import_timeout_secs);
        let program = match &config.interpreter {
            Some(program) => program.clone(),
            None => detect_python()?.to_string_lossy().into_owned(),
        };
        let interpreter = Self::new(program, import_timeout);
        Ok(match &config.working_dir {
            Some(dir) => interpreter.with_working_dir(dir.clone()),
            None => interpreter,
        })
    }

    /// The interpreter program.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Options for one child process. Imports must not leave `__pycache__`
    /// directories behind in the environment under test.
    fn options(&self, timeout: Duration) -> CommandOptions {
        let mut options = CommandOptions::with_timeout(timeout);
        options.cwd = self.working_dir.clone();
        options
            .env
            .insert("PYTHONDONTWRITEBYTECODE".to_string(), "1".to_string());
        options
    }

    fn run_script(&self, script: &str, args: &[&str]) -> Result<CommandResult> {
        let mut argv = vec!["-c".to_string(), script.to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        execute(&self.program, &argv, &self.options(self.import_timeout))
    }
}

/// Describe why a script failed, preferring the exception line.
fn failure_reason(result: &CommandResult) -> String {
    match (result.last_stderr_line(), result.exit_code) {
        (Some(line), _) => line.to_string(),
        (None, Some(code)) => format!("interpreter exited with code {}", code),
        (None, None) => "interpreter was terminated by a signal".to_string(),
    }
}

impl PythonRuntime for PythonInterpreter {
    fn import(&self, target: &ImportTarget) -> Result<()> {
        let mut args = vec![target.module.as_str()];
        if let Some(symbol) = &target.symbol {
            args.push(symbol);
        }

        let result = self.run_script(IMPORT_SCRIPT, &args)?;
        if result.success {
            tracing::debug!("{} succeeded", target);
            Ok(())
        } else {
            let reason = failure_reason(&result);
            tracing::debug!("{} failed: {}", target, reason);
            Err(VerifyError::ImportFailed {
                target: target.to_string(),
                reason,
            })
        }
    }

    fn version(&self, module: &str) -> Result<Option<String>> {
        let result = self.run_script(VERSION_SCRIPT, &[module])?;
        if !result.success {
            return Err(VerifyError::ImportFailed {
                target: format!("import {}", module),
                reason: failure_reason(&result),
            });
        }

        let line = result
            .stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("null");
        serde_json::from_str::<Option<String>>(line.trim()).map_err(|e| {
            VerifyError::UnexpectedOutput {
                command: display_command(&self.program, &["-c".to_string(), "...".to_string()]),
                message: e.to_string(),
            }
        })
    }

    fn run_module(
        &self,
        module: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandResult> {
        let mut argv = vec!["-m".to_string(), module.to_string()];
        argv.extend(args.iter().cloned());
        execute(&self.program, &argv, &self.options(timeout))
    }

    fn describe(&self) -> String {
        self.program.clone()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    /// Write a fake interpreter: a shell script that ignores `-c <script>`
    /// and dispatches on the remaining arguments.
    fn fake_python(dir: &Path, body: &str) -> String {
        let path = dir.join("python3");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn interpreter(program: String) -> PythonInterpreter {
        PythonInterpreter::new(program, Duration::from_secs(5))
    }

    #[test]
    fn import_success() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(temp.path(), "exit 0"));

        assert!(python.import(&ImportTarget::module("numpy")).is_ok());
    }

    #[test]
    fn import_failure_reports_last_stderr_line() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(
            temp.path(),
            r#"echo "Traceback (most recent call last):" >&2
echo "ModuleNotFoundError: No module named '$3'" >&2
exit 1"#,
        ));

        let err = python.import(&ImportTarget::module("rasterio")).unwrap_err();

        match err {
            VerifyError::ImportFailed { target, reason } => {
                assert_eq!(target, "import rasterio");
                assert_eq!(reason, "ModuleNotFoundError: No module named 'rasterio'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn import_passes_symbol_as_argument() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(
            temp.path(),
            r#"[ "$3" = "phenoAI.analysis" ] && [ "$4" = "vegetation_indices" ] && exit 0
exit 1"#,
        ));

        let target = ImportTarget::symbol("phenoAI.analysis", "vegetation_indices");
        assert!(python.import(&target).is_ok());
    }

    #[test]
    fn import_failure_without_stderr_uses_exit_code() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(temp.path(), "exit 7"));

        let err = python.import(&ImportTarget::module("numpy")).unwrap_err();
        assert!(err.to_string().contains("code 7"));
    }

    #[test]
    fn version_reads_json_string() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(
            temp.path(),
            r#"echo "some import noise"
echo '"1.2.3"'"#,
        ));

        assert_eq!(python.version("phenoAI").unwrap(), Some("1.2.3".to_string()));
    }

    #[test]
    fn version_null_means_absent() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(temp.path(), "echo null"));

        assert_eq!(python.version("phenoAI").unwrap(), None);
    }

    #[test]
    fn version_garbage_is_unexpected_output() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(temp.path(), "echo '{not json'"));

        let err = python.version("phenoAI").unwrap_err();
        assert!(matches!(err, VerifyError::UnexpectedOutput { .. }));
    }

    #[test]
    fn run_module_passes_dash_m() {
        let temp = TempDir::new().unwrap();
        let python = interpreter(fake_python(
            temp.path(),
            r#"[ "$1" = "-m" ] && [ "$2" = "phenoAI.cli" ] && [ "$3" = "--help" ] && exit 0
exit 2"#,
        ));

        let result = python
            .run_module("phenoAI.cli", &["--help".to_string()], Duration::from_secs(5))
            .unwrap();
        assert!(result.success);
    }

    #[test]
    fn configured_interpreter_skips_detection() {
        let config = VerifyConfig {
            interpreter: Some("/opt/python/bin/python3".to_string()),
            ..Default::default()
        };
        let python = PythonInterpreter::from_config(&config).unwrap();
        assert_eq!(python.program(), "/opt/python/bin/python3");
        assert_eq!(python.describe(), "/opt/python/bin/python3");
        assert_eq!(python.options(Duration::from_secs(1)).cwd, None);
    }

    #[test]
    fn configured_working_dir_is_used() {
        let config = VerifyConfig {
            interpreter: Some("python3".to_string()),
            working_dir: Some("/srv/checkout".into()),
            ..Default::default()
        };
        let python = PythonInterpreter::from_config(&config).unwrap();

        let options = python.options(Duration::from_secs(7));

        assert_eq!(options.cwd.as_deref(), Some(std::path::Path::new("/srv/checkout")));
        assert_eq!(options.timeout, Some(Duration::from_secs(7)));
        assert_eq!(
            options.env.get("PYTHONDONTWRITEBYTECODE").map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn working_dir_and_bytecode_setting_reach_the_child() {
        let temp = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let python = interpreter(fake_python(
            temp.path(),
            r#"pwd; echo "bytecode=$PYTHONDONTWRITEBYTECODE""#,
        ))
        .with_working_dir(work.path());

        let result = python
            .run_module("phenoAI.cli", &[], Duration::from_secs(5))
            .unwrap();

        let name = work.path().file_name().unwrap().to_string_lossy();
        assert!(result.stdout.contains(name.as_ref()));
        assert!(result.stdout.contains("bytecode=1"));
    }

    /// A real `python3`, if this machine has one.
    fn real_python() -> Option<String> {
        let path = std::env::var_os("PATH");
        crate::shell::find_interpreter(&["python3"], path.as_deref())
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    }

    /// `pkg` exports `X` and `__version__`; `pkg.sub` has a clean `leaf`
    /// submodule and a `broken` one importing a missing dependency.
    fn sample_package(root: &Path) {
        let pkg = root.join("pkg");
        let sub = pkg.join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(pkg.join("__init__.py"), "X = 1\n__version__ = \"0.3.1\"\n").unwrap();
        fs::write(sub.join("__init__.py"), "").unwrap();
        fs::write(sub.join("leaf.py"), "VALUE = 2\n").unwrap();
        fs::write(sub.join("broken.py"), "import nonexistent_dep\n").unwrap();
    }

    fn import_reason(python: &PythonInterpreter, target: ImportTarget) -> String {
        match python.import(&target) {
            Err(VerifyError::ImportFailed { reason, .. }) => reason,
            other => panic!("expected import failure for {target}, got {other:?}"),
        }
    }

    #[test]
    fn real_interpreter_follows_from_import_rules() {
        let Some(program) = real_python() else {
            eprintln!("python3 not on PATH, skipping");
            return;
        };
        let work = TempDir::new().unwrap();
        sample_package(work.path());
        let python = interpreter(program).with_working_dir(work.path());

        // attribute on the package
        assert!(python.import(&ImportTarget::module("pkg")).is_ok());
        assert!(python.import(&ImportTarget::symbol("pkg", "X")).is_ok());
        // submodule reached through the fallback
        assert!(python.import(&ImportTarget::symbol("pkg.sub", "leaf")).is_ok());

        assert_eq!(
            import_reason(&python, ImportTarget::symbol("pkg", "Y")),
            "ImportError: cannot import name 'Y' from 'pkg'"
        );
        // a missing module inside the submodule is reported as itself
        assert_eq!(
            import_reason(&python, ImportTarget::symbol("pkg.sub", "broken")),
            "ModuleNotFoundError: No module named 'nonexistent_dep'"
        );
        assert_eq!(
            import_reason(&python, ImportTarget::module("nopkg")),
            "ModuleNotFoundError: No module named 'nopkg'"
        );

        assert!(!work.path().join("pkg").join("__pycache__").exists());
    }

    #[test]
    fn real_interpreter_reads_version_attribute() {
        let Some(program) = real_python() else {
            eprintln!("python3 not on PATH, skipping");
            return;
        };
        let work = TempDir::new().unwrap();
        sample_package(work.path());
        let python = interpreter(program).with_working_dir(work.path());

        assert_eq!(python.version("pkg").unwrap(), Some("0.3.1".to_string()));
        assert_eq!(python.version("pkg.sub").unwrap(), None);
        assert!(matches!(
            python.version("nopkg"),
            Err(VerifyError::ImportFailed { .. })
        ));
    }
}
