//! Child process execution with a bounded wait.

use crate::error::{Result, VerifyError};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between exit-status polls while waiting on a child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a child process that exited on its own.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Last non-empty line of stderr, trimmed.
    pub fn last_stderr_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Maximum time to wait before the child is killed (None = wait forever).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with only a timeout set.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// Both pipes are drained on reader threads while the child runs so a
/// chatty child cannot block on a full pipe. If `options.timeout` elapses
/// first the child is killed and reaped, and `CommandTimedOut` is returned.
///
/// A non-zero exit is not an error: it is reported through
/// [`CommandResult::success`] and [`CommandResult::exit_code`].
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Spawning: {}", command_line);
    let mut child = cmd.spawn().map_err(|source| VerifyError::SpawnFailed {
        command: command_line.clone(),
        source,
    })?;

    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    // A timeout too large to represent as an instant is no deadline at all.
    let deadline = options.timeout.and_then(|t| start.checked_add(t).map(|d| (t, d)));

    let status = match deadline {
        Some((timeout, deadline)) => match wait_with_deadline(&mut child, deadline)? {
            Some(status) => status,
            None => {
                tracing::warn!("Killing '{}' after {:?}", command_line, timeout);
                // The child may have exited between the last poll and the kill.
                let _ = child.kill();
                let _ = child.wait();
                // Reader threads are left detached: a grandchild may still
                // hold the pipes open.
                return Err(VerifyError::CommandTimedOut {
                    command: command_line,
                    timeout,
                });
            }
        },
        None => child.wait()?,
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);
    let duration = start.elapsed();

    tracing::debug!(
        "'{}' exited with {:?} in {:?}",
        command_line,
        status.code(),
        duration
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Poll `child` until it exits or `deadline` passes.
///
/// Returns `None` when the deadline passed with the child still running.
fn wait_with_deadline(
    child: &mut Child,
    deadline: Instant,
) -> Result<Option<std::process::ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn execute_successful_command() {
        let result = execute("/bin/sh", &sh("echo hello"), &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command_captures_stderr() {
        let result = execute(
            "/bin/sh",
            &sh("echo 'bad things' >&2; exit 3"),
            &CommandOptions::default(),
        )
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("bad things"));
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let result = execute("/bin/sh", &sh("echo $MY_VAR"), &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = execute("/bin/sh", &sh("pwd"), &options).unwrap();

        assert!(result.success);
        let name = temp.path().file_name().unwrap().to_string_lossy();
        assert!(result.stdout.contains(name.as_ref()));
    }

    #[test]
    fn execute_times_out_and_kills_child() {
        let options = CommandOptions::with_timeout(Duration::from_millis(200));
        let start = Instant::now();

        let err = execute("/bin/sh", &sh("exec sleep 5"), &options).unwrap_err();

        assert!(matches!(err, VerifyError::CommandTimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn unrepresentable_timeout_waits_for_exit() {
        let options = CommandOptions::with_timeout(Duration::from_secs(u64::MAX));
        let result = execute("/bin/sh", &sh("echo done"), &options).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("done"));
    }

    #[test]
    fn fast_command_finishes_within_timeout() {
        let options = CommandOptions::with_timeout(Duration::from_secs(5));
        let result = execute("/bin/sh", &sh("echo quick"), &options).unwrap();
        assert!(result.success);
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let err = execute(
            "/definitely/not/a/program",
            &[],
            &CommandOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, VerifyError::SpawnFailed { .. }));
        assert!(err.to_string().contains("/definitely/not/a/program"));
    }

    #[test]
    fn large_output_does_not_deadlock() {
        let options = CommandOptions::with_timeout(Duration::from_secs(10));
        let result = execute(
            "/bin/sh",
            &sh("i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"),
            &options,
        )
        .unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("line-19999"));
    }

    #[test]
    fn last_stderr_line_skips_blank_lines() {
        let result = CommandResult::failure(
            Some(1),
            String::new(),
            "Traceback (most recent call last):\n  ...\nImportError: boom\n\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.last_stderr_line(), Some("ImportError: boom"));
    }

    #[test]
    fn display_command_joins_args() {
        assert_eq!(
            display_command("python3", &["-m".to_string(), "phenoAI.cli".to_string()]),
            "python3 -m phenoAI.cli"
        );
    }
}
