//! Child process execution and interpreter discovery.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use platform::{detect_python, find_interpreter, PYTHON_CANDIDATES};
