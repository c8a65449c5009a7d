//! Command execution abstraction.
//!
//! This module provides:
//! - [`CommandSpec`]: Specification for commands to execute
//! - [`ExecutionResult`]: Result of command execution
//! - [`CommandExecutor`]: Trait for command execution strategies
//! - [`RealCommandExecutor`]: Production implementation using `std::process::Command`

mod real;

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use anyhow::Result;

pub use real::RealCommandExecutor;

/// Exit code reported for a process terminated by a signal: `128 + signal`.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Formats string arguments into a space-separated, debug-quoted string.
///
/// Used by error messages and dry-run output (e.g.
/// `"--skip=check/qemu" "bookworm" "/tmp/root"`).
pub(crate) fn format_command_args(args: &[String]) -> String {
    args.iter()
        .map(|a| format!("{:?}", a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Specification for a command to be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The command to execute (e.g., "mmdebstrap")
    pub command: String,
    /// Command arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a new CommandSpec with command and args
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Human-readable command line for logs.
    pub fn display(&self) -> String {
        format!("{} {}", self.command, format_command_args(&self.args))
    }
}

/// Result of command execution
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the command (None in dry-run mode)
    pub status: Option<ExitStatus>,
}

impl ExecutionResult {
    /// Returns true if the command executed successfully.
    ///
    /// In dry-run mode (status is None), this always returns true.
    pub fn success(&self) -> bool {
        self.status.is_none_or(|s| s.success())
    }

    /// Returns the exit code if available
    pub fn code(&self) -> Option<i32> {
        self.status.and_then(|s| s.code())
    }

    /// Exit code the step itself should report.
    ///
    /// The tool's own code is passed through unchanged. A tool killed by a
    /// signal maps to `128 + signal`, and a dry run reports `0`.
    pub fn exit_code(&self) -> i32 {
        match self.status {
            None => 0,
            Some(status) => status
                .code()
                .or_else(|| status.signal().map(|sig| SIGNAL_EXIT_BASE + sig))
                .unwrap_or(1),
        }
    }
}

/// Trait for command execution.
pub trait CommandExecutor {
    /// Executes a command with the given specification.
    ///
    /// A command that runs and exits non-zero is still `Ok`; errors are
    /// reserved for failing to run it at all.
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult>;
}
