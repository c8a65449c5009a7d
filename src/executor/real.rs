//! Real command executor implementation.
//!
//! This module provides [`RealCommandExecutor`], which runs commands with
//! `std::process::Command`. The child inherits the step's stdin, stdout and
//! stderr, so the tool's output is the step's output.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};

use anyhow::Result;
use which::which;

use super::{CommandExecutor, CommandSpec, ExecutionResult};
use crate::error::StepError;

/// Owns a spawned child and makes sure it is reaped.
///
/// If the guard is dropped before [`ChildGuard::wait`] succeeded, the child
/// is killed and waited on.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn id(&self) -> u32 {
        self.child.id()
    }

    fn wait(mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        let pid = self.child.id();
        if let Err(e) = self.child.kill() {
            tracing::debug!(
                pid = pid,
                "kill returned error (process may have already exited): {}",
                e
            );
        }
        if let Err(e) = self.child.wait() {
            tracing::warn!(pid = pid, "failed to wait for child process after kill: {}", e);
        }
    }
}

/// Command executor that runs actual system commands.
///
/// When `dry_run` is true, commands are logged but not executed,
/// and `execute()` returns `Ok(ExecutionResult { status: None })`.
pub struct RealCommandExecutor {
    pub dry_run: bool,
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult> {
        if self.dry_run {
            tracing::info!("dry run: {}", spec.display());
            return Ok(ExecutionResult { status: None });
        }

        let cmd = which(&spec.command).map_err(|_| StepError::CommandNotFound {
            command: spec.command.clone(),
        })?;
        tracing::trace!("command found: {}: {}", spec.command, cmd.to_string_lossy());

        let mut command = Command::new(cmd);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = command.spawn().map_err(|e| StepError::Execution {
            command: spec.display(),
            status: format!("failed to spawn: {}", e),
        })?;
        let guard = ChildGuard::new(child);
        tracing::debug!("spawned command: {}: pid={}", spec.command, guard.id());

        let status = guard.wait().map_err(|e| StepError::Execution {
            command: spec.display(),
            status: format!("failed to wait for command: {}", e),
        })?;

        tracing::trace!("executed command: {}: {}", spec.command, status);

        Ok(ExecutionResult {
            status: Some(status),
        })
    }
}
