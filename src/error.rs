//! Domain-specific error types for debstrap-step.
//!
//! `StepError` is a `thiserror`-based enum with typed variants for the
//! failures this step detects itself. Library entry points return
//! `anyhow::Result`, and `StepError` converts into `anyhow::Error` through
//! `?`, so callers can still downcast to match on a variant.
//!
//! A non-zero exit of the bootstrapping tool is not represented here: it is
//! a normal [`ExecutionResult`](crate::executor::ExecutionResult) and is
//! propagated verbatim.

use std::io;

/// Formats an IO error kind into a human-readable message.
///
/// Common kinds get a short fixed message (e.g. "I/O error: not found")
/// instead of the OS-level text; anything else falls back to the error's
/// own message.
pub(crate) fn io_error_kind_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "I/O error: not found".to_string(),
        io::ErrorKind::PermissionDenied => "I/O error: permission denied".to_string(),
        io::ErrorKind::IsADirectory => "I/O error: is a directory".to_string(),
        _ => format!("I/O error: {}", err),
    }
}

/// Errors detected by the bootstrap step before or around the tool invocation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StepError {
    /// The target architecture is not one of the supported tokens.
    #[error("unsupported architecture: '{0}'")]
    UnsupportedArchitecture(String),

    /// A recipe parameter is missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The recipe file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The bootstrapping tool is not available on `PATH`.
    #[error("command not found in PATH: {command}")]
    CommandNotFound {
        /// Name of the command that was looked up.
        command: String,
    },

    /// Spawning or waiting on the tool failed.
    ///
    /// This covers failures of the step itself, never a non-zero exit of
    /// the tool.
    #[error("command execution failed: {command}: {status}")]
    Execution {
        /// The command that was executed, with its arguments.
        command: String,
        /// Description of what went wrong.
        status: String,
    },

    /// An I/O operation failed with contextual information.
    #[error("{context}: {message}")]
    Io {
        /// The path or operation being handled when the error occurred.
        context: String,
        /// Message derived from [`io_error_kind_message`].
        message: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl StepError {
    /// Creates an `Io` variant with `message` derived from `source`.
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }
}
