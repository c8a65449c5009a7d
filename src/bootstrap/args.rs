//! Command argument builder used to assemble bootstrap options.

use std::fmt::Display;

/// Builder for assembling command arguments in a fixed order.
///
/// Flags with values are rendered as a single `--flag=value` argument, the
/// form mmdebstrap documents for `--skip`, `--architectures` and `--aptopt`.
#[derive(Debug, Default)]
pub struct CommandArgsBuilder {
    args: Vec<String>,
}

impl CommandArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append a raw argument to the builder.
    pub fn push_arg<S: Into<String>>(&mut self, arg: S) {
        self.args.push(arg.into());
    }

    /// Append `flag=value` if the value is not empty.
    pub fn push_flag_value<V: Display>(&mut self, flag: &str, value: V) {
        let value = value.to_string();
        if value.is_empty() {
            return;
        }
        self.args.push(format!("{}={}", flag, value));
    }

    /// Append `flag=value` for each non-empty value in `values`.
    pub fn push_flag_values<V: Display>(&mut self, flag: &str, values: &[V]) {
        for value in values {
            self.push_flag_value(flag, value);
        }
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
