// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner error types.

use thiserror::Error;

/// Failures that prevent an invocation from producing a `CommandResult`.
///
/// Timeouts and non-zero exits are not errors; they are reported through
/// [`rtc_core::CommandStatus`] and the captured output.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program could not be started (not found, not executable, ...).
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program started but waiting on it failed.
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to run `{command}` with a zero deadline")]
    InvalidDeadline { command: String },
}

impl RunError {
    /// True for errors caused by tool configuration rather than by one input.
    pub fn is_launch(&self) -> bool {
        matches!(self, RunError::Launch { .. } | RunError::InvalidDeadline { .. })
    }

    pub fn command(&self) -> &str {
        match self {
            RunError::Launch { command, .. }
            | RunError::Wait { command, .. }
            | RunError::InvalidDeadline { command } => command,
        }
    }
}
