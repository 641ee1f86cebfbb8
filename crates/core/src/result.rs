// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of one bounded command invocation.

/// How an invocation ended.
///
/// Exit codes do not participate: a tool that exits non-zero still
/// `Completed`, and its output is data for the caller to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The process exited before the deadline.
    Completed,
    /// The deadline elapsed and the process group was killed.
    TimedOut,
}

crate::simple_display! {
    CommandStatus {
        Completed => "completed",
        TimedOut => "timed out",
    }
}

/// Captured output and status of one invocation.
///
/// When `status` is [`CommandStatus::TimedOut`], `stdout` holds whatever the
/// process wrote before it was killed, possibly nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    /// Captured for diagnostics; never affects `status`.
    pub stderr: String,
    /// `None` on timeout or when the process died from a signal.
    pub exit_code: Option<i32>,
    pub status: CommandStatus,
}

impl CommandResult {
    pub fn completed(stdout: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code,
            status: CommandStatus::Completed,
        }
    }

    pub fn timed_out(partial_stdout: impl Into<String>) -> Self {
        Self {
            stdout: partial_stdout.into(),
            stderr: String::new(),
            exit_code: None,
            status: CommandStatus::TimedOut,
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn is_timed_out(&self) -> bool {
        self.status == CommandStatus::TimedOut
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
