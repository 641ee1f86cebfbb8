// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Description of a single external command call.

use std::ffi::{OsStr, OsString};
use std::time::Duration;

/// One external program call with a wall-clock deadline.
///
/// Arguments are kept as separate tokens and handed to the process as argv,
/// so paths containing spaces or shell metacharacters reach the tool intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    program: String,
    args: Vec<OsString>,
    deadline: Duration,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, deadline: Duration) -> Self {
        Self { program: program.into(), args: Vec::new(), deadline }
    }

    /// Append one argument token.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several argument tokens in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument tokens exactly as the process receives them.
    pub fn arg_list(&self) -> &[OsString] {
        &self.args
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Program and arguments joined with single spaces.
    ///
    /// Display only: the process never sees this string, and non-UTF-8
    /// tokens are shown lossily.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

impl std::fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
