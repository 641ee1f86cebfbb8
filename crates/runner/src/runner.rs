// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The runner seam used by the harness.

use async_trait::async_trait;
use rtc_core::{CommandInvocation, CommandResult};

use crate::RunError;

/// Runs one external command under the invocation's deadline.
///
/// Implementations must keep calls independent: no timer, buffer or child
/// process is shared between two `run` calls, even when they overlap.
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    async fn run(&self, invocation: &CommandInvocation) -> Result<CommandResult, RunError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{CommandRunner, RunError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use rtc_core::{CommandInvocation, CommandResult};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Scripted reply for one program name.
    #[derive(Debug, Clone)]
    pub enum FakeResponse {
        Output(CommandResult),
        LaunchFailure(std::io::ErrorKind),
    }

    #[derive(Default)]
    struct FakeRunnerState {
        responses: HashMap<String, FakeResponse>,
        calls: Vec<CommandInvocation>,
    }

    /// Fake runner for testing; replies by program name and records calls.
    ///
    /// Programs without a scripted reply complete with empty output.
    #[derive(Clone, Default)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the reply for every call to `program`.
        pub fn respond(self, program: &str, response: FakeResponse) -> Self {
            self.inner.lock().responses.insert(program.to_string(), response);
            self
        }

        /// Shorthand for a completed call printing `stdout`.
        pub fn prints(self, program: &str, stdout: &str) -> Self {
            self.respond(program, FakeResponse::Output(CommandResult::completed(stdout, Some(0))))
        }

        /// Shorthand for a call that hits its deadline after printing `partial`.
        pub fn times_out(self, program: &str, partial: &str) -> Self {
            self.respond(program, FakeResponse::Output(CommandResult::timed_out(partial)))
        }

        /// All recorded invocations, in call order.
        pub fn calls(&self) -> Vec<CommandInvocation> {
            self.inner.lock().calls.clone()
        }

        /// Number of recorded invocations of `program`.
        pub fn calls_to(&self, program: &str) -> usize {
            self.inner.lock().calls.iter().filter(|c| c.program() == program).count()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, invocation: &CommandInvocation) -> Result<CommandResult, RunError> {
            let mut state = self.inner.lock();
            state.calls.push(invocation.clone());
            match state.responses.get(invocation.program()) {
                Some(FakeResponse::Output(result)) => Ok(result.clone()),
                Some(FakeResponse::LaunchFailure(kind)) => Err(RunError::Launch {
                    command: invocation.command_line(),
                    source: std::io::Error::from(*kind),
                }),
                None => Ok(CommandResult::completed("", Some(0))),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeResponse, FakeRunner};

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
