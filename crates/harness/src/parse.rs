// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse-only check: run the parser and keep what it reports.

use std::path::Path;
use std::time::Duration;

use rtc_core::ParseVerdict;
use rtc_runner::{CommandRunner, RunError};

use crate::tools::ParserTool;

#[derive(Clone)]
pub struct ParseCheck<R: CommandRunner> {
    runner: R,
    tool: ParserTool,
}

impl<R: CommandRunner> ParseCheck<R> {
    pub fn new(runner: R, tool: ParserTool) -> Self {
        Self { runner, tool }
    }

    /// Parse `file`. The parser reports problems on stderr, so that stream
    /// becomes the verdict text; stdout carries the parsed term and is dropped.
    pub async fn check(&self, file: &Path, deadline: Duration) -> Result<ParseVerdict, RunError> {
        let invocation = self.tool.invocation(file, deadline);
        let result = self.runner.run(&invocation).await?;
        if result.is_timed_out() {
            tracing::info!(file = %file.display(), command = %invocation, "parse timed out");
            return Ok(ParseVerdict::TimedOut);
        }
        Ok(ParseVerdict::Completed(result.stderr))
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
