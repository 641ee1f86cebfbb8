// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round-trip evaluation of one input file.
//!
//! ```text
//! primary tool ──timed out──────────────▶ TimedOut
//!      │
//!      ├── sentinel in stdout ──────────▶ Equal
//!      │
//!      └── sentinel absent ──▶ diff <file>.1 <file>.2 ──▶ Mismatch(report)
//! ```

use std::path::Path;
use std::time::Duration;

use rtc_core::RoundTripVerdict;
use rtc_runner::{CommandRunner, RunError};

use crate::tools::{artifact_paths, DiffTool, RoundTripTool};

/// Evaluates files with a round-trip tool, falling back to a diff of the
/// tool's artifacts when it does not report equality.
#[derive(Clone)]
pub struct RoundTrip<R: CommandRunner> {
    runner: R,
    tool: RoundTripTool,
    diff: DiffTool,
}

impl<R: CommandRunner> RoundTrip<R> {
    pub fn new(runner: R, tool: RoundTripTool, diff: DiffTool) -> Self {
        Self { runner, tool, diff }
    }

    /// Check `file`, giving each external call at most `deadline`.
    ///
    /// Only a failure to launch or wait on the round-trip tool itself is an
    /// error. A failing diff step degrades the report to empty text.
    pub async fn evaluate(
        &self,
        file: &Path,
        deadline: Duration,
    ) -> Result<RoundTripVerdict, RunError> {
        let primary = self.tool.invocation(file, deadline);
        let result = self.runner.run(&primary).await?;

        if result.is_timed_out() {
            tracing::info!(file = %file.display(), command = %primary, "round trip timed out");
            return Ok(RoundTripVerdict::TimedOut);
        }
        if result.stdout.contains(&self.tool.sentinel) {
            return Ok(RoundTripVerdict::Equal);
        }

        tracing::debug!(
            file = %file.display(),
            exit_code = ?result.exit_code,
            stdout = %result.stdout,
            stderr = %result.stderr,
            "no equality marker, diffing artifacts"
        );
        Ok(RoundTripVerdict::Mismatch(self.diff_report(file, deadline).await))
    }

    /// Diff `<file>.1` against `<file>.2`, or empty text if that is impossible.
    async fn diff_report(&self, file: &Path, deadline: Duration) -> String {
        let (left, right) = artifact_paths(file);
        let missing: Vec<_> = [&left, &right].into_iter().filter(|p| !p.is_file()).collect();
        if !missing.is_empty() {
            tracing::warn!(
                file = %file.display(),
                missing = ?missing,
                "round-trip artifacts missing, skipping diff"
            );
            return String::new();
        }

        let invocation = self.diff.invocation(&left, &right, deadline);
        match self.runner.run(&invocation).await {
            Ok(result) => {
                if result.is_timed_out() {
                    tracing::warn!(file = %file.display(), command = %invocation, "diff timed out");
                }
                result.stdout
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "diff failed");
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "roundtrip_tests.rs"]
mod tests;
