// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rtcheck pprint`: round-trip every file through the pretty printer.

use std::io::Write;

use clap::Args;
use rtc_harness::{BatchSummary, RoundTrip, ToolSet, EQUAL_SENTINEL};
use rtc_runner::CommandRunner;

use super::{drive, BatchArgs};
use crate::env;
use crate::exit_error::ExitError;

#[derive(Args, Debug, Clone)]
pub struct PprintArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Extension of the input files
    #[arg(long, value_name = "EXT", default_value = "lps")]
    pub ext: String,

    /// Round-trip tool, by name or path (or RTCHECK_PPRINT_BIN)
    #[arg(long, value_name = "P")]
    pub pprint_bin: Option<String>,

    /// Diff tool used when the round trip does not report equality (or RTCHECK_DIFF_BIN)
    #[arg(long, value_name = "D")]
    pub diff_bin: Option<String>,

    /// Text in the tool's stdout that marks a successful round trip
    #[arg(long, value_name = "S", default_value = EQUAL_SENTINEL)]
    pub sentinel: String,
}

impl PprintArgs {
    /// Tools for this run: flag, then environment, then the built-in default.
    pub fn tool_set(&self) -> Result<ToolSet, ExitError> {
        if self.sentinel.is_empty() {
            return Err(ExitError::config("--sentinel must not be empty"));
        }
        let mut tools = ToolSet::default();
        tools.pprint.sentinel = self.sentinel.clone();
        if let Some(program) = self.pprint_bin.clone().or_else(env::pprint_bin) {
            tools.pprint.program = program;
        }
        if let Some(program) = self.diff_bin.clone().or_else(env::diff_bin) {
            tools.diff.program = program;
        }
        Ok(tools)
    }
}

pub async fn handle<R: CommandRunner>(
    args: PprintArgs,
    runner: R,
    out: &mut impl Write,
) -> anyhow::Result<BatchSummary> {
    let tools = args.tool_set()?;
    let deadline = args.batch.deadline()?;
    let files = args.batch.files(&args.ext)?;
    tracing::info!(
        root = %args.batch.root.display(),
        tool = %tools.pprint.program,
        deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
        "starting round-trip batch"
    );

    let evaluator = RoundTrip::new(runner, tools.pprint, tools.diff);
    let evaluator = &evaluator;
    drive(
        files,
        args.batch.jobs(),
        BatchSummary::round_trip(),
        move |path| async move { evaluator.evaluate(&path, deadline).await },
        out,
    )
    .await
}

#[cfg(test)]
#[path = "pprint_tests.rs"]
mod tests;
