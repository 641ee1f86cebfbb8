// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rtcheck parse`: run the parser over every file and print what it reports.

use std::io::Write;

use clap::Args;
use rtc_harness::{BatchSummary, ParseCheck, ToolSet};
use rtc_runner::CommandRunner;

use super::{drive, BatchArgs};
use crate::env;

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Extension of the input files
    #[arg(long, value_name = "EXT", default_value = "mcrl2")]
    pub ext: String,

    /// Parser, by name or path (or RTCHECK_PARSER_BIN)
    #[arg(long, value_name = "P")]
    pub parser_bin: Option<String>,

    /// Option passed to the parser before the file; repeatable (default -P)
    #[arg(long = "option", value_name = "OPT", allow_hyphen_values = true)]
    pub options: Vec<String>,
}

impl ParseArgs {
    /// Tools for this run: flag, then environment, then the built-in default.
    pub fn tool_set(&self) -> ToolSet {
        let mut tools = ToolSet::default();
        if let Some(program) = self.parser_bin.clone().or_else(env::parser_bin) {
            tools.parser.program = program;
        }
        if !self.options.is_empty() {
            tools.parser.options = self.options.clone();
        }
        tools
    }
}

pub async fn handle<R: CommandRunner>(
    args: ParseArgs,
    runner: R,
    out: &mut impl Write,
) -> anyhow::Result<BatchSummary> {
    let tool = args.tool_set().parser;
    let deadline = args.batch.deadline()?;
    let files = args.batch.files(&args.ext)?;
    tracing::info!(
        root = %args.batch.root.display(),
        tool = %tool.program,
        deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
        "starting parse batch"
    );

    let checker = ParseCheck::new(runner, tool);
    let checker = &checker;
    drive(
        files,
        args.batch.jobs(),
        BatchSummary::parse(),
        move |path| async move { checker.check(&path, deadline).await },
        out,
    )
    .await
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
