// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod parse;
pub mod pprint;

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use futures_util::StreamExt;
use rtc_core::format_elapsed;
use rtc_harness::{run_batch, walk_files, BatchSummary, ERROR_LABEL};
use rtc_runner::RunError;

use crate::env;
use crate::exit_error::ExitError;
use crate::output::{report_line, summary_lines, Verdict};

/// Options shared by every batch command.
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Directory searched recursively for input files
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Deadline for each external call, in seconds (default 5, or RTCHECK_TIMEOUT_MS)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Files checked at once (default 1, or RTCHECK_JOBS)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl BatchArgs {
    pub fn deadline(&self) -> Result<Duration, ExitError> {
        match self.timeout {
            Some(secs) => Duration::try_from_secs_f64(secs)
                .ok()
                .filter(|d| !d.is_zero())
                .ok_or_else(|| {
                    ExitError::config(format!(
                        "--timeout must be a positive number of seconds, got {secs}"
                    ))
                }),
            None => Ok(env::timeout().unwrap_or(env::DEFAULT_TIMEOUT)),
        }
    }

    pub fn jobs(&self) -> usize {
        self.jobs.filter(|n| *n > 0).or_else(env::jobs).unwrap_or(env::DEFAULT_JOBS)
    }

    pub fn files(&self, extension: &str) -> Result<impl Iterator<Item = PathBuf>, ExitError> {
        walk_files(&self.root, extension).map_err(|e| ExitError::config(e.to_string()))
    }
}

/// Fail early when `program` cannot be found, instead of once per file.
pub fn ensure_launchable(program: &str) -> Result<(), ExitError> {
    which::which(program)
        .map(|_| ())
        .map_err(|e| ExitError::config(format!("cannot launch `{program}`: {e}")))
}

/// Check every file, printing one report per file and then the summary.
///
/// A launch failure aborts the run: it would repeat for every remaining file.
/// Other per-file errors are printed and counted.
pub async fn drive<I, F, Fut, V>(
    files: I,
    jobs: usize,
    mut summary: BatchSummary,
    check: F,
    out: &mut impl Write,
) -> anyhow::Result<BatchSummary>
where
    I: IntoIterator<Item = PathBuf>,
    F: FnMut(PathBuf) -> Fut,
    Fut: Future<Output = Result<V, RunError>>,
    V: Verdict,
{
    let started = Instant::now();
    let mut reports = std::pin::pin!(run_batch(files, jobs, check));

    while let Some(report) = reports.next().await {
        match &report.outcome {
            Ok(verdict) => summary.record(verdict.label()),
            Err(e) if e.is_launch() => return Err(ExitError::config(e.to_string()).into()),
            Err(_) => summary.record(ERROR_LABEL),
        }
        tracing::debug!(
            path = %report.path.display(),
            elapsed = %format_elapsed(report.elapsed),
            "file checked"
        );
        writeln!(out, "{}", report_line(&report))?;
    }

    writeln!(out, "{}", summary_lines(&summary, started.elapsed()))?;
    Ok(summary)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
