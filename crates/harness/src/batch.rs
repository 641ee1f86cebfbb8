// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drive a per-file check over a corpus.

use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use futures_util::stream::{self, Stream, StreamExt};
use rtc_runner::RunError;

/// Result of checking one file.
#[derive(Debug)]
pub struct FileReport<V> {
    pub path: PathBuf,
    pub outcome: Result<V, RunError>,
    pub elapsed: Duration,
}

/// Run `check` over `files` with at most `jobs` checks in flight.
///
/// Reports come out in input order whatever the completion order, so output
/// stays deterministic. `jobs` of 0 or 1 checks files strictly one at a time.
/// An error for one file is carried in its report and does not end the stream.
pub fn run_batch<I, F, Fut, V>(
    files: I,
    jobs: usize,
    mut check: F,
) -> impl Stream<Item = FileReport<V>>
where
    I: IntoIterator<Item = PathBuf>,
    F: FnMut(PathBuf) -> Fut,
    Fut: Future<Output = Result<V, RunError>>,
{
    stream::iter(files)
        .map(move |path| {
            let pending = check(path.clone());
            async move {
                let start = Instant::now();
                let outcome = pending.await;
                FileReport { path, outcome, elapsed: start.elapsed() }
            }
        })
        .buffered(jobs.max(1))
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
