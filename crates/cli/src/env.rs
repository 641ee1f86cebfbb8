// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.
//!
//! Every setting here is an override: a command-line flag wins over the
//! variable, and the variable wins over the built-in default.

use std::time::Duration;

/// Per-call deadline when neither `--timeout` nor `RTCHECK_TIMEOUT_MS` is set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Files checked at once when neither `--jobs` nor `RTCHECK_JOBS` is set.
pub const DEFAULT_JOBS: usize = 1;

/// Round-trip tool override (`RTCHECK_PPRINT_BIN`).
pub fn pprint_bin() -> Option<String> {
    non_empty("RTCHECK_PPRINT_BIN")
}

/// Parser override (`RTCHECK_PARSER_BIN`).
pub fn parser_bin() -> Option<String> {
    non_empty("RTCHECK_PARSER_BIN")
}

/// Diff tool override (`RTCHECK_DIFF_BIN`).
pub fn diff_bin() -> Option<String> {
    non_empty("RTCHECK_DIFF_BIN")
}

/// Per-call deadline in milliseconds. Zero and unparsable values are ignored.
pub fn timeout() -> Option<Duration> {
    std::env::var("RTCHECK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

pub fn jobs() -> Option<usize> {
    std::env::var("RTCHECK_JOBS").ok().and_then(|s| s.parse::<usize>().ok()).filter(|n| *n > 0)
}

/// Tracing filter directive (`RTCHECK_LOG`), e.g. `rtc_runner=debug`.
pub fn log_filter() -> Option<String> {
    non_empty("RTCHECK_LOG")
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
