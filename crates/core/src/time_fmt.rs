// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable durations for per-file timings and the run summary.

use std::time::Duration;

/// Format a duration compactly: `850ms`, `2.40s`, `3m12s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        let secs = elapsed.as_secs();
        format!("{}m{:02}s", secs / 60, secs % 60)
    }
}

/// Format the total run time as printed after a batch.
pub fn format_wall_time(elapsed: Duration) -> String {
    format!("{:.3} seconds wall time", elapsed.as_secs_f64())
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
