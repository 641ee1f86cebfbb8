// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of per-file reports and the end-of-run summary.

use std::fmt::Display;
use std::time::Duration;

use rtc_core::{format_wall_time, ParseVerdict, RoundTripVerdict};
use rtc_harness::{BatchSummary, FileReport, ERROR_LABEL};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// A per-file outcome that can be tallied and printed.
pub trait Verdict: Display {
    fn label(&self) -> &'static str;
}

impl Verdict for RoundTripVerdict {
    fn label(&self) -> &'static str {
        RoundTripVerdict::label(self)
    }
}

impl Verdict for ParseVerdict {
    fn label(&self) -> &'static str {
        ParseVerdict::label(self)
    }
}

/// `<path> <verdict>`, with any multi-line report following on its own lines.
pub fn report_line<V: Verdict>(report: &FileReport<V>) -> String {
    let (label, text) = match &report.outcome {
        Ok(verdict) => (verdict.label(), verdict.to_string()),
        Err(e) => (ERROR_LABEL, format!("{ERROR_LABEL}: {e}")),
    };
    format!("{} {}", report.path.display(), color::verdict(label, &text))
}

/// Verdict tallies followed by `<secs> seconds wall time`.
pub fn summary_lines(summary: &BatchSummary, wall: Duration) -> String {
    format!("{}\n{}", color::context(&summary.to_string()), format_wall_time(wall))
}
