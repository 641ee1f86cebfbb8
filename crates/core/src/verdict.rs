// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file verdicts produced by the harness checks.

use std::fmt;

/// Outcome of one file's round-trip check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripVerdict {
    /// The tool reported that the reprinted text parses back to the same term.
    Equal,
    /// The tool did not finish before the deadline.
    TimedOut,
    /// The tool finished without reporting equality; carries the diff of the
    /// two artifacts it left behind (empty when the diff produced nothing).
    Mismatch(String),
}

impl RoundTripVerdict {
    /// Short label used in summaries and the first word of each output line.
    pub fn label(&self) -> &'static str {
        match self {
            RoundTripVerdict::Equal => "equal",
            RoundTripVerdict::TimedOut => "timeout",
            RoundTripVerdict::Mismatch(_) => "mismatch",
        }
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            RoundTripVerdict::Mismatch(report) => Some(report),
            _ => None,
        }
    }
}

impl fmt::Display for RoundTripVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())?;
        match self.report().map(str::trim_end) {
            Some(report) if !report.is_empty() => write!(f, "\n{report}"),
            _ => Ok(()),
        }
    }
}

/// Outcome of one file's parse-only check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVerdict {
    /// The parser finished; carries whatever it reported (empty when clean).
    Completed(String),
    TimedOut,
}

impl ParseVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            ParseVerdict::Completed(text) if text.trim().is_empty() => "ok",
            ParseVerdict::Completed(_) => "diagnostics",
            ParseVerdict::TimedOut => "timeout",
        }
    }
}

impl fmt::Display for ParseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVerdict::Completed(text) if !text.trim().is_empty() => f.write_str(text.trim()),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
