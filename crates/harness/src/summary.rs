// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict tallies for the end-of-run summary line.

use std::fmt;

/// Label used for files whose check ended in an error instead of a verdict.
pub const ERROR_LABEL: &str = "error";

/// Counts verdict labels in a fixed display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    counts: Vec<(&'static str, usize)>,
}

impl BatchSummary {
    /// Summary for round-trip runs: equal, mismatch, timeout, error.
    pub fn round_trip() -> Self {
        Self::with_labels(&["equal", "mismatch", "timeout", ERROR_LABEL])
    }

    /// Summary for parse runs: ok, diagnostics, timeout, error.
    pub fn parse() -> Self {
        Self::with_labels(&["ok", "diagnostics", "timeout", ERROR_LABEL])
    }

    pub fn with_labels(labels: &[&'static str]) -> Self {
        Self { counts: labels.iter().map(|label| (*label, 0)).collect() }
    }

    /// Count one file. Unknown labels are appended after the fixed ones.
    pub fn record(&mut self, label: &'static str) {
        match self.counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((label, 1)),
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.iter().find(|(l, _)| *l == label).map(|(_, n)| *n).unwrap_or(0)
    }

    pub fn files(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = self.files();
        write!(f, "{} file{}", files, if files == 1 { "" } else { "s" })?;
        let mut parts = self.counts.iter().filter(|(l, n)| *n > 0 || *l != ERROR_LABEL);
        if let Some((label, n)) = parts.next() {
            write!(f, ": {n} {label}")?;
        }
        for (label, n) in parts {
            write!(f, ", {n} {label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
