// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External tool names and argument conventions.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rtc_core::CommandInvocation;

/// Printed by `pprint -r` when the reprinted text parses back to the same term.
pub const EQUAL_SENTINEL: &str = "EQUAL!";

/// Tool that checks a file round-trips through print and re-parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripTool {
    pub program: String,
    /// Flags selecting the replay mode; the file path follows them.
    pub mode_args: Vec<String>,
    /// Exact, case-sensitive substring reported on success.
    pub sentinel: String,
}

impl Default for RoundTripTool {
    fn default() -> Self {
        Self {
            program: "pprint".to_string(),
            mode_args: vec!["-r".to_string()],
            sentinel: EQUAL_SENTINEL.to_string(),
        }
    }
}

impl RoundTripTool {
    pub fn invocation(&self, file: &Path, deadline: Duration) -> CommandInvocation {
        CommandInvocation::new(&self.program, deadline).args(&self.mode_args).arg(file)
    }
}

/// Parser run for the parse-only check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserTool {
    pub program: String,
    pub options: Vec<String>,
}

impl Default for ParserTool {
    fn default() -> Self {
        Self { program: "mcrl2parse".to_string(), options: vec!["-P".to_string()] }
    }
}

impl ParserTool {
    pub fn invocation(&self, file: &Path, deadline: Duration) -> CommandInvocation {
        CommandInvocation::new(&self.program, deadline).args(&self.options).arg(file)
    }
}

/// Line diff used to explain a failed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTool {
    pub program: String,
}

impl Default for DiffTool {
    fn default() -> Self {
        Self { program: "diff".to_string() }
    }
}

impl DiffTool {
    pub fn invocation(&self, left: &Path, right: &Path, deadline: Duration) -> CommandInvocation {
        CommandInvocation::new(&self.program, deadline).arg(left).arg(right)
    }
}

/// All external tools the harness drives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSet {
    pub pprint: RoundTripTool,
    pub parser: ParserTool,
    pub diff: DiffTool,
}

/// The two files a round-trip tool leaves next to `file`: `<file>.1` and `<file>.2`.
pub fn artifact_paths(file: &Path) -> (PathBuf, PathBuf) {
    let with_suffix = |suffix: &str| {
        let mut name = OsString::from(file.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    };
    (with_suffix(".1"), with_suffix(".2"))
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
