// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rtc-harness: per-file checks of the mCRL2 parser and pretty printer.
//!
//! The checks never print. They hand back one verdict per file and leave
//! presentation to the caller.

pub mod batch;
pub mod corpus;
pub mod parse;
pub mod roundtrip;
pub mod summary;
pub mod tools;

pub use batch::{run_batch, FileReport};
pub use corpus::{walk_files, CorpusError};
pub use parse::ParseCheck;
pub use roundtrip::RoundTrip;
pub use summary::{BatchSummary, ERROR_LABEL};
pub use tools::{artifact_paths, DiffTool, ParserTool, RoundTripTool, ToolSet, EQUAL_SENTINEL};
