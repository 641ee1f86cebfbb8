// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rtc-runner: run external programs under a hard wall-clock deadline.
//!
//! [`ProcessRunner`] is the production implementation of [`CommandRunner`].
//! Each call spawns the program in its own process group, races its exit
//! against the deadline, and on expiry kills the whole group so descendants
//! cannot outlive the invocation.

mod error;
mod process;
mod runner;

pub use error::RunError;
pub use process::{ProcessRunner, DRAIN_GRACE};
pub use runner::CommandRunner;

#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeResponse, FakeRunner};
