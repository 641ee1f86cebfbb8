// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rtc-core: data model shared by the runner, the harness and the `rtcheck` CLI

pub mod macros;

pub mod invocation;
pub mod result;
pub mod time_fmt;
pub mod verdict;

pub use invocation::CommandInvocation;
pub use result::{CommandResult, CommandStatus};
pub use time_fmt::{format_elapsed, format_wall_time};
pub use verdict::{ParseVerdict, RoundTripVerdict};
