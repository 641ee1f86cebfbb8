// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline-bounded subprocess execution.

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use rtc_core::{CommandInvocation, CommandResult, CommandStatus};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::{CommandRunner, RunError};

/// How long output readers get to reach EOF once the process is gone.
///
/// A descendant that inherited the pipes can keep them open after the
/// direct child exits; past this grace the process group is killed.
pub const DRAIN_GRACE: Duration = Duration::from_millis(250);

/// Production runner backed by `tokio::process`.
#[derive(Clone, Debug)]
pub struct ProcessRunner {
    drain_grace: Duration,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self { drain_grace: DRAIN_GRACE }
    }

    pub fn with_drain_grace(mut self, grace: Duration) -> Self {
        self.drain_grace = grace;
        self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &CommandInvocation) -> Result<CommandResult, RunError> {
        let span = tracing::info_span!(
            "runner.cmd",
            cmd = %invocation.program(),
            args = ?invocation.arg_list(),
            status = tracing::field::Empty,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        run_bounded(invocation, self.drain_grace).instrument(span).await
    }
}

async fn run_bounded(
    invocation: &CommandInvocation,
    drain_grace: Duration,
) -> Result<CommandResult, RunError> {
    let command = invocation.command_line();
    if invocation.deadline().is_zero() {
        return Err(RunError::InvalidDeadline { command });
    }

    let start = Instant::now();
    let mut process = tokio::process::Command::new(invocation.program());
    process
        .args(invocation.arg_list())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    // New group led by the child, so one signal reaches every descendant.
    #[cfg(unix)]
    {
        process.process_group(0);
    }

    let mut child =
        process.spawn().map_err(|source| RunError::Launch { command: command.clone(), source })?;
    let group = ProcessGroup::of(&child);
    let mut stdout = Capture::spawn(child.stdout.take());
    let mut stderr = Capture::spawn(child.stderr.take());

    let waited = tokio::time::timeout(invocation.deadline(), child.wait()).await;
    let (status, exit_code) = match waited {
        Ok(Ok(exit)) => (CommandStatus::Completed, exit.code()),
        Ok(Err(source)) => {
            group.kill(&mut child, &command);
            return Err(RunError::Wait { command, source });
        }
        Err(_) => {
            tracing::warn!(
                %command,
                deadline_ms = millis(invocation.deadline()),
                "deadline elapsed, killing process group"
            );
            group.kill(&mut child, &command);
            match tokio::time::timeout(drain_grace, child.wait()).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::warn!(%command, error = %e, "failed to reap killed child"),
                Err(_) => tracing::warn!(%command, "killed child did not exit within grace"),
            }
            (CommandStatus::TimedOut, None)
        }
    };

    let (out_done, err_done) = tokio::join!(stdout.settle(drain_grace), stderr.settle(drain_grace));
    if !(out_done && err_done) {
        // The leader is reaped by now, so its pid only stays reserved while
        // other members keep the group alive.
        if group.has_members() {
            tracing::debug!(%command, "output still open after exit, killing leftover descendants");
            group.kill(&mut child, &command);
        } else {
            tracing::debug!(%command, "output held open outside the process group");
        }
        tokio::join!(stdout.settle(drain_grace), stderr.settle(drain_grace));
    }

    let duration = start.elapsed();
    let span = tracing::Span::current();
    span.record("status", tracing::field::display(status));
    if let Some(code) = exit_code {
        span.record("exit_code", code);
    }
    span.record("duration_ms", millis(duration));

    Ok(CommandResult { stdout: stdout.into_text(), stderr: stderr.into_text(), exit_code, status })
}

/// Milliseconds for log fields, saturating instead of wrapping.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// The process group created for one child.
///
/// The id is captured at spawn time because tokio forgets the pid once the
/// child has been reaped, while leftover group members may still be running.
struct ProcessGroup {
    pgid: Option<i32>,
}

impl ProcessGroup {
    fn of(child: &Child) -> Self {
        Self { pgid: child.id().and_then(|pid| i32::try_from(pid).ok()) }
    }

    /// Whether any process still belongs to the group.
    ///
    /// After the leader is reaped an empty group's pgid can be reused, so an
    /// empty group must not be signalled. A populated group keeps its pgid;
    /// the only remaining window is a reuse between this probe and the kill.
    fn has_members(&self) -> bool {
        #[cfg(unix)]
        {
            use nix::sys::signal::killpg;
            use nix::unistd::Pid;

            if let Some(pgid) = self.pgid {
                return killpg(Pid::from_raw(pgid), None).is_ok();
            }
        }
        self.pgid.is_some()
    }

    /// SIGKILL the whole group, falling back to the direct child alone.
    fn kill(&self, child: &mut Child, command: &str) {
        #[cfg(unix)]
        {
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;

            if let Some(pgid) = self.pgid {
                match killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
                    Ok(()) => return,
                    // Nothing left in the group.
                    Err(nix::errno::Errno::ESRCH) => return,
                    Err(errno) => {
                        tracing::debug!(%command, %errno, "killpg failed, killing child only")
                    }
                }
            }
        }
        if let Err(e) = child.start_kill() {
            tracing::debug!(%command, error = %e, "kill failed");
        }
    }
}

/// Incrementally buffered output of one pipe.
///
/// Bytes land in the buffer as soon as they are read, so a killed process
/// still yields everything it wrote before the signal.
struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
    task: Option<JoinHandle<()>>,
}

impl Capture {
    fn spawn<R>(reader: Option<R>) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let task = reader.map(|mut reader| {
            let buf = Arc::clone(&buf);
            tokio::spawn(async move {
                let mut chunk = [0u8; 8192];
                loop {
                    match reader.read(&mut chunk).await {
                        Ok(0) => break,
                        Ok(n) => buf.lock().extend_from_slice(&chunk[..n]),
                        Err(e) => {
                            tracing::debug!(error = %e, "output read failed, keeping what was read");
                            break;
                        }
                    }
                }
            })
        });
        Self { buf, task }
    }

    /// Wait up to `grace` for the reader to hit EOF. Returns false if the
    /// pipe is still open.
    async fn settle(&mut self, grace: Duration) -> bool {
        let Some(task) = self.task.as_mut() else {
            return true;
        };
        match tokio::time::timeout(grace, task).await {
            Ok(_) => {
                self.task = None;
                true
            }
            Err(_) => false,
        }
    }

    fn into_text(self) -> String {
        if let Some(task) = &self.task {
            task.abort();
        }
        let bytes = std::mem::take(&mut *self.buf.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
