// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rtcheck`: batch round-trip and parse checks for an mCRL2 corpus.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use rtc_runner::ProcessRunner;
use tracing_subscriber::EnvFilter;

use crate::commands::parse::ParseArgs;
use crate::commands::pprint::PprintArgs;
use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(name = "rtcheck", version, about, styles = color::styles())]
struct Cli {
    /// Log at debug level (RTCHECK_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Round-trip every file through the pretty printer, diffing on mismatch
    Pprint(PprintArgs),
    /// Run the parser over every file and print what it reports
    Parse(ParseArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        let code = e.downcast_ref::<ExitError>().map(|exit| exit.code).unwrap_or(1);
        eprintln!("rtcheck: {e:#}");
        std::process::exit(code);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let runner = ProcessRunner::new();
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Pprint(args) => {
            commands::ensure_launchable(&args.tool_set()?.pprint.program)?;
            commands::pprint::handle(args, runner, &mut stdout).await?;
        }
        Command::Parse(args) => {
            commands::ensure_launchable(&args.tool_set().parser.program)?;
            commands::parse::handle(args, runner, &mut stdout).await?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = env::log_filter().map(EnvFilter::new).unwrap_or_else(|| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if let Err(err) = builder.try_init() {
        eprintln!("rtcheck: failed to install tracing subscriber: {err}");
    }
}
