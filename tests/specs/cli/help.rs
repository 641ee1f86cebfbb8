// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_both_checks() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("pprint").stdout_has("parse");
}

#[test]
fn pprint_help_shows_options() {
    cli()
        .args(&["pprint", "--help"])
        .passes()
        .stdout_has("--timeout")
        .stdout_has("--jobs")
        .stdout_has("--sentinel");
}

#[test]
fn parse_help_shows_options() {
    cli().args(&["parse", "--help"]).passes().stdout_has("--parser-bin").stdout_has("--option");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn no_subcommand_is_a_usage_error() {
    cli().exits_with(2).stderr_has("Usage:");
}
