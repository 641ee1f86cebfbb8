// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rtcheck parse` against a stub parser.

use crate::prelude::*;

/// Stub parser: complains on stderr about files named `*bad*`, echoes the
/// options it was given on stdout.
fn parser(temp: &Project) -> std::path::PathBuf {
    temp.tool(
        "mcrl2parse",
        r#"for last in "$@"; do :; done
echo "options: $*"
case "$(basename "$last")" in
  *bad*) echo "syntax error near 'proc'" >&2; exit 1 ;;
esac"#,
    )
}

#[test]
fn prints_diagnostics_or_ok_per_file() {
    let temp = Project::empty();
    let parser = parser(&temp);
    let good = temp.file("good.mcrl2", "init delta;");
    let bad = temp.file("bad.mcrl2", "proc");

    cli()
        .arg("parse")
        .arg(temp.corpus())
        .arg("--parser-bin")
        .arg(&parser)
        .passes()
        .stdout_has(&format!("{} syntax error near 'proc'", bad.display()))
        .stdout_has(&format!("{} ok", good.display()))
        .stdout_has("2 files: 1 ok, 1 diagnostics, 0 timeout")
        .stdout_has("seconds wall time")
        .stdout_lacks("options:");
}

#[test]
fn parser_from_env_with_custom_option() {
    let temp = Project::empty();
    let parser = temp.tool(
        "echo-options",
        r#"[ "$1" = "-S" ] || { echo "expected -S, got $1" >&2; exit 1; }"#,
    );
    temp.file("spec.mcrl2", "init delta;");

    cli()
        .arg("parse")
        .arg(temp.corpus())
        .env("RTCHECK_PARSER_BIN", &parser)
        .args(&["--option", "-S"])
        .passes()
        .stdout_has("spec.mcrl2 ok");
}

#[test]
fn missing_parser_is_a_config_error() {
    let temp = Project::empty();
    temp.file("a.mcrl2", "init delta;");

    cli()
        .arg("parse")
        .arg(temp.corpus())
        .args(&["--parser-bin", "rtcheck-missing-parser-9c1e"])
        .exits_with(2)
        .stderr_has("rtcheck-missing-parser-9c1e");
}
