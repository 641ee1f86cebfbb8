// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rtcheck pprint` against stub tools.

use crate::prelude::*;
use crate::prelude::assert_eq;
use std::time::{Duration, Instant};

#[test]
fn equal_files_print_one_line_each() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();
    let a = temp.file("a_equal.lps", "lps");
    let b = temp.file("nested/b_equal.lps", "lps");
    temp.file("readme.txt", "not a corpus file");

    let run = cli().arg("pprint").arg(temp.corpus()).arg("--pprint-bin").arg(&pprint).passes();

    let stdout = run.stdout();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], format!("{} equal", a.display()));
    assert_eq!(lines[1], format!("{} equal", b.display()));
    assert_eq!(lines[2], "2 files: 2 equal, 0 mismatch, 0 timeout");
    assert!(lines[3].ends_with(" seconds wall time"), "{stdout}");
    assert_eq!(lines.len(), 4, "{stdout}");
}

#[test]
fn mismatch_prints_diff_of_artifacts() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();
    let file = temp.file("f.lps", "lps");

    cli()
        .arg("pprint")
        .arg(temp.corpus())
        .arg("--pprint-bin")
        .arg(&pprint)
        .passes()
        .stdout_has(&format!("{} mismatch\n", file.display()))
        .stdout_has("< a")
        .stdout_has("> b")
        .stdout_has("1 file: 0 equal, 1 mismatch, 0 timeout")
        .stdout_lacks("NOT EQUAL");
}

#[test]
fn slow_file_times_out_and_run_continues() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();
    temp.file("a_slow.lps", "lps");
    temp.file("b_equal.lps", "lps");

    let started = Instant::now();
    cli()
        .arg("pprint")
        .arg(temp.corpus())
        .args(&["--timeout", "0.5"])
        .arg("--pprint-bin")
        .arg(&pprint)
        .passes()
        .stdout_has("a_slow.lps timeout")
        .stdout_has("b_equal.lps equal")
        .stdout_has("2 files: 1 equal, 0 mismatch, 1 timeout");

    assert!(started.elapsed() < Duration::from_secs(10), "took {:?}", started.elapsed());
}

#[test]
fn tools_can_come_from_env() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();
    temp.file("x_equal.lps", "lps");

    cli()
        .arg("pprint")
        .arg(temp.corpus())
        .env("RTCHECK_PPRINT_BIN", &pprint)
        .env("RTCHECK_JOBS", "2")
        .passes()
        .stdout_has("x_equal.lps equal");
}

#[test]
fn jobs_keep_input_order() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();
    let names = ["a_equal.lps", "b.lps", "c_equal.lps", "d.lps", "e_equal.lps"];
    let files: Vec<_> = names.iter().map(|n| temp.file(n, "lps")).collect();

    let run = cli()
        .arg("pprint")
        .arg(temp.corpus())
        .args(&["--jobs", "4"])
        .arg("--pprint-bin")
        .arg(&pprint)
        .passes();

    let stdout = run.stdout();
    let reported: Vec<&str> = stdout
        .lines()
        .filter(|l| l.ends_with(" equal") || l.ends_with(" mismatch"))
        .collect();
    let expected: Vec<String> = files
        .iter()
        .zip(["equal", "mismatch", "equal", "mismatch", "equal"])
        .map(|(f, v)| format!("{} {v}", f.display()))
        .collect();
    assert_eq!(reported, expected);
}

#[test]
fn missing_tool_is_a_config_error() {
    let temp = Project::empty();
    temp.file("a.lps", "lps");
    let absent = temp.root().join("bin/absent-pprint");

    cli()
        .arg("pprint")
        .arg(temp.corpus())
        .arg("--pprint-bin")
        .arg(&absent)
        .exits_with(2)
        .stderr_has("cannot launch")
        .stdout_lacks("a.lps");
}

#[test]
fn missing_root_is_a_config_error() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();

    cli()
        .arg("pprint")
        .arg(temp.root().join("nowhere"))
        .arg("--pprint-bin")
        .arg(&pprint)
        .exits_with(2)
        .stderr_has("nowhere");
}

#[test]
fn empty_sentinel_is_rejected() {
    let temp = Project::empty();
    let pprint = temp.pprint_stub();

    cli()
        .arg("pprint")
        .arg(temp.corpus())
        .arg("--pprint-bin")
        .arg(&pprint)
        .args(&["--sentinel", ""])
        .exits_with(2)
        .stderr_has("--sentinel");
}
