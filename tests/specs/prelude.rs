// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a temp corpus with stub tools and fluent assertions.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use similar_asserts::assert_eq;

/// `rtcheck` with a clean environment for the variables it reads.
pub fn cli() -> Cmd {
    let mut cmd = assert_cmd::Command::cargo_bin("rtcheck").unwrap();
    for key in [
        "RTCHECK_PPRINT_BIN",
        "RTCHECK_PARSER_BIN",
        "RTCHECK_DIFF_BIN",
        "RTCHECK_TIMEOUT_MS",
        "RTCHECK_JOBS",
        "RTCHECK_LOG",
        "COLOR",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1");
    Cmd { cmd }
}

pub struct Cmd {
    cmd: assert_cmd::Command,
}

impl Cmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(run.output.status.success(), "expected success\n{}", run.dump());
        run
    }

    pub fn exits_with(mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert_eq!(run.output.status.code(), Some(code), "{}", run.dump());
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.dump());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.dump());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.dump());
        self
    }

    fn dump(&self) -> String {
        format!("--- stdout\n{}--- stderr\n{}", self.stdout(), self.stderr())
    }
}

/// Temp directory holding a corpus and the stub tools that check it.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("corpus")).unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn corpus(&self) -> PathBuf {
        self.dir.path().join("corpus")
    }

    /// Write a corpus file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.corpus().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write an executable shell script into `bin/` and return its path.
    pub fn tool(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("bin").join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Stub pretty printer: files named `*equal*` round-trip, files named
    /// `*slow*` hang, everything else leaves two differing artifacts.
    pub fn pprint_stub(&self) -> PathBuf {
        self.tool(
            "pprint",
            r#"[ "$1" = "-r" ] || { echo "usage: pprint -r FILE" >&2; exit 64; }
case "$(basename "$2")" in
  *equal*) echo "reprinted"; echo "EQUAL!" ;;
  *slow*) echo "reprinting"; sleep 30 ;;
  *) printf 'a\n' > "$2.1"; printf 'b\n' > "$2.2"; echo "NOT EQUAL"; exit 1 ;;
esac"#,
        )
    }
}
