// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const ISSUES: &str = r#"[
  {"number": 11, "repo": "owner/app", "title": "Crash on startup", "labels": ["bug", "prio.high"],
   "assignee": "alice", "milestone": "v1.0", "milestone_due": "2014-07-01",
   "comments": 4, "updated_at": "2014-06-01T11:00:00Z", "created_at": "2014-05-20T09:00:00Z"},
  {"number": 12, "repo": "owner/app", "title": "Dark mode", "description": "Add a dark theme",
   "labels": ["feature"], "state": "closed", "comments": 0,
   "updated_at": "2014-05-01T00:00:00Z", "created_at": "2014-04-01T00:00:00Z"},
  {"number": 7, "repo": "owner/lib", "title": "Crash when offline", "labels": ["bug", "prio.low"],
   "assignee": "bob", "pull_request": true, "comments": 12,
   "updated_at": "2014-06-01T08:00:00Z", "created_at": "2014-06-01T07:00:00Z"}
]"#;

pub const NOW: &str = "2014-06-01T12:00:00Z";

/// `hubq` run inside `dir` with no ambient configuration or colors.
pub fn hubq_in(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("hubq");
    cmd.current_dir(dir.path())
        .env_remove("HUBQ_CONFIG")
        .env_remove("HUBQ_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

/// A temp directory holding `issues.json` with [`ISSUES`].
pub fn issues_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.json");
    std::fs::write(&path, ISSUES).unwrap();
    (temp, path)
}

/// Runs `hubq filter <filter> --now NOW -o id` against [`ISSUES`] and returns
/// the matching numbers.
pub fn filter_ids(filter: &str) -> Vec<i64> {
    let (temp, path) = issues_dir();
    let output = hubq_in(&temp)
        .args(["filter", filter, "--now", NOW, "-o", "id", "-i"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}
