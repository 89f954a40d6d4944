// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    dinner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("strategies"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_help_lists_flags() {
    dinner()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--philosophers"))
        .stdout(predicate::str::contains("--grace"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn version_is_printed() {
    dinner()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dinner "));
}

#[test]
fn completions_are_generated() {
    dinner()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dinner"));
}
