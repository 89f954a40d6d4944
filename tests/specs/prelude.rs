// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

pub use assert_cmd::Command;
pub use predicates::prelude::*;

/// The `dinner` binary with logging quietened so stdout stays parseable
pub fn dinner() -> Command {
    let mut cmd = Command::cargo_bin("dinner").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// A `dinner run` short enough for a test: millisecond delays, sub-second run
pub fn quick_run(strategy: &str) -> Command {
    let mut cmd = dinner();
    cmd.args([
        "run",
        "--strategy",
        strategy,
        "--philosophers",
        "5",
        "--duration",
        "300ms",
        "--grace",
        "2s",
        "--think",
        "1ms..5ms",
        "--eat",
        "1ms..5ms",
    ]);
    cmd
}

/// Parse stdout of a finished command as JSON
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
