// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs

use crate::prelude::*;

#[test]
fn missing_subcommand_fails() {
    dinner().assert().failure();
}

#[test]
fn unknown_strategy_is_rejected() {
    dinner()
        .args(["run", "--strategy", "greedy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn single_philosopher_is_rejected_with_suggestion() {
    dinner()
        .args(["run", "--philosophers", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 philosophers"))
        .stderr(predicate::str::contains("suggestions:"));
}

#[test]
fn reversed_delay_range_is_rejected() {
    dinner()
        .args(["run", "--think", "3s..1s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min exceeds max"));
}

#[test]
fn missing_config_file_is_reported() {
    dinner()
        .args(["run", "--config", "/nonexistent/dinner.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"))
        .stderr(predicate::str::contains("--config"));
}
