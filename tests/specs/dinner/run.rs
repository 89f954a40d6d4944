// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner run` specs

use crate::prelude::*;

#[test]
fn monitor_run_prints_fairness_report() {
    quick_run("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy: monitor"))
        .stdout(predicate::str::contains("fairness:"))
        .stdout(predicate::str::contains("P4"))
        .stdout(predicate::str::contains("left:     5/5"));
}

#[test]
fn json_run_reports_every_philosopher() {
    let output = quick_run("asymmetric")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let summary = json_stdout(&output);
    assert_eq!(summary["report"]["strategy"], "asymmetric");
    assert_eq!(summary["report"]["philosophers"].as_array().unwrap().len(), 5);
    assert_eq!(summary["finished"].as_array().unwrap().len(), 5);
    assert!(summary["stuck"].as_array().unwrap().is_empty());

    let meals = summary["report"]["total_meals"].as_u64().unwrap();
    let uses: u64 = summary["report"]["forks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["uses"].as_u64().unwrap())
        .sum();
    assert_eq!(uses, 2 * meals);
}

#[test]
fn admission_run_leaves_every_fork_free() {
    let output = quick_run("admission")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let summary = json_stdout(&output);
    let forks = summary["table"]["forks"].as_array().unwrap();
    assert!(forks.iter().all(serde_json::Value::is_null));
    assert_eq!(summary["table"]["waiting"], 0);
}

#[test]
fn status_lines_are_printed_while_dining() {
    quick_run("monitor")
        .args(["--status-interval", "50ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("forks:"))
        .stdout(predicate::str::contains("| waiting:"));
}
