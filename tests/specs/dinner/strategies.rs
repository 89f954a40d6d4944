// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner strategies` specs

use crate::prelude::*;

#[test]
fn lists_all_four_strategies() {
    dinner()
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("unordered"))
        .stdout(predicate::str::contains("asymmetric"))
        .stdout(predicate::str::contains("admission"))
        .stdout(predicate::str::contains("monitor"));
}

#[test]
fn json_marks_only_unordered_as_deadlock_prone() {
    let output = dinner()
        .args(["strategies", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows = json_stdout(&output);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        let unordered = row["name"] == "unordered";
        assert_eq!(row["deadlock_free"], !unordered, "{row}");
    }
}
