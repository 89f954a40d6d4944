// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file specs

use crate::prelude::*;
use std::io::Write;

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_drives_the_run() {
    let file = config_file(
        r#"
philosophers = 3
strategy = "admission"
run_for = "200ms"
grace = "2s"

[think]
min = "1ms"
max = "2ms"

[eat]
min = "1ms"
max = "2ms"
"#,
    );

    let output = dinner()
        .args(["run", "--format", "json", "--config"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let summary = json_stdout(&output);
    assert_eq!(summary["report"]["strategy"], "admission");
    assert_eq!(summary["report"]["philosophers"].as_array().unwrap().len(), 3);
}

#[test]
fn unknown_config_keys_are_rejected() {
    let file = config_file("philosophers = 5\nchopsticks = true\n");

    dinner()
        .args(["run", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
